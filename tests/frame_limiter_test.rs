use std::time::{Duration, Instant};

use tui_memory::core::FrameLimiter;

#[test]
fn frame_limiter_first_frame_is_immediate() {
    let limiter = FrameLimiter::new(30);
    assert_eq!(limiter.remaining(Instant::now()), Duration::ZERO);
}

#[test]
fn frame_limiter_waits_out_the_frame() {
    let mut limiter = FrameLimiter::new(20);
    let t0 = Instant::now();
    limiter.mark(t0);
    assert_eq!(limiter.remaining(t0), Duration::from_millis(50));
    assert_eq!(
        limiter.remaining(t0 + Duration::from_millis(20)),
        Duration::from_millis(30)
    );
}

#[test]
fn frame_limiter_never_waits_after_a_slow_frame() {
    let mut limiter = FrameLimiter::new(30);
    let t0 = Instant::now();
    limiter.mark(t0);
    assert_eq!(limiter.remaining(t0 + Duration::from_secs(1)), Duration::ZERO);
}
