//! Frame pacing.
//!
//! The frame limiter is the only clock in the game: every rendered frame,
//! idle or animated, ends with a `tick`. Fixed real-time waits (mismatch
//! pause, win flash hold) go through `pause`.

use std::time::{Duration, Instant};

/// Pacing capability used by the game loop and animations.
pub trait Pacer {
    /// Wait for the next frame slot.
    fn tick(&mut self);

    /// Wait for a fixed real-time duration.
    fn pause(&mut self, duration: Duration);
}

/// Caps the frame rate by sleeping out the rest of each frame interval.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    last_tick: Option<Instant>,
}

impl FrameLimiter {
    /// A zero `fps` is treated as 1.
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last_tick: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left in the current frame interval at `now`.
    ///
    /// The first call never waits.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => (last + self.frame).saturating_duration_since(now),
        }
    }

    /// Record a tick that finished at `at`.
    pub fn mark(&mut self, at: Instant) {
        self.last_tick = Some(at);
    }
}

impl Pacer for FrameLimiter {
    fn tick(&mut self) {
        let now = Instant::now();
        let wait = self.remaining(now);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.mark(now + wait);
    }

    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
        // A long pause must not be followed by a burst of catch-up frames.
        self.mark(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_duration_matches_fps() {
        assert_eq!(FrameLimiter::new(30).frame_duration(), Duration::from_secs(1) / 30);
        assert_eq!(FrameLimiter::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn first_tick_does_not_wait() {
        let limiter = FrameLimiter::new(30);
        assert_eq!(limiter.remaining(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn remaining_counts_down_within_frame() {
        let mut limiter = FrameLimiter::new(10);
        let t0 = Instant::now();
        limiter.mark(t0);
        assert_eq!(limiter.remaining(t0), Duration::from_millis(100));
        assert_eq!(
            limiter.remaining(t0 + Duration::from_millis(40)),
            Duration::from_millis(60)
        );
        assert_eq!(limiter.remaining(t0 + Duration::from_millis(150)), Duration::ZERO);
    }
}
