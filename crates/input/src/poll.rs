//! Per-frame event draining.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event;

use crate::map::map_event;
use crate::types::InputEvent;

/// Upper bound on events handed to the game per frame.
///
/// Anything beyond this stays queued in the terminal for the next frame.
pub const MAX_EVENTS_PER_FRAME: usize = 64;

pub type FrameEvents = ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Collect pending input events.
///
/// Waits up to `timeout` for the first event, then drains whatever else is
/// already queued without blocking.
pub fn poll_events(timeout: Duration) -> io::Result<FrameEvents> {
    let mut events = FrameEvents::new();
    let mut wait = timeout;
    while !events.is_full() && event::poll(wait)? {
        if let Some(ev) = map_event(event::read()?) {
            events.push(ev);
        }
        wait = Duration::ZERO;
    }
    Ok(events)
}
