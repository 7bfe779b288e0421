//! Terminal input: crossterm events mapped to game input.
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` mouse, key and resize events into [`crate::types::InputEvent`]
//! and drains whatever is pending once per frame.

pub mod map;
pub mod poll;

pub use tui_memory_types as types;

pub use map::{map_event, should_quit};
pub use poll::{poll_events, FrameEvents, MAX_EVENTS_PER_FRAME};
