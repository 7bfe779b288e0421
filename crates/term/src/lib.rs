//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that is diff-flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` free of terminal concerns and testable
//! - Implement the core [`Canvas`](crate::core::Canvas) with boxes sized for
//!   character cells
//! - Keep per-frame output small enough for 30 FPS animations

pub mod board_view;
pub mod canvas;
pub mod fb;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use board_view::{cover_columns, BoardView, Viewport};
pub use canvas::TermCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
