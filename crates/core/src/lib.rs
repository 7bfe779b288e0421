//! Core game logic module - pure and testable
//!
//! This crate contains the board, the reveal state, the animation sequencer
//! and the turn controller. It has **no terminal dependency**: drawing and
//! pacing go through the [`Canvas`] and [`Pacer`] traits, and input arrives
//! as plain [`InputEvent`](types::InputEvent) values. That makes it:
//!
//! - **Testable**: the whole turn state machine runs against [`HeadlessCanvas`]
//! - **Portable**: any surface that can draw boxes and icons can host the game
//! - **Reproducible**: randomness is injected, so seeded boards are stable
//!
//! # Module Structure
//!
//! - [`board`]: paired icon assignment and its generator
//! - [`reveal`]: face-up flags and the win check
//! - [`layout`]: cell rectangles and pointer hit-testing
//! - [`limiter`]: frame limiter and the [`Pacer`] trait
//! - [`canvas`]: the [`Canvas`] trait and [`RenderContext`]
//! - [`animation`]: reveal/cover wipes, round intro, win flash
//! - [`game`]: the turn controller
//! - [`config`]: configuration and startup validation
//! - [`headless`]: recording canvas and non-sleeping pacer
//!
//! # Game Rules
//!
//! - Every icon (shape + color) is hidden under exactly two boxes
//! - Two boxes are revealed per turn; a matching pair stays face up
//! - A mismatched pair stays visible for a moment, then is covered again
//! - When every box is face up the board flashes, a new board is dealt and
//!   the intro replays
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tui_memory_core::{Game, GameConfig, HeadlessCanvas, Layout, ManualPacer, RenderContext};
//! use tui_memory_core::game::{Flow, TurnState};
//! use tui_memory_core::types::InputEvent;
//!
//! let mut game = Game::new(GameConfig::default(), StdRng::seed_from_u64(42)).unwrap();
//! let layout = Layout::pixels(10, 7);
//! let mut canvas = HeadlessCanvas::new(layout);
//! let mut pacer = ManualPacer::new();
//! let mut ctx = RenderContext::new(&mut canvas, &mut pacer);
//!
//! // Click the middle of the top-left box.
//! let (left, top) = layout.left_top(tui_memory_core::types::CellPos::new(0, 0));
//! let click = InputEvent::PointerUp { x: left + 20, y: top + 20 };
//! assert_eq!(game.frame(&mut ctx, &[click]).unwrap(), Flow::Continue);
//! assert!(matches!(game.turn_state(), TurnState::Pending(_)));
//! ```
//!
//! # Timing
//!
//! The frame limiter caps every frame at 30 FPS. Animations advance one
//! step per frame, so a reveal takes 7 frames and a cover 6. Fixed waits
//! (mismatch pause, win flashes) go through [`Pacer::pause`].

pub mod animation;
pub mod board;
pub mod canvas;
pub mod config;
pub mod game;
pub mod headless;
pub mod layout;
pub mod limiter;
pub mod reveal;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use canvas::{draw_board, Canvas, RenderContext};
pub use config::{ConfigError, GameConfig};
pub use game::{Flow, Game, Resolution, TurnState};
pub use headless::{CellView, HeadlessCanvas, ManualPacer};
pub use layout::{Layout, Rect};
pub use limiter::{FrameLimiter, Pacer};
pub use reveal::RevealGrid;
