//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 7 rows (indexed 0-6)
//! - **Pairs**: 35, one per (shape, color) combination
//!
//! # Geometry
//!
//! The canonical geometry is expressed in abstract units:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WINDOW_WIDTH` | 640 | Canvas width |
//! | `WINDOW_HEIGHT` | 480 | Canvas height |
//! | `BOX_SIZE` | 40 | Box edge length, also the unit of animation coverage |
//! | `GAP_SIZE` | 10 | Gap between boxes |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 30 | Frame cap for every rendered frame |
//! | `REVEAL_SPEED` | 8 | Coverage change per animation frame |
//! | `MISMATCH_PAUSE_MS` | 1000 | Pause before a mismatched pair is covered |
//! | `WIN_FLASH_MS` | 300 | Hold time of each celebration flash |
//! | `WIN_HOLD_MS` | 2000 | Pause after the celebration |
//! | `ROUND_PAUSE_MS` | 1000 | Pause before the next round's intro |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Icon, IconColor, Shape, ALL_COLORS, ALL_SHAPES};
//!
//! let a = Icon::new(Shape::Donut, IconColor::Red);
//! let b = Icon::new(Shape::Donut, IconColor::Red);
//! assert_eq!(a, b);
//!
//! assert_eq!(ALL_COLORS.len() * ALL_SHAPES.len(), 35);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (7 rows)
pub const BOARD_HEIGHT: u8 = 7;

/// Canonical canvas width in units
pub const WINDOW_WIDTH: u16 = 640;

/// Canonical canvas height in units
pub const WINDOW_HEIGHT: u16 = 480;

/// Box edge length in units
pub const BOX_SIZE: u16 = 40;

/// Gap between neighbouring boxes in units
pub const GAP_SIZE: u16 = 10;

/// Frame cap (frames per second)
pub const FPS: u32 = 30;

/// Coverage step per animation frame, in box units
pub const REVEAL_SPEED: u16 = 8;

/// Number of cells revealed together by the start-of-round intro
pub const REVEAL_GROUP_SIZE: usize = 8;

/// Number of background flashes in the win celebration
pub const WIN_FLASHES: u32 = 13;

/// Hold time of a single win flash
pub const WIN_FLASH_MS: u32 = 300;

/// Pause after the win celebration before the board is reset
pub const WIN_HOLD_MS: u32 = 2000;

/// Pause between showing the fresh covered board and the intro animation
pub const ROUND_PAUSE_MS: u32 = 1000;

/// Pause before a mismatched pair is flipped back
pub const MISMATCH_PAUSE_MS: u32 = 1000;


/// The five icon shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Donut,
    Square,
    Diamond,
    Lines,
    Oval,
}

/// The seven icon colors
///
/// Each color carries a fixed 24-bit RGB value, see [`IconColor::rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconColor {
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    Orange,
    Purple,
}

impl IconColor {
    /// RGB components of the color
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::IconColor;
    ///
    /// assert_eq!(IconColor::Orange.rgb(), (255, 128, 0));
    /// ```
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            IconColor::Red => (255, 0, 0),
            IconColor::Green => (0, 255, 0),
            IconColor::Blue => (0, 0, 255),
            IconColor::Cyan => (0, 255, 255),
            IconColor::Yellow => (255, 255, 0),
            IconColor::Orange => (255, 128, 0),
            IconColor::Purple => (255, 0, 255),
        }
    }
}

/// Every color, in the order the board generator builds its icon pool
pub const ALL_COLORS: [IconColor; 7] = [
    IconColor::Red,
    IconColor::Green,
    IconColor::Blue,
    IconColor::Cyan,
    IconColor::Yellow,
    IconColor::Orange,
    IconColor::Purple,
];

/// Every shape
pub const ALL_SHAPES: [Shape; 5] = [
    Shape::Donut,
    Shape::Square,
    Shape::Diamond,
    Shape::Lines,
    Shape::Oval,
];

/// The thing hidden under a box: a (shape, color) pair with value equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon {
    pub shape: Shape,
    pub color: IconColor,
}

impl Icon {
    pub const fn new(shape: Shape, color: IconColor) -> Self {
        Self { shape, color }
    }
}

/// A grid position addressed by (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub x: u16,
    pub y: u16,
}

impl CellPos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Input events consumed by the turn controller
///
/// Pointer coordinates are in the same units as the canvas layout
/// (terminal columns/rows for the terminal front end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved; updates the tracked position
    PointerMoved { x: i32, y: i32 },
    /// Pointer button released; registers a click at the position
    PointerUp { x: i32, y: i32 },
    /// Quit/escape request
    Quit,
    /// Render surface resized (front-end concern)
    Resize { width: u16, height: u16 },
}

/// Background fill used behind the board
///
/// `Light` only appears during the win celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backdrop {
    Normal,
    Light,
}

impl Backdrop {
    /// The other backdrop of the celebration pair
    pub fn toggled(&self) -> Self {
        match self {
            Backdrop::Normal => Backdrop::Light,
            Backdrop::Light => Backdrop::Normal,
        }
    }
}
