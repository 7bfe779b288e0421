//! Game configuration and startup validation.
//!
//! Configuration comes from environment variables (see [`GameConfig::from_env`]).
//! Every value falls back to its default when missing or unparsable. Validation
//! runs once, before any game state exists; a failure is fatal for the process.

use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

use crate::types::{
    IconColor, Shape, ALL_COLORS, ALL_SHAPES, BOARD_HEIGHT, BOARD_WIDTH, FPS, MISMATCH_PAUSE_MS,
    REVEAL_GROUP_SIZE, REVEAL_SPEED, ROUND_PAUSE_MS, WIN_FLASHES, WIN_FLASH_MS, WIN_HOLD_MS,
};

/// Configuration invariants violated at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one cell (got {width}x{height})")]
    EmptyBoard { width: u16, height: u16 },

    #[error("board needs an even number of boxes for pairs of matches (got {width}x{height})")]
    OddCellCount { width: u16, height: u16 },

    #[error(
        "board is too small for the number of shapes/colors defined: \
         {available} distinct icons available, {needed} pairs needed"
    )]
    NotEnoughIcons { available: usize, needed: usize },

    #[error("icon color {0:?} is listed more than once")]
    DuplicateColor(IconColor),

    #[error("icon shape {0:?} is listed more than once")]
    DuplicateShape(Shape),

    #[error("frame rate must be positive")]
    InvalidFrameRate,

    #[error("reveal speed must be positive")]
    InvalidRevealSpeed,

    #[error("reveal group size must be positive")]
    InvalidGroupSize,
}

/// Check the board preconditions shared by config validation and the generator.
pub fn check_board(
    width: u16,
    height: u16,
    colors: &[IconColor],
    shapes: &[Shape],
) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::EmptyBoard { width, height });
    }

    let cells = width as usize * height as usize;
    if cells % 2 != 0 {
        return Err(ConfigError::OddCellCount { width, height });
    }

    let mut seen_colors = HashSet::new();
    for &color in colors {
        if !seen_colors.insert(color) {
            return Err(ConfigError::DuplicateColor(color));
        }
    }
    let mut seen_shapes = HashSet::new();
    for &shape in shapes {
        if !seen_shapes.insert(shape) {
            return Err(ConfigError::DuplicateShape(shape));
        }
    }

    let available = colors.len() * shapes.len();
    if available * 2 < cells {
        return Err(ConfigError::NotEnoughIcons {
            available,
            needed: cells / 2,
        });
    }

    Ok(())
}

/// Everything the game needs to know before the first round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: u16,
    pub board_height: u16,
    /// Colors in play, in pool-building order.
    pub colors: Vec<IconColor>,
    /// Shapes in play.
    pub shapes: Vec<Shape>,
    pub fps: u32,
    /// Coverage change per animation frame, in box units.
    pub reveal_speed: u16,
    /// Cells per group in the start-of-round intro.
    pub group_size: usize,
    pub win_flashes: u32,
    pub win_flash: Duration,
    pub win_hold: Duration,
    pub round_pause: Duration,
    /// Time a mismatched pair stays visible before it is covered again.
    pub mismatch_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH as u16,
            board_height: BOARD_HEIGHT as u16,
            colors: ALL_COLORS.to_vec(),
            shapes: ALL_SHAPES.to_vec(),
            fps: FPS,
            reveal_speed: REVEAL_SPEED,
            group_size: REVEAL_GROUP_SIZE,
            win_flashes: WIN_FLASHES,
            win_flash: Duration::from_millis(WIN_FLASH_MS as u64),
            win_hold: Duration::from_millis(WIN_HOLD_MS as u64),
            round_pause: Duration::from_millis(ROUND_PAUSE_MS as u64),
            mismatch_pause: Duration::from_millis(MISMATCH_PAUSE_MS as u64),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// - `MEMORY_BOARD_WIDTH` / `MEMORY_BOARD_HEIGHT`: board size in cells
    /// - `MEMORY_COLORS` / `MEMORY_SHAPES`: how many colors/shapes are in play
    /// - `MEMORY_FPS`: frame cap
    /// - `MEMORY_REVEAL_SPEED`: coverage step per animation frame
    /// - `MEMORY_MISMATCH_PAUSE_MS`: pause before a mismatch is covered
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();

        let color_count = parsed::<usize>(&lookup, "MEMORY_COLORS")
            .unwrap_or(ALL_COLORS.len())
            .min(ALL_COLORS.len());
        let shape_count = parsed::<usize>(&lookup, "MEMORY_SHAPES")
            .unwrap_or(ALL_SHAPES.len())
            .min(ALL_SHAPES.len());

        Self {
            board_width: parsed(&lookup, "MEMORY_BOARD_WIDTH").unwrap_or(defaults.board_width),
            board_height: parsed(&lookup, "MEMORY_BOARD_HEIGHT").unwrap_or(defaults.board_height),
            colors: ALL_COLORS[..color_count].to_vec(),
            shapes: ALL_SHAPES[..shape_count].to_vec(),
            fps: parsed(&lookup, "MEMORY_FPS").unwrap_or(defaults.fps),
            reveal_speed: parsed(&lookup, "MEMORY_REVEAL_SPEED").unwrap_or(defaults.reveal_speed),
            mismatch_pause: parsed::<u64>(&lookup, "MEMORY_MISMATCH_PAUSE_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.mismatch_pause),
            ..defaults
        }
    }

    /// Check every startup invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_board(
            self.board_width,
            self.board_height,
            &self.colors,
            &self.shapes,
        )?;
        if self.fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        if self.reveal_speed == 0 {
            return Err(ConfigError::InvalidRevealSpeed);
        }
        if self.group_size == 0 {
            return Err(ConfigError::InvalidGroupSize);
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.board_width as usize * self.board_height as usize
    }
}
