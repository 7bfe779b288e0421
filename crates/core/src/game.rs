//! Turn controller - the game's state machine
//!
//! ```text
//! Idle --click--> Pending(first) --click--> Match    --> Idle
//!                                      \--> Mismatch --> Idle (pair covered again)
//!                                      \--> RoundWon --> Idle (new board, intro replayed)
//! ```
//!
//! [`Game::frame`] runs once per rendered frame: redraw, read input, hover
//! highlight, and on a click the reveal animation plus pair resolution. All
//! animations block, so a frame that resolves a pair may take seconds.

use anyhow::Result;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::animation;
use crate::board::Board;
use crate::canvas::{draw_board, RenderContext};
use crate::config::{ConfigError, GameConfig};
use crate::layout::Layout;
use crate::reveal::RevealGrid;
use crate::types::{Backdrop, CellPos, InputEvent};

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// No first selection.
    Idle,
    /// One box picked, waiting for the second.
    Pending(CellPos),
}

/// Outcome of a click on a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Box already face up or outside the board.
    Ignored,
    FirstPick,
    Match,
    /// The pair was shown, then covered again.
    Mismatch,
    /// The last pair was found; a new round has started.
    RoundWon,
}

/// Whether the game loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game<R: Rng = StdRng> {
    config: GameConfig,
    board: Board,
    revealed: RevealGrid,
    selection: Option<CellPos>,
    /// Last known pointer position
    pointer: Option<(i32, i32)>,
    rng: R,
    rounds_won: u32,
}

impl<R: Rng> Game<R> {
    /// Validate the config and generate the first board.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            warn!("rejected configuration: {}", err);
            return Err(err);
        }
        let board = Board::generate(
            config.board_width,
            config.board_height,
            &config.colors,
            &config.shapes,
            &mut rng,
        )?;
        info!(
            "new game: {}x{} board, {} colors x {} shapes",
            config.board_width,
            config.board_height,
            config.colors.len(),
            config.shapes.len()
        );
        Ok(Self::from_board(config, board, rng))
    }

    /// Start from a specific board.
    ///
    /// Later rounds are still generated from `config`.
    pub fn from_board(config: GameConfig, board: Board, rng: R) -> Self {
        let revealed = RevealGrid::new(board.width(), board.height(), false);
        Self {
            config,
            board,
            revealed,
            selection: None,
            pointer: None,
            rng,
            rounds_won: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn revealed(&self) -> &RevealGrid {
        &self.revealed
    }

    pub fn selection(&self) -> Option<CellPos> {
        self.selection
    }

    pub fn pointer(&self) -> Option<(i32, i32)> {
        self.pointer
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn turn_state(&self) -> TurnState {
        match self.selection {
            Some(cell) => TurnState::Pending(cell),
            None => TurnState::Idle,
        }
    }

    /// Cell under the tracked pointer, if any.
    pub fn hovered_cell(&self, layout: &Layout) -> Option<CellPos> {
        let (x, y) = self.pointer?;
        layout
            .cell_at(x, y)
            .filter(|&cell| self.board.icon(cell).is_some())
    }

    /// Play the start-of-round intro on a fresh background.
    pub fn start_round(&mut self, ctx: &mut RenderContext<'_>) -> Result<()> {
        ctx.canvas.fill_background(Backdrop::Normal);
        animation::start_round(
            ctx,
            &self.board,
            &mut self.rng,
            self.config.group_size,
            self.config.reveal_speed,
        )
    }

    /// Run one frame with the input collected since the previous one.
    pub fn frame(&mut self, ctx: &mut RenderContext<'_>, events: &[InputEvent]) -> Result<Flow> {
        ctx.canvas.fill_background(Backdrop::Normal);
        draw_board(ctx.canvas, &self.board, &self.revealed);

        let mut clicked = false;
        for event in events {
            match *event {
                InputEvent::Quit => return Ok(Flow::Quit),
                InputEvent::PointerMoved { x, y } => self.pointer = Some((x, y)),
                InputEvent::PointerUp { x, y } => {
                    self.pointer = Some((x, y));
                    clicked = true;
                }
                InputEvent::Resize { .. } => {}
            }
        }

        let layout = ctx.canvas.layout();
        if let Some(cell) = self.hovered_cell(&layout) {
            if !self.revealed.is_revealed(cell) {
                ctx.canvas.draw_highlight(cell);
                if clicked {
                    self.select(ctx, cell)?;
                }
            }
        }

        ctx.present_frame()?;
        Ok(Flow::Continue)
    }

    /// Reveal `cell` and resolve the pair if it is the second pick.
    pub fn select(&mut self, ctx: &mut RenderContext<'_>, cell: CellPos) -> Result<Resolution> {
        if self.board.icon(cell).is_none() || self.revealed.is_revealed(cell) {
            return Ok(Resolution::Ignored);
        }

        animation::reveal_boxes(ctx, &self.board, &[cell], self.config.reveal_speed)?;
        self.revealed.set_revealed(cell, true);

        let Some(first) = self.selection.take() else {
            debug!("first pick at ({}, {})", cell.x, cell.y);
            self.selection = Some(cell);
            return Ok(Resolution::FirstPick);
        };

        let resolution = if self.board.icon(first) != self.board.icon(cell) {
            debug!(
                "mismatch ({}, {}) / ({}, {})",
                first.x, first.y, cell.x, cell.y
            );
            ctx.hold(self.config.mismatch_pause);
            animation::cover_boxes(ctx, &self.board, &[first, cell], self.config.reveal_speed)?;
            self.revealed.set_revealed(first, false);
            self.revealed.set_revealed(cell, false);
            Resolution::Mismatch
        } else if self.revealed.has_won() {
            self.finish_round(ctx)?;
            Resolution::RoundWon
        } else {
            debug!(
                "match ({}, {}) / ({}, {}), {} of {} revealed",
                first.x,
                first.y,
                cell.x,
                cell.y,
                self.revealed.revealed_count(),
                self.config.cell_count()
            );
            Resolution::Match
        };
        Ok(resolution)
    }

    /// Celebrate, deal a new board and replay the intro.
    fn finish_round(&mut self, ctx: &mut RenderContext<'_>) -> Result<()> {
        self.rounds_won += 1;
        info!("round {} won", self.rounds_won);

        animation::win(
            ctx,
            &self.board,
            self.config.win_flashes,
            self.config.win_flash,
        )?;
        ctx.hold(self.config.win_hold);

        self.board = Board::generate(
            self.config.board_width,
            self.config.board_height,
            &self.config.colors,
            &self.config.shapes,
            &mut self.rng,
        )?;
        self.revealed = RevealGrid::new(self.board.width(), self.board.height(), false);

        ctx.canvas.fill_background(Backdrop::Normal);
        draw_board(ctx.canvas, &self.board, &self.revealed);
        ctx.canvas.present()?;
        ctx.hold(self.config.round_pause);

        self.start_round(ctx)
    }
}
