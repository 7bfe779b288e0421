//! Render context: the drawing capability the core consumes.
//!
//! The core never draws pixels or characters itself. It describes frames in
//! terms of boxes, icons, covers and highlights on a [`Canvas`], and paces
//! them with a [`Pacer`]. Both are bundled into a [`RenderContext`] that is
//! passed explicitly to every drawing and animation operation.

use std::time::Duration;

use anyhow::Result;

use crate::board::Board;
use crate::layout::Layout;
use crate::limiter::Pacer;
use crate::reveal::RevealGrid;
use crate::types::{Backdrop, CellPos, Icon};

/// A render surface for the board.
///
/// Drawing calls accumulate into the current frame; [`Canvas::present`]
/// makes it visible. Content persists between frames until overdrawn.
pub trait Canvas {
    /// Geometry used for drawing, also used for pointer hit-testing.
    fn layout(&self) -> Layout;

    /// Fill the whole surface.
    fn fill_background(&mut self, backdrop: Backdrop);

    /// Draw a face-down box.
    fn draw_box(&mut self, cell: CellPos);

    /// Erase a box area back to the normal backdrop.
    fn clear_box(&mut self, cell: CellPos);

    /// Draw an icon in a box area.
    fn draw_icon(&mut self, cell: CellPos, icon: Icon);

    /// Draw an opaque cover over the left part of a box.
    ///
    /// `coverage` is in box units (`0..=BOX_SIZE`); the canvas scales it to
    /// its own box width. Values `<= 0` draw nothing.
    fn draw_cover(&mut self, cell: CellPos, coverage: i32);

    /// Draw a highlight border around a box.
    fn draw_highlight(&mut self, cell: CellPos);

    /// Make the current frame visible.
    fn present(&mut self) -> Result<()>;
}

/// Canvas plus pacer, threaded through drawing and animation.
pub struct RenderContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub pacer: &'a mut dyn Pacer,
}

impl<'a> RenderContext<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, pacer: &'a mut dyn Pacer) -> Self {
        Self { canvas, pacer }
    }

    /// Present the current frame and wait for the next frame slot.
    pub fn present_frame(&mut self) -> Result<()> {
        self.canvas.present()?;
        self.pacer.tick();
        Ok(())
    }

    pub fn hold(&mut self, duration: Duration) {
        self.pacer.pause(duration);
    }
}

/// Draw every cell: face-down boxes for hidden cells, icons for revealed ones.
pub fn draw_board(canvas: &mut dyn Canvas, board: &Board, revealed: &RevealGrid) {
    draw_cells(canvas, board, |cell| revealed.is_revealed(cell));
}

/// Draw every cell face up.
pub fn draw_board_revealed(canvas: &mut dyn Canvas, board: &Board) {
    draw_cells(canvas, board, |_| true);
}

/// Draw every cell face down.
pub fn draw_board_covered(canvas: &mut dyn Canvas, board: &Board) {
    draw_cells(canvas, board, |_| false);
}

fn draw_cells(canvas: &mut dyn Canvas, board: &Board, is_revealed: impl Fn(CellPos) -> bool) {
    for cell in board.cells() {
        match board.icon(cell) {
            Some(icon) if is_revealed(cell) => canvas.draw_icon(cell, icon),
            _ => canvas.draw_box(cell),
        }
    }
}
