//! TermCanvas: the terminal implementation of the core `Canvas`.

use anyhow::Result;

use crate::board_view::{BoardView, Viewport};
use crate::core::{Canvas, Layout};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::{Backdrop, CellPos, Icon};

/// Draws into a persistent framebuffer and flushes it on `present`.
pub struct TermCanvas {
    view: BoardView,
    fb: FrameBuffer,
    renderer: TerminalRenderer,
    columns: u16,
    rows: u16,
}

impl TermCanvas {
    pub fn new(viewport: Viewport, columns: u16, rows: u16) -> Self {
        Self {
            view: BoardView::for_viewport(viewport, columns, rows),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            renderer: TerminalRenderer::new(),
            columns,
            rows,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Re-center the board for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        let viewport = Viewport::new(width, height);
        let layout = BoardView::for_viewport(viewport, self.columns, self.rows).layout();
        self.view = self.view.with_layout(layout);
        self.fb.resize(width, height);
        self.renderer.invalidate();
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }
}

impl Canvas for TermCanvas {
    fn layout(&self) -> Layout {
        self.view.layout()
    }

    fn fill_background(&mut self, backdrop: Backdrop) {
        self.view.fill_background(&mut self.fb, backdrop);
    }

    fn draw_box(&mut self, cell: CellPos) {
        self.view.draw_box(&mut self.fb, cell);
    }

    fn clear_box(&mut self, cell: CellPos) {
        self.view.clear_box(&mut self.fb, cell);
    }

    fn draw_icon(&mut self, cell: CellPos, icon: Icon) {
        self.view.draw_icon(&mut self.fb, cell, icon);
    }

    fn draw_cover(&mut self, cell: CellPos, coverage: i32) {
        self.view.draw_cover(&mut self.fb, cell, coverage);
    }

    fn draw_highlight(&mut self, cell: CellPos) {
        self.view.draw_highlight(&mut self.fb, cell);
    }

    fn present(&mut self) -> Result<()> {
        self.renderer.draw(&self.fb)
    }
}
