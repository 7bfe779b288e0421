//! Headless canvas and pacer.
//!
//! Lets the turn controller and animations run without a terminal: the canvas
//! records every drawing call and tracks what each box currently shows, the
//! pacer counts frames and pauses instead of sleeping.

use std::time::Duration;

use anyhow::Result;

use crate::canvas::Canvas;
use crate::layout::Layout;
use crate::limiter::Pacer;
use crate::types::{Backdrop, CellPos, Icon, BOX_SIZE};

/// What a box area currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Background only
    Blank,
    /// Face-down box
    Covered,
    Icon(Icon),
    /// Icon with a partial cover on top
    PartlyCovered { icon: Icon, coverage: i32 },
}

/// A recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Background(Backdrop),
    Box(CellPos),
    ClearBox(CellPos),
    Icon(CellPos, Icon),
    Cover(CellPos, i32),
    Highlight(CellPos),
    Present,
}

#[derive(Debug, Clone)]
pub struct HeadlessCanvas {
    layout: Layout,
    backdrop: Backdrop,
    cells: Vec<CellView>,
    highlight: Option<CellPos>,
    ops: Vec<DrawOp>,
    presented: usize,
}

impl HeadlessCanvas {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            backdrop: Backdrop::Normal,
            cells: vec![CellView::Blank; layout.columns as usize * layout.rows as usize],
            highlight: None,
            ops: Vec::new(),
            presented: 0,
        }
    }

    fn index(&self, cell: CellPos) -> Option<usize> {
        if cell.x >= self.layout.columns || cell.y >= self.layout.rows {
            return None;
        }
        Some(cell.x as usize * self.layout.rows as usize + cell.y as usize)
    }

    fn set_view(&mut self, cell: CellPos, view: CellView) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = view;
        }
    }

    /// Current content of a box area (`Blank` outside the grid).
    pub fn view(&self, cell: CellPos) -> CellView {
        self.index(cell)
            .map(|i| self.cells[i])
            .unwrap_or(CellView::Blank)
    }

    pub fn backdrop(&self) -> Backdrop {
        self.backdrop
    }

    pub fn highlight(&self) -> Option<CellPos> {
        self.highlight
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> usize {
        self.presented
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for HeadlessCanvas {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn fill_background(&mut self, backdrop: Backdrop) {
        self.ops.push(DrawOp::Background(backdrop));
        self.backdrop = backdrop;
        self.cells.fill(CellView::Blank);
        self.highlight = None;
    }

    fn draw_box(&mut self, cell: CellPos) {
        self.ops.push(DrawOp::Box(cell));
        self.set_view(cell, CellView::Covered);
    }

    fn clear_box(&mut self, cell: CellPos) {
        self.ops.push(DrawOp::ClearBox(cell));
        self.set_view(cell, CellView::Blank);
    }

    fn draw_icon(&mut self, cell: CellPos, icon: Icon) {
        self.ops.push(DrawOp::Icon(cell, icon));
        self.set_view(cell, CellView::Icon(icon));
    }

    fn draw_cover(&mut self, cell: CellPos, coverage: i32) {
        self.ops.push(DrawOp::Cover(cell, coverage));
        if coverage <= 0 {
            return;
        }
        let view = match self.view(cell) {
            _ if coverage >= BOX_SIZE as i32 => CellView::Covered,
            CellView::Icon(icon) | CellView::PartlyCovered { icon, .. } => {
                CellView::PartlyCovered { icon, coverage }
            }
            other => other,
        };
        self.set_view(cell, view);
    }

    fn draw_highlight(&mut self, cell: CellPos) {
        self.ops.push(DrawOp::Highlight(cell));
        self.highlight = Some(cell);
    }

    fn present(&mut self) -> Result<()> {
        self.ops.push(DrawOp::Present);
        self.presented += 1;
        Ok(())
    }
}

/// Pacer that records instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct ManualPacer {
    ticks: u64,
    pauses: Vec<Duration>,
}

impl ManualPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Sum of all pauses.
    pub fn paused(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for ManualPacer {
    fn tick(&mut self) {
        self.ticks += 1;
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
