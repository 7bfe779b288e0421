//! Board geometry: cell rectangles and pointer hit-testing.
//!
//! Coordinates are in whatever units the canvas uses (abstract units for the
//! canonical 640x480 geometry, character cells for the terminal). The grid is
//! centered in the window; margins may go negative when the window is smaller
//! than the board.

use crate::types::{CellPos, BOX_SIZE, GAP_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Axis-aligned rectangle, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub columns: u16,
    pub rows: u16,
    pub box_w: u16,
    pub box_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    pub margin_x: i32,
    pub margin_y: i32,
}

impl Layout {
    /// Center a `columns x rows` grid of `box_w x box_h` boxes in a window.
    #[allow(clippy::too_many_arguments)]
    pub fn centered(
        window_w: u16,
        window_h: u16,
        box_w: u16,
        box_h: u16,
        gap_x: u16,
        gap_y: u16,
        columns: u16,
        rows: u16,
    ) -> Self {
        let used_w = columns as i32 * (box_w as i32 + gap_x as i32);
        let used_h = rows as i32 * (box_h as i32 + gap_y as i32);
        Self {
            columns,
            rows,
            box_w,
            box_h,
            gap_x,
            gap_y,
            margin_x: (window_w as i32 - used_w) / 2,
            margin_y: (window_h as i32 - used_h) / 2,
        }
    }

    /// Canonical geometry: 640x480 window, 40-unit boxes, 10-unit gaps.
    pub fn pixels(columns: u16, rows: u16) -> Self {
        Self::centered(
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            BOX_SIZE,
            BOX_SIZE,
            GAP_SIZE,
            GAP_SIZE,
            columns,
            rows,
        )
    }

    /// Top-left corner of a cell's box.
    pub fn left_top(&self, cell: CellPos) -> (i32, i32) {
        let left = cell.x as i32 * (self.box_w as i32 + self.gap_x as i32) + self.margin_x;
        let top = cell.y as i32 * (self.box_h as i32 + self.gap_y as i32) + self.margin_y;
        (left, top)
    }

    pub fn rect(&self, cell: CellPos) -> Rect {
        let (left, top) = self.left_top(cell);
        Rect {
            left,
            top,
            width: self.box_w as i32,
            height: self.box_h as i32,
        }
    }

    /// Map a point to the cell whose box contains it.
    ///
    /// Points in the gaps between boxes or outside the grid map to `None`.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<CellPos> {
        for cx in 0..self.columns {
            for cy in 0..self.rows {
                let cell = CellPos::new(cx, cy);
                if self.rect(cell).contains(x, y) {
                    return Some(cell);
                }
            }
        }
        None
    }
}
