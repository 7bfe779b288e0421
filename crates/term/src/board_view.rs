//! BoardView: draws boxes, icons, covers and highlights into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Terminal cells are roughly twice as tall as they are wide, so a box is
//! 5 columns by 2 rows with a 2x1 gap. A 10x7 board then needs 70x21 cells
//! and fits an 80x24 terminal.

use crate::core::Layout;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Backdrop, CellPos, Icon, Shape, BOX_SIZE};

/// Box width in terminal columns.
pub const TERM_BOX_W: u16 = 5;
/// Box height in terminal rows.
pub const TERM_BOX_H: u16 = 2;
pub const TERM_GAP_X: u16 = 2;
pub const TERM_GAP_Y: u16 = 1;

const NAVY_BLUE: Rgb = Rgb::new(60, 60, 100);
const GRAY: Rgb = Rgb::new(100, 100, 100);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const HIGHLIGHT: Rgb = Rgb::new(0, 0, 255);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Number of box columns a cover of `coverage` box units occupies.
///
/// Rounds up so any positive coverage is visible.
pub fn cover_columns(coverage: i32, box_w: u16) -> u16 {
    if coverage <= 0 {
        return 0;
    }
    let full = BOX_SIZE as i32;
    let cols = (coverage * box_w as i32 + full - 1) / full;
    cols.min(box_w as i32) as u16
}

/// Draws the board for one layout.
///
/// Box areas are erased to the backdrop of the last `fill_background`, so
/// icons drawn during a win flash sit on the flash color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    layout: Layout,
    backdrop: Backdrop,
}

impl BoardView {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            backdrop: Backdrop::Normal,
        }
    }

    /// Center a `columns x rows` board in the viewport with terminal-sized boxes.
    pub fn for_viewport(viewport: Viewport, columns: u16, rows: u16) -> Self {
        Self::new(Layout::centered(
            viewport.width,
            viewport.height,
            TERM_BOX_W,
            TERM_BOX_H,
            TERM_GAP_X,
            TERM_GAP_Y,
            columns,
            rows,
        ))
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn backdrop(&self) -> Backdrop {
        self.backdrop
    }

    /// Same view with a different layout, keeping the current backdrop.
    pub fn with_layout(self, layout: Layout) -> Self {
        Self { layout, ..self }
    }

    pub fn fill_background(&mut self, fb: &mut FrameBuffer, backdrop: Backdrop) {
        self.backdrop = backdrop;
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::solid(backdrop_rgb(backdrop)),
        });
    }

    pub fn draw_box(&self, fb: &mut FrameBuffer, cell: CellPos) {
        self.fill_box(fb, cell, CellStyle::solid(WHITE));
    }

    pub fn clear_box(&self, fb: &mut FrameBuffer, cell: CellPos) {
        self.fill_box(fb, cell, CellStyle::solid(backdrop_rgb(self.backdrop)));
    }

    pub fn draw_cover(&self, fb: &mut FrameBuffer, cell: CellPos, coverage: i32) {
        let rect = self.layout.rect(cell);
        let cols = cover_columns(coverage, self.layout.box_w);
        fb.fill_rect(
            rect.left,
            rect.top,
            cols as i32,
            rect.height,
            ' ',
            CellStyle::solid(WHITE),
        );
    }

    /// Border one cell outside the box, drawn in the gap.
    pub fn draw_highlight(&self, fb: &mut FrameBuffer, cell: CellPos) {
        let rect = self.layout.rect(cell);
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(HIGHLIGHT, backdrop_rgb(self.backdrop))
        };
        let (x0, y0) = (rect.left - 1, rect.top - 1);
        let (x1, y1) = (rect.left + rect.width, rect.top + rect.height);

        fb.put_char(x0, y0, '┏', style);
        fb.put_char(x1, y0, '┓', style);
        fb.put_char(x0, y1, '┗', style);
        fb.put_char(x1, y1, '┛', style);
        for x in x0 + 1..x1 {
            fb.put_char(x, y0, '━', style);
            fb.put_char(x, y1, '━', style);
        }
        for y in y0 + 1..y1 {
            fb.put_char(x0, y, '┃', style);
            fb.put_char(x1, y, '┃', style);
        }
    }

    /// Draw an icon on the current backdrop.
    pub fn draw_icon(&self, fb: &mut FrameBuffer, cell: CellPos, icon: Icon) {
        self.clear_box(fb, cell);

        let rect = self.layout.rect(cell);
        let bg = backdrop_rgb(self.backdrop);
        let style = CellStyle::new(Rgb::from(icon.color.rgb()), bg);
        let (w, h) = (rect.width, rect.height);
        let put = |fb: &mut FrameBuffer, dx: i32, dy: i32, ch: char| {
            fb.put_char(rect.left + dx, rect.top + dy, ch, style);
        };

        match icon.shape {
            Shape::Donut => {
                if w < 2 || h < 2 {
                    put(fb, w / 2, h / 2, '◯');
                    return;
                }
                put(fb, 0, 0, '╭');
                put(fb, w - 1, 0, '╮');
                put(fb, 0, h - 1, '╰');
                put(fb, w - 1, h - 1, '╯');
                for dx in 1..w - 1 {
                    put(fb, dx, 0, '─');
                    put(fb, dx, h - 1, '─');
                }
                for dy in 1..h - 1 {
                    put(fb, 0, dy, '│');
                    put(fb, w - 1, dy, '│');
                }
            }
            Shape::Square => {
                let (ix, iy) = (w / 4, h / 4);
                for dy in iy..h - iy {
                    for dx in ix..w - ix {
                        put(fb, dx, dy, '█');
                    }
                }
            }
            Shape::Diamond => {
                let cx = w / 2;
                for (dy, reach) in diamond_rows(w, h).into_iter().enumerate() {
                    let dy = dy as i32;
                    let upper = 2 * dy + 1 < h;
                    let middle = 2 * dy + 1 == h;
                    put(fb, cx, dy, '█');
                    for r in 1..=reach {
                        let (left, right) = match (middle, upper) {
                            (true, _) => ('◀', '▶'),
                            (false, true) => ('╱', '╲'),
                            (false, false) => ('╲', '╱'),
                        };
                        let edge = r == reach;
                        put(fb, cx - r, dy, if edge { left } else { '█' });
                        put(fb, cx + r, dy, if edge { right } else { '█' });
                    }
                }
            }
            Shape::Lines => {
                for dy in 0..h {
                    for dx in 0..w {
                        put(fb, dx, dy, '╱');
                    }
                }
            }
            Shape::Oval => {
                // Band covering the middle half of the box, in half-rows.
                let (band_start, band_end) = (h / 2, 3 * h / 2);
                for dy in 0..h {
                    let upper = (band_start..band_end).contains(&(2 * dy));
                    let lower = (band_start..band_end).contains(&(2 * dy + 1));
                    let (mid, left, right) = match (upper, lower) {
                        (true, true) => ('█', '█', '█'),
                        (true, false) => ('▀', '▝', '▘'),
                        (false, true) => ('▄', '▗', '▖'),
                        (false, false) => continue,
                    };
                    for dx in 0..w {
                        let ch = if w >= 3 && dx == 0 {
                            left
                        } else if w >= 3 && dx == w - 1 {
                            right
                        } else {
                            mid
                        };
                        put(fb, dx, dy, ch);
                    }
                }
            }
        }
    }

    fn fill_box(&self, fb: &mut FrameBuffer, cell: CellPos, style: CellStyle) {
        let rect = self.layout.rect(cell);
        fb.fill_rect(rect.left, rect.top, rect.width, rect.height, ' ', style);
    }
}

/// Half-width of the diamond on each row, widest in the middle.
fn diamond_rows(w: i32, h: i32) -> Vec<i32> {
    let cx = w / 2;
    let half_h = (h + 1) / 2;
    (0..h)
        .map(|dy| {
            let from_center = if 2 * dy + 1 < h {
                (h - 1) / 2 - dy
            } else {
                dy - h / 2
            };
            (cx * (half_h - from_center) / half_h.max(1)).max(0)
        })
        .collect()
}

fn backdrop_rgb(backdrop: Backdrop) -> Rgb {
    match backdrop {
        Backdrop::Normal => NAVY_BLUE,
        Backdrop::Light => GRAY,
    }
}
