//! Animation sequencer.
//!
//! Every animation is a bounded, blocking loop of "draw, present, wait" steps.
//! Nothing else touches game state while one plays, and no input is read
//! until it returns.
//!
//! Covers wipe horizontally from the left edge of a box. Coverage is counted
//! in box units (`BOX_SIZE` = full cover) so the step count does not depend on
//! how large a box is on the actual canvas.

use std::time::Duration;

use anyhow::Result;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::canvas::{draw_board_covered, draw_board_revealed, RenderContext};
use crate::types::{Backdrop, CellPos, BOX_SIZE};

/// Coverage per frame while revealing: `box_size` down to `-speed`.
///
/// ```
/// use tui_memory_core::animation::reveal_coverages;
///
/// let steps: Vec<i32> = reveal_coverages(40, 8).collect();
/// assert_eq!(steps, vec![40, 32, 24, 16, 8, 0, -8]);
/// ```
pub fn reveal_coverages(box_size: u16, speed: u16) -> impl Iterator<Item = i32> {
    let start = box_size as i32;
    let step = speed.max(1) as i32;
    (0..)
        .map(move |i| start - i * step)
        .take_while(move |&coverage| coverage >= -step)
}

/// Coverage per frame while covering: `0` up to `box_size`.
///
/// ```
/// use tui_memory_core::animation::cover_coverages;
///
/// let steps: Vec<i32> = cover_coverages(40, 8).collect();
/// assert_eq!(steps, vec![0, 8, 16, 24, 32, 40]);
/// ```
pub fn cover_coverages(box_size: u16, speed: u16) -> impl Iterator<Item = i32> {
    let end = box_size as i32;
    let step = speed.max(1) as i32;
    (0..)
        .map(move |i| i * step)
        .take_while(move |&coverage| coverage < end + step)
}

/// Wipe the covers off `cells`, leaving the icons exposed.
pub fn reveal_boxes(
    ctx: &mut RenderContext<'_>,
    board: &Board,
    cells: &[CellPos],
    speed: u16,
) -> Result<()> {
    for coverage in reveal_coverages(BOX_SIZE, speed) {
        draw_box_covers(ctx, board, cells, coverage)?;
    }
    Ok(())
}

/// Slide covers back over `cells`.
pub fn cover_boxes(
    ctx: &mut RenderContext<'_>,
    board: &Board,
    cells: &[CellPos],
    speed: u16,
) -> Result<()> {
    for coverage in cover_coverages(BOX_SIZE, speed) {
        draw_box_covers(ctx, board, cells, coverage)?;
    }
    Ok(())
}

/// One animation frame: icon beneath, cover of `coverage` units on top.
fn draw_box_covers(
    ctx: &mut RenderContext<'_>,
    board: &Board,
    cells: &[CellPos],
    coverage: i32,
) -> Result<()> {
    for &cell in cells {
        ctx.canvas.clear_box(cell);
        if let Some(icon) = board.icon(cell) {
            ctx.canvas.draw_icon(cell, icon);
        }
        if coverage > 0 {
            ctx.canvas.draw_cover(cell, coverage);
        }
    }
    ctx.present_frame()
}

/// Start-of-round intro: peek at every box, a shuffled group at a time.
pub fn start_round<R: Rng + ?Sized>(
    ctx: &mut RenderContext<'_>,
    board: &Board,
    rng: &mut R,
    group_size: usize,
    speed: u16,
) -> Result<()> {
    let mut cells: Vec<CellPos> = board.cells().collect();
    cells.shuffle(rng);

    draw_board_covered(ctx.canvas, board);

    for group in cells.chunks(group_size.max(1)) {
        trace!("intro group of {} cells", group.len());
        reveal_boxes(ctx, board, group, speed)?;
        cover_boxes(ctx, board, group, speed)?;
    }
    Ok(())
}

/// Win celebration: alternate the backdrops with the whole board face up.
///
/// The first flash uses the normal backdrop.
pub fn win(
    ctx: &mut RenderContext<'_>,
    board: &Board,
    flashes: u32,
    hold: Duration,
) -> Result<()> {
    let mut backdrop = Backdrop::Light;
    for _ in 0..flashes {
        backdrop = backdrop.toggled();
        ctx.canvas.fill_background(backdrop);
        draw_board_revealed(ctx.canvas, board);
        ctx.canvas.present()?;
        ctx.hold(hold);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{CellView, DrawOp, HeadlessCanvas, ManualPacer};
    use crate::layout::Layout;
    use crate::types::{ALL_COLORS, ALL_SHAPES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn board_2x2() -> Board {
        let mut rng = StdRng::seed_from_u64(5);
        Board::generate(2, 2, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap()
    }

    #[test]
    fn coverages_handle_uneven_steps() {
        let steps: Vec<i32> = reveal_coverages(40, 16).collect();
        assert_eq!(steps, vec![40, 24, 8, -8]);
        let steps: Vec<i32> = cover_coverages(40, 16).collect();
        assert_eq!(steps, vec![0, 16, 32, 48]);
    }

    #[test]
    fn reveal_presents_one_frame_per_step_and_ends_exposed() {
        let board = board_2x2();
        let mut canvas = HeadlessCanvas::new(Layout::pixels(2, 2));
        let mut pacer = ManualPacer::new();
        let cell = CellPos::new(1, 1);
        {
            let mut ctx = RenderContext::new(&mut canvas, &mut pacer);
            reveal_boxes(&mut ctx, &board, &[cell], 8).unwrap();
        }
        assert_eq!(canvas.presented(), 7);
        assert_eq!(pacer.ticks(), 7);
        assert_eq!(canvas.view(cell), CellView::Icon(board.icon(cell).unwrap()));
    }

    #[test]
    fn cover_ends_fully_covered() {
        let board = board_2x2();
        let mut canvas = HeadlessCanvas::new(Layout::pixels(2, 2));
        let mut pacer = ManualPacer::new();
        let cells = [CellPos::new(0, 0), CellPos::new(1, 0)];
        {
            let mut ctx = RenderContext::new(&mut canvas, &mut pacer);
            cover_boxes(&mut ctx, &board, &cells, 8).unwrap();
        }
        assert_eq!(canvas.presented(), 6);
        for cell in cells {
            assert_eq!(canvas.view(cell), CellView::Covered);
        }
        // Untouched cells are never drawn.
        assert!(!canvas
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::Icon(c, _) if *c == CellPos::new(0, 1))));
    }

    #[test]
    fn start_round_visits_every_cell_once_in_groups() {
        let mut rng = StdRng::seed_from_u64(9);
        let board = Board::generate(10, 7, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap();
        let mut canvas = HeadlessCanvas::new(Layout::pixels(10, 7));
        let mut pacer = ManualPacer::new();
        {
            let mut ctx = RenderContext::new(&mut canvas, &mut pacer);
            start_round(&mut ctx, &board, &mut rng, 8, 8).unwrap();
        }

        // 70 cells in groups of 8 => 9 groups, 7 reveal + 6 cover frames each.
        assert_eq!(canvas.presented(), 9 * 13);

        let covered: HashSet<CellPos> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Cover(cell, c) if *c == BOX_SIZE as i32 => Some(*cell),
                _ => None,
            })
            .collect();
        assert_eq!(covered.len(), 70);
        for cell in board.cells() {
            assert_eq!(canvas.view(cell), CellView::Covered);
        }
    }

    #[test]
    fn win_flashes_alternate_starting_with_normal() {
        let board = board_2x2();
        let mut canvas = HeadlessCanvas::new(Layout::pixels(2, 2));
        let mut pacer = ManualPacer::new();
        {
            let mut ctx = RenderContext::new(&mut canvas, &mut pacer);
            win(&mut ctx, &board, 13, Duration::from_millis(300)).unwrap();
        }
        let backdrops: Vec<Backdrop> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Background(b) => Some(*b),
                _ => None,
            })
            .collect();
        assert_eq!(backdrops.len(), 13);
        assert_eq!(backdrops[0], Backdrop::Normal);
        assert_eq!(backdrops[1], Backdrop::Light);
        assert_eq!(backdrops[12], Backdrop::Normal);
        assert_eq!(pacer.pauses().len(), 13);
        assert_eq!(pacer.paused(), Duration::from_millis(3900));
        assert_eq!(pacer.ticks(), 0);
        for cell in board.cells() {
            assert_eq!(canvas.view(cell), CellView::Icon(board.icon(cell).unwrap()));
        }
    }
}
