//! Reveal state - which boxes are currently face up.

use crate::types::CellPos;

/// Per-cell face-up flags, same dimensions as the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealGrid {
    width: u16,
    height: u16,
    /// Column-major flags
    cells: Vec<bool>,
}

impl RevealGrid {
    pub fn new(width: u16, height: u16, initial: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![initial; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, cell: CellPos) -> Option<usize> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        Some(cell.x as usize * self.height as usize + cell.y as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// False outside the grid.
    pub fn is_revealed(&self, cell: CellPos) -> bool {
        self.index(cell).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// No-op outside the grid.
    pub fn set_revealed(&mut self, cell: CellPos, revealed: bool) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = revealed;
        }
    }

    /// True iff every cell is face up.
    pub fn has_won(&self) -> bool {
        self.cells.iter().all(|&revealed| revealed)
    }

    /// Refill the whole grid with `initial`.
    pub fn reset(&mut self, initial: bool) {
        self.cells.fill(initial);
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|&&revealed| revealed).count()
    }
}
