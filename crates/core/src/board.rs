//! Board module - the hidden icon assignment for one round
//!
//! The board is a `width x height` grid of icons where every icon value
//! appears in exactly two cells. Icons are stored in a flat vector in
//! column-major order (x * height + y), which is also the dealing order.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{check_board, ConfigError};
use crate::types::{CellPos, Icon, IconColor, Shape};

/// Icon assignment for a round. Immutable until regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Column-major icons
    icons: Vec<Icon>,
}

impl Board {
    /// Generate a randomized board of paired icons.
    ///
    /// The pool is built from the colors x shapes cross product, shuffled, and
    /// cut to `width * height / 2` icons. The pool is then doubled, shuffled
    /// again, and dealt column by column.
    pub fn generate<R: Rng + ?Sized>(
        width: u16,
        height: u16,
        colors: &[IconColor],
        shapes: &[Shape],
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        check_board(width, height, colors, shapes)?;

        let mut icons: Vec<Icon> = colors
            .iter()
            .flat_map(|&color| shapes.iter().map(move |&shape| Icon::new(shape, color)))
            .collect();
        icons.shuffle(rng);

        let pairs = width as usize * height as usize / 2;
        icons.truncate(pairs);
        icons.extend_from_within(..);
        icons.shuffle(rng);

        debug!("generated {}x{} board with {} pairs", width, height, pairs);

        Ok(Self {
            width,
            height,
            icons,
        })
    }

    /// Build a board from explicit columns (`columns[x][y]`).
    ///
    /// Returns `None` when the columns are ragged, empty, or longer than
    /// `u16::MAX` in either direction. Pair counts are not
    /// checked, which lets tests build boards in specific arrangements.
    pub fn from_columns(columns: Vec<Vec<Icon>>) -> Option<Self> {
        let width = columns.len();
        let height = columns.first().map(|c| c.len())?;
        if width == 0 || height == 0 || columns.iter().any(|c| c.len() != height) {
            return None;
        }
        Some(Self {
            width: u16::try_from(width).ok()?,
            height: u16::try_from(height).ok()?,
            icons: columns.into_iter().flatten().collect(),
        })
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

    /// Icon at `cell`, or `None` outside the board.
    pub fn icon(&self, cell: CellPos) -> Option<Icon> {
        self.index(cell).map(|i| self.icons[i])
    }

    /// All cells in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| CellPos::new(x, y)))
    }

    /// All icons in column-major order.
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// The other cell holding the same icon as `cell`.
    pub fn partner_of(&self, cell: CellPos) -> Option<CellPos> {
        let icon = self.icon(cell)?;
        self.cells()
            .find(|&other| other != cell && self.icon(other) == Some(icon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ALL_COLORS, ALL_SHAPES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_board_index_is_column_major() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::generate(10, 7, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap();
        assert_eq!(board.index(CellPos::new(0, 0)), Some(0));
        assert_eq!(board.index(CellPos::new(0, 6)), Some(6));
        assert_eq!(board.index(CellPos::new(1, 0)), Some(7));
        assert_eq!(board.index(CellPos::new(9, 6)), Some(69));
        assert_eq!(board.index(CellPos::new(10, 0)), None);
        assert_eq!(board.index(CellPos::new(0, 7)), None);
    }

    #[test]
    fn test_every_icon_appears_twice() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::generate(10, 7, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap();
            let mut counts: HashMap<Icon, usize> = HashMap::new();
            for icon in board.icons() {
                *counts.entry(*icon).or_default() += 1;
            }
            assert_eq!(counts.len(), 35);
            assert!(counts.values().all(|&n| n == 2));
        }
    }

    #[test]
    fn test_small_board_uses_subset_of_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::generate(4, 2, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap();
        assert_eq!(board.icons().len(), 8);
        let mut counts: HashMap<Icon, usize> = HashMap::new();
        for icon in board.icons() {
            *counts.entry(*icon).or_default() += 1;
        }
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn test_generate_rejects_bad_dimensions() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Board::generate(3, 3, &ALL_COLORS, &ALL_SHAPES, &mut rng).is_err());
        assert!(Board::generate(10, 7, &ALL_COLORS[..6], &ALL_SHAPES, &mut rng).is_err());
    }

    #[test]
    fn test_partner_of_finds_matching_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::generate(10, 7, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap();
        for cell in board.cells() {
            let partner = board.partner_of(cell).unwrap();
            assert_ne!(partner, cell);
            assert_eq!(board.icon(partner), board.icon(cell));
        }
    }

    #[test]
    fn test_from_columns_rejects_ragged_input() {
        let a = Icon::new(Shape::Oval, IconColor::Red);
        assert!(Board::from_columns(vec![vec![a, a], vec![a]]).is_none());
        assert!(Board::from_columns(vec![]).is_none());
        let board = Board::from_columns(vec![vec![a], vec![a]]).unwrap();
        assert_eq!((board.width(), board.height()), (2, 1));
    }

    #[test]
    fn test_from_columns_rejects_oversized_dimensions() {
        let a = Icon::new(Shape::Oval, IconColor::Red);
        let tall = u16::MAX as usize + 1;
        assert!(Board::from_columns(vec![vec![a; tall]]).is_none());
        assert!(Board::from_columns(vec![vec![a]; tall]).is_none());

        let board = Board::from_columns(vec![vec![a; u16::MAX as usize]]).unwrap();
        assert_eq!(board.height(), u16::MAX);
    }
}
