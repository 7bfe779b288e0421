//! Board generation tests

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_memory::core::{Board, ConfigError, GameConfig};
use tui_memory::types::{CellPos, Icon, ALL_COLORS, ALL_SHAPES};

fn icon_counts(board: &Board) -> HashMap<Icon, usize> {
    let mut counts = HashMap::new();
    for cell in board.cells() {
        *counts.entry(board.icon(cell).unwrap()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_generated_boards_pair_every_icon() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate(10, 7, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap();
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 7);
        assert_eq!(board.cells().count(), 70);

        let counts = icon_counts(&board);
        assert_eq!(counts.len(), 35, "seed {}", seed);
        assert!(counts.values().all(|&n| n == 2), "seed {}", seed);
    }
}

#[test]
fn test_generated_boards_respect_other_dimensions() {
    let mut rng = StdRng::seed_from_u64(99);
    for (w, h) in [(2, 1), (4, 4), (6, 5), (3, 2)] {
        let board = Board::generate(w, h, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap();
        assert_eq!((board.width(), board.height()), (w, h));
        let counts = icon_counts(&board);
        assert_eq!(counts.len(), (w * h / 2) as usize);
        assert!(counts.values().all(|&n| n == 2));
    }
}

#[test]
fn test_board_icon_out_of_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    let board = Board::generate(10, 7, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap();
    assert!(board.icon(CellPos::new(9, 6)).is_some());
    assert_eq!(board.icon(CellPos::new(10, 0)), None);
    assert_eq!(board.icon(CellPos::new(0, 7)), None);
}

#[test]
fn test_cells_are_dealt_column_major() {
    let mut rng = StdRng::seed_from_u64(2);
    let board = Board::generate(3, 2, &ALL_COLORS, &ALL_SHAPES, &mut rng).unwrap();
    let order: Vec<CellPos> = board.cells().collect();
    assert_eq!(
        order,
        vec![
            CellPos::new(0, 0),
            CellPos::new(0, 1),
            CellPos::new(1, 0),
            CellPos::new(1, 1),
            CellPos::new(2, 0),
            CellPos::new(2, 1),
        ]
    );
    for (i, cell) in order.iter().enumerate() {
        assert_eq!(board.icon(*cell), Some(board.icons()[i]));
    }
}

#[test]
fn test_different_seeds_give_different_boards() {
    let a = Board::generate(
        10,
        7,
        &ALL_COLORS,
        &ALL_SHAPES,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();
    let b = Board::generate(
        10,
        7,
        &ALL_COLORS,
        &ALL_SHAPES,
        &mut StdRng::seed_from_u64(2),
    )
    .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_seven_colors_by_five_shapes_exactly_fill_default_board() {
    let config = GameConfig::default();
    assert_eq!(config.colors.len(), 7);
    assert_eq!(config.shapes.len(), 5);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_six_colors_fail_startup_precondition() {
    let config = GameConfig {
        colors: ALL_COLORS[..6].to_vec(),
        ..GameConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::NotEnoughIcons {
            available: 30,
            needed: 35
        })
    );

    let mut rng = StdRng::seed_from_u64(1);
    assert!(Board::generate(10, 7, &ALL_COLORS[..6], &ALL_SHAPES, &mut rng).is_err());
}

#[test]
fn test_odd_cell_count_fails_startup_precondition() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        Board::generate(7, 7, &ALL_COLORS, &ALL_SHAPES, &mut rng),
        Err(ConfigError::OddCellCount {
            width: 7,
            height: 7
        })
    );
}
