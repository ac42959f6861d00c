// Maze connectivity, entity placement and snapshot reconstruction.

use std::collections::HashSet;

use maze_hunter::config::Config;
use maze_hunter::grid::GridModel;
use maze_hunter::setup::{self, corner_cells};
use maze_hunter::state::GameState;
use maze_hunter::types::Position;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pos(row: i32, col: i32) -> Position {
    Position { row, col }
}

#[test]
fn test_classic_maze_dimensions_and_walls() {
    let grid = GridModel::classic_maze();
    assert_eq!(grid.rows(), 15);
    assert_eq!(grid.cols(), 19);

    // Outer ring is walled, the inner lanes are open
    assert!(!grid.is_open(&pos(0, 0)));
    assert!(!grid.is_open(&pos(14, 18)));
    assert!(grid.is_open(&pos(1, 1)));
    assert!(grid.is_open(&pos(13, 17)));
}

#[test]
fn test_out_of_bounds_is_never_open() {
    let grid = GridModel::open(5, 5);
    assert!(!grid.is_open(&pos(-1, 0)));
    assert!(!grid.is_open(&pos(0, -1)));
    assert!(!grid.is_open(&pos(5, 0)));
    assert!(!grid.is_open(&pos(0, 5)));
}

#[test]
fn test_neighbors_in_canonical_order() {
    let grid = GridModel::open(5, 5);
    assert_eq!(
        grid.neighbors(&pos(2, 2)),
        vec![pos(1, 2), pos(3, 2), pos(2, 1), pos(2, 3)]
    );

    // Walls drop out without disturbing the order of the rest
    assert_eq!(grid.neighbors(&pos(0, 0)), vec![pos(1, 0), pos(0, 1)]);
}

#[test]
fn test_matrix_round_trip() {
    let grid = GridModel::classic_maze();
    let rebuilt = GridModel::from_matrix(&grid.to_matrix());
    assert_eq!(grid, rebuilt);
}

#[test]
fn test_open_cells_are_all_open() {
    let grid = GridModel::classic_maze();
    let open = grid.open_cells();
    assert!(!open.is_empty());
    for cell in &open {
        assert!(grid.is_open(cell));
    }
}

#[test]
fn test_placement_respects_board_constraints() {
    let grid = GridModel::classic_maze();
    let config = Config::default_hardcoded();
    let mut rng = StdRng::seed_from_u64(7);

    let placement = setup::place_entities(&grid, &config.board, &mut rng);

    assert!(grid.is_open(&placement.hunter_pos));

    assert_eq!(placement.pursuer_positions.len(), config.board.pursuer_count);
    let distinct: HashSet<Position> = placement.pursuer_positions.iter().copied().collect();
    assert_eq!(distinct.len(), placement.pursuer_positions.len());
    for pursuer in &placement.pursuer_positions {
        assert!(grid.is_open(pursuer));
        assert_ne!(*pursuer, placement.hunter_pos);
    }

    let occupied: HashSet<Position> = placement
        .pursuer_positions
        .iter()
        .copied()
        .chain(Some(placement.hunter_pos))
        .collect();
    let free = grid.open_cells().len() - occupied.len();
    let expected_pickups = (free as f64 * config.board.pickup_density) as usize;
    assert_eq!(placement.pickups.len(), expected_pickups);
    for pickup in &placement.pickups {
        assert!(grid.is_open(pickup));
        assert!(!occupied.contains(pickup));
    }

    let corners: HashSet<Position> = corner_cells(&grid, config.board.corner_region_size)
        .into_iter()
        .collect();
    assert_eq!(placement.power_items.len(), config.board.power_item_count);
    for item in &placement.power_items {
        assert!(corners.contains(item), "{:?} outside corner regions", item);
    }
}

#[test]
fn test_corner_cells_stay_clear_of_the_outer_wall() {
    let grid = GridModel::classic_maze();
    let region = 3;
    for cell in corner_cells(&grid, region) {
        assert!(grid.is_open(&cell));
        let near_left_or_right = cell.col <= region || cell.col >= grid.cols() - 1 - region;
        let near_top_or_bottom = cell.row <= region || cell.row >= grid.rows() - 1 - region;
        assert!(near_left_or_right && near_top_or_bottom);
    }
}

#[test]
fn test_snapshot_reconstruction_round_trip() {
    let config = Config::default_hardcoded();
    let grid = GridModel::classic_maze();
    let mut rng = StdRng::seed_from_u64(11);
    let placement = setup::place_entities(&grid, &config.board, &mut rng);

    let mut state = GameState::new(
        grid,
        placement.hunter_pos,
        placement.pursuer_positions,
        placement.pickups,
        placement.power_items,
        &config,
    );
    // Walk a few turns so the counters are nontrivial
    for _ in 0..3 {
        if state.terminated {
            break;
        }
        let moves = state.legal_hunter_moves();
        state.apply_hunter_move(moves[0]);
    }

    let snapshot = state.snapshot();
    let rebuilt = GameState::from_snapshot(&snapshot, &config);

    assert_eq!(rebuilt.snapshot(), snapshot);
}
