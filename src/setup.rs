// Random initial placement of entities and collectibles on the maze.
//
// Placement is the only random part of game construction; the RNG is
// injected so live games, tests and the replay tool control their own
// randomness.

use std::collections::HashSet;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::config::BoardConfig;
use crate::grid::GridModel;
use crate::types::Position;

/// Everything the GameState constructor needs besides the maze
#[derive(Debug)]
pub struct Placement {
    pub hunter_pos: Position,
    pub pursuer_positions: Vec<Position>,
    pub pickups: HashSet<Position>,
    pub power_items: HashSet<Position>,
}

/// Places the hunter, spaced-out pursuers, pickups on a fraction of the
/// remaining free cells, and power items in the maze's corner regions.
pub fn place_entities<R: Rng + ?Sized>(
    grid: &GridModel,
    config: &BoardConfig,
    rng: &mut R,
) -> Placement {
    let open = grid.open_cells();

    let hunter_pos = open
        .choose(rng)
        .copied()
        .unwrap_or(Position { row: 13, col: 9 });

    let pursuer_positions = place_pursuers(&open, hunter_pos, config, rng);

    let occupied: HashSet<Position> = pursuer_positions
        .iter()
        .copied()
        .chain(Some(hunter_pos))
        .collect();
    let free: Vec<Position> = open
        .iter()
        .filter(|pos| !occupied.contains(pos))
        .copied()
        .collect();

    let pickup_count = (free.len() as f64 * config.pickup_density) as usize;
    let pickups: HashSet<Position> = free
        .choose_multiple(rng, pickup_count)
        .copied()
        .collect();

    let power_items = place_power_items(grid, config, rng);

    Placement {
        hunter_pos,
        pursuer_positions,
        pickups,
        power_items,
    }
}

/// Pursuers start well away from the hunter and from each other. After the
/// attempt budget, spacing constraints are dropped so a crowded maze still
/// gets its full complement.
fn place_pursuers<R: Rng + ?Sized>(
    open: &[Position],
    hunter_pos: Position,
    config: &BoardConfig,
    rng: &mut R,
) -> Vec<Position> {
    let mut pursuers: Vec<Position> = Vec::with_capacity(config.pursuer_count);

    let mut attempts = 0;
    while pursuers.len() < config.pursuer_count && attempts < config.placement_max_attempts {
        attempts += 1;
        let pos = match open.choose(rng) {
            Some(&p) => p,
            None => break,
        };

        let far_from_hunter =
            pos.manhattan_distance(&hunter_pos) >= config.min_pursuer_hunter_distance;
        let crowding_another = pursuers
            .iter()
            .any(|p| pos.manhattan_distance(p) < config.min_pursuer_spacing);

        if far_from_hunter && !crowding_another && !pursuers.contains(&pos) {
            pursuers.push(pos);
        }
    }

    if pursuers.len() < config.pursuer_count {
        let mut fallback: Vec<Position> = open.to_vec();
        fallback.shuffle(rng);
        for pos in fallback {
            if pursuers.len() >= config.pursuer_count {
                break;
            }
            if pos != hunter_pos && !pursuers.contains(&pos) {
                pursuers.push(pos);
            }
        }
    }

    pursuers
}

/// Power items go in the four corner regions of the maze. If the maze has
/// fewer open corner cells than items, none are placed.
fn place_power_items<R: Rng + ?Sized>(
    grid: &GridModel,
    config: &BoardConfig,
    rng: &mut R,
) -> HashSet<Position> {
    let candidates = corner_cells(grid, config.corner_region_size);
    if candidates.len() < config.power_item_count {
        return HashSet::new();
    }

    candidates
        .choose_multiple(rng, config.power_item_count)
        .copied()
        .collect()
}

/// Open cells of the four corner regions, excluding the outer wall ring
pub fn corner_cells(grid: &GridModel, region_size: i32) -> Vec<Position> {
    let rows = grid.rows();
    let cols = grid.cols();
    let row_bands = [(1, 1 + region_size), (rows - 1 - region_size, rows - 1)];
    let col_bands = [(1, 1 + region_size), (cols - 1 - region_size, cols - 1)];

    let mut cells = Vec::new();
    for &(row_start, row_end) in row_bands.iter() {
        for &(col_start, col_end) in col_bands.iter() {
            for row in row_start..row_end {
                for col in col_start..col_end {
                    let pos = Position { row, col };
                    if grid.is_open(&pos) {
                        cells.push(pos);
                    }
                }
            }
        }
    }
    cells
}
