// Minimax and alpha-beta must be decision-equivalent: same top-level move
// and same top-level value for any fixed depth when neither search hits
// its deadline. Pruning only skips branches that cannot change the result.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use maze_hunter::config::Config;
use maze_hunter::grid::GridModel;
use maze_hunter::search;
use maze_hunter::state::GameState;
use maze_hunter::types::{Direction, Position, Strategy};

fn pos(row: i32, col: i32) -> Position {
    Position { row, col }
}

/// 7x7 maze with a few interior walls
fn small_maze() -> GridModel {
    let matrix = vec![
        vec![0, 0, 0, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 1, 1, 0],
        vec![0, 1, 0, 1, 0, 1, 0],
        vec![0, 1, 1, 1, 1, 1, 0],
        vec![0, 1, 0, 1, 0, 1, 0],
        vec![0, 1, 1, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0, 0, 0],
    ];
    GridModel::from_matrix(&matrix)
}

fn build_state(
    hunter: Position,
    pursuers: Vec<Position>,
    pickups: Vec<Position>,
    powered: bool,
) -> GameState {
    let mut state = GameState::new(
        small_maze(),
        hunter,
        pursuers,
        pickups.into_iter().collect(),
        HashSet::new(),
        &Config::default_hardcoded(),
    );
    if powered {
        state.power_active = true;
        state.power_turns_remaining = 8;
    }
    state
}

fn assert_engines_agree(state: &GameState, depth: u32, label: &str) {
    // A deadline far in the future: equivalence only holds when neither
    // engine is truncated mid-search.
    let deadline = Instant::now() + Duration::from_secs(300);
    let config = Config::default_hardcoded();
    let minimax = search::decide_until(state, Strategy::Minimax, depth, deadline, &config.search);
    let alpha_beta =
        search::decide_until(state, Strategy::AlphaBeta, depth, deadline, &config.search);

    assert_eq!(
        minimax.direction, alpha_beta.direction,
        "move mismatch for {}",
        label
    );
    assert!(
        (minimax.value - alpha_beta.value).abs() < 1e-9,
        "value mismatch for {}: minimax {} vs alpha_beta {}",
        label,
        minimax.value,
        alpha_beta.value
    );
    // Pruning must not explore more than the exhaustive engine
    assert!(
        alpha_beta.nodes_explored <= minimax.nodes_explored,
        "alpha-beta explored more nodes than minimax for {}",
        label
    );
}

#[test]
fn test_equivalence_across_varied_configurations() {
    let hunters = [pos(1, 1), pos(3, 3), pos(5, 5), pos(1, 5), pos(3, 1)];
    let pursuer_sets: [&[Position]; 5] = [
        &[pos(5, 1)],
        &[pos(1, 5), pos(5, 5)],
        &[pos(5, 1), pos(1, 5)],
        &[pos(3, 5), pos(5, 3)],
        &[pos(5, 5), pos(5, 1), pos(1, 5)],
    ];

    let mut checked = 0;
    for &hunter in hunters.iter() {
        for pursuers in pursuer_sets.iter() {
            if pursuers.contains(&hunter) {
                continue;
            }
            let state = build_state(
                hunter,
                pursuers.to_vec(),
                vec![pos(1, 3), pos(5, 5), pos(3, 1)],
                false,
            );
            assert_engines_agree(&state, 2, &format!("hunter {:?} vs {:?}", hunter, pursuers));
            checked += 1;
        }
    }
    assert!(checked >= 20, "only {} configurations exercised", checked);
}

#[test]
fn test_equivalence_while_powered() {
    let pursuer_sets: [&[Position]; 3] = [
        &[pos(3, 3)],
        &[pos(1, 3), pos(5, 3)],
        &[pos(1, 5), pos(5, 1), pos(5, 5)],
    ];

    for pursuers in pursuer_sets.iter() {
        let state = build_state(pos(1, 1), pursuers.to_vec(), vec![pos(5, 5)], true);
        assert_engines_agree(&state, 2, &format!("powered vs {:?}", pursuers));
    }
}

#[test]
fn test_equivalence_at_depth_three() {
    let state = build_state(pos(3, 3), vec![pos(1, 1), pos(5, 5)], vec![pos(1, 5)], false);
    assert_engines_agree(&state, 3, "depth 3");
}

#[test]
fn test_forced_loss_returns_none_from_both_engines() {
    // Hunter boxed into a single open cell
    let matrix = vec![
        vec![0, 0, 0],
        vec![0, 1, 0],
        vec![0, 0, 0],
    ];
    let state = GameState::new(
        GridModel::from_matrix(&matrix),
        pos(1, 1),
        vec![],
        HashSet::new(),
        HashSet::new(),
        &Config::default_hardcoded(),
    );
    let config = Config::default_hardcoded();

    let minimax = search::decide(&state, Strategy::Minimax, 2, &config.search);
    let alpha_beta = search::decide(&state, Strategy::AlphaBeta, 2, &config.search);

    assert_eq!(minimax.direction, None);
    assert_eq!(alpha_beta.direction, None);
}

#[test]
fn test_tied_moves_keep_first_in_canonical_order() {
    // Every move wins immediately, so all four root values tie
    let state = GameState::new(
        GridModel::open(5, 5),
        pos(2, 2),
        vec![],
        HashSet::new(),
        HashSet::new(),
        &Config::default_hardcoded(),
    );
    let config = Config::default_hardcoded();

    let minimax = search::decide(&state, Strategy::Minimax, 2, &config.search);
    let alpha_beta = search::decide(&state, Strategy::AlphaBeta, 2, &config.search);

    assert_eq!(minimax.direction, Some(Direction::Up));
    assert_eq!(alpha_beta.direction, Some(Direction::Up));
}

#[test]
fn test_expired_deadline_still_returns_legal_move() {
    let state = build_state(pos(3, 3), vec![pos(1, 1)], vec![pos(5, 5)], false);
    let config = Config::default_hardcoded();

    for &strategy in [Strategy::Minimax, Strategy::AlphaBeta].iter() {
        let report = search::decide_until(&state, strategy, 2, Instant::now(), &config.search);
        let direction = report
            .direction
            .expect("anytime search must return a move when one exists");
        assert!(state.legal_hunter_moves().contains(&direction));
    }
}
