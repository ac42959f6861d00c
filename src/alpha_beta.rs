// Alpha-beta-pruned minimax. Same tree and same leaf values as the
// exhaustive engine, with bounds threaded through the MAX ply and every
// per-pursuer MIN ply: alpha is the best value MAX can already guarantee,
// beta the best MIN can. For a fixed depth and a deadline that does not
// trigger, the returned top-level move and value equal the exhaustive
// engine's.

use crate::search::SearchContext;
use crate::state::GameState;
use crate::types::Direction;

/// Root MAX ply with pruning bounds. Returns None iff the hunter has no
/// legal move; ties keep the first move in canonical order.
pub(crate) fn search_root(
    state: &GameState,
    max_depth: u32,
    ctx: &mut SearchContext,
) -> (Option<Direction>, f64) {
    let moves = state.legal_hunter_moves();
    if moves.is_empty() {
        return (None, f64::NEG_INFINITY);
    }

    let mut best_value = f64::NEG_INFINITY;
    let mut best_move = None;
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;

    for direction in moves.iter().copied() {
        let mut child = state.clone();
        child.apply_hunter_move(direction);
        ctx.nodes_explored += 1;

        let value = if child.terminated {
            child.evaluate()
        } else {
            min_value(&child, max_depth.saturating_sub(1), 0, alpha, beta, ctx)
        };

        if value > best_value {
            best_value = value;
            best_move = Some(direction);
        }
        alpha = alpha.max(best_value);

        if ctx.expired() {
            break;
        }
    }

    (best_move.or_else(|| moves.first().copied()), best_value)
}

fn max_value(
    state: &GameState,
    depth: u32,
    mut alpha: f64,
    beta: f64,
    ctx: &mut SearchContext,
) -> f64 {
    if ctx.expired() {
        return state.evaluate();
    }
    if state.terminated || depth == 0 {
        return state.evaluate();
    }

    let moves = state.legal_hunter_moves();
    if moves.is_empty() {
        return state.evaluate();
    }

    let mut value = f64::NEG_INFINITY;
    for direction in moves {
        let mut child = state.clone();
        child.apply_hunter_move(direction);
        ctx.nodes_explored += 1;

        let child_value = if child.terminated {
            child.evaluate()
        } else {
            min_value(&child, depth - 1, 0, alpha, beta, ctx)
        };
        value = value.max(child_value);

        // MIN will never let play reach a branch this good
        if value >= beta {
            ctx.nodes_pruned += 1;
            return value;
        }
        alpha = alpha.max(value);
    }
    value
}

/// MIN ply for one pursuer; a cutoff here propagates up through the rest
/// of the round.
fn min_value(
    state: &GameState,
    depth: u32,
    pursuer_index: usize,
    alpha: f64,
    mut beta: f64,
    ctx: &mut SearchContext,
) -> f64 {
    if ctx.expired() {
        return state.evaluate();
    }
    if state.terminated || depth == 0 {
        return state.evaluate();
    }

    if pursuer_index >= state.pursuer_positions.len() {
        return max_value(state, depth, alpha, beta, ctx);
    }

    let targets = state.legal_pursuer_targets(&state.pursuer_positions[pursuer_index]);
    if targets.is_empty() {
        return min_value(state, depth, pursuer_index + 1, alpha, beta, ctx);
    }

    let mut value = f64::INFINITY;
    for target in targets {
        let mut child = state.clone();
        child.apply_pursuer_step(pursuer_index, target);
        ctx.nodes_explored += 1;

        value = value.min(min_value(&child, depth, pursuer_index + 1, alpha, beta, ctx));

        // MAX already has a line at least this good elsewhere
        if value <= alpha {
            ctx.nodes_pruned += 1;
            return value;
        }
        beta = beta.min(value);
    }
    value
}
