// Exhaustive minimax over the hunter/pursuers game tree.
//
// One hunter (MAX) ply is followed by one full round of sequential pursuer
// (MIN) plies, one per pursuer in sequence order, before the next hunter
// ply at one lower depth. Every legal child is expanded; the only cutoffs
// are terminal states, the depth bound and the wall-clock deadline.

use crate::search::SearchContext;
use crate::state::GameState;
use crate::types::Direction;

/// Root MAX ply. Returns None iff the hunter has no legal move; otherwise
/// the first move (in canonical order) attaining the best value.
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

    for direction in moves.iter().copied() {
        let mut child = state.clone();
        child.apply_hunter_move(direction);
        ctx.nodes_explored += 1;

        let value = min_value(&child, max_depth.saturating_sub(1), 0, ctx);
        if value > best_value {
            best_value = value;
            best_move = Some(direction);
        }

        // Moves already scored still compete; unexplored siblings are dropped
        if ctx.expired() {
            break;
        }
    }

    (best_move.or_else(|| moves.first().copied()), best_value)
}

fn max_value(state: &GameState, depth: u32, ctx: &mut SearchContext) -> f64 {
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

        value = value.max(min_value(&child, depth - 1, 0, ctx));
    }
    value
}

/// MIN ply for the pursuer at `pursuer_index`. The full multi-pursuer round
/// is a chain of per-pursuer minimizations; index exhaustion rolls over to
/// a MAX ply at the same depth.
fn min_value(state: &GameState, depth: u32, pursuer_index: usize, ctx: &mut SearchContext) -> f64 {
    if ctx.expired() {
        return state.evaluate();
    }
    if state.terminated || depth == 0 {
        return state.evaluate();
    }

    if pursuer_index >= state.pursuer_positions.len() {
        return max_value(state, depth, ctx);
    }

    let targets = state.legal_pursuer_targets(&state.pursuer_positions[pursuer_index]);
    if targets.is_empty() {
        // Boxed-in pursuer contributes no branching
        return min_value(state, depth, pursuer_index + 1, ctx);
    }

    let mut value = f64::INFINITY;
    for target in targets {
        let mut child = state.clone();
        child.apply_pursuer_step(pursuer_index, target);
        ctx.nodes_explored += 1;

        value = value.min(min_value(&child, depth, pursuer_index + 1, ctx));
    }
    value
}
