// Shared plumbing for the two search engines.
//
// Both engines are single-threaded, depth-first and clone-per-branch; the
// deadline is an explicit value threaded through every recursive call, so
// the engines are reentrant and hold no process-wide state. A call that
// finds the budget exhausted returns the evaluation of the state it is
// looking at, which makes the search an anytime algorithm: any cutoff still
// yields a legal move from the children explored so far.

use std::time::{Duration, Instant};

use crate::config::SearchConfig;
use crate::state::GameState;
use crate::types::{Direction, Strategy};
use crate::{alpha_beta, minimax};

/// Outcome of one decision
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// None iff the hunter had no legal move at the root
    pub direction: Option<Direction>,
    /// Value of the chosen root move
    pub value: f64,
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
    pub elapsed: Duration,
}

/// Per-call search bookkeeping threaded through the recursion
pub(crate) struct SearchContext {
    deadline: Instant,
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
}

impl SearchContext {
    pub fn with_deadline(deadline: Instant) -> SearchContext {
        SearchContext {
            deadline,
            nodes_explored: 0,
            nodes_pruned: 0,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Chooses the hunter's next move with the given strategy. The wall-clock
/// budget comes from the configuration; see `decide_until` for tests that
/// inject the deadline directly.
pub fn decide(
    state: &GameState,
    strategy: Strategy,
    max_depth: u32,
    config: &SearchConfig,
) -> SearchReport {
    decide_until(
        state,
        strategy,
        max_depth,
        Instant::now() + config.budget_for(strategy),
        config,
    )
}

/// Chooses the hunter's next move, stopping at an explicit deadline
pub fn decide_until(
    state: &GameState,
    strategy: Strategy,
    max_depth: u32,
    deadline: Instant,
    config: &SearchConfig,
) -> SearchReport {
    let started = Instant::now();
    let mut ctx = SearchContext::with_deadline(deadline);

    // Each extra pursuer multiplies the MIN round's branching; cap the depth
    // against a crowd. Applied to both strategies so they stay
    // decision-equivalent at any requested depth.
    let mut depth = max_depth;
    if state.pursuer_positions.len() > config.crowded_pursuer_threshold
        && depth > config.crowded_depth_limit
    {
        depth = config.crowded_depth_limit;
    }

    let (direction, value) = match strategy {
        Strategy::Minimax => minimax::search_root(state, depth, &mut ctx),
        Strategy::AlphaBeta => alpha_beta::search_root(state, depth, &mut ctx),
    };

    SearchReport {
        direction,
        value,
        nodes_explored: ctx.nodes_explored,
        nodes_pruned: ctx.nodes_pruned,
        elapsed: started.elapsed(),
    }
}
