// Session management and turn orchestration.
//
// One live game at a time. Each turn: ask the selected search engine for a
// hunter move (CPU-bound, run off the async worker threads), apply it to
// the live state, then advance all pursuers with the live state's own
// movement heuristic. The engines only ever see clones of the live state.

use log::{error, info};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::grid::GridModel;
use crate::search::{self, SearchReport};
use crate::setup;
use crate::state::GameState;
use crate::types::{Direction, GameSnapshot, Strategy};

struct Session {
    state: GameState,
    rng: StdRng,
}

/// Result of advancing the live game by one turn
#[derive(Debug)]
pub struct TurnOutcome {
    pub snapshot: GameSnapshot,
    pub hunter_move: Option<Direction>,
    pub terminated: bool,
}

/// Owns the live game session and the turn log
pub struct GameManager {
    config: Config,
    session: Mutex<Option<Session>>,
    logger: DebugLogger,
}

impl GameManager {
    pub fn new(config: Config) -> Self {
        let logger = if config.debug.enabled {
            DebugLogger::new(&config.debug.log_file_path)
        } else {
            DebugLogger::disabled()
        };
        GameManager {
            config,
            session: Mutex::new(None),
            logger,
        }
    }

    /// Starts a fresh game on the classic maze, replacing any running one
    pub fn new_game(&self, strategy: Option<Strategy>) -> GameSnapshot {
        let strategy = strategy.unwrap_or(self.config.search.default_strategy);

        let grid = GridModel::classic_maze();
        let mut rng = StdRng::from_os_rng();
        let placement = setup::place_entities(&grid, &self.config.board, &mut rng);

        let mut state = GameState::new(
            grid,
            placement.hunter_pos,
            placement.pursuer_positions,
            placement.pickups,
            placement.power_items,
            &self.config,
        );
        state.strategy = strategy;

        info!(
            "Game started: strategy={}, hunter={:?}, pursuers={:?}, pickups={}",
            strategy.as_str(),
            state.hunter_pos,
            state.pursuer_positions,
            state.pickups.len()
        );

        let snapshot = state.snapshot();
        *self.session.lock() = Some(Session { state, rng });
        snapshot
    }

    /// Advances the live game by one full turn (hunter, then pursuers).
    /// Returns None when no game has been started.
    pub async fn advance_turn(&self) -> Option<TurnOutcome> {
        let state = {
            let guard = self.session.lock();
            guard.as_ref()?.state.clone()
        };

        if state.terminated {
            return Some(TurnOutcome {
                snapshot: state.snapshot(),
                hunter_move: None,
                terminated: true,
            });
        }

        let turn = state.turns_total;
        let strategy = state.strategy;
        // The log keeps the state the engine decided on, not the result
        let decision_snapshot = state.snapshot();
        let report = self.run_search(state).await;

        let mut guard = self.session.lock();
        let session = guard.as_mut()?;

        match report.direction {
            Some(direction) => {
                session.state.apply_hunter_move(direction);
                if !session.state.terminated {
                    session.state.apply_pursuer_moves(&mut session.rng);
                }
                info!(
                    "Turn {}: {} chose {} (value: {:.1}, nodes: {}, pruned: {}, time: {}ms)",
                    turn,
                    strategy.as_str(),
                    direction.as_str(),
                    report.value,
                    report.nodes_explored,
                    report.nodes_pruned,
                    report.elapsed.as_millis()
                );
            }
            None => {
                // Boxed in with nowhere to go: forced loss
                session.state.declare_forced_loss();
                info!("Turn {}: no legal hunter move, game over", turn);
            }
        }

        let snapshot = session.state.snapshot();
        drop(guard);

        if let Some(direction) = report.direction {
            self.logger
                .log_turn(turn, strategy, direction, &report, decision_snapshot);
        }

        Some(TurnOutcome {
            hunter_move: report.direction,
            terminated: snapshot.terminated,
            snapshot,
        })
    }

    /// Snapshot of the live game, if any
    pub fn state(&self) -> Option<GameSnapshot> {
        self.session.lock().as_ref().map(|s| s.state.snapshot())
    }

    /// Runs the search on its own clone, off the async worker threads
    async fn run_search(&self, state: GameState) -> SearchReport {
        // Keep "direction is None iff no legal move" even if the task dies
        let fallback = state.legal_hunter_moves().first().copied();
        let strategy = state.strategy;
        let max_depth = state.max_depth;
        let search_config = self.config.search.clone();

        let handle = tokio::task::spawn_blocking(move || {
            search::decide(&state, strategy, max_depth, &search_config)
        });

        match handle.await {
            Ok(report) => report,
            Err(e) => {
                error!("Search task failed: {}", e);
                SearchReport {
                    direction: fallback,
                    value: f64::NEG_INFINITY,
                    nodes_explored: 0,
                    nodes_pruned: 0,
                    elapsed: std::time::Duration::ZERO,
                }
            }
        }
    }
}
