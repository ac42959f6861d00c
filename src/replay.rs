// Replay module for analyzing historical turn logs and debugging decisions
//
// This module provides functionality to:
// 1. Parse JSONL turn logs
// 2. Rebuild each logged game state and re-run both search strategies on it
// 3. Compare the logged move against the fresh decision, and the two
//    strategies against each other (they must agree when neither times out)
// 4. Generate agreement statistics

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::search;
use crate::state::GameState;
use crate::types::{Direction, GameSnapshot, Strategy};

/// Values closer than this count as equal when comparing the two engines
const VALUE_EPSILON: f64 = 1e-6;

/// Represents a single log entry from the turn JSONL file
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogEntry {
    pub turn: u32,
    pub strategy: String,
    pub chosen_move: String,
    pub value: f64,
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
    pub state: GameSnapshot,
    pub timestamp: String,
}

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: u32,
    pub logged_move: Direction,
    pub minimax_move: Option<Direction>,
    pub alpha_beta_move: Option<Direction>,
    pub minimax_value: f64,
    pub alpha_beta_value: f64,
    /// The logged strategy's fresh decision matches the logged move
    pub matches_log: bool,
    /// Both strategies picked the same move with the same value
    pub strategies_agree: bool,
    pub elapsed_ms: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub log_matches: usize,
    pub strategy_agreements: usize,
    pub log_match_rate: f64,
    pub agreement_rate: f64,
}

/// Replay engine for analyzing turn logs
pub struct ReplayEngine {
    config: Config,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine with the given configuration
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine { config, verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<LogEntry>, String> {
        let file =
            File::open(log_path.as_ref()).map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Replays a single log entry: rebuilds the state the engine saw before
    /// the logged move was applied and runs both strategies on it.
    pub fn replay_entry(&self, entry: &LogEntry) -> Result<ReplayResult, String> {
        if self.verbose {
            info!("Replaying turn {}...", entry.turn);
        }

        let logged_move = Direction::parse(&entry.chosen_move)
            .ok_or_else(|| format!("Invalid logged move: {}", entry.chosen_move))?;
        let logged_strategy = match entry.strategy.as_str() {
            "minimax" => Strategy::Minimax,
            "alpha_beta" => Strategy::AlphaBeta,
            other => return Err(format!("Invalid logged strategy: {}", other)),
        };

        let state = GameState::from_snapshot(&entry.state, &self.config);
        if state.terminated {
            return Err(format!("Turn {} logged a terminated state", entry.turn));
        }

        let started = Instant::now();
        let minimax_report =
            search::decide(&state, Strategy::Minimax, state.max_depth, &self.config.search);
        let alpha_beta_report = search::decide(
            &state,
            Strategy::AlphaBeta,
            state.max_depth,
            &self.config.search,
        );
        let elapsed_ms = started.elapsed().as_millis();

        let replayed_move = match logged_strategy {
            Strategy::Minimax => minimax_report.direction,
            Strategy::AlphaBeta => alpha_beta_report.direction,
        };
        let matches_log = replayed_move == Some(logged_move);
        let strategies_agree = minimax_report.direction == alpha_beta_report.direction
            && (minimax_report.value - alpha_beta_report.value).abs() < VALUE_EPSILON;

        let result = ReplayResult {
            turn: entry.turn,
            logged_move,
            minimax_move: minimax_report.direction,
            alpha_beta_move: alpha_beta_report.direction,
            minimax_value: minimax_report.value,
            alpha_beta_value: alpha_beta_report.value,
            matches_log,
            strategies_agree,
            elapsed_ms,
        };

        if self.verbose {
            if result.matches_log && result.strategies_agree {
                info!(
                    "Turn {}: MATCH - {} (minimax {:.1} / alpha_beta {:.1}, {}ms)",
                    entry.turn,
                    logged_move.as_str(),
                    result.minimax_value,
                    result.alpha_beta_value,
                    elapsed_ms
                );
            } else {
                warn!(
                    "Turn {}: logged {}, minimax {:?} ({:.1}), alpha_beta {:?} ({:.1}), {}ms",
                    entry.turn,
                    logged_move.as_str(),
                    result.minimax_move.map(|d| d.as_str()),
                    result.minimax_value,
                    result.alpha_beta_move.map(|d| d.as_str()),
                    result.alpha_beta_value,
                    elapsed_ms
                );
            }
        }

        Ok(result)
    }

    /// Replays the selected entries and accumulates statistics
    pub fn replay_entries(&self, entries: &[LogEntry]) -> ReplayStats {
        let mut stats = ReplayStats::default();

        for entry in entries {
            match self.replay_entry(entry) {
                Ok(result) => {
                    stats.total_turns += 1;
                    if result.matches_log {
                        stats.log_matches += 1;
                    }
                    if result.strategies_agree {
                        stats.strategy_agreements += 1;
                    }
                }
                Err(e) => {
                    warn!("Skipping turn {}: {}", entry.turn, e);
                }
            }
        }

        if stats.total_turns > 0 {
            stats.log_match_rate = stats.log_matches as f64 / stats.total_turns as f64;
            stats.agreement_rate = stats.strategy_agreements as f64 / stats.total_turns as f64;
        }

        stats
    }
}
