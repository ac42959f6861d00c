// Configuration module for reading Hunter.toml
// All tunable game, search and evaluation constants live here, with
// hardcoded defaults as a fallback when the file is missing or malformed.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::types::Strategy;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub board: BoardConfig,
    pub rewards: RewardsConfig,
    pub power: PowerConfig,
    pub movement: MovementConfig,
    pub eval: EvalConfig,
    pub debug: DebugConfig,
}

/// Search strategy and timing constants
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub default_strategy: Strategy,
    pub max_depth: u32,
    pub minimax_budget_ms: u64,
    pub alpha_beta_budget_ms: u64,
    /// With more pursuers than this, search caps its depth
    pub crowded_pursuer_threshold: usize,
    pub crowded_depth_limit: u32,
}

impl SearchConfig {
    /// Wall-clock budget for one decision with the given strategy
    pub fn budget_for(&self, strategy: Strategy) -> Duration {
        let ms = match strategy {
            Strategy::Minimax => self.minimax_budget_ms,
            Strategy::AlphaBeta => self.alpha_beta_budget_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Initial placement constants for the classic maze
#[derive(Debug, Deserialize, Clone)]
pub struct BoardConfig {
    pub pursuer_count: usize,
    /// Fraction of free open cells that receive a pickup
    pub pickup_density: f64,
    pub power_item_count: usize,
    pub min_pursuer_hunter_distance: i32,
    pub min_pursuer_spacing: i32,
    /// Side length of the corner regions holding power items
    pub corner_region_size: i32,
    pub placement_max_attempts: u32,
}

/// Score deltas applied by turn application
#[derive(Debug, Deserialize, Clone)]
pub struct RewardsConfig {
    pub pickup: i64,
    pub power_item: i64,
    pub capture: i64,
    pub win_bonus: i64,
    /// Subtracted when the hunter is captured
    pub capture_penalty: i64,
}

/// Power mode duration constants, in hunter turns
#[derive(Debug, Deserialize, Clone)]
pub struct PowerConfig {
    pub base_duration: u32,
    /// Added to the remaining duration when a power item is consumed
    /// while power is already active
    pub extension: u32,
}

/// Per-entity movement probabilities. The hunter always moves; pursuers
/// move less reliably, and less so while the hunter's power is active.
#[derive(Debug, Deserialize, Clone)]
pub struct MovementConfig {
    pub pursuer_chase_probability: f64,
    pub pursuer_flee_probability: f64,
}

/// Evaluation function weights. The piecewise distance schedules are part
/// of the heuristic's shape and live in eval.rs; the graded terms and
/// terminal values are tuned here.
#[derive(Debug, Deserialize, Clone)]
pub struct EvalConfig {
    // Terminal values, larger in magnitude than any non-terminal score
    pub win_score: f64,
    pub loss_score: f64,

    // General terms applied in both modes
    pub score_weight: f64,
    pub collected_pickup_weight: f64,
    pub turn_penalty: f64,

    // Hunt mode (power active)
    pub power_turn_bonus: f64,
    pub cluster_radius: i32,
    pub cluster_bonus: f64,
    pub lone_distance_penalty: f64,
    pub pack_distance_penalty: f64,

    // Survival mode (power inactive)
    pub danger_distance: i32,
    pub safe_pickup_distance: i32,
    pub wary_pickup_distance: i32,
    pub power_urgent_reach: f64,
    pub power_urgent_weight: f64,
    pub power_close_distance: i32,
    pub power_close_bonus: f64,
    pub power_calm_reach: f64,
    pub power_calm_weight: f64,
    pub pickup_safe_weight: f64,
    pub pickup_wary_weight: f64,
    pub pickup_danger_weight: f64,
    pub distance_comfort_weight: f64,
    pub distance_comfort_cap: f64,
    pub secure_mean_distance: f64,
    pub secure_bonus: f64,
    pub steady_mean_distance: f64,
    pub steady_bonus: f64,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Hunter.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Hunter.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Hunter.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig {
                default_strategy: Strategy::Minimax,
                max_depth: 2,
                minimax_budget_ms: 1500,
                alpha_beta_budget_ms: 2500,
                crowded_pursuer_threshold: 2,
                crowded_depth_limit: 2,
            },
            board: BoardConfig {
                pursuer_count: 3,
                pickup_density: 0.85,
                power_item_count: 5,
                min_pursuer_hunter_distance: 6,
                min_pursuer_spacing: 4,
                corner_region_size: 3,
                placement_max_attempts: 200,
            },
            rewards: RewardsConfig {
                pickup: 10,
                power_item: 50,
                capture: 200,
                win_bonus: 500,
                capture_penalty: 100,
            },
            power: PowerConfig {
                base_duration: 18,
                extension: 10,
            },
            movement: MovementConfig {
                pursuer_chase_probability: 0.92,
                pursuer_flee_probability: 0.60,
            },
            eval: EvalConfig {
                win_score: 60_000.0,
                loss_score: -15_000.0,
                score_weight: 10.0,
                collected_pickup_weight: 120.0,
                turn_penalty: 0.5,
                power_turn_bonus: 80.0,
                cluster_radius: 4,
                cluster_bonus: 200.0,
                lone_distance_penalty: 50.0,
                pack_distance_penalty: 25.0,
                danger_distance: 5,
                safe_pickup_distance: 6,
                wary_pickup_distance: 4,
                power_urgent_reach: 8.0,
                power_urgent_weight: 300.0,
                power_close_distance: 2,
                power_close_bonus: 1500.0,
                power_calm_reach: 6.0,
                power_calm_weight: 150.0,
                pickup_safe_weight: 35.0,
                pickup_wary_weight: 15.0,
                pickup_danger_weight: 10.0,
                distance_comfort_weight: 15.0,
                distance_comfort_cap: 200.0,
                secure_mean_distance: 8.0,
                secure_bonus: 200.0,
                steady_mean_distance: 6.0,
                steady_bonus: 80.0,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "maze_hunter_turns.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Hunter.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
