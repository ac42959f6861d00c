// Heuristic evaluation of a game state for the hunter (the MAX player).
//
// Pure function of the state: terminal outcomes short-circuit to extreme
// values, everything else combines a mode-dependent positional score
// (hunt while powered, survive-and-collect otherwise) with general terms.
// Distances are Manhattan throughout.

use crate::config::EvalConfig;
use crate::state::GameState;
use crate::types::EndReason;

/// Scalar desirability of `state` for the hunter. Higher is better.
pub fn evaluate(state: &GameState, cfg: &EvalConfig) -> f64 {
    if state.terminated {
        return match state.end_reason {
            EndReason::HunterWon => cfg.win_score,
            _ => cfg.loss_score,
        };
    }

    let mut points = state.score as f64 * cfg.score_weight;

    let distances: Vec<i32> = state
        .pursuer_positions
        .iter()
        .map(|p| state.hunter_pos.manhattan_distance(p))
        .collect();

    if state.power_active {
        points += hunt_mode(state, cfg, &distances);
    } else {
        points += survival_mode(state, cfg, &distances);
    }

    points += state.pickups_collected as f64 * cfg.collected_pickup_weight;
    points -= state.turns_total as f64 * cfg.turn_penalty;

    points
}

/// Power active: reward closing on pursuers before the power lapses.
/// A lone remaining pursuer gets a much steeper schedule than a pack, so
/// the finishing capture is prioritized over incidental collection.
fn hunt_mode(state: &GameState, cfg: &EvalConfig, distances: &[i32]) -> f64 {
    let mut points = state.power_turns_remaining as f64 * cfg.power_turn_bonus;

    let nearest = match distances.iter().min() {
        Some(&d) => d,
        None => return points,
    };

    if state.pursuer_positions.len() == 1 {
        points += match nearest {
            0 => 50_000.0,
            1 => 60_000.0,
            2 => 8_000.0,
            3 | 4 => 6_000.0,
            d => -(d as f64) * cfg.lone_distance_penalty,
        };
    } else {
        points += match nearest {
            0 => 3_500.0,
            1 => 2_200.0,
            2 => 1_300.0,
            3 => 700.0,
            4 | 5 => 300.0,
            d => -(d as f64) * cfg.pack_distance_penalty,
        };
    }

    // More pursuers in reach means more capture opportunity
    let close = distances.iter().filter(|&&d| d <= cfg.cluster_radius).count();
    points += close as f64 * cfg.cluster_bonus;

    points
}

/// Power inactive: evade above all, reach a power item when threatened,
/// collect pickups only from safety.
fn survival_mode(state: &GameState, cfg: &EvalConfig, distances: &[i32]) -> f64 {
    let mut points = 0.0;
    let nearest = distances.iter().min().copied();

    if let Some(d) = nearest {
        points += match d {
            0..=2 => -5_000.0,
            3 => -2_000.0,
            4 => -800.0,
            5 => -300.0,
            6 | 7 => -50.0,
            _ => (d as f64 * cfg.distance_comfort_weight).min(cfg.distance_comfort_cap),
        };
    }

    let nearest_power = state
        .available_power_items()
        .map(|p| state.hunter_pos.manhattan_distance(p))
        .min();
    if let Some(p) = nearest_power {
        let threatened = nearest.map_or(false, |d| d <= cfg.danger_distance);
        if threatened {
            // Urgency scales with both pursuer proximity and item proximity
            points += (cfg.power_urgent_reach - p as f64) * cfg.power_urgent_weight;
            if p <= cfg.power_close_distance {
                points += cfg.power_close_bonus;
            }
        } else {
            points += (cfg.power_calm_reach - p as f64) * cfg.power_calm_weight;
        }
    }

    let nearest_pickup = state
        .pickups
        .iter()
        .map(|c| state.hunter_pos.manhattan_distance(c))
        .min();
    if let Some(c) = nearest_pickup {
        let d = nearest.unwrap_or(i32::MAX);
        if d >= cfg.safe_pickup_distance {
            points -= c as f64 * cfg.pickup_safe_weight;
        } else if d >= cfg.wary_pickup_distance {
            points -= c as f64 * cfg.pickup_wary_weight;
        } else {
            // Do not path through danger for minor reward
            points += c as f64 * cfg.pickup_danger_weight;
        }
    }

    if !distances.is_empty() {
        let mean = distances.iter().sum::<i32>() as f64 / distances.len() as f64;
        if mean >= cfg.secure_mean_distance {
            points += cfg.secure_bonus;
        } else if mean >= cfg.steady_mean_distance {
            points += cfg.steady_bonus;
        }
    }

    points
}
