// Mutable game state and turn application.
//
// One GameState is created per game session. The live state is mutated in
// place by turn application (hunter move, pursuer round); the search
// engines never touch it directly and operate exclusively on clones. Clone
// is a full value copy: the only shared substructure between a clone and
// its source is the immutable maze behind an Arc.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use rand::Rng;

use crate::config::{Config, EvalConfig, MovementConfig, PowerConfig, RewardsConfig};
use crate::eval;
use crate::grid::GridModel;
use crate::types::{Direction, EndReason, GameSnapshot, Position, Strategy};

/// The mutable unit of simulation
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Arc<GridModel>,
    pub hunter_pos: Position,
    /// Order matters: it defines MIN-layer processing order and move-index
    /// addressing. Duplicates are permitted transiently during capture
    /// resolution.
    pub pursuer_positions: Vec<Position>,
    pub pickups: HashSet<Position>,
    pub power_items: HashSet<Position>,
    /// Power items activate at most once; membership here gates re-triggering
    pub power_items_consumed: HashSet<Position>,
    pub score: i64,
    pub pickups_collected: u32,
    pub moves_made: u32,
    pub turns_total: u32,
    pub power_active: bool,
    pub power_turns_remaining: u32,
    pub terminated: bool,
    pub end_reason: EndReason,

    // Per-game configuration. Read by turn application, evaluation and the
    // search engines; mutated by neither.
    pub strategy: Strategy,
    pub max_depth: u32,
    rewards: RewardsConfig,
    power: PowerConfig,
    movement: MovementConfig,
    eval: EvalConfig,

    pursuers_total: u32,
}

impl GameState {
    /// Builds a fresh state from placed entities. Placement itself is the
    /// initializer's job (see setup.rs); this constructor only snapshots the
    /// relevant configuration sections so the state is self-contained.
    pub fn new(
        grid: GridModel,
        hunter_pos: Position,
        pursuer_positions: Vec<Position>,
        pickups: HashSet<Position>,
        power_items: HashSet<Position>,
        config: &Config,
    ) -> GameState {
        let pursuers_total = pursuer_positions.len() as u32;
        GameState {
            grid: Arc::new(grid),
            hunter_pos,
            pursuer_positions,
            pickups,
            power_items,
            power_items_consumed: HashSet::new(),
            score: 0,
            pickups_collected: 0,
            moves_made: 0,
            turns_total: 0,
            power_active: false,
            power_turns_remaining: 0,
            terminated: false,
            end_reason: EndReason::None,
            strategy: config.search.default_strategy,
            max_depth: config.search.max_depth,
            rewards: config.rewards.clone(),
            power: config.power.clone(),
            movement: config.movement.clone(),
            eval: config.eval.clone(),
            pursuers_total,
        }
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Unconsumed power items still on the board
    pub fn available_power_items(&self) -> impl Iterator<Item = &Position> {
        self.power_items.difference(&self.power_items_consumed)
    }

    /// Directions whose target cell is open and in-bounds, in canonical order
    pub fn legal_hunter_moves(&self) -> Vec<Direction> {
        Direction::all()
            .iter()
            .filter(|dir| self.grid.is_open(&dir.apply(&self.hunter_pos)))
            .copied()
            .collect()
    }

    /// Open, in-bounds neighbor cells of a pursuer, in canonical order.
    /// Empty means the pursuer stays put.
    pub fn legal_pursuer_targets(&self, pos: &Position) -> Vec<Position> {
        self.grid.neighbors(pos)
    }

    /// Applies one hunter move. Returns false (no mutation) for an illegal
    /// direction; true on any legal application regardless of outcome.
    pub fn apply_hunter_move(&mut self, direction: Direction) -> bool {
        let target = direction.apply(&self.hunter_pos);
        if !self.grid.is_open(&target) {
            return false;
        }

        let was_powered = self.power_active;

        self.hunter_pos = target;
        self.moves_made += 1;
        self.turns_total += 1;

        if self.power_active {
            self.power_turns_remaining -= 1;
            if self.power_turns_remaining == 0 {
                self.power_active = false;
            }
        }

        if self.pickups.remove(&self.hunter_pos) {
            self.score += self.rewards.pickup;
            self.pickups_collected += 1;
        }

        if self.power_items.contains(&self.hunter_pos)
            && !self.power_items_consumed.contains(&self.hunter_pos)
        {
            self.power_items_consumed.insert(self.hunter_pos);
            if self.power_active {
                self.power_turns_remaining += self.power.extension;
            } else {
                self.power_active = true;
                self.power_turns_remaining = self.power.base_duration;
            }
            self.score += self.rewards.power_item;
        }

        // The final powered turn still captures: the timer decrement above
        // may have deactivated power, but contact this turn resolves under
        // the power state at entry (or one gained from an item this cell).
        let powered = was_powered || self.power_active;
        self.resolve_collisions(powered);
        if self.terminated {
            return true;
        }

        if self.pursuer_positions.is_empty() {
            self.declare_win();
            return true;
        }

        if self.pickups.is_empty() && self.available_power_items().next().is_none() {
            self.declare_win();
        }

        true
    }

    /// Moves every pursuer for one round, then resolves collisions exactly
    /// as in hunter-move application. Each pursuer independently draws
    /// against its movement probability; on success it steps via BFS toward
    /// the hunter, or one greedy step away while the hunter's power is
    /// active.
    pub fn apply_pursuer_moves<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.pursuer_positions.is_empty() {
            return;
        }

        let probability = if self.power_active {
            self.movement.pursuer_flee_probability
        } else {
            self.movement.pursuer_chase_probability
        };

        let mut next_positions = Vec::with_capacity(self.pursuer_positions.len());
        for i in 0..self.pursuer_positions.len() {
            let pos = self.pursuer_positions[i];
            if rng.random::<f64>() < probability {
                let step = if self.power_active {
                    self.flee_step(pos)
                } else {
                    self.chase_step(pos)
                };
                next_positions.push(step);
            } else {
                next_positions.push(pos);
            }
        }
        self.pursuer_positions = next_positions;

        self.resolve_collisions(self.power_active);
        if self.terminated {
            return;
        }

        if self.pursuer_positions.is_empty() {
            self.declare_win();
        }
    }

    /// Places pursuer `index` at `target` and resolves its collision with
    /// the hunter. This is the MIN-layer expansion step used by the search
    /// engines on clones, so in-tree outcomes match live-turn outcomes.
    pub fn apply_pursuer_step(&mut self, index: usize, target: Position) {
        if index >= self.pursuer_positions.len() {
            return;
        }
        self.pursuer_positions[index] = target;

        if target != self.hunter_pos {
            return;
        }

        if self.power_active {
            self.pursuer_positions.remove(index);
            self.score += self.rewards.capture;
            if self.pursuer_positions.is_empty() {
                self.declare_win();
            }
        } else {
            self.score -= self.rewards.capture_penalty;
            self.terminated = true;
            self.end_reason = EndReason::HunterCaptured;
        }
    }

    /// Marks the game lost without moving: the hunter has no legal move
    pub fn declare_forced_loss(&mut self) {
        self.terminated = true;
        self.end_reason = EndReason::HunterCaptured;
    }

    /// Scalar desirability of this state for the hunter
    pub fn evaluate(&self) -> f64 {
        eval::evaluate(self, &self.eval)
    }

    pub fn pursuers_total(&self) -> u32 {
        self.pursuers_total
    }

    fn declare_win(&mut self) {
        self.terminated = true;
        self.end_reason = EndReason::HunterWon;
        self.score += self.rewards.win_bonus;
    }

    fn resolve_collisions(&mut self, powered: bool) {
        if powered {
            let hunter = self.hunter_pos;
            let before = self.pursuer_positions.len();
            self.pursuer_positions.retain(|p| *p != hunter);
            let captured = (before - self.pursuer_positions.len()) as i64;
            self.score += captured * self.rewards.capture;
        } else if self.pursuer_positions.contains(&self.hunter_pos) {
            self.score -= self.rewards.capture_penalty;
            self.terminated = true;
            self.end_reason = EndReason::HunterCaptured;
        }
    }

    /// First step of the shortest path from `from` to the hunter, found by
    /// BFS over open cells with the frontier expanded in canonical neighbor
    /// order. Returns `from` when already co-located or unreachable.
    fn chase_step(&self, from: Position) -> Position {
        if from == self.hunter_pos {
            return from;
        }

        let mut queue = VecDeque::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        queue.push_back(from);
        came_from.insert(from, from);

        while let Some(current) = queue.pop_front() {
            if current == self.hunter_pos {
                let mut step = current;
                while came_from[&step] != from {
                    step = came_from[&step];
                }
                return step;
            }
            for next in self.grid.neighbors(&current) {
                if !came_from.contains_key(&next) {
                    came_from.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        from
    }

    /// One greedy step away from the hunter: the legal neighbor maximizing
    /// Manhattan distance, first maximum in canonical order. Not a global
    /// escape search.
    fn flee_step(&self, from: Position) -> Position {
        let targets = self.legal_pursuer_targets(&from);
        let mut best = match targets.first() {
            Some(&t) => t,
            None => return from,
        };
        let mut best_distance = best.manhattan_distance(&self.hunter_pos);
        for &target in targets.iter().skip(1) {
            let distance = target.manhattan_distance(&self.hunter_pos);
            if distance > best_distance {
                best = target;
                best_distance = distance;
            }
        }
        best
    }

    /// Read-only projection handed to the presentation layer
    pub fn snapshot(&self) -> GameSnapshot {
        let mut pickups: Vec<Position> = self.pickups.iter().copied().collect();
        pickups.sort_by_key(|p| (p.row, p.col));
        let mut power_items: Vec<Position> = self.available_power_items().copied().collect();
        power_items.sort_by_key(|p| (p.row, p.col));

        let pursuers_remaining = self.pursuer_positions.len() as u32;
        let pursuer_move_probability = if self.power_active {
            self.movement.pursuer_flee_probability
        } else {
            self.movement.pursuer_chase_probability
        };

        GameSnapshot {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            board: self.grid.to_matrix(),
            hunter_pos: self.hunter_pos,
            pursuer_positions: self.pursuer_positions.clone(),
            total_pickups: self.pickups_collected
                + pickups.len() as u32
                + power_items.len() as u32,
            pickups,
            power_items,
            score: self.score,
            pickups_collected: self.pickups_collected,
            moves_made: self.moves_made,
            turns_total: self.turns_total,
            terminated: self.terminated,
            end_reason: self.end_reason,
            strategy: self.strategy,
            max_depth: self.max_depth,
            power_active: self.power_active,
            power_turns_remaining: self.power_turns_remaining,
            pursuers_total: self.pursuers_total,
            pursuers_remaining,
            pursuers_captured: self.pursuers_total.saturating_sub(pursuers_remaining),
            pursuer_move_probability,
        }
    }

    /// Rebuilds a state from a snapshot. Consumed power items are absent
    /// from the visible set, so an empty consumed-set reconstruction is
    /// behaviorally equivalent going forward. Used by the replay tool.
    pub fn from_snapshot(snapshot: &GameSnapshot, config: &Config) -> GameState {
        GameState {
            grid: Arc::new(GridModel::from_matrix(&snapshot.board)),
            hunter_pos: snapshot.hunter_pos,
            pursuer_positions: snapshot.pursuer_positions.clone(),
            pickups: snapshot.pickups.iter().copied().collect(),
            power_items: snapshot.power_items.iter().copied().collect(),
            power_items_consumed: HashSet::new(),
            score: snapshot.score,
            pickups_collected: snapshot.pickups_collected,
            moves_made: snapshot.moves_made,
            turns_total: snapshot.turns_total,
            power_active: snapshot.power_active,
            power_turns_remaining: snapshot.power_turns_remaining,
            terminated: snapshot.terminated,
            end_reason: snapshot.end_reason,
            strategy: snapshot.strategy,
            max_depth: snapshot.max_depth,
            rewards: config.rewards.clone(),
            power: config.power.clone(),
            movement: config.movement.clone(),
            eval: config.eval.clone(),
            pursuers_total: snapshot.pursuers_total,
        }
    }
}
