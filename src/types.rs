// Core board types shared by the game model, the search engines and the API layer.

use serde::{Deserialize, Serialize};

/// Grid cell addressed as (row, column), row 0 at the top
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Manhattan distance between two cells
    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

/// The four movement directions.
///
/// Declaration order is the canonical order (up, down, left, right). It is
/// significant: move generation emits candidates in this order, and the
/// search engines break evaluation ties by keeping the first candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all directions in canonical order
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// String representation used in API responses and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parses the representation produced by `as_str`
    pub fn parse(s: &str) -> Option<Direction> {
        match s {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// (row, column) delta of one step in this direction
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The cell reached by one step in this direction
    pub fn apply(&self, pos: &Position) -> Position {
        let (dr, dc) = self.offset();
        Position {
            row: pos.row + dr,
            col: pos.col + dc,
        }
    }
}

/// Why a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    None,
    HunterWon,
    HunterCaptured,
}

/// Search strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Minimax,
    AlphaBeta,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha_beta",
        }
    }
}

/// Request body for POST /api/new_game
#[derive(Deserialize, Debug)]
pub struct NewGameRequest {
    pub strategy: Option<Strategy>,
}

/// Read-only projection of a game state, handed to the presentation layer
/// every turn. Derived, one-way view: the canonical representation is
/// `state::GameState`, but the replay tool can rebuild an equivalent state
/// from a snapshot (consumed power items are simply absent here).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub rows: i32,
    pub cols: i32,
    /// Maze matrix, 1 = open, 0 = blocked
    pub board: Vec<Vec<u8>>,
    pub hunter_pos: Position,
    pub pursuer_positions: Vec<Position>,
    pub pickups: Vec<Position>,
    /// Unconsumed power items only
    pub power_items: Vec<Position>,
    pub score: i64,
    pub pickups_collected: u32,
    pub total_pickups: u32,
    pub moves_made: u32,
    pub turns_total: u32,
    pub terminated: bool,
    pub end_reason: EndReason,
    pub strategy: Strategy,
    pub max_depth: u32,
    pub power_active: bool,
    pub power_turns_remaining: u32,
    pub pursuers_total: u32,
    pub pursuers_remaining: u32,
    pub pursuers_captured: u32,
    /// Probability that a pursuer moves this turn, given the current power state
    pub pursuer_move_probability: f64,
}
