// Library exports for the maze-hunter engine
// This allows the replay tool and integration tests to use the core game logic

pub mod alpha_beta;
pub mod config;
pub mod debug_logger;
pub mod eval;
pub mod game;
pub mod grid;
pub mod handler;
pub mod minimax;
pub mod replay;
pub mod search;
pub mod setup;
pub mod state;
pub mod types;
