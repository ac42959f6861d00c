// Turn logging module for asynchronous game state logging
//
// This module provides fire-and-forget async logging to avoid blocking
// the turn request/response cycle. Each applied turn is written to a JSONL
// file together with the search engine's decision metrics.

use log::error;
use serde::Serialize;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::search::SearchReport;
use crate::types::{Direction, GameSnapshot, Strategy};

/// Represents a single turn log entry
#[derive(Debug, Serialize)]
struct TurnLogEntry {
    turn: u32,
    strategy: String,
    chosen_move: String,
    value: f64,
    nodes_explored: u64,
    nodes_pruned: u64,
    state: GameSnapshot,
    timestamp: String,
}

/// Shared turn logger state
/// Uses Arc<Mutex<File>> to allow concurrent async writes from multiple tasks
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a logger writing to the given path (truncating an existing
    /// file). Falls back to a disabled logger if the file cannot be created.
    pub fn new(log_file_path: &str) -> Self {
        match std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Turn logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(File::from_std(file)))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create turn log file '{}': {}", log_file_path, e);
                DebugLogger {
                    file: Arc::new(Mutex::new(None)),
                    enabled: false,
                }
            }
        }
    }

    /// Creates a disabled logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    /// Logs an applied turn asynchronously (fire-and-forget)
    /// This spawns a tokio task that writes to the file without blocking
    pub fn log_turn(
        &self,
        turn: u32,
        strategy: Strategy,
        chosen_move: Direction,
        report: &SearchReport,
        state: GameSnapshot,
    ) {
        if !self.enabled {
            return;
        }

        let file_handle = self.file.clone();
        let entry = TurnLogEntry {
            turn,
            strategy: strategy.as_str().to_string(),
            chosen_move: chosen_move.as_str().to_string(),
            value: report.value,
            nodes_explored: report.nodes_explored,
            nodes_pruned: report.nodes_pruned,
            state,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        // Spawn fire-and-forget task
        tokio::spawn(async move {
            Self::write_entry(file_handle, entry).await;
        });
    }

    /// Internal async function that performs the actual file write
    async fn write_entry(file_handle: Arc<Mutex<Option<File>>>, entry: TurnLogEntry) {
        let mut file_guard = file_handle.lock().await;

        if let Some(file) = file_guard.as_mut() {
            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    let line_with_newline = format!("{}\n", json_line);
                    if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                        error!("Failed to write turn log entry: {}", e);
                    } else if let Err(e) = file.flush().await {
                        error!("Failed to flush turn log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize turn log entry: {}", e);
                }
            }
        }
    }
}
