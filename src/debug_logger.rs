// Move journal written as JSON lines
//
// Each decision is appended from a spawned task so the request that produced
// it never waits on disk.

use log::{error, info};
use serde::Serialize;
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::types::{Board, Direction};

/// Represents a single journal line
#[derive(Debug, Serialize)]
struct JournalEntry {
    game_id: String,
    turn: i32,
    chosen_move: Direction,
    board: Board,
    timestamp: String,
}

/// Shared journal handle
/// Uses Arc<Mutex<File>> to allow concurrent async writes from multiple games
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Opens the journal, truncating any previous one.
    /// Falls back to a disabled logger if the file cannot be created.
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                info!("Move journal enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create move journal '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a logger that drops everything
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    /// Appends a decision without blocking the caller
    pub fn log_move(&self, game_id: &str, turn: i32, board: Board, chosen_move: Direction) {
        if !self.enabled {
            return;
        }

        let file_handle = Arc::clone(&self.file);
        let entry = JournalEntry {
            game_id: game_id.to_string(),
            turn,
            chosen_move,
            board,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        tokio::spawn(async move {
            Self::write_entry(file_handle, entry).await;
        });
    }

    async fn write_entry(file_handle: Arc<Mutex<Option<File>>>, entry: JournalEntry) {
        let mut file_guard = file_handle.lock().await;
        let file = match file_guard.as_mut() {
            Some(file) => file,
            None => return,
        };

        let line = match serde_json::to_string(&entry) {
            Ok(json) => format!("{}\n", json),
            Err(e) => {
                error!("Failed to serialize journal entry: {}", e);
                return;
            }
        };

        if let Err(e) = file.write_all(line.as_bytes()).await {
            error!("Failed to write journal entry: {}", e);
        } else if let Err(e) = file.flush().await {
            error!("Failed to flush move journal: {}", e);
        }
    }
}
