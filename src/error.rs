//! Error types
//!
//! Gameplay itself never fails; it clamps. Errors only surface at the edges:
//! configuration, lifecycle misuse and settings I/O.

use std::io;
use std::path::PathBuf;

use crate::sim::GamePhase;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Unknown difficulty: {0} (expected easy, normal or hard)")]
    UnknownDifficulty(String),

    #[error("Invalid difficulty config: {0}")]
    InvalidConfig(String),

    #[error("Cannot {action} while session is {phase:?}")]
    InvalidTransition { action: &'static str, phase: GamePhase },

    #[error("Failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
