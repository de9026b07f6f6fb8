//! Error types raised while saving or loading a game.

use thiserror::Error;

/// Errors surfaced by the save-file store and codec.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed save file: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
