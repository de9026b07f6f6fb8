//! Save files on disk.
//!
//! Whole-file UTF-8 writes and reads around the text codec. A failed save
//! may leave a partial file behind; it never touches in-memory state.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::codec::{decode, encode};
use super::error::Result;
use crate::core::state::GameState;

/// Write `state` to `path`, replacing any existing file.
pub fn save(state: &GameState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = encode(state);
    fs::write(path, &text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote save file");
    Ok(())
}

/// Read a state from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<GameState> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read save file");
    decode(&text)
}
