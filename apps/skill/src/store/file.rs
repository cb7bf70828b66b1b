//! JSON file save slot with atomic replace.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64;

use super::SaveStore;
use crate::domain::state::GameState;
use crate::error::GameError;

const DEFAULT_SLOT: &str = "game.json";

/// Stores the game as one JSON document.
///
/// Writes go to a temp file in the same directory which is then renamed over
/// the slot, so readers see either the old or the new document.
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default slot inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_SLOT))
    }

    /// A per-user slot inside `dir`. Keys are hashed so any id maps to a
    /// safe file name.
    pub fn keyed(dir: impl AsRef<Path>, key: &str) -> Self {
        Self::new(dir.as_ref().join(slot_file_name(key)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn slot_file_name(key: &str) -> String {
    format!("game-{:016x}.json", xxh3_64(key.as_bytes()))
}

impl SaveStore for FileSaveStore {
    fn load(&self) -> Result<Option<GameState>, GameError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved game");
                return Ok(None);
            }
            Err(e) => return Err(GameError::persistence(&self.path, e.to_string())),
        };

        let state = serde_json::from_slice(&bytes)
            .map_err(|e| GameError::persistence(&self.path, format!("corrupt save: {e}")))?;
        debug!(path = %self.path.display(), "Loaded saved game");
        Ok(Some(state))
    }

    fn save(&self, state: &GameState) -> Result<(), GameError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| GameError::persistence(&self.path, e.to_string()))?;

        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| GameError::persistence(&self.path, e.to_string()))?;

        let mut tmp =
            NamedTempFile::new_in(&dir).map_err(|e| GameError::persistence(&self.path, e.to_string()))?;
        tmp.write_all(&json)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| GameError::persistence(&self.path, e.to_string()))?;
        tmp.persist(&self.path)
            .map_err(|e| GameError::persistence(&self.path, e.error.to_string()))?;

        debug!(
            path = %self.path.display(),
            guess_count = state.guess_count,
            given_hints = state.given_hints.len(),
            "Saved game"
        );
        Ok(())
    }
}
