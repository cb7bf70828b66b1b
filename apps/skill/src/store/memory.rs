use parking_lot::Mutex;

use super::SaveStore;
use crate::domain::state::GameState;
use crate::error::GameError;

/// Non-durable slot for tests and embedders that keep state in memory.
#[derive(Debug, Default)]
pub struct MemorySaveStore {
    slot: Mutex<Option<GameState>>,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            slot: Mutex::new(Some(state)),
        }
    }

    /// Copy of what is currently saved.
    pub fn snapshot(&self) -> Option<GameState> {
        self.slot.lock().clone()
    }
}

impl SaveStore for MemorySaveStore {
    fn load(&self) -> Result<Option<GameState>, GameError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, state: &GameState) -> Result<(), GameError> {
        *self.slot.lock() = Some(state.clone());
        Ok(())
    }
}
