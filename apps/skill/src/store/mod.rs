//! Persistence seam for the single save slot.

pub mod file;
pub mod memory;

pub use file::FileSaveStore;
pub use memory::MemorySaveStore;

use crate::domain::state::GameState;
use crate::error::GameError;

/// A save slot holding at most one `GameState`.
///
/// `load` returns `Ok(None)` when nothing has been saved yet; any other
/// failure is an error. `save` must leave the previous state intact when it
/// fails.
pub trait SaveStore {
    fn load(&self) -> Result<Option<GameState>, GameError>;
    fn save(&self, state: &GameState) -> Result<(), GameError>;
}

impl<T: SaveStore + ?Sized> SaveStore for &T {
    fn load(&self) -> Result<Option<GameState>, GameError> {
        (**self).load()
    }

    fn save(&self, state: &GameState) -> Result<(), GameError> {
        (**self).save(state)
    }
}
