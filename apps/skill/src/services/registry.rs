//! Keyed sessions for more than one player.
//!
//! Each key maps to its own save slot and its own mutex. A turn holds the
//! key's mutex across the whole load-mutate-save cycle, so interleaved turns
//! for one player cannot lose updates while different players never contend.
//! A key's mutex is dropped from the map once no turn holds it.

use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::rules::GameRules;
use crate::domain::GameCatalog;
use crate::error::GameError;
use crate::services::session::GameSession;
use crate::skill::AnimalSkill;
use crate::store::FileSaveStore;

pub struct SessionRegistry {
    catalog: Arc<GameCatalog>,
    save_dir: PathBuf,
    rules: GameRules,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SessionRegistry {
    pub fn new(catalog: Arc<GameCatalog>, save_dir: impl Into<PathBuf>, rules: GameRules) -> Self {
        Self {
            catalog,
            save_dir: save_dir.into(),
            rules,
            locks: DashMap::new(),
        }
    }

    fn lock_for(&self, key: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(key.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Number of keys with a turn in flight.
    pub fn active_keys(&self) -> usize {
        self.locks.len()
    }

    fn locked<T>(&self, key: &str, turn: impl FnOnce() -> Result<T, GameError>) -> Result<T, GameError> {
        let lock = self.lock_for(key);
        let result = {
            let _guard = lock.lock();
            turn()
        };
        drop(lock);
        // Only the map's own handle left: no turn is running or waiting.
        self.locks.remove_if(key, |_, lock| Arc::strong_count(lock) == 1);
        result
    }

    /// Run one turn against `key`'s session. The session is loaded from its
    /// slot (or started fresh) under the key's lock.
    pub fn with_session<T>(
        &self,
        key: &str,
        f: impl FnOnce(&mut GameSession<FileSaveStore>) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        self.locked(key, || {
            let mut session = self.open(key)?;
            f(&mut session)
        })
    }

    /// Same as [`SessionRegistry::with_session`], through the adapter facade.
    pub fn with_skill<T>(
        &self,
        key: &str,
        f: impl FnOnce(&mut AnimalSkill<FileSaveStore>) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        self.locked(key, || {
            let mut skill = AnimalSkill::new(self.open(key)?);
            f(&mut skill)
        })
    }

    fn open(&self, key: &str) -> Result<GameSession<FileSaveStore>, GameError> {
        let store = FileSaveStore::keyed(&self.save_dir, key);
        debug!(slot = %store.path().display(), "Opening keyed session");
        GameSession::open(Arc::clone(&self.catalog), store, self.rules)
    }
}
