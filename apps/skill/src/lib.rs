#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod skill;
pub mod store;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::SkillConfig;
pub use domain::{AnimalRecord, GameCatalog, GameRules, GameState, HintKind, HintSet, Phase};
pub use error::GameError;
pub use errors::ErrorCode;
pub use services::{GameSession, GuessOutcome, HintReply, SessionRegistry};
pub use skill::{AnimalSkill, GuessReply, Verdict};
pub use store::{FileSaveStore, MemorySaveStore, SaveStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
