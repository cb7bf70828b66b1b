//! Domain layer: pure game logic types and helpers.

pub mod animal;
pub mod catalog;
pub mod hints;
pub mod rules;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_catalog;
#[cfg(test)]
mod tests_props_hints;

// Re-exports for ergonomics
pub use animal::AnimalRecord;
pub use catalog::GameCatalog;
pub use hints::{HintKind, HintSet, OUT_OF_HINTS};
pub use rules::{guess_matches, GameRules, MAX_GUESSES, MAX_SYNONYMS};
pub use state::{GameState, Outcome, Phase};
