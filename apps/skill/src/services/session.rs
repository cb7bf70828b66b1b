//! The game engine: owns the active `GameState`, enforces the rules and
//! persists after every mutation.

use std::sync::Arc;

use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::domain::hints::{HintKind, OUT_OF_HINTS};
use crate::domain::rules::{guess_matches, GameRules};
use crate::domain::state::{GameState, Outcome, Phase};
use crate::domain::GameCatalog;
use crate::error::GameError;
use crate::store::SaveStore;

/// Result of a hint request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintReply {
    /// A newly revealed hint.
    Hint { kind: HintKind, text: String },
    /// Every eligible kind was already given. Nothing changed.
    Exhausted,
}

impl HintReply {
    pub fn text(&self) -> &str {
        match self {
            HintReply::Hint { text, .. } => text,
            HintReply::Exhausted => OUT_OF_HINTS,
        }
    }
}

/// Result of a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Win { answer: String },
    /// Wrong, with `guesses_left` attempts remaining.
    WrongContinue { guesses_left: u32 },
    WrongLost { answer: String },
}

/// One player's game, backed by a save slot.
///
/// Every mutating operation builds the next state, saves it, and only then
/// replaces the in-memory state; a failed save leaves both untouched.
pub struct GameSession<S> {
    catalog: Arc<GameCatalog>,
    store: S,
    rules: GameRules,
    rng: StdRng,
    state: GameState,
}

impl<S: SaveStore> GameSession<S> {
    /// Restore the saved game, or start a new one if the slot is empty.
    pub fn open(catalog: Arc<GameCatalog>, store: S, rules: GameRules) -> Result<Self, GameError> {
        Self::open_with_rng(catalog, store, rules, StdRng::from_os_rng())
    }

    /// Like [`GameSession::open`] with a caller-supplied RNG (seeded in tests).
    pub fn open_with_rng(
        catalog: Arc<GameCatalog>,
        store: S,
        rules: GameRules,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let state = match store.load()? {
            Some(state) => {
                info!(
                    phase = ?state.phase(),
                    guess_count = state.guess_count,
                    given_hints = state.given_hints.len(),
                    "Resumed saved game"
                );
                state
            }
            None => {
                let state = fresh_state(&catalog, &mut rng)?;
                store.save(&state)?;
                info!(hints = state.hints.kinds().len(), "No saved game, started a new one");
                state
            }
        };

        Ok(Self {
            catalog,
            store,
            rules,
            rng,
            state,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Discard the current game, whatever its phase, and start over.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        let next = fresh_state(&self.catalog, &mut self.rng)?;
        self.commit(next)?;
        info!(hints = self.state.hints.kinds().len(), "Started new game");
        Ok(())
    }

    /// Reveal one not-yet-given hint chosen uniformly at random.
    pub fn next_hint(&mut self) -> Result<HintReply, GameError> {
        self.state.require_in_progress()?;

        let available: Vec<(HintKind, String)> = self
            .state
            .available_hints()
            .into_iter()
            .filter_map(|kind| self.state.hints.render(kind).map(|text| (kind, text)))
            .collect();

        let Some((kind, text)) = available.choose(&mut self.rng).cloned() else {
            debug!(given_hints = self.state.given_hints.len(), "Hints exhausted");
            return Ok(HintReply::Exhausted);
        };

        let mut next = self.state.clone();
        next.given_hints.push(kind);
        self.commit(next)?;

        debug!(hint_kind = %kind, remaining = available.len() - 1, "Gave hint");
        Ok(HintReply::Hint { kind, text })
    }

    /// Check a guess against the secret.
    ///
    /// A match ends the game without counting the guess. A miss counts, and
    /// the game is lost once the budget is spent.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        self.state.require_in_progress()?;
        if text.trim().is_empty() {
            return Err(GameError::invalid_guess("guess is blank"));
        }

        let mut next = self.state.clone();
        if guess_matches(&next.answer, text) {
            next.outcome = Some(Outcome::Won);
            self.commit(next)?;
            info!(guess_count = self.state.guess_count, "Player won");
            return Ok(GuessOutcome::Win {
                answer: self.state.answer.clone(),
            });
        }

        next.guess_count = next.guess_count.saturating_add(1);
        if self.rules.is_exhausted(next.guess_count) {
            next.outcome = Some(Outcome::Lost);
            self.commit(next)?;
            info!(guess_count = self.state.guess_count, "Player lost");
            return Ok(GuessOutcome::WrongLost {
                answer: self.state.answer.clone(),
            });
        }

        self.commit(next)?;
        let guesses_left = self.rules.max_guesses - self.state.guess_count;
        debug!(guess_count = self.state.guess_count, guesses_left, "Wrong guess");
        Ok(GuessOutcome::WrongContinue { guesses_left })
    }

    /// The secret name. Valid in any phase and never changes state.
    pub fn reveal_answer(&self) -> &str {
        &self.state.answer
    }

    /// Write the current state to the slot.
    pub fn save(&self) -> Result<(), GameError> {
        self.store.save(&self.state)
    }

    /// Replace the in-memory state with the slot's; an empty slot starts a
    /// new game.
    pub fn load(&mut self) -> Result<(), GameError> {
        match self.store.load()? {
            Some(state) => {
                self.state = state;
                Ok(())
            }
            None => self.start_new_game(),
        }
    }

    fn commit(&mut self, next: GameState) -> Result<(), GameError> {
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }
}

fn fresh_state(catalog: &GameCatalog, rng: &mut StdRng) -> Result<GameState, GameError> {
    let record = catalog.sample_record(rng)?;
    let hints = catalog.build_hints(record)?;
    Ok(GameState::new(record.name.clone(), hints))
}
