use serde::{Deserialize, Serialize};

use crate::domain::hints::{HintKind, HintSet};
use crate::error::GameError;

/// Game progression phases.
///
/// "No game" is not a phase: it is the absence of a saved `GameState`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Guesses and hint requests are accepted.
    InProgress,
    /// The player named the animal.
    Won,
    /// The attempt budget ran out.
    Lost,
}

/// How a finished game ended. Persisted so a finished game reloads as finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
}

/// The single active game: the persisted record and the source of truth
/// between turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Secret animal name.
    pub answer: String,
    pub hints: HintSet,
    /// Wrong guesses so far.
    pub guess_count: u32,
    /// Kinds already revealed, in reveal order.
    #[serde(default)]
    pub given_hints: Vec<HintKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl GameState {
    pub fn new(answer: impl Into<String>, hints: HintSet) -> Self {
        Self {
            answer: answer.into(),
            hints,
            guess_count: 0,
            given_hints: Vec::new(),
            outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            None => Phase::InProgress,
            Some(Outcome::Won) => Phase::Won,
            Some(Outcome::Lost) => Phase::Lost,
        }
    }

    /// Present-valued kinds that have not been revealed yet, in canonical order.
    pub fn available_hints(&self) -> Vec<HintKind> {
        self.hints
            .kinds()
            .into_iter()
            .filter(|kind| !self.given_hints.contains(kind))
            .collect()
    }

    pub fn require_in_progress(&self) -> Result<(), GameError> {
        match self.phase() {
            Phase::InProgress => Ok(()),
            phase => Err(GameError::not_in_progress(phase)),
        }
    }
}
