//! Adapter facade: the four entry points a voice platform calls, returning
//! text ready to be spoken.

use tracing::debug;

use crate::error::GameError;
use crate::services::session::{GameSession, GuessOutcome};
use crate::store::SaveStore;

pub const GAME_OVER: &str = "The game is over. Ask for a new game to play again.";
pub const NOT_UNDERSTOOD: &str = "Sorry, I didn't catch your guess.";
pub const WRONG_GUESS: &str = "That's not it.";

/// What happened to a guess, as the platform needs to know it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win,
    WrongContinue,
    WrongLost,
    /// The game had already ended; nothing changed.
    GameOver,
    /// The guess was blank; nothing changed.
    NotUnderstood,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReply {
    pub verdict: Verdict,
    pub spoken: String,
}

pub struct AnimalSkill<S> {
    session: GameSession<S>,
}

impl<S: SaveStore> AnimalSkill<S> {
    pub fn new(session: GameSession<S>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Start over and greet the player with a first hint.
    pub fn on_new_game_requested(&mut self) -> Result<String, GameError> {
        self.session.start_new_game()?;
        Ok(self.session.next_hint()?.text().to_owned())
    }

    /// A wrong guess that leaves attempts is followed by the next hint.
    pub fn on_guess(&mut self, candidate: &str) -> Result<GuessReply, GameError> {
        let outcome = match self.session.submit_guess(candidate) {
            Ok(outcome) => outcome,
            Err(GameError::NotInProgress { phase }) => {
                debug!(?phase, "Guess after game end");
                return Ok(reply(Verdict::GameOver, GAME_OVER.to_owned()));
            }
            Err(GameError::InvalidGuess { detail }) => {
                debug!(%detail, "Guess rejected");
                return Ok(reply(Verdict::NotUnderstood, NOT_UNDERSTOOD.to_owned()));
            }
            Err(e) => return Err(e),
        };

        Ok(match outcome {
            GuessOutcome::Win { answer } => {
                reply(Verdict::Win, format!("Correct! The animal was {answer}."))
            }
            GuessOutcome::WrongLost { answer } => reply(
                Verdict::WrongLost,
                format!("Out of guesses. The animal was {answer}."),
            ),
            GuessOutcome::WrongContinue { .. } => {
                let hint = self.session.next_hint()?;
                reply(
                    Verdict::WrongContinue,
                    format!("{WRONG_GUESS} {}", hint.text()),
                )
            }
        })
    }

    pub fn on_hint_requested(&mut self) -> Result<String, GameError> {
        match self.session.next_hint() {
            Ok(hint) => Ok(hint.text().to_owned()),
            Err(GameError::NotInProgress { .. }) => Ok(GAME_OVER.to_owned()),
            Err(e) => Err(e),
        }
    }

    pub fn on_give_up(&self) -> String {
        format!("The animal was {}.", self.session.reveal_answer())
    }
}

fn reply(verdict: Verdict, spoken: String) -> GuessReply {
    GuessReply { verdict, spoken }
}
