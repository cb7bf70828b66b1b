//! Error codes for the animal guessing skill.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! an adapter may surface to its platform (logs, error payloads).
//! Add new codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes for the skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Startup
    /// Dataset missing, unreadable, or malformed
    DataLoadError,
    /// Dataset parsed but holds no rows
    EmptyCatalog,
    /// Invalid configuration value
    ConfigError,

    // Turn processing
    /// Save slot could not be read or written
    PersistenceError,
    /// Guess or hint requested after the game ended
    GameNotInProgress,
    /// Guess text rejected before matching
    InvalidGuess,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DataLoadError => "DATA_LOAD_ERROR",
            Self::EmptyCatalog => "EMPTY_CATALOG",
            Self::ConfigError => "CONFIG_ERROR",
            Self::PersistenceError => "PERSISTENCE_ERROR",
            Self::GameNotInProgress => "GAME_NOT_IN_PROGRESS",
            Self::InvalidGuess => "INVALID_GUESS",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
