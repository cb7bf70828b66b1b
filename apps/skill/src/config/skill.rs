//! Environment-driven configuration.
//!
//! | variable                  | default            |
//! |---------------------------|--------------------|
//! | `ANIMAL_GAME_DATASET`     | `data/animals.csv` |
//! | `ANIMAL_GAME_SAVE_DIR`    | `.animal-game`     |
//! | `ANIMAL_GAME_MAX_GUESSES` | `8`                |

use std::env;
use std::path::PathBuf;

use crate::domain::rules::{GameRules, MAX_GUESSES};
use crate::error::GameError;

pub const DATASET_VAR: &str = "ANIMAL_GAME_DATASET";
pub const SAVE_DIR_VAR: &str = "ANIMAL_GAME_SAVE_DIR";
pub const MAX_GUESSES_VAR: &str = "ANIMAL_GAME_MAX_GUESSES";

const DEFAULT_DATASET: &str = "data/animals.csv";
const DEFAULT_SAVE_DIR: &str = ".animal-game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillConfig {
    pub dataset_path: PathBuf,
    pub save_dir: PathBuf,
    pub max_guesses: u32,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            max_guesses: MAX_GUESSES,
        }
    }
}

impl SkillConfig {
    /// Defaults overridden by whichever variables are set and non-empty.
    pub fn from_env() -> Result<Self, GameError> {
        let mut config = Self::default();
        if let Some(path) = non_empty_var(DATASET_VAR) {
            config.dataset_path = PathBuf::from(path);
        }
        if let Some(dir) = non_empty_var(SAVE_DIR_VAR) {
            config.save_dir = PathBuf::from(dir);
        }
        if let Some(raw) = non_empty_var(MAX_GUESSES_VAR) {
            config.max_guesses = parse_max_guesses(&raw)?;
        }
        Ok(config)
    }

    pub fn with_max_guesses(mut self, max_guesses: u32) -> Result<Self, GameError> {
        if max_guesses == 0 {
            return Err(GameError::config("max guesses must be at least 1"));
        }
        self.max_guesses = max_guesses;
        Ok(self)
    }

    pub fn rules(&self) -> GameRules {
        GameRules::default().with_max_guesses(self.max_guesses)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_max_guesses(raw: &str) -> Result<u32, GameError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(GameError::config(format!(
            "{MAX_GUESSES_VAR} must be a positive integer, got {raw:?}"
        ))),
    }
}
