use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::state::Phase;
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Failed to load dataset {}: {detail}", path.display())]
    DataLoad { path: PathBuf, detail: String },
    #[error("Dataset {} has no rows", path.display())]
    EmptyCatalog { path: PathBuf },
    #[error("Save slot {} failed: {detail}", path.display())]
    Persistence { path: PathBuf, detail: String },
    #[error("Game is not in progress (phase: {phase:?})")]
    NotInProgress { phase: Phase },
    #[error("Invalid guess: {detail}")]
    InvalidGuess { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl GameError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::DataLoad { .. } => ErrorCode::DataLoadError,
            GameError::EmptyCatalog { .. } => ErrorCode::EmptyCatalog,
            GameError::Persistence { .. } => ErrorCode::PersistenceError,
            GameError::NotInProgress { .. } => ErrorCode::GameNotInProgress,
            GameError::InvalidGuess { .. } => ErrorCode::InvalidGuess,
            GameError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn data_load(path: impl AsRef<Path>, detail: impl Into<String>) -> Self {
        Self::DataLoad {
            path: path.as_ref().to_path_buf(),
            detail: detail.into(),
        }
    }

    pub fn empty_catalog(path: impl AsRef<Path>) -> Self {
        Self::EmptyCatalog {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn persistence(path: impl AsRef<Path>, detail: impl Into<String>) -> Self {
        Self::Persistence {
            path: path.as_ref().to_path_buf(),
            detail: detail.into(),
        }
    }

    pub fn not_in_progress(phase: Phase) -> Self {
        Self::NotInProgress { phase }
    }

    pub fn invalid_guess(detail: impl Into<String>) -> Self {
        Self::InvalidGuess {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}
