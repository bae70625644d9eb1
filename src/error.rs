//! Error taxonomy for the game engine
//!
//! Input errors (`InvalidLength`, `NotInDictionary`) are recoverable: the guess is
//! rejected and the game state is left untouched. `DataUnavailable` is surfaced to
//! the player and can be retried. `ConfigurationError` is fatal at startup and
//! `GameAlreadyOver` indicates the front end ignored a terminal status.

use crate::core::WordError;
use crate::wordlists::Locale;
use thiserror::Error;

/// Errors produced by the game engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("Word lists for {locale} are unavailable: {reason}")]
    DataUnavailable { locale: Locale, reason: String },

    #[error("Expected {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),

    #[error("The game is already over")]
    GameAlreadyOver,
}

impl GameError {
    /// Whether the error was caused by player input rather than the program
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidLength { .. } | Self::NotInDictionary(_))
    }

    /// Short notice shown to the player for this error
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::InvalidLength { .. } => "Not enough letters".to_string(),
            Self::NotInDictionary(_) => "Not in word list".to_string(),
            Self::DataUnavailable { .. } => {
                "Error loading game data. Please try again later.".to_string()
            }
            Self::GameAlreadyOver => "The game is over".to_string(),
            Self::ConfigurationError(msg) => msg.clone(),
        }
    }
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength { expected, actual } => {
                Self::InvalidLength { expected, actual }
            }
            // A string with letters outside the alphabet can never be in the dictionary
            WordError::InvalidCharacters(text) => Self::NotInDictionary(text),
        }
    }
}

/// Convenience alias used throughout the crate
pub type GameResult<T> = Result<T, GameError>;
