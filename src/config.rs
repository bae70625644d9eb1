//! Game configuration

use crate::core::{CalendarDate, DEFAULT_EPOCH, WORD_LENGTH};
use crate::error::{GameError, GameResult};
use crate::wordlists::Locale;
use std::path::PathBuf;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Settings shared by every game in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
    pub epoch: CalendarDate,
    pub locale: Locale,
    /// Read word lists from this directory instead of the embedded ones
    pub data_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_attempts: MAX_ATTEMPTS,
            epoch: DEFAULT_EPOCH,
            locale: Locale::default(),
            data_dir: None,
        }
    }
}

impl GameConfig {
    /// Check the configuration is playable
    ///
    /// # Errors
    /// Returns `GameError::ConfigurationError` if the word length or attempt limit
    /// is zero.
    pub fn validate(&self) -> GameResult<()> {
        if self.word_length == 0 {
            return Err(GameError::ConfigurationError(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(GameError::ConfigurationError(
                "max attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
