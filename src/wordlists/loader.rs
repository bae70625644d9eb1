//! Word list loading utilities
//!
//! Word lists are stored as JSON arrays of lowercase strings, one pair of files
//! per locale:
//!
//! ```text
//! <root>/english/targets.json
//! <root>/english/dictionary.json
//! <root>/spanish/targets.json
//! <root>/spanish/dictionary.json
//! ```

use super::{Locale, WordLists, WordSource};
use crate::core::Word;
use crate::error::{GameError, GameResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File holding the ordered daily targets
pub const TARGETS_FILE: &str = "targets.json";

/// File holding the accepted guesses
pub const DICTIONARY_FILE: &str = "dictionary.json";

/// Decode a JSON array of words
///
/// Every entry must be a `word_length`-letter word of the locale alphabet.
///
/// # Errors
/// Returns `GameError::DataUnavailable` on malformed JSON or any invalid entry.
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::{decode_word_list, encode_word_list, Locale};
///
/// let words = decode_word_list(r#"["crane", "slate"]"#, Locale::English, 5).unwrap();
/// assert_eq!(words.len(), 2);
///
/// let json = encode_word_list(&words);
/// assert_eq!(decode_word_list(&json, Locale::English, 5).unwrap(), words);
/// ```
pub fn decode_word_list(json: &str, locale: Locale, word_length: usize) -> GameResult<Vec<Word>> {
    let unavailable = |reason: String| GameError::DataUnavailable { locale, reason };

    let raw: Vec<String> =
        serde_json::from_str(json).map_err(|e| unavailable(format!("malformed word list: {e}")))?;

    raw.into_iter()
        .map(|s| {
            Word::with_rules(s, word_length, locale.alphabet())
                .map_err(|e| unavailable(e.to_string()))
        })
        .collect()
}

/// Encode words as a pretty-printed JSON array
#[must_use]
pub fn encode_word_list(words: &[Word]) -> String {
    let texts: Vec<&str> = words.iter().map(Word::text).collect();
    // Serializing a list of strings cannot fail
    serde_json::to_string_pretty(&texts).unwrap_or_default()
}

/// Word lists read from JSON files under a root directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_list(&self, locale: Locale, file: &str, word_length: usize) -> GameResult<Vec<Word>> {
        let path = self.root.join(locale.name()).join(file);
        debug!(path = %path.display(), "reading word list");

        let content = fs::read_to_string(&path).map_err(|e| GameError::DataUnavailable {
            locale,
            reason: format!("failed to load {}: {e}", path.display()),
        })?;

        decode_word_list(&content, locale, word_length)
    }
}

impl WordSource for DirectorySource {
    fn load(&self, locale: Locale, word_length: usize) -> GameResult<WordLists> {
        let targets = self.read_list(locale, TARGETS_FILE, word_length)?;
        let dictionary = self.read_list(locale, DICTIONARY_FILE, word_length)?;

        info!(
            %locale,
            root = %self.root.display(),
            targets = targets.len(),
            dictionary = dictionary.len(),
            "loaded word lists from disk"
        );

        WordLists::from_words(locale, word_length, targets, dictionary)
    }
}
