//! Word representation
//!
//! A Word is a fixed-length, lowercase sequence of letters drawn from a locale
//! alphabet. Letters are stored as `char`s so that alphabets beyond ASCII (the
//! Spanish `ñ`) score exactly like any other letter.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Default number of letters in a word
pub const WORD_LENGTH: usize = 5;

/// Set of letters a word may be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    extra: &'static [char],
}

impl Alphabet {
    /// Plain `a`-`z`
    pub const LATIN: Self = Self { extra: &[] };

    /// `a`-`z` plus `ñ`
    pub const SPANISH: Self = Self { extra: &['ñ'] };

    /// Check whether a lowercase letter belongs to this alphabet
    #[inline]
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        letter.is_ascii_lowercase() || self.extra.contains(&letter)
    }
}

/// A validated word
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacters(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::InvalidCharacters(text) => {
                write!(f, "Word '{text}' contains invalid characters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a standard 5-letter word over `a`-`z`
    ///
    /// # Errors
    /// Returns `WordError` if the length is not 5 or a character is not a letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_rules(text, WORD_LENGTH, Alphabet::LATIN)
    }

    /// Create a word of a given length over a given alphabet
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the length differs from `length` or a character is
    /// outside `alphabet`.
    pub fn with_rules(
        text: impl Into<String>,
        length: usize,
        alphabet: Alphabet,
    ) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();
        let letters: Vec<char> = text.chars().collect();

        if letters.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: letters.len(),
            });
        }

        if !letters.iter().all(|&c| alphabet.contains(c)) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Count occurrences of each letter
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

// Equality and hashing go through the text only, so that `Word: Borrow<str>`
// lets a dictionary be queried with a raw guess.
impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
