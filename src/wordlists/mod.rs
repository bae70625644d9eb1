//! Word lists for each locale
//!
//! A locale supplies an ordered target list (one word per day) and a dictionary
//! of accepted guesses. Lists come from a [`WordSource`]: either compiled into
//! the binary ([`EmbeddedSource`]) or read from JSON files on disk
//! ([`DirectorySource`]).

mod embedded;
pub mod loader;

pub use embedded::EmbeddedSource;
pub use loader::{DirectorySource, decode_word_list, encode_word_list};

use crate::core::{Alphabet, CalendarDate, Word, select_index};
use crate::error::{GameError, GameResult};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Language of the word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::English, Self::Spanish];

    /// Directory / identifier name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
        }
    }

    /// The other language
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::English => Self::Spanish,
            Self::Spanish => Self::English,
        }
    }

    /// Letters accepted in this locale
    #[must_use]
    pub const fn alphabet(self) -> Alphabet {
        match self {
            Self::English => Alphabet::LATIN,
            Self::Spanish => Alphabet::SPANISH,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Locale {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "spanish" | "es" | "español" | "espanol" => Ok(Self::Spanish),
            other => Err(GameError::ConfigurationError(format!(
                "unknown locale '{other}' (expected english or spanish)"
            ))),
        }
    }
}

/// Ordered list of daily target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetList {
    words: Vec<Word>,
}

impl TargetList {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// The target word for a given day
    ///
    /// # Errors
    /// Returns `GameError::ConfigurationError` if the list is empty.
    pub fn word_for_day(&self, date: CalendarDate, epoch: CalendarDate) -> GameResult<&Word> {
        let index = select_index(date, epoch, self.words.len())?;
        debug!(%date, %epoch, index, "selected daily target index");
        Ok(&self.words[index])
    }
}

/// Set of accepted guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a (lowercase) guess is accepted
    #[must_use]
    pub fn contains(&self, guess: &str) -> bool {
        self.words.contains(guess)
    }

    /// Look up the stored word for a (lowercase) guess
    #[must_use]
    pub fn get(&self, guess: &str) -> Option<&Word> {
        self.words.get(guess)
    }

    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.words.iter().cloned().collect();
        words.sort_by(|a, b| a.text().cmp(b.text()));
        words
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// A locale's target list and dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    locale: Locale,
    word_length: usize,
    targets: TargetList,
    dictionary: Dictionary,
}

impl WordLists {
    /// Assemble word lists from validated words
    ///
    /// Every target is also added to the dictionary so the answer is always a
    /// legal guess.
    ///
    /// # Errors
    /// Returns `GameError::DataUnavailable` if there are no targets or a word has
    /// the wrong length.
    pub fn from_words(
        locale: Locale,
        word_length: usize,
        targets: Vec<Word>,
        dictionary: impl IntoIterator<Item = Word>,
    ) -> GameResult<Self> {
        if targets.is_empty() {
            return Err(GameError::DataUnavailable {
                locale,
                reason: "target list is empty".to_string(),
            });
        }

        let mut dictionary: Dictionary = dictionary.into_iter().collect();
        for word in &targets {
            dictionary.insert(word.clone());
        }

        if let Some(bad) = targets
            .iter()
            .chain(dictionary.words.iter())
            .find(|w| w.len() != word_length)
        {
            return Err(GameError::DataUnavailable {
                locale,
                reason: format!("'{bad}' is not {word_length} letters long"),
            });
        }

        Ok(Self {
            locale,
            word_length,
            targets: TargetList::new(targets),
            dictionary,
        })
    }

    /// Parse raw strings into word lists
    ///
    /// # Errors
    /// Returns `GameError::DataUnavailable` if any entry is not a valid word for
    /// the locale, or the target list is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::wordlists::{Locale, WordLists};
    ///
    /// let lists = WordLists::from_strs(Locale::English, 5, &["crane"], &["slate"]).unwrap();
    /// assert!(lists.dictionary().contains("crane"));
    /// assert!(lists.dictionary().contains("slate"));
    /// assert_eq!(lists.targets().len(), 1);
    /// ```
    pub fn from_strs(
        locale: Locale,
        word_length: usize,
        targets: &[&str],
        dictionary: &[&str],
    ) -> GameResult<Self> {
        let parse = |list: &[&str]| -> GameResult<Vec<Word>> {
            list.iter()
                .map(|&s| {
                    Word::with_rules(s, word_length, locale.alphabet()).map_err(|e| {
                        GameError::DataUnavailable {
                            locale,
                            reason: e.to_string(),
                        }
                    })
                })
                .collect()
        };

        Self::from_words(locale, word_length, parse(targets)?, parse(dictionary)?)
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn targets(&self) -> &TargetList {
        &self.targets
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

/// Supplier of word lists per locale
pub trait WordSource {
    /// Load the target list and dictionary for `locale`
    ///
    /// # Errors
    /// Returns `GameError::DataUnavailable` if the data cannot be read or does not
    /// consist of `word_length`-letter words of the locale alphabet.
    fn load(&self, locale: Locale, word_length: usize) -> GameResult<WordLists>;
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn load(&self, locale: Locale, word_length: usize) -> GameResult<WordLists> {
        (**self).load(locale, word_length)
    }
}
