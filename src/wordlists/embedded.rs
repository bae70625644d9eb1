//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

use super::{Locale, WordLists, WordSource};
use crate::error::GameResult;
use tracing::info;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/word_lists.rs"));
}

pub use generated::{ENGLISH_DICTIONARY, ENGLISH_TARGETS, SPANISH_DICTIONARY, SPANISH_TARGETS};

/// Word lists bundled with the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Raw `(targets, dictionary)` strings for a locale
    #[must_use]
    pub const fn raw(locale: Locale) -> (&'static [&'static str], &'static [&'static str]) {
        match locale {
            Locale::English => (ENGLISH_TARGETS, ENGLISH_DICTIONARY),
            Locale::Spanish => (SPANISH_TARGETS, SPANISH_DICTIONARY),
        }
    }
}

impl WordSource for EmbeddedSource {
    fn load(&self, locale: Locale, word_length: usize) -> GameResult<WordLists> {
        let (targets, dictionary) = Self::raw(locale);
        let lists = WordLists::from_strs(locale, word_length, targets, dictionary)?;

        info!(
            %locale,
            targets = lists.targets().len(),
            dictionary = lists.dictionary().len(),
            "loaded embedded word lists"
        );

        Ok(lists)
    }
}
