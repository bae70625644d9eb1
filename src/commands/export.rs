//! Word list export command
//!
//! Prints a locale's lists in the same JSON format the loader reads, so the
//! embedded lists can be dumped, edited and loaded back with `--data-dir`.

use crate::wordlists::{WordLists, encode_word_list};
use clap::ValueEnum;

/// Which list to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Targets,
    Dictionary,
}

/// Encode one of the lists as JSON
///
/// Targets keep their daily order; the dictionary is sorted alphabetically.
#[must_use]
pub fn export_list(lists: &WordLists, kind: ListKind) -> String {
    match kind {
        ListKind::Targets => encode_word_list(lists.targets().as_slice()),
        ListKind::Dictionary => encode_word_list(&lists.dictionary().sorted()),
    }
}
