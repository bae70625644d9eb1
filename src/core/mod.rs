//! Core domain types for the game
//!
//! Pure, deterministic building blocks: words, guess scoring and daily target
//! selection. Nothing in here performs I/O apart from reading the system clock
//! in [`CalendarDate::today`].

mod calendar;
mod verdict;
mod word;

pub use calendar::{CalendarDate, DEFAULT_EPOCH, days_between, select_index};
pub use verdict::{Feedback, LetterVerdict, evaluate};
pub use word::{Alphabet, WORD_LENGTH, Word, WordError};
