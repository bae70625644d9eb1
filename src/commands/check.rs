//! Guess checking command
//!
//! Scores one guess against an arbitrary target without a dictionary lookup.

use crate::core::{Feedback, Word, evaluate};
use crate::error::GameResult;
use crate::wordlists::Locale;
use serde::Serialize;

/// Result of scoring a guess
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
    #[serde(skip)]
    pub guess_word: Word,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not a `word_length`-letter word of the
/// locale alphabet.
pub fn check_guess(
    guess: &str,
    target: &str,
    locale: Locale,
    word_length: usize,
) -> GameResult<CheckResult> {
    let guess_word = Word::with_rules(guess, word_length, locale.alphabet())?;
    let target_word = Word::with_rules(target, word_length, locale.alphabet())?;
    let feedback = evaluate(&guess_word, &target_word)?;

    Ok(CheckResult {
        guess: guess_word.text().to_string(),
        target: target_word.text().to_string(),
        feedback,
        guess_word,
    })
}

/// Render a check result as JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn check_result_json(result: &CheckResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
