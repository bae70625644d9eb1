//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterVerdict, Word};
use crate::wordlists::Locale;
use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;

/// On-screen keyboard rows for a locale
#[must_use]
pub fn keyboard_layout(locale: Locale) -> [&'static str; 3] {
    match locale {
        Locale::English => ["qwertyuiop", "asdfghjkl", "zxcvbnm"],
        Locale::Spanish => ["qwertyuiop", "asdfghjklñ", "zxcvbnm"],
    }
}

/// A single letter tile coloured by its verdict
#[must_use]
pub fn colored_tile(letter: char, verdict: Option<LetterVerdict>) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match verdict {
        Some(LetterVerdict::Correct) => text.black().on_green().bold(),
        Some(LetterVerdict::Present) => text.black().on_yellow().bold(),
        Some(LetterVerdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| colored_tile(letter, Some(verdict)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The keyboard with every key coloured by its best known verdict
#[must_use]
pub fn colored_keyboard(locale: Locale, hints: &BTreeMap<char, LetterVerdict>) -> String {
    keyboard_layout(locale)
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|key| colored_tile(key, hints.get(&key).copied()).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent * 2), keys.join(""))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human label for a verdict
#[must_use]
pub const fn verdict_label(verdict: LetterVerdict) -> &'static str {
    match verdict {
        LetterVerdict::Correct => "correct",
        LetterVerdict::Present => "wrong location",
        LetterVerdict::Absent => "not in word",
    }
}
