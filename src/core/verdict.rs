//! Guess evaluation
//!
//! Each letter of a guess receives a verdict relative to the target:
//! - `Correct` = right letter, right position
//! - `Present` = letter occurs in the target at another position
//! - `Absent`  = letter not in the target (or every occurrence already claimed)

use super::Word;
use crate::error::{GameError, GameResult};
use serde::Serialize;
use std::fmt;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Emoji tile used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Parse a verdict from its code or emoji
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Verdicts for every position of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Feedback(Vec<LetterVerdict>);

impl Feedback {
    /// Wrap a verdict sequence
    #[must_use]
    pub const fn new(verdicts: Vec<LetterVerdict>) -> Self {
        Self(verdicts)
    }

    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every position is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Number of positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }

    /// Render as a string like "GY-GY"
    #[must_use]
    pub fn to_code(&self) -> String {
        self.0.iter().map(|v| v.code()).collect()
    }

    /// Parse from codes or emojis, e.g. "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Feedback::parse("GXG").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.chars()
            .map(LetterVerdict::from_code)
            .collect::<Option<Vec<_>>>()
            .filter(|v| !v.is_empty())
            .map(Self)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score `guess` against `target`
///
/// Exact matches are resolved first and consume their letter; the remaining
/// positions then claim any unconsumed occurrences left to right. A letter is
/// therefore never reported `Present`/`Correct` more often than it occurs in
/// the target.
///
/// # Errors
/// Returns `GameError::InvalidLength` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_daily::core::{evaluate, Word, LetterVerdict::*};
///
/// let guess = Word::new("sheep").unwrap();
/// let target = Word::new("speed").unwrap();
/// let feedback = evaluate(&guess, &target).unwrap();
///
/// assert_eq!(feedback.verdicts(), &[Correct, Absent, Correct, Correct, Present]);
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> GameResult<Feedback> {
    if guess.len() != target.len() {
        return Err(GameError::InvalidLength {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let mut result = vec![LetterVerdict::Absent; guess.len()];
    let mut available = target.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            result[i] = LetterVerdict::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from what is left
    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterVerdict::Present;
            *count -= 1;
        }
    }

    Ok(Feedback(result))
}

#[cfg(test)]
mod tests {
    use super::LetterVerdict::{Absent, Correct, Present};
    use super::*;

    fn score(guess: &str, target: &str) -> Vec<LetterVerdict> {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        evaluate(&guess, &target).unwrap().verdicts().to_vec()
    }

    #[test]
    fn all_absent() {
        assert_eq!(score("abcde", "fghij"), vec![Absent; 5]);
    }

    #[test]
    fn all_correct() {
        let feedback = evaluate(
            &Word::new("crane").unwrap(),
            &Word::new("crane").unwrap(),
        )
        .unwrap();
        assert!(feedback.is_win());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn erase_against_speed() {
        // target counts {s:1, p:1, e:2, d:1}; no exact matches, so both e's
        // and the s are claimed as present
        assert_eq!(
            score("erase", "speed"),
            vec![Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn sheep_against_speed() {
        // both e's are exact, so the only remaining claimable letter is p
        assert_eq!(
            score("sheep", "speed"),
            vec![Correct, Absent, Correct, Correct, Present]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_misplaced() {
        // ROBOT vs FLOOR: first o is present, second o is exact
        assert_eq!(
            score("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn surplus_duplicates_are_absent() {
        // both l's of the target are consumed by exact matches
        assert_eq!(
            score("lolly", "hello"),
            vec![Absent, Present, Correct, Correct, Absent]
        );
        assert_eq!(
            score("geese", "those"),
            vec![Absent, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn classic_example() {
        assert_eq!(
            score("crane", "slate"),
            vec![Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let guess = Word::with_rules("cranes", 6, crate::core::Alphabet::LATIN).unwrap();
        let target = Word::new("crane").unwrap();
        assert_eq!(
            evaluate(&guess, &target),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn counts_never_exceed_target_occurrences() {
        let words = [
            "speed", "erase", "sheep", "eerie", "geese", "crane", "abbey", "kayak", "level",
            "puppy", "tatty", "robot", "floor", "llama", "hello", "mamma",
        ];
        for g in words {
            for t in words {
                let guess = Word::new(g).unwrap();
                let target = Word::new(t).unwrap();
                let feedback = evaluate(&guess, &target).unwrap();

                let exact = g.chars().zip(t.chars()).filter(|(a, b)| a == b).count();
                assert_eq!(feedback.count(Correct), exact, "{g} vs {t}");

                for letter in g.chars() {
                    let claimed = guess
                        .letters()
                        .iter()
                        .zip(feedback.verdicts())
                        .filter(|&(&l, &v)| l == letter && v != Absent)
                        .count();
                    let occurs = t.chars().filter(|&c| c == letter).count();
                    assert!(claimed <= occurs, "{g} vs {t}: '{letter}' over-counted");
                }
            }
        }
    }

    #[test]
    fn feedback_codes() {
        let feedback = Feedback::new(vec![Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_code(), "GY-GY");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(Feedback::parse("gy_gy"), Some(feedback));
        assert_eq!(Feedback::parse(""), None);
    }
}
