//! Game state machine
//!
//! A game starts `InProgress` and ends `Won` (a guess equals the target) or
//! `Lost` (the attempt limit is reached without a win). Ended games reject every
//! further guess.

use crate::core::{Feedback, LetterVerdict, Word, evaluate};
use crate::error::{GameError, GameResult};
use crate::wordlists::Dictionary;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    max_attempts: usize,
    history: Vec<GuessRecord>,
    status: GameStatus,
}

impl GameState {
    /// Start a game for `target`
    ///
    /// # Errors
    /// Returns `GameError::ConfigurationError` if `max_attempts` is zero.
    pub fn new(target: Word, max_attempts: usize) -> GameResult<Self> {
        check_attempts(max_attempts)?;
        Ok(Self {
            target,
            max_attempts,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Submit a guess
    ///
    /// The guess is trimmed and lowercased. Rejected guesses leave the state
    /// unchanged; winning and losing are reported through the returned status.
    ///
    /// # Errors
    /// - `InvalidLength` if the guess has the wrong number of letters
    /// - `NotInDictionary` if the guess is not an accepted word
    /// - `GameAlreadyOver` if the game has already been won or lost
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    /// use wordle_daily::game::{GameState, GameStatus};
    /// use wordle_daily::wordlists::Dictionary;
    ///
    /// let dictionary: Dictionary = ["crane", "slate"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut game = GameState::new(Word::new("crane").unwrap(), 6).unwrap();
    ///
    /// let outcome = game.submit_guess("slate", &dictionary).unwrap();
    /// assert_eq!(outcome.status, GameStatus::InProgress);
    ///
    /// let outcome = game.submit_guess("CRANE", &dictionary).unwrap();
    /// assert_eq!(outcome.status, GameStatus::Won);
    /// ```
    pub fn submit_guess(&mut self, raw: &str, dictionary: &Dictionary) -> GameResult<GuessOutcome> {
        let guess = raw.trim().to_lowercase();

        let actual = guess.chars().count();
        if actual != self.word_length() {
            return Err(GameError::InvalidLength {
                expected: self.word_length(),
                actual,
            });
        }

        let Some(word) = dictionary.get(&guess) else {
            return Err(GameError::NotInDictionary(guess));
        };

        if self.status.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let feedback = evaluate(word, &self.target)?;
        self.history.push(GuessRecord {
            guess: word.clone(),
            feedback: feedback.clone(),
        });

        self.status = if *word == self.target {
            GameStatus::Won
        } else if self.history.len() == self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        debug!(
            guess = %word,
            feedback = %feedback.to_code(),
            attempt = self.history.len(),
            status = ?self.status,
            "guess scored"
        );

        Ok(GuessOutcome {
            feedback,
            status: self.status,
        })
    }

    /// Start over with a new target and attempt limit
    ///
    /// # Errors
    /// Returns `GameError::ConfigurationError` if `max_attempts` is zero, in which
    /// case the state is unchanged.
    pub fn reset(&mut self, target: Word, max_attempts: usize) -> GameResult<()> {
        check_attempts(max_attempts)?;
        self.target = target;
        self.max_attempts = max_attempts;
        self.history.clear();
        self.status = GameStatus::InProgress;
        Ok(())
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// The target, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.target)
    }

    pub(crate) const fn target(&self) -> &Word {
        &self.target
    }

    /// Best verdict seen so far for every guessed letter
    ///
    /// `Correct` beats `Present` beats `Absent`, which is how an on-screen
    /// keyboard colours its keys.
    #[must_use]
    pub fn letter_hints(&self) -> BTreeMap<char, LetterVerdict> {
        self.letter_hints_until(|_| self.word_length())
    }

    /// Like [`GameState::letter_hints`], counting only the first
    /// `visible(row)` tiles of each history row
    #[must_use]
    pub fn letter_hints_until(
        &self,
        visible: impl Fn(usize) -> usize,
    ) -> BTreeMap<char, LetterVerdict> {
        let mut hints = BTreeMap::new();
        for (row, record) in self.history.iter().enumerate() {
            let tiles = record.guess.letters().iter().zip(record.feedback.verdicts());
            for (&letter, &verdict) in tiles.take(visible(row)) {
                hints
                    .entry(letter)
                    .and_modify(|best: &mut LetterVerdict| *best = (*best).max(verdict))
                    .or_insert(verdict);
            }
        }
        hints
    }

    /// Emoji grid of every guess, one row per line
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.history
            .iter()
            .map(|record| record.feedback.to_emoji())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn check_attempts(max_attempts: usize) -> GameResult<()> {
    if max_attempts == 0 {
        return Err(GameError::ConfigurationError(
            "max attempts must be at least 1".to_string(),
        ));
    }
    Ok(())
}
