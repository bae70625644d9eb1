//! Wordle Daily
//!
//! A daily word-guessing game: one target word per calendar day, six attempts,
//! and per-letter feedback that handles repeated letters exactly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::config::GameConfig;
//! use wordle_daily::core::CalendarDate;
//! use wordle_daily::game::{Command, GameSession, Outcome};
//! use wordle_daily::wordlists::EmbeddedSource;
//!
//! let today: CalendarDate = "2024-05-01".parse().unwrap();
//! let mut session = GameSession::start(GameConfig::default(), &EmbeddedSource, today).unwrap();
//!
//! for letter in "crane".chars() {
//!     session.dispatch(Command::PressLetter(letter));
//! }
//! match session.dispatch(Command::SubmitGuess) {
//!     Outcome::Scored(outcome) => println!("{}", outcome.feedback),
//!     Outcome::Rejected(err) => println!("{}", err.notice()),
//!     _ => {}
//! }
//! ```

// Core domain types
pub mod core;

// Errors
pub mod error;

// Settings
pub mod config;

// Word lists
pub mod wordlists;

// Game state machine and sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
