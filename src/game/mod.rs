//! Game state and sessions

mod session;
mod state;

pub use session::{Command, GameSession, Outcome, PuzzleKind};
pub use state::{GameState, GameStatus, GuessOutcome, GuessRecord};
