//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is one whole guess.

use crate::error::GameError;
use crate::game::{Command, GameSession, GameStatus, Outcome};
use crate::output::display::print_game_over;
use crate::output::formatters::{colored_keyboard, colored_row};
use crate::wordlists::WordSource;
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: WordSource>(session: &mut GameSession, source: &S) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, source, stdin.lock(), stdout.lock())
}

/// Run the simple interactive mode on arbitrary input and output
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<S, R, W>(
    session: &mut GameSession,
    source: &S,
    mut input: R,
    mut out: W,
) -> io::Result<()>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Wordle Daily - Simple Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    print_intro(session, &mut out)?;

    loop {
        let state = session.state();
        if state.is_over() {
            print_game_over(state, &mut out)?;
            match prompt(&mut input, &mut out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    if let Err(err) = session.new_practice_game(&mut rand::rng()) {
                        writeln!(out, "❌ {}", err.notice())?;
                        return Ok(());
                    }
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }

        let label = format!(
            "Guess {}/{}",
            state.attempts_used() + 1,
            state.max_attempts()
        );
        let Some(line) = prompt(&mut input, &mut out, &label)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.as_str() {
            "" => continue,
            ":quit" | ":q" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":lang" | ":l" => {
                match session.toggle_locale(source) {
                    Ok(locale) => {
                        writeln!(out, "Switched to {locale}\n")?;
                        print_intro(session, &mut out)?;
                    }
                    Err(err) => writeln!(out, "❌ {}\n", err.notice())?,
                }
                continue;
            }
            ":keys" | ":k" => {
                writeln!(
                    out,
                    "{}\n",
                    colored_keyboard(session.locale(), &session.state().letter_hints())
                )?;
                continue;
            }
            ":new" | ":n" => {
                if let Err(err) = session.new_practice_game(&mut rand::rng()) {
                    writeln!(out, "❌ {}", err.notice())?;
                } else {
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                continue;
            }
            _ => {}
        }

        match submit_line(session, &line) {
            Outcome::Scored(outcome) => {
                if let Some(record) = session.state().history().last() {
                    writeln!(out, "  {}", colored_row(&record.guess, &record.feedback))?;
                }
                if outcome.status == GameStatus::InProgress {
                    writeln!(out)?;
                }
            }
            Outcome::Rejected(err) => writeln!(out, "❌ {}\n", err.notice())?,
            _ => {}
        }
    }
}

/// Type a whole line into the session and submit it
fn submit_line(session: &mut GameSession, line: &str) -> Outcome {
    // Start from an empty row; a rejected guess leaves its letters pending
    while session.dispatch(Command::DeleteLetter) == Outcome::Deleted {}

    let letters: Vec<char> = line.chars().collect();
    let expected = session.config().word_length;
    if letters.len() != expected {
        return Outcome::Rejected(GameError::InvalidLength {
            expected,
            actual: letters.len(),
        });
    }

    for &letter in &letters {
        if session.dispatch(Command::PressLetter(letter)) == Outcome::Ignored {
            return Outcome::Rejected(GameError::NotInDictionary(line.to_string()));
        }
    }

    session.dispatch(Command::SubmitGuess)
}

fn print_intro<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    let state = session.state();
    match session.puzzle_number() {
        Some(number) => writeln!(out, "Puzzle #{number} ({})", session.locale())?,
        None => writeln!(out, "Practice puzzle ({})", session.locale())?,
    }
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        state.word_length(),
        state.max_attempts()
    )?;
    writeln!(
        out,
        "Commands: ':lang' switch language, ':keys' keyboard, ':new' practice game, ':quit' exit\n"
    )
}

/// Prompt for a line; `None` on end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
