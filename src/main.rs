//! Wordle Daily - CLI
//!
//! Daily word game with TUI and line-based modes, plus helpers for checking
//! guesses and inspecting the daily puzzle.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_daily::{
    commands::{ListKind, check_guess, check_result_json, daily_info, export_list, run_simple},
    config::{GameConfig, MAX_ATTEMPTS},
    core::{CalendarDate, DEFAULT_EPOCH, WORD_LENGTH},
    game::GameSession,
    output::{print_check_result, print_daily_info},
    wordlists::{DirectorySource, EmbeddedSource, Locale, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily word-guessing game: one word per day, six tries, English and Spanish",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: english (default) or spanish
    #[arg(short, long, global = true, default_value = "english")]
    locale: Locale,

    /// Directory with <locale>/targets.json and <locale>/dictionary.json
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Play the puzzle of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    date: Option<CalendarDate>,

    /// Date of puzzle #0 (YYYY-MM-DD)
    #[arg(long, global = true, default_value_t = DEFAULT_EPOCH)]
    epoch: CalendarDate,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Letters per word
    #[arg(long, global = true, default_value_t = WORD_LENGTH)]
    word_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the daily puzzle for the selected date
    Daily {
        /// Also print the answer
        #[arg(long)]
        reveal: bool,
    },

    /// Print a word list as JSON
    Export {
        /// Which list to print
        #[arg(short, long, value_enum, default_value = "targets")]
        kind: ListKind,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            word_length: self.word_length,
            max_attempts: self.max_attempts,
            epoch: self.epoch,
            locale: self.locale,
            data_dir: self.data_dir.clone(),
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // Log lines would tear the TUI unless explicitly requested
    if !matches!(command, Commands::Play) || std::env::var_os("RUST_LOG").is_some() {
        init_tracing();
    }

    let config = cli.config();
    config.validate()?;
    let today = cli.date.unwrap_or_else(CalendarDate::today);

    let directory;
    let source: &dyn WordSource = match &config.data_dir {
        Some(dir) => {
            directory = DirectorySource::new(dir);
            &directory
        }
        None => &EmbeddedSource,
    };

    match command {
        Commands::Play => run_play_command(config, source, today),
        Commands::Simple => run_simple_command(config, source, today),
        Commands::Check {
            guess,
            target,
            json,
        } => run_check_command(&guess, &target, &config, json),
        Commands::Daily { reveal } => {
            let session = start_session(config, source, today)?;
            print_daily_info(&daily_info(&session, reveal));
            Ok(())
        }
        Commands::Export { kind } => {
            let lists = source.load(config.locale, config.word_length)?;
            println!("{}", export_list(&lists, kind));
            Ok(())
        }
    }
}

fn start_session(
    config: GameConfig,
    source: &dyn WordSource,
    today: CalendarDate,
) -> Result<GameSession> {
    match GameSession::start(config, &source, today) {
        Ok(session) => Ok(session),
        Err(err) => {
            error!(error = %err, "could not start game");
            bail!("{}", err.notice())
        }
    }
}

fn run_check_command(guess: &str, target: &str, config: &GameConfig, json: bool) -> Result<()> {
    let result = check_guess(guess, target, config.locale, config.word_length)?;

    if json {
        println!("{}", check_result_json(&result)?);
    } else {
        print_check_result(&result);
    }
    Ok(())
}

fn run_simple_command(
    config: GameConfig,
    source: &dyn WordSource,
    today: CalendarDate,
) -> Result<()> {
    let mut session = start_session(config, source, today)?;
    run_simple(&mut session, &source)?;
    Ok(())
}

fn run_play_command(
    config: GameConfig,
    source: &dyn WordSource,
    today: CalendarDate,
) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let session = start_session(config, source, today)?;
    let app = App::new(session, source);
    run_tui(app)
}
