//! TUI application state and logic

use crate::game::{Command, GameSession, GameStatus, Outcome};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Delay between flipping consecutive tiles of a guess
pub const FLIP_STEP: Duration = Duration::from_millis(250);

/// Delay between highlighting consecutive tiles of a winning row
pub const DANCE_STEP: Duration = Duration::from_millis(100);

/// How long a shaken row stays highlighted
const SHAKE_DURATION: Duration = Duration::from_millis(400);

/// Default lifetime of a notice
const NOTICE_DURATION: Duration = Duration::from_millis(1000);

const LOCALE_NOTICE_DURATION: Duration = Duration::from_millis(2000);
const WIN_NOTICE_DURATION: Duration = Duration::from_millis(5000);

/// Poll interval of the event loop
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    /// `None` keeps the message until the next game
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Progress of the tile-by-tile reveal of the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// History index of the row being revealed
    pub row: usize,
    /// Number of tiles already flipped
    pub shown: usize,
    last_step: Instant,
}

/// Tile-by-tile highlight that runs across a winning row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dance {
    pub row: usize,
    /// Tile currently highlighted
    pub tile: usize,
    started: Instant,
}

/// Application state
pub struct App<S> {
    pub session: GameSession,
    source: S,
    pub messages: Vec<Message>,
    pub reveal: Option<Reveal>,
    pub dance: Option<Dance>,
    pub shake_until: Option<Instant>,
    pub should_quit: bool,
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(session: GameSession, source: S) -> Self {
        let mut app = Self {
            session,
            source,
            messages: Vec::new(),
            reveal: None,
            dance: None,
            shake_until: None,
            should_quit: false,
        };
        app.add_message(
            "Type a word and press Enter. Tab switches language.",
            MessageStyle::Info,
            Some(Instant::now() + WIN_NOTICE_DURATION),
        );
        app
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(now),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_locale(now),
            code => {
                if let Some(command) = command_for_key(code) {
                    self.apply(command, now);
                }
            }
        }
    }

    /// Feed a command to the session and react to the outcome
    pub fn apply(&mut self, command: Command, now: Instant) {
        match self.session.dispatch(command) {
            Outcome::Scored(_) => {
                let row = self.session.state().attempts_used() - 1;
                self.session.hold_input();
                self.reveal = Some(Reveal {
                    row,
                    shown: 0,
                    last_step: now,
                });
            }
            Outcome::Rejected(err) => {
                if err.is_user_error() {
                    self.shake_until = Some(now + SHAKE_DURATION);
                    self.add_message(
                        &err.notice(),
                        MessageStyle::Error,
                        Some(now + NOTICE_DURATION),
                    );
                } else {
                    self.add_message(
                        "Game over. Ctrl-N starts a practice game.",
                        MessageStyle::Info,
                        Some(now + NOTICE_DURATION),
                    );
                }
            }
            Outcome::InputHeld => debug!(?command, "input held during reveal"),
            Outcome::Typed(_) | Outcome::Deleted | Outcome::Ignored => {}
        }
    }

    /// Advance animations and expire notices
    pub fn tick(&mut self, now: Instant) {
        self.messages
            .retain(|msg| msg.expires_at.is_none_or(|at| now < at));

        if self.shake_until.is_some_and(|until| now >= until) {
            self.shake_until = None;
        }

        let word_length = self.session.state().word_length();
        if let Some(dance) = self.dance {
            let step = now.duration_since(dance.started).as_millis() / DANCE_STEP.as_millis();
            self.dance = (step < word_length as u128).then_some(Dance {
                tile: step as usize,
                ..dance
            });
        }

        let revealed = match &mut self.reveal {
            Some(reveal) => {
                while reveal.shown < word_length
                    && now.duration_since(reveal.last_step) >= FLIP_STEP
                {
                    reveal.shown += 1;
                    reveal.last_step += FLIP_STEP;
                }
                reveal.shown >= word_length
            }
            None => false,
        };

        if revealed {
            self.reveal = None;
            self.finish_reveal(now);
        }
    }

    fn finish_reveal(&mut self, now: Instant) {
        self.session.release_input();
        let state = self.session.state();

        match state.status() {
            GameStatus::Won => {
                self.dance = Some(Dance {
                    row: state.attempts_used() - 1,
                    tile: 0,
                    started: now,
                });
                self.add_message(
                    "You Win",
                    MessageStyle::Success,
                    Some(now + WIN_NOTICE_DURATION),
                );
            }
            GameStatus::Lost => {
                let target = state
                    .revealed_target()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(&target, MessageStyle::Error, None);
            }
            GameStatus::InProgress => {}
        }
    }

    /// Switch language and start that language's daily puzzle
    pub fn toggle_locale(&mut self, now: Instant) {
        match self.session.toggle_locale(&self.source) {
            Ok(locale) => {
                self.reset_presentation();
                self.add_message(
                    &format!("Switched to {locale}"),
                    MessageStyle::Info,
                    Some(now + LOCALE_NOTICE_DURATION),
                );
            }
            Err(err) => {
                self.add_message(
                    &err.notice(),
                    MessageStyle::Error,
                    Some(now + LOCALE_NOTICE_DURATION),
                );
            }
        }
    }

    /// Start a practice game with a random target
    pub fn new_game(&mut self, now: Instant) {
        match self.session.new_practice_game(&mut rand::rng()) {
            Ok(()) => {
                self.reset_presentation();
                self.add_message(
                    "New practice game",
                    MessageStyle::Info,
                    Some(now + NOTICE_DURATION),
                );
            }
            Err(err) => self.add_message(&err.notice(), MessageStyle::Error, None),
        }
    }

    fn reset_presentation(&mut self) {
        self.reveal = None;
        self.dance = None;
        self.shake_until = None;
        self.messages.clear();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle, expires_at: Option<Instant>) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            expires_at,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

impl<S> App<S> {
    /// Tiles of history row `row` that may show their colour yet
    #[must_use]
    pub fn visible_tiles(&self, row: usize) -> usize {
        match self.reveal {
            Some(reveal) if reveal.row == row => reveal.shown,
            _ => self.session.state().word_length(),
        }
    }

    /// Tile of history row `row` highlighted by the win dance, if any
    #[must_use]
    pub fn dancing_tile(&self, row: usize) -> Option<usize> {
        self.dance
            .filter(|dance| dance.row == row)
            .map(|dance| dance.tile)
    }
}

/// Translate a key into a game command
#[must_use]
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Enter => Some(Command::SubmitGuess),
        KeyCode::Backspace | KeyCode::Delete => Some(Command::DeleteLetter),
        KeyCode::Char(c) => Some(Command::PressLetter(c)),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::CalendarDate;
    use crate::error::{GameError, GameResult};
    use crate::wordlists::{Locale, WordLists};

    #[derive(Clone, Copy)]
    struct Fixture;

    impl WordSource for Fixture {
        fn load(&self, locale: Locale, word_length: usize) -> GameResult<WordLists> {
            match locale {
                Locale::English => {
                    WordLists::from_strs(locale, word_length, &["crane"], &["slate"])
                }
                Locale::Spanish => Err(GameError::DataUnavailable {
                    locale,
                    reason: "missing".into(),
                }),
            }
        }
    }

    fn app() -> App<Fixture> {
        let today: CalendarDate = "2022-01-01".parse().unwrap();
        let session = GameSession::start(GameConfig::default(), &Fixture, today).unwrap();
        App::new(session, Fixture)
    }

    fn press(app: &mut App<Fixture>, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_and_submit(app: &mut App<Fixture>, word: &str, now: Instant) {
        for c in word.chars() {
            press(app, KeyCode::Char(c), now);
        }
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn scored_guess_holds_input_until_revealed() {
        let mut app = app();
        let start = Instant::now();
        type_and_submit(&mut app, "slate", start);

        assert!(app.session.is_input_held());
        assert_eq!(app.visible_tiles(0), 0);

        // typing during the reveal is withheld
        press(&mut app, KeyCode::Char('c'), start);
        assert!(app.session.pending().is_empty());

        app.tick(start + FLIP_STEP * 2);
        assert_eq!(app.visible_tiles(0), 2);
        assert!(app.session.is_input_held());

        app.tick(start + FLIP_STEP * 5);
        assert!(app.reveal.is_none());
        assert!(!app.session.is_input_held());
        assert_eq!(app.visible_tiles(0), 5);
    }

    #[test]
    fn win_is_announced_after_reveal() {
        let mut app = app();
        let start = Instant::now();
        type_and_submit(&mut app, "crane", start);
        assert!(!app.messages.iter().any(|m| m.text == "You Win"));

        app.tick(start + FLIP_STEP * 5);
        assert!(app.messages.iter().any(|m| m.text == "You Win"));
    }

    #[test]
    fn winning_row_dances_one_tile_at_a_time() {
        let mut app = app();
        let start = Instant::now();
        type_and_submit(&mut app, "slate", start);
        app.tick(start + FLIP_STEP * 5);
        assert_eq!(app.dancing_tile(0), None);

        let start = start + FLIP_STEP * 5;
        type_and_submit(&mut app, "crane", start);
        let revealed = start + FLIP_STEP * 5;
        app.tick(revealed);
        assert_eq!(app.dancing_tile(1), Some(0));
        assert_eq!(app.dancing_tile(0), None);

        app.tick(revealed + DANCE_STEP * 2);
        assert_eq!(app.dancing_tile(1), Some(2));

        app.tick(revealed + DANCE_STEP * 5);
        assert!(app.dance.is_none());
    }

    #[test]
    fn rejected_guess_shakes_and_notifies() {
        let mut app = app();
        let now = Instant::now();
        type_and_submit(&mut app, "cra", now);

        assert!(app.shake_until.is_some());
        assert!(app.messages.iter().any(|m| m.text == "Not enough letters"));

        app.tick(now + Duration::from_secs(2));
        assert!(app.shake_until.is_none());
        assert!(!app.messages.iter().any(|m| m.text == "Not enough letters"));
    }

    #[test]
    fn failed_locale_toggle_keeps_game() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('c'), now);
        press(&mut app, KeyCode::Tab, now);

        assert_eq!(app.session.locale(), Locale::English);
        assert_eq!(app.session.pending(), &['c']);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Error));
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn key_mapping() {
        assert_eq!(command_for_key(KeyCode::Enter), Some(Command::SubmitGuess));
        assert_eq!(command_for_key(KeyCode::Backspace), Some(Command::DeleteLetter));
        assert_eq!(
            command_for_key(KeyCode::Char('x')),
            Some(Command::PressLetter('x'))
        );
        assert_eq!(command_for_key(KeyCode::F(1)), None);
    }
}
