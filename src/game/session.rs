//! Game session and input dispatch
//!
//! A session owns the active word lists and the game state for one player. The
//! front ends never touch the state directly while typing: they translate key
//! presses into [`Command`]s and feed them to [`GameSession::dispatch`].

use super::state::{GameState, GuessOutcome};
use crate::config::GameConfig;
use crate::core::{CalendarDate, days_between};
use crate::error::{GameError, GameResult};
use crate::wordlists::{Locale, WordLists, WordSource};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

/// Player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PressLetter(char),
    DeleteLetter,
    SubmitGuess,
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A letter was added to the pending row
    Typed(char),
    /// The last pending letter was removed
    Deleted,
    /// The command had no effect (full row, unknown letter, empty row, ...)
    Ignored,
    /// The pending row was accepted and scored
    Scored(GuessOutcome),
    /// The pending row was rejected; it is kept so the player can edit it
    Rejected(GameError),
    /// Input is held while the previous guess is being revealed
    InputHeld,
}

/// How the current target was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleKind {
    Daily,
    Practice,
}

/// One player's game, with its word lists and pending input
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    lists: WordLists,
    state: GameState,
    date: CalendarDate,
    kind: PuzzleKind,
    pending: Vec<char>,
    input_held: bool,
}

impl GameSession {
    /// Start the daily puzzle for `today`
    ///
    /// # Errors
    /// Returns `ConfigurationError` for an invalid config and `DataUnavailable` if
    /// the word lists cannot be loaded.
    pub fn start<S: WordSource>(
        config: GameConfig,
        source: &S,
        today: CalendarDate,
    ) -> GameResult<Self> {
        config.validate()?;
        let lists = source.load(config.locale, config.word_length)?;
        let target = lists.targets().word_for_day(today, config.epoch)?.clone();
        let state = GameState::new(target, config.max_attempts)?;

        info!(
            locale = %config.locale,
            %today,
            puzzle = days_between(config.epoch, today),
            "daily puzzle started"
        );

        Ok(Self {
            config,
            lists,
            state,
            date: today,
            kind: PuzzleKind::Daily,
            pending: Vec::new(),
            input_held: false,
        })
    }

    /// Start a game with a random target from the locale's target list
    ///
    /// # Errors
    /// Same as [`GameSession::start`].
    pub fn practice<S: WordSource, R: Rng + ?Sized>(
        config: GameConfig,
        source: &S,
        today: CalendarDate,
        rng: &mut R,
    ) -> GameResult<Self> {
        let mut session = Self::start(config, source, today)?;
        session.new_practice_game(rng)?;
        Ok(session)
    }

    /// Replace the current game with a random target from the active lists
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the target list is empty.
    pub fn new_practice_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult<()> {
        let target = self
            .lists
            .targets()
            .as_slice()
            .choose(rng)
            .ok_or_else(|| GameError::ConfigurationError("target word list is empty".into()))?
            .clone();

        self.state.reset(target, self.config.max_attempts)?;
        self.kind = PuzzleKind::Practice;
        self.clear_input();
        debug!(locale = %self.lists.locale(), "practice game started");
        Ok(())
    }

    /// Switch to another locale and start its daily puzzle
    ///
    /// On failure the session is left exactly as it was.
    ///
    /// # Errors
    /// Returns `DataUnavailable` if the locale's word lists cannot be loaded.
    pub fn set_locale<S: WordSource>(&mut self, locale: Locale, source: &S) -> GameResult<()> {
        let lists = source
            .load(locale, self.config.word_length)
            .inspect_err(|err| warn!(%locale, %err, "locale switch failed"))?;
        let target = lists
            .targets()
            .word_for_day(self.date, self.config.epoch)?
            .clone();

        self.state.reset(target, self.config.max_attempts)?;
        self.lists = lists;
        self.config.locale = locale;
        self.kind = PuzzleKind::Daily;
        self.clear_input();

        info!(%locale, "switched locale");
        Ok(())
    }

    /// Switch between English and Spanish
    ///
    /// # Errors
    /// Same as [`GameSession::set_locale`].
    pub fn toggle_locale<S: WordSource>(&mut self, source: &S) -> GameResult<Locale> {
        let locale = self.locale().toggle();
        self.set_locale(locale, source)?;
        Ok(locale)
    }

    /// Apply one player command
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        if self.input_held {
            return Outcome::InputHeld;
        }

        match command {
            Command::PressLetter(key) => self.press_letter(key),
            Command::DeleteLetter => {
                if self.state.is_over() || self.pending.pop().is_none() {
                    Outcome::Ignored
                } else {
                    Outcome::Deleted
                }
            }
            Command::SubmitGuess => self.submit_pending(),
        }
    }

    fn press_letter(&mut self, key: char) -> Outcome {
        let mut lower = key.to_lowercase();
        let (Some(letter), None) = (lower.next(), lower.next()) else {
            return Outcome::Ignored;
        };

        if self.state.is_over()
            || self.pending.len() >= self.config.word_length
            || !self.locale().alphabet().contains(letter)
        {
            return Outcome::Ignored;
        }

        self.pending.push(letter);
        Outcome::Typed(letter)
    }

    fn submit_pending(&mut self) -> Outcome {
        if self.state.is_over() {
            return Outcome::Rejected(GameError::GameAlreadyOver);
        }

        let guess: String = self.pending.iter().collect();
        match self.state.submit_guess(&guess, self.lists.dictionary()) {
            Ok(outcome) => {
                self.pending.clear();
                Outcome::Scored(outcome)
            }
            Err(err) => {
                debug!(%guess, %err, "guess rejected");
                Outcome::Rejected(err)
            }
        }
    }

    /// Withhold input, e.g. while feedback is being animated
    pub fn hold_input(&mut self) {
        self.input_held = true;
    }

    /// Accept input again
    pub fn release_input(&mut self) {
        self.input_held = false;
    }

    #[must_use]
    pub const fn is_input_held(&self) -> bool {
        self.input_held
    }

    fn clear_input(&mut self) {
        self.pending.clear();
        self.input_held = false;
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn lists(&self) -> &WordLists {
        &self.lists
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.lists.locale()
    }

    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    #[must_use]
    pub const fn kind(&self) -> PuzzleKind {
        self.kind
    }

    /// Letters typed but not yet submitted
    #[must_use]
    pub fn pending(&self) -> &[char] {
        &self.pending
    }

    /// Days since the epoch, for daily puzzles
    #[must_use]
    pub fn puzzle_number(&self) -> Option<i64> {
        match self.kind {
            PuzzleKind::Daily => Some(days_between(self.config.epoch, self.date)),
            PuzzleKind::Practice => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::wordlists::EmbeddedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Fixed lists per locale; Spanish fails when `spanish_broken` is set
    struct FixtureSource {
        spanish_broken: bool,
    }

    impl WordSource for FixtureSource {
        fn load(&self, locale: Locale, word_length: usize) -> GameResult<WordLists> {
            match locale {
                Locale::English => WordLists::from_strs(
                    locale,
                    word_length,
                    &["crane", "slate", "audio"],
                    &["speed", "sheep"],
                ),
                Locale::Spanish if self.spanish_broken => Err(GameError::DataUnavailable {
                    locale,
                    reason: "offline".into(),
                }),
                Locale::Spanish => {
                    WordLists::from_strs(locale, word_length, &["niños", "perro"], &[])
                }
            }
        }
    }

    const SOURCE: FixtureSource = FixtureSource {
        spanish_broken: false,
    };

    fn epoch_plus(days: i64) -> CalendarDate {
        CalendarDate::from_day_number(crate::core::DEFAULT_EPOCH.day_number() + days).unwrap()
    }

    fn session() -> GameSession {
        // epoch + 0 selects "crane"
        GameSession::start(GameConfig::default(), &SOURCE, epoch_plus(0)).unwrap()
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for c in word.chars() {
            session.dispatch(Command::PressLetter(c));
        }
    }

    #[test]
    fn start_picks_daily_target() {
        let session = GameSession::start(GameConfig::default(), &SOURCE, epoch_plus(4)).unwrap();
        assert_eq!(session.state().target().text(), "slate");
        assert_eq!(session.puzzle_number(), Some(4));
        assert_eq!(session.kind(), PuzzleKind::Daily);
    }

    #[test]
    fn start_rejects_bad_config() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameSession::start(config, &SOURCE, epoch_plus(0)),
            Err(GameError::ConfigurationError(_))
        ));
    }

    #[test]
    fn typing_fills_pending_row() {
        let mut session = session();
        assert_eq!(session.dispatch(Command::PressLetter('C')), Outcome::Typed('c'));
        assert_eq!(session.dispatch(Command::PressLetter('1')), Outcome::Ignored);
        assert_eq!(session.dispatch(Command::PressLetter('ñ')), Outcome::Ignored);
        type_word(&mut session, "rane");
        assert_eq!(session.dispatch(Command::PressLetter('x')), Outcome::Ignored);
        assert_eq!(session.pending(), &['c', 'r', 'a', 'n', 'e']);

        assert_eq!(session.dispatch(Command::DeleteLetter), Outcome::Deleted);
        assert_eq!(session.pending().len(), 4);
    }

    #[test]
    fn delete_on_empty_row_is_ignored() {
        let mut session = session();
        assert_eq!(session.dispatch(Command::DeleteLetter), Outcome::Ignored);
    }

    #[test]
    fn short_row_is_rejected_and_kept() {
        let mut session = session();
        type_word(&mut session, "cra");
        assert_eq!(
            session.dispatch(Command::SubmitGuess),
            Outcome::Rejected(GameError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(session.pending().len(), 3);
        assert_eq!(session.state().attempts_used(), 0);
    }

    #[test]
    fn scored_row_is_cleared() {
        let mut session = session();
        type_word(&mut session, "speed");
        let Outcome::Scored(outcome) = session.dispatch(Command::SubmitGuess) else {
            panic!("guess should be scored");
        };
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert!(session.pending().is_empty());
        assert_eq!(session.state().attempts_used(), 1);
    }

    #[test]
    fn finished_game_ignores_typing() {
        let mut session = session();
        type_word(&mut session, "crane");
        assert!(matches!(
            session.dispatch(Command::SubmitGuess),
            Outcome::Scored(GuessOutcome {
                status: GameStatus::Won,
                ..
            })
        ));
        assert_eq!(session.dispatch(Command::PressLetter('a')), Outcome::Ignored);
        assert_eq!(
            session.dispatch(Command::SubmitGuess),
            Outcome::Rejected(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn held_input_changes_nothing() {
        let mut session = session();
        type_word(&mut session, "cran");
        session.hold_input();

        assert_eq!(session.dispatch(Command::PressLetter('e')), Outcome::InputHeld);
        assert_eq!(session.dispatch(Command::DeleteLetter), Outcome::InputHeld);
        assert_eq!(session.dispatch(Command::SubmitGuess), Outcome::InputHeld);
        assert_eq!(session.pending().len(), 4);

        session.release_input();
        assert_eq!(session.dispatch(Command::PressLetter('e')), Outcome::Typed('e'));
    }

    #[test]
    fn toggle_locale_resets_game() {
        let mut session = session();
        type_word(&mut session, "speed");
        session.dispatch(Command::SubmitGuess);
        type_word(&mut session, "cr");

        assert_eq!(session.toggle_locale(&SOURCE).unwrap(), Locale::Spanish);
        assert_eq!(session.locale(), Locale::Spanish);
        assert_eq!(session.state().attempts_used(), 0);
        assert!(session.pending().is_empty());
        assert_eq!(session.state().target().text(), "niños");
        assert_eq!(session.dispatch(Command::PressLetter('ñ')), Outcome::Typed('ñ'));
    }

    #[test]
    fn failed_locale_switch_keeps_session() {
        let broken = FixtureSource {
            spanish_broken: true,
        };
        let mut session = GameSession::start(GameConfig::default(), &broken, epoch_plus(0)).unwrap();
        type_word(&mut session, "speed");
        session.dispatch(Command::SubmitGuess);
        type_word(&mut session, "cr");

        let err = session.set_locale(Locale::Spanish, &broken).unwrap_err();
        assert!(matches!(err, GameError::DataUnavailable { .. }));
        assert_eq!(session.locale(), Locale::English);
        assert_eq!(session.state().attempts_used(), 1);
        assert_eq!(session.pending(), &['c', 'r']);
        assert_eq!(session.state().target().text(), "crane");
    }

    #[test]
    fn practice_game_uses_target_list() {
        let mut rng = StdRng::seed_from_u64(7);
        let session =
            GameSession::practice(GameConfig::default(), &SOURCE, epoch_plus(0), &mut rng).unwrap();

        assert_eq!(session.kind(), PuzzleKind::Practice);
        assert_eq!(session.puzzle_number(), None);
        let target = session.state().target().text();
        assert!(["crane", "slate", "audio"].contains(&target));
    }

    #[test]
    fn embedded_lists_start_a_session() {
        let session =
            GameSession::start(GameConfig::default(), &EmbeddedSource, epoch_plus(100)).unwrap();
        assert!(session.lists().dictionary().contains(session.state().target().text()));
    }
}
