//! Integration tests for the daily game engine.
//!
//! These tests drive complete games through the command dispatcher, from the
//! first key press to a win or a loss.

use pretty_assertions::assert_eq;
use wordle_daily::config::GameConfig;
use wordle_daily::core::{CalendarDate, LetterVerdict, Word, evaluate};
use wordle_daily::error::{GameError, GameResult};
use wordle_daily::game::{Command, GameSession, GameStatus, Outcome};
use wordle_daily::wordlists::{EmbeddedSource, Locale, WordLists, WordSource};

use LetterVerdict::{Absent, Correct, Present};

/// English lists with a known rotation; Spanish data can be switched off
struct Fixture {
    spanish_available: bool,
}

impl WordSource for Fixture {
    fn load(&self, locale: Locale, word_length: usize) -> GameResult<WordLists> {
        match locale {
            Locale::English => WordLists::from_strs(
                locale,
                word_length,
                &["crane", "slate", "audio"],
                &["speed", "sheep", "erase", "those", "geese"],
            ),
            Locale::Spanish if self.spanish_available => {
                WordLists::from_strs(locale, word_length, &["niños", "perro"], &["señor"])
            }
            Locale::Spanish => Err(GameError::DataUnavailable {
                locale,
                reason: "network unreachable".into(),
            }),
        }
    }
}

const WITH_SPANISH: Fixture = Fixture {
    spanish_available: true,
};
const WITHOUT_SPANISH: Fixture = Fixture {
    spanish_available: false,
};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

/// Session on the first puzzle day, whose target is "crane"
fn session(source: &Fixture) -> GameSession {
    GameSession::start(GameConfig::default(), source, date("2022-01-01")).unwrap()
}

fn play(session: &mut GameSession, guess: &str) -> Outcome {
    for letter in guess.chars() {
        session.dispatch(Command::PressLetter(letter));
    }
    session.dispatch(Command::SubmitGuess)
}

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn six_misses_lose_on_the_sixth() {
    let mut game = session(&WITH_SPANISH);
    let misses = ["slate", "audio", "speed", "sheep", "erase"];

    for guess in misses {
        let Outcome::Scored(outcome) = play(&mut game, guess) else {
            panic!("{guess} should be scored");
        };
        assert_eq!(outcome.status, GameStatus::InProgress);
    }

    let Outcome::Scored(outcome) = play(&mut game, "those") else {
        panic!("sixth guess should be scored");
    };
    assert_eq!(outcome.status, GameStatus::Lost);
    assert_eq!(game.state().attempts_used(), 6);
    assert_eq!(game.state().revealed_target().map(Word::text), Some("crane"));

    // nothing more is accepted
    assert_eq!(
        play(&mut game, "geese"),
        Outcome::Rejected(GameError::GameAlreadyOver)
    );
    assert_eq!(game.state().attempts_used(), 6);
}

#[test]
fn win_on_third_attempt_then_game_is_closed() {
    let mut game = session(&WITH_SPANISH);
    play(&mut game, "slate");
    play(&mut game, "audio");

    let Outcome::Scored(outcome) = play(&mut game, "crane") else {
        panic!("winning guess should be scored");
    };
    assert_eq!(outcome.status, GameStatus::Won);
    assert!(outcome.feedback.is_win());
    assert_eq!(game.state().attempts_used(), 3);
    assert_eq!(game.state().attempts_remaining(), 3);

    assert_eq!(
        game.dispatch(Command::SubmitGuess),
        Outcome::Rejected(GameError::GameAlreadyOver)
    );
    assert_eq!(game.dispatch(Command::PressLetter('a')), Outcome::Ignored);
}

#[test]
fn short_guess_is_rejected_without_using_an_attempt() {
    let mut game = session(&WITH_SPANISH);

    assert_eq!(
        play(&mut game, "cran"),
        Outcome::Rejected(GameError::InvalidLength {
            expected: 5,
            actual: 4,
        })
    );
    assert!(game.state().history().is_empty());
    assert_eq!(game.pending(), &['c', 'r', 'a', 'n']);

    // finish the row and submit again
    assert_eq!(game.dispatch(Command::PressLetter('e')), Outcome::Typed('e'));
    assert!(matches!(
        game.dispatch(Command::SubmitGuess),
        Outcome::Scored(_)
    ));
}

#[test]
fn unknown_word_is_rejected_with_notice() {
    let mut game = session(&WITH_SPANISH);

    let Outcome::Rejected(err) = play(&mut game, "zzzzz") else {
        panic!("unknown word should be rejected");
    };
    assert_eq!(err, GameError::NotInDictionary("zzzzz".into()));
    assert_eq!(err.notice(), "Not in word list");
    assert_eq!(game.state().attempts_used(), 0);
}

#[test]
fn duplicate_letters_follow_target_counts() {
    // guess first, then target
    assert_eq!(
        evaluate(&word("erase"), &word("speed")).unwrap().verdicts(),
        &[Present, Absent, Absent, Present, Present]
    );
    assert_eq!(
        evaluate(&word("speed"), &word("erase")).unwrap().verdicts(),
        &[Present, Absent, Present, Present, Absent]
    );
    assert_eq!(
        evaluate(&word("sheep"), &word("speed")).unwrap().verdicts(),
        &[Correct, Absent, Correct, Correct, Present]
    );
}

#[test]
fn guess_outcome_serializes_to_json() {
    let mut game = session(&WITH_SPANISH);
    let Outcome::Scored(outcome) = play(&mut game, "slate") else {
        panic!("slate should be scored");
    };

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "feedback": ["absent", "absent", "correct", "absent", "correct"],
            "status": "in_progress",
        })
    );
}

#[test]
fn daily_target_rotates_with_the_date() {
    let epoch = GameConfig::default().epoch;
    let lists = WITH_SPANISH.load(Locale::English, 5).unwrap();
    let targets: Vec<&str> = ["2022-01-01", "2022-01-02", "2022-01-03", "2022-01-04"]
        .iter()
        .map(|d| lists.targets().word_for_day(date(d), epoch).unwrap().text())
        .collect();

    assert_eq!(targets, ["crane", "slate", "audio", "crane"]);
}

#[test]
fn switching_locale_starts_that_locales_puzzle() {
    let mut game = session(&WITH_SPANISH);
    play(&mut game, "slate");

    assert_eq!(game.toggle_locale(&WITH_SPANISH), Ok(Locale::Spanish));
    assert_eq!(game.locale(), Locale::Spanish);
    assert!(game.state().history().is_empty());

    // ñ is a letter in Spanish
    assert_eq!(game.dispatch(Command::PressLetter('ñ')), Outcome::Typed('ñ'));
}

#[test]
fn failed_locale_switch_keeps_current_game() {
    let mut game = session(&WITHOUT_SPANISH);
    play(&mut game, "slate");
    game.dispatch(Command::PressLetter('c'));

    let err = game.toggle_locale(&WITHOUT_SPANISH).unwrap_err();
    assert_eq!(
        err.notice(),
        "Error loading game data. Please try again later."
    );
    assert_eq!(game.locale(), Locale::English);
    assert_eq!(game.state().attempts_used(), 1);
    assert_eq!(game.pending(), &['c']);
}

#[test]
fn held_input_is_ignored_until_released() {
    let mut game = session(&WITH_SPANISH);
    game.hold_input();

    assert_eq!(game.dispatch(Command::PressLetter('c')), Outcome::InputHeld);
    assert_eq!(game.dispatch(Command::SubmitGuess), Outcome::InputHeld);
    assert!(game.pending().is_empty());

    game.release_input();
    assert_eq!(game.dispatch(Command::PressLetter('c')), Outcome::Typed('c'));
}

#[test]
fn embedded_lists_start_a_game_every_day_of_a_year() {
    let epoch = date("2022-01-01");
    for offset in 0..366 {
        let today = CalendarDate::from_day_number(epoch.day_number() + offset).unwrap();
        for locale in Locale::ALL {
            let config = GameConfig {
                locale,
                ..GameConfig::default()
            };
            let game = GameSession::start(config, &EmbeddedSource, today).unwrap();
            assert_eq!(game.state().status(), GameStatus::InProgress);
        }
    }
}
