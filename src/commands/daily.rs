//! Daily puzzle information command

use crate::core::CalendarDate;
use crate::game::GameSession;
use crate::wordlists::Locale;

/// Summary of the day's puzzle
pub struct DailyInfo {
    pub date: CalendarDate,
    pub epoch: CalendarDate,
    pub puzzle_number: i64,
    pub locale: Locale,
    pub target_count: usize,
    pub dictionary_count: usize,
    pub target: Option<String>,
}

/// Describe the daily puzzle of a freshly started session
///
/// The target is only included when `reveal` is set.
#[must_use]
pub fn daily_info(session: &GameSession, reveal: bool) -> DailyInfo {
    let lists = session.lists();

    DailyInfo {
        date: session.date(),
        epoch: session.config().epoch,
        puzzle_number: session.puzzle_number().unwrap_or_default(),
        locale: session.locale(),
        target_count: lists.targets().len(),
        dictionary_count: lists.dictionary().len(),
        target: reveal.then(|| session.state().target().text().to_string()),
    }
}
