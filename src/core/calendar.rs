//! Daily puzzle selection
//!
//! Dates are civil (proleptic Gregorian) calendar days with no time-of-day
//! component, so the same calendar day always maps to the same puzzle.

use crate::error::{GameError, GameResult};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use std::fmt;
use std::str::FromStr;

/// Days from 0001-01-01 (day 1 of the common era) to 1970-01-01
const UNIX_DAYS_FROM_CE: i64 = 719_163;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

/// Reference date for puzzle numbering
pub const DEFAULT_EPOCH: CalendarDate = match NaiveDate::from_ymd_opt(2022, 1, 1) {
    Some(date) => CalendarDate(date),
    None => panic!("default epoch is a valid date"),
};

impl CalendarDate {
    /// Create a validated date
    ///
    /// # Errors
    /// Returns `GameError::ConfigurationError` if the month or day is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> GameResult<Self> {
        NaiveDate::from_ymd_opt(year, month.into(), day.into())
            .map(Self)
            .ok_or_else(|| {
                GameError::ConfigurationError(format!(
                    "invalid date {year:04}-{month:02}-{day:02}"
                ))
            })
    }

    /// Today's date in the local time zone
    #[must_use]
    pub fn today() -> Self {
        Self::of(&Local::now())
    }

    /// The calendar date of `instant` as seen in its own time zone
    ///
    /// A new day, and so a new puzzle, starts at local midnight.
    #[must_use]
    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.date_naive())
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    #[must_use]
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Days since 1970-01-01 (negative before it)
    #[must_use]
    pub fn day_number(self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - UNIX_DAYS_FROM_CE
    }

    /// Inverse of [`CalendarDate::day_number`]; `None` outside the supported range
    #[must_use]
    pub fn from_day_number(days: i64) -> Option<Self> {
        let from_ce = i32::try_from(days + UNIX_DAYS_FROM_CE).ok()?;
        NaiveDate::from_num_days_from_ce_opt(from_ce).map(Self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|e| {
                GameError::ConfigurationError(format!("invalid date '{s}', expected YYYY-MM-DD: {e}"))
            })
    }
}

/// Whole days from `epoch` to `current` (negative if `current` is earlier)
#[must_use]
pub fn days_between(epoch: CalendarDate, current: CalendarDate) -> i64 {
    current.day_number() - epoch.day_number()
}

/// Map a date to an index into a target list of `list_len` words
///
/// Dates before the epoch wrap around, so the result is always in `[0, list_len)`.
///
/// # Errors
/// Returns `GameError::ConfigurationError` if `list_len` is zero.
///
/// # Examples
/// ```
/// use wordle_daily::core::{select_index, CalendarDate, DEFAULT_EPOCH};
///
/// let date: CalendarDate = "2022-01-11".parse().unwrap();
/// assert_eq!(select_index(date, DEFAULT_EPOCH, 7).unwrap(), 3);
/// ```
pub fn select_index(
    current: CalendarDate,
    epoch: CalendarDate,
    list_len: usize,
) -> GameResult<usize> {
    if list_len == 0 {
        return Err(GameError::ConfigurationError(
            "target word list is empty".to_string(),
        ));
    }

    let elapsed = days_between(epoch, current);
    Ok(elapsed.rem_euclid(list_len as i64) as usize)
}
