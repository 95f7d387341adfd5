//! Day-of-week classification for vessel pricing.
//!
//! COI vessels are priced by two day-of-week bands; standard vessels
//! distinguish Saturday, Sunday, and the remaining weekdays. The weekday is
//! read from the calendar date itself, so no time zone can move it.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The rate band a COI vessel is priced in.
///
/// # Example
///
/// ```
/// use charter_quote::calculation::{coi_band, CoiBand};
/// use chrono::NaiveDate;
///
/// // 2026-06-02 is a Tuesday
/// assert_eq!(coi_band(NaiveDate::from_ymd_opt(2026, 6, 2).unwrap()), CoiBand::SatTues);
/// // 2026-06-03 is a Wednesday
/// assert_eq!(coi_band(NaiveDate::from_ymd_opt(2026, 6, 3).unwrap()), CoiBand::WedFri);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoiBand {
    /// Saturday, Sunday, Monday, and Tuesday.
    SatTues,
    /// Wednesday, Thursday, and Friday.
    WedFri,
}

impl std::fmt::Display for CoiBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoiBand::SatTues => write!(f, "Sat-Tues"),
            CoiBand::WedFri => write!(f, "Wed-Fri"),
        }
    }
}

/// The day type a standard vessel is priced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharterDay {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

/// Returns the day-of-week index with Sunday = 0 through Saturday = 6.
pub fn day_of_week_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Determines the COI rate band for a date.
pub fn coi_band(date: NaiveDate) -> CoiBand {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun | Weekday::Mon | Weekday::Tue => CoiBand::SatTues,
        Weekday::Wed | Weekday::Thu | Weekday::Fri => CoiBand::WedFri,
    }
}

/// Determines the standard-vessel day type for a date.
///
/// # Example
///
/// ```
/// use charter_quote::calculation::{charter_day, CharterDay};
/// use chrono::NaiveDate;
///
/// // 2026-06-06 is a Saturday
/// assert_eq!(charter_day(NaiveDate::from_ymd_opt(2026, 6, 6).unwrap()), CharterDay::Saturday);
/// ```
pub fn charter_day(date: NaiveDate) -> CharterDay {
    match date.weekday() {
        Weekday::Sat => CharterDay::Saturday,
        Weekday::Sun => CharterDay::Sunday,
        _ => CharterDay::Weekday,
    }
}
