//! Birthday occurrence and celebration-date arithmetic.
//!
//! # Invariants
//! - A birthday's next occurrence is never before `today`.
//! - Celebration dates never fall on Saturday or Sunday.
//! - Feb 29 birthdays occur on Mar 1 in non-leap years.

use crate::model::field::Birthday;
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::Serialize;

/// Default look-ahead used by the `birthdays` command.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One contact whose birthday is celebrated inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Weekend-shifted date, not the birth date. Kept as `birthday` on the wire.
    #[serde(rename = "birthday")]
    pub celebration_date: NaiveDate,
}

/// Returns the birthday's anniversary in `year`.
///
/// Returns `None` only when `year` is outside chrono's supported range.
pub fn anniversary_in(birthday: Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        // Only Feb 29 can be missing from a valid year.
        NaiveDate::from_ymd_opt(year, 3, 1)
    })
}

/// Returns the nearest anniversary on or after `today` together with its
/// distance in days.
pub fn next_occurrence(birthday: Birthday, today: NaiveDate) -> Option<(NaiveDate, i64)> {
    let this_year = anniversary_in(birthday, today.year())?;
    let delta = this_year.signed_duration_since(today).num_days();
    if delta >= 0 {
        return Some((this_year, delta));
    }

    let next_year = anniversary_in(birthday, today.year() + 1)?;
    Some((next_year, next_year.signed_duration_since(today).num_days()))
}

/// Moves Saturday and Sunday forward to the following Monday.
pub fn celebration_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        weekday @ (Weekday::Sat | Weekday::Sun) => {
            let shift = 7 - i64::from(weekday.num_days_from_monday());
            date + TimeDelta::days(shift)
        }
        _ => date,
    }
}

/// Returns the celebration date when the birthday falls within
/// `0..=window_days` days of `today`.
pub fn celebration_within(
    birthday: Birthday,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let (occurrence, delta) = next_occurrence(birthday, today)?;
    if delta > i64::from(window_days) {
        return None;
    }
    Some(celebration_date(occurrence))
}
