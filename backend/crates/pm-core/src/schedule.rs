//! Calendar arithmetic for sprints and tasks.
//!
//! Sprint days are plain calendar dates (no time zone). A sprint of
//! `duration` days ending on `end` covers `end - (duration - 1) ..= end`.

use crate::{CoreError, CoreResult, DayHours};

use std::panic::Location;

use chrono::{Datelike, Days, NaiveDate};
use error_location::ErrorLocation;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Years a `YYYY-MM-DD` string can express.
pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

/// Start date of a sprint that ends on `end_date` and lasts `duration` days.
///
/// `duration` must be at least 1; request validation guarantees that before
/// this is called. Fails when either date falls outside
/// [`MIN_YEAR`]..=[`MAX_YEAR`], since it could not be stored or read back.
#[track_caller]
pub fn derive_start_date(end_date: NaiveDate, duration: u32) -> CoreResult<NaiveDate> {
    let back = u64::from(duration.saturating_sub(1));

    end_date
        .checked_sub_days(Days::new(back))
        .filter(|start| {
            (MIN_YEAR..=MAX_YEAR).contains(&start.year())
                && (MIN_YEAR..=MAX_YEAR).contains(&end_date.year())
        })
        .ok_or_else(|| CoreError::DateOutOfRange {
            message: format!(
                "A sprint of {} day(s) ending {} must start no earlier than year {:04}",
                duration,
                format_day(end_date),
                MIN_YEAR
            ),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// One zeroed record per sprint day, in chronological order.
#[track_caller]
pub fn init_hours_per_day(start_date: NaiveDate, duration: u32) -> CoreResult<Vec<DayHours>> {
    let days: Vec<DayHours> = start_date
        .iter_days()
        .take(duration as usize)
        .map(DayHours::new)
        .collect();

    // iter_days stops silently at NaiveDate::MAX
    if days.len() != duration as usize {
        return Err(CoreError::DateOutOfRange {
            message: format!("{} plus {} days", start_date, duration),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(days)
}

/// Parse a strict `YYYY-MM-DD` date (zero-padded month and day).
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    parse_parts(value, true)
}

/// Parse `YYYY-M-D`, accepting both padded and unpadded month and day.
pub fn parse_day_lenient(value: &str) -> Option<NaiveDate> {
    parse_parts(value, false)
}

/// Format a date the same way the API accepts it.
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

fn parse_parts(value: &str, padded: bool) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    let min_width = if padded { 2 } else { 1 };
    if !digits(year, 4, 4) || !digits(month, min_width, 2) || !digits(day, min_width, 2) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}
