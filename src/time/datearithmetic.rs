use chrono::{
    Datelike,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    TimeDelta,
    Timelike
};

use crate::locale::datelocalizer::DateLocalizer;
use crate::locale::language::Language;
use crate::time::dateerror::DateError;
use crate::time::period::{
    Period,
    TimeUnit
};
use crate::time::utility::now;

/// Returned by [`add_to_date`] when no date is given: 1900-01-01 00:00:00.
pub const MIN_DATE: NaiveDateTime = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(d) => d.and_time(NaiveTime::MIN),
    None => panic!("1900-01-01 is a valid date")
};

const UNIX_EPOCH_YEAR: i32 = 1970;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS[.fff]` or `YYYY-MM-DDTHH:MM:SS[.fff]`.
///
/// Anything else is an invalid date and yields `None`.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Shifts `date` by `floor(amount)` units of `unit`.
///
/// `unit` is one of `y|year`, `m|month`, `d|day`, `h|hour`, `n|minute`,
/// `s|second`, `t|millisecond`. A missing date yields [`MIN_DATE`] without
/// looking at the unit.
pub fn add_to_date(date: Option<NaiveDateTime>, unit: &str, amount: f64) -> Result<NaiveDateTime, DateError> {
    let Some(date) = date else {
        return Ok(MIN_DATE);
    };
    let unit: TimeUnit = unit.parse()?;
    let number = amount.floor();
    let out_of_range = || DateError::OutOfRange {
        date,
        unit: unit.name().to_owned(),
        amount: number as i64
    };
    if !number.is_finite() || number.abs() >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    Period::new(number as i64, unit)
        .checked_shift(date)
        .ok_or_else(out_of_range)
}

/// ISO-8601 week number of `date`.
///
/// The result is negated when the week belongs to the previous or next year,
/// e.g. 2024-12-31 gives `-1` (week 1 of 2025).
pub fn to_week(date: Option<NaiveDateTime>) -> Option<i32> {
    let d = date?.date();
    // Monday = 1 ... Sunday = 7
    let day = d.weekday().number_from_monday() as i64;
    let thursday = d.checked_add_signed(TimeDelta::days(4 - day))?;
    let year_start = NaiveDate::from_ymd_opt(thursday.year(), 1, 1)?;
    let days = (thursday - year_start).num_days();
    let week = ((days + 1) as f64 / 7.0).ceil() as i32;
    if thursday.year() == d.year() {
        Some(week)
    } else {
        Some(-week)
    }
}

/// Formats the ISO week of `date` as `YYYY-Www`, e.g. `2019-W01` for 2018-12-31.
pub fn to_week_string(date: Option<NaiveDateTime>) -> String {
    let (Some(d), Some(week)) = (date, to_week(date)) else {
        return String::new();
    };
    let year = if week >= 1 {
        d.year()
    } else if d.month() == 12 {
        d.year() + 1
    } else {
        d.year() - 1
    };
    format!("{}-W{:02}", year, week.abs())
}

/// Same calendar day at 00:00:00.000; today when `date` is missing.
pub fn zero_time(date: Option<NaiveDateTime>) -> NaiveDateTime {
    date.unwrap_or_else(now).date().and_time(NaiveTime::MIN)
}

/// Same time of day on 1900-01-01; the current time of day when `date` is missing.
pub fn zero_date(date: Option<NaiveDateTime>) -> NaiveDateTime {
    MIN_DATE.date().and_time(date.unwrap_or_else(now).time())
}

/// Whole years elapsed between two timestamps.
///
/// The absolute difference is laid onto the Unix epoch and the epoch year is
/// subtracted from the resulting year. This is not a calendar-exact age
/// around leap days.
pub fn get_age(date1: NaiveDateTime, date2: NaiveDateTime) -> i32 {
    let elapsed = (date1 - date2).abs();
    match NaiveDateTime::UNIX_EPOCH.checked_add_signed(elapsed) {
        Some(d) => d.year() - UNIX_EPOCH_YEAR,
        None => i32::MAX
    }
}

pub fn compare_dates(date1: Option<NaiveDateTime>, date2: Option<NaiveDateTime>) -> bool {
    match (date1, date2) {
        (Some(d1), Some(d2)) => d1 == d2,
        _ => false
    }
}

/// `YYYYMMDD`, or an empty string for a missing date.
pub fn to_string_ymd(date: Option<NaiveDateTime>) -> String {
    date.map_or_else(String::new, |d| d.format("%Y%m%d").to_string())
}

/// `YYYYMMDDHHMMSS`, or an empty string for a missing date.
pub fn to_string_ymd_time(date: Option<NaiveDateTime>) -> String {
    date.map_or_else(String::new, |d| {
        format!("{}{:02}{:02}{:02}", to_string_ymd(Some(d)), d.hour(), d.minute(), d.second())
    })
}

pub fn to_day_name(date: Option<NaiveDateTime>, language: Language, localizer: &dyn DateLocalizer) -> String {
    date.map_or_else(String::new, |d| localizer.day_name(d.date(), language))
}

pub fn to_month_name(date: Option<NaiveDateTime>, language: Language, localizer: &dyn DateLocalizer) -> String {
    date.map_or_else(String::new, |d| localizer.month_name(d.date(), language))
}

pub fn to_string_dmy(date: Option<NaiveDateTime>, language: Language, localizer: &dyn DateLocalizer) -> String {
    date.map_or_else(String::new, |d| localizer.format_dmy(d.date(), language))
}
