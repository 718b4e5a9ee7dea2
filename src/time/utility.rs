use chrono::{Local, NaiveDateTime};

/// First year of the Gregorian calendar accepted by the holiday calculations.
pub const MINIMUM_YEAR: i32 = 1583;

/// Largest year that still prints as four digits.
pub const MAXIMUM_YEAR: i32 = 9999;

#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

pub const fn days_of_month(year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month > 12 {
        return 0;
    }

    if is_leap_year(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

#[inline]
pub const fn is_supported_year(year: i32) -> bool {
    year >= MINIMUM_YEAR && year <= MAXIMUM_YEAR
}

/// Returns `year` when it lies in the supported range, the current year otherwise.
pub fn year_or_current(year: Option<i32>) -> i32 {
    match year {
        Some(y) if is_supported_year(y) => y,
        _ => current_year(),
    }
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn current_year() -> i32 {
    use chrono::Datelike;
    now().year()
}
