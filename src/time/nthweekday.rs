use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::holiday::holidayerror::HolidayError;
use crate::time::utility::{
    days_of_month,
    is_supported_year
};

/// Day of month of the `n`-th `weekday` in a month.
///
/// `month0` is 0-based (January = 0) and `weekday` counts from Sunday = 0.
/// Positive `n` counts from the start of the month, negative `n` from the end
/// (`-1` is the last occurrence).
pub fn nth_weekday(year: i32, month0: u32, weekday: u32, n: i32) -> Result<u32, HolidayError> {
    let invalid = || HolidayError::InvalidNthWeekday { year, month: month0, weekday, n };

    if !is_supported_year(year) || month0 > 11 || weekday > 6 {
        return Err(invalid());
    }

    let month = month0 + 1;

    if n > 0 {
        // chrono counts weekdays from Monday = 0
        let chrono_weekday = Weekday::try_from(((weekday + 6) % 7) as u8).map_err(|_| invalid())?;
        let nth = u8::try_from(n).map_err(|_| invalid())?;
        return NaiveDate::from_weekday_of_month_opt(year, month, chrono_weekday, nth)
            .map(|d| d.day())
            .ok_or_else(invalid);
    }
    if n == 0 {
        return Err(invalid());
    }

    let days_in_month = days_of_month(year, month) as i32;
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(invalid)?
        .weekday()
        .num_days_from_sunday() as i32;
    let first_occurrence = (weekday as i32 - first_day + 7) % 7 + 1;
    let last_occurrence = first_occurrence + (days_in_month - first_occurrence) / 7 * 7;
    let day = last_occurrence + (n + 1) * 7;

    if (1..=days_in_month).contains(&day) {
        Ok(day as u32)
    } else {
        Err(invalid())
    }
}

/// Chrono-typed variant of [`nth_weekday`] with a 1-based `month`.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: i32) -> Result<NaiveDate, HolidayError> {
    let invalid = || HolidayError::InvalidNthWeekday {
        year,
        month: month.wrapping_sub(1),
        weekday: weekday.num_days_from_sunday(),
        n
    };
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    let day = nth_weekday(year, month - 1, weekday.num_days_from_sunday(), n)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
