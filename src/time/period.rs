use std::fmt;
use std::str::FromStr;

use chrono::{
    Datelike,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    TimeDelta,
    Timelike
};

use crate::time::dateerror::DateError;
use crate::time::utility::days_of_month;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimeUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds
}

impl TimeUnit {
    /// Single-letter token accepted by [`TimeUnit::from_str`].
    pub fn to_char(&self) -> char {
        match self {
            TimeUnit::Years => 'y',
            TimeUnit::Months => 'm',
            TimeUnit::Days => 'd',
            TimeUnit::Hours => 'h',
            TimeUnit::Minutes => 'n',
            TimeUnit::Seconds => 's',
            TimeUnit::Milliseconds => 't'
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Years => "year",
            TimeUnit::Months => "month",
            TimeUnit::Days => "day",
            TimeUnit::Hours => "hour",
            TimeUnit::Minutes => "minute",
            TimeUnit::Seconds => "second",
            TimeUnit::Milliseconds => "millisecond"
        }
    }
}

impl FromStr for TimeUnit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "y" | "year" => Ok(TimeUnit::Years),
            "m" | "month" => Ok(TimeUnit::Months),
            "d" | "day" => Ok(TimeUnit::Days),
            "h" | "hour" => Ok(TimeUnit::Hours),
            "n" | "minute" => Ok(TimeUnit::Minutes),
            "s" | "second" => Ok(TimeUnit::Seconds),
            "t" | "millisecond" => Ok(TimeUnit::Milliseconds),
            _ => Err(DateError::InvalidUnit(s.to_owned()))
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Period {
    number: i64,
    unit: TimeUnit
}

impl Period {
    pub fn new(number: i64, unit: TimeUnit) -> Period {
        Period { number, unit }
    }

    pub fn days(number: i64) -> Period {
        Period::new(number, TimeUnit::Days)
    }

    pub fn months(number: i64) -> Period {
        Period::new(number, TimeUnit::Months)
    }

    pub fn years(number: i64) -> Period {
        Period::new(number, TimeUnit::Years)
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Shifts `horizon` by this period, or `None` when the result does not fit
    /// in a `NaiveDateTime`.
    ///
    /// Month and year shifts keep the time of day and clamp the day to the
    /// length of the target month (Jan 31 + 1M = Feb 28/29).
    pub fn checked_shift(&self, horizon: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.unit {
            TimeUnit::Years => shift_years(horizon, i32::try_from(self.number).ok()?),
            TimeUnit::Months => shift_months(horizon, i32::try_from(self.number).ok()?),
            TimeUnit::Days => horizon.checked_add_signed(TimeDelta::try_days(self.number)?),
            TimeUnit::Hours => horizon.checked_add_signed(TimeDelta::try_hours(self.number)?),
            TimeUnit::Minutes => horizon.checked_add_signed(TimeDelta::try_minutes(self.number)?),
            TimeUnit::Seconds => horizon.checked_add_signed(TimeDelta::try_seconds(self.number)?),
            TimeUnit::Milliseconds => horizon.checked_add_signed(TimeDelta::try_milliseconds(self.number)?)
        }
    }

    /// [`Period::checked_shift`] on a date at midnight.
    pub fn checked_shift_date(&self, horizon: NaiveDate) -> Option<NaiveDate> {
        self.checked_shift(horizon.and_time(NaiveTime::MIN)).map(|d| d.date())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.to_char())
    }
}

fn with_clamped_day(horizon: NaiveDateTime, year: i32, month: u32) -> Option<NaiveDateTime> {
    let last = days_of_month(year, month);
    let date = NaiveDate::from_ymd_opt(year, month, last.min(horizon.day()))?;
    let time = NaiveTime::from_hms_nano_opt(
        horizon.hour(),
        horizon.minute(),
        horizon.second(),
        horizon.nanosecond()
    )?;
    Some(date.and_time(time))
}

fn shift_months(horizon: NaiveDateTime, number: i32) -> Option<NaiveDateTime> {
    let total = (horizon.month0() as i32).checked_add(number)?;
    let new_year = horizon.year().checked_add(total.div_euclid(12))?;
    let new_month = total.rem_euclid(12) as u32 + 1;
    with_clamped_day(horizon, new_year, new_month)
}

fn shift_years(horizon: NaiveDateTime, number: i32) -> Option<NaiveDateTime> {
    let new_year = horizon.year().checked_add(number)?;
    with_clamped_day(horizon, new_year, horizon.month())
}
