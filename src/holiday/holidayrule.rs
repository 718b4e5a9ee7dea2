use chrono::{
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use crate::holiday::holidayerror::HolidayError;
use crate::time::easter::EasterCalculator;
use crate::time::nthweekday::nth_weekday_of_month;
use crate::time::period::Period;
use crate::time::utility::days_of_month;

/// Largest day shift a rule or weekday correction may apply.
pub const MAX_SHIFT_DAYS: i32 = 366;

/// How a holiday's base date is found for a given year.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "holiday_type")]
pub enum HolidayRule {
    /// Signed day offset from Easter Sunday; `0` is Easter Sunday itself.
    #[serde(rename = "EasterRelated")]
    EasterRelative {
        days_from_easter: i32
    },
    /// Same month and day every year.
    FixedDate {
        month: u32,
        day: u32
    },
    /// The `n`-th `weekday` of `month`; negative `n` counts from month end.
    NthWeekday {
        month: u32,
        weekday: Weekday,
        n: i32
    }
}

impl HolidayRule {
    /// Builds a rule from the flat legacy row layout.
    ///
    /// A row is a fixed date exactly when `absolute_day` lies in 1..=31;
    /// otherwise `days_from_easter` applies and the absolute fields are ignored.
    pub fn from_legacy_fields(days_from_easter: i32, absolute_day: i32, absolute_month: i32) -> HolidayRule {
        if (1..=31).contains(&absolute_day) {
            HolidayRule::FixedDate {
                month: absolute_month.max(0) as u32,
                day: absolute_day as u32
            }
        } else {
            HolidayRule::EasterRelative { days_from_easter }
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, HolidayRule::NthWeekday { .. })
    }

    /// Checks that the rule can be resolved in every supported year.
    ///
    /// Easter offsets are limited to [`MAX_SHIFT_DAYS`]; fixed dates must exist
    /// in a common year; floating rules need a real month and |n| in 1..=4,
    /// since a fifth occurrence is missing in some years.
    pub fn validate(&self, name: &str) -> Result<(), HolidayError> {
        match *self {
            HolidayRule::EasterRelative { days_from_easter } => {
                if days_from_easter.saturating_abs() <= MAX_SHIFT_DAYS {
                    Ok(())
                } else {
                    Err(HolidayError::ShiftOutOfRange { name: name.to_owned(), days: days_from_easter as i64 })
                }
            },
            HolidayRule::FixedDate { month, day } => {
                if (1..=12).contains(&month) && day >= 1 && day <= days_of_month(2001, month) {
                    Ok(())
                } else {
                    Err(HolidayError::InvalidFixedDate { name: name.to_owned(), month, day })
                }
            },
            HolidayRule::NthWeekday { month, weekday, n } => {
                if (1..=12).contains(&month) && (1..=4).contains(&n.abs()) {
                    Ok(())
                } else {
                    Err(HolidayError::InvalidNthWeekday {
                        year: 0,
                        month: month.wrapping_sub(1),
                        weekday: weekday.num_days_from_sunday(),
                        n
                    })
                }
            }
        }
    }

    /// Base date in `year`, before any weekday correction.
    pub fn base_date(&self, year: i32, easter: &EasterCalculator) -> Result<NaiveDate, HolidayError> {
        match *self {
            HolidayRule::EasterRelative { days_from_easter } => {
                Period::days(days_from_easter as i64)
                    .checked_shift_date(easter.easter_sunday(Some(year)))
                    .ok_or(HolidayError::ShiftOutOfRange {
                        name: String::new(),
                        days: days_from_easter as i64
                    })
            },
            HolidayRule::FixedDate { month, day } => {
                NaiveDate::from_ymd_opt(year, month, day).ok_or(HolidayError::InvalidFixedDate {
                    name: String::new(),
                    month,
                    day
                })
            },
            HolidayRule::NthWeekday { month, weekday, n } => nth_weekday_of_month(year, month, weekday, n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn legacy_fields_pick_absolute_only_for_day_in_range() {
        assert_eq!(
            HolidayRule::from_legacy_fields(0, 26, 12),
            HolidayRule::FixedDate { month: 12, day: 26 }
        );
        assert_eq!(
            HolidayRule::from_legacy_fields(39, 0, 0),
            HolidayRule::EasterRelative { days_from_easter: 39 }
        );
        assert_eq!(
            HolidayRule::from_legacy_fields(0, 0, 0),
            HolidayRule::EasterRelative { days_from_easter: 0 }
        );
        // days_from_easter is ignored for absolute rows
        assert_eq!(
            HolidayRule::from_legacy_fields(7, 1, 1),
            HolidayRule::FixedDate { month: 1, day: 1 }
        );
        assert_eq!(
            HolidayRule::from_legacy_fields(-2, 32, 5),
            HolidayRule::EasterRelative { days_from_easter: -2 }
        );
    }

    #[test]
    fn base_dates_for_2024() {
        let easter = EasterCalculator::new();
        assert_eq!(
            HolidayRule::EasterRelative { days_from_easter: 39 }.base_date(2024, &easter),
            Ok(ymd(2024, 5, 9))
        );
        assert_eq!(
            HolidayRule::EasterRelative { days_from_easter: -2 }.base_date(2024, &easter),
            Ok(ymd(2024, 3, 29))
        );
        assert_eq!(
            HolidayRule::FixedDate { month: 7, day: 4 }.base_date(2024, &easter),
            Ok(ymd(2024, 7, 4))
        );
        assert_eq!(
            HolidayRule::NthWeekday { month: 5, weekday: Weekday::Mon, n: -1 }.base_date(2024, &easter),
            Ok(ymd(2024, 5, 27))
        );
    }

    #[test]
    fn validation_rejects_unresolvable_rules() {
        assert!(HolidayRule::FixedDate { month: 2, day: 29 }.validate("x").is_err());
        assert!(HolidayRule::FixedDate { month: 13, day: 1 }.validate("x").is_err());
        assert!(HolidayRule::FixedDate { month: 4, day: 31 }.validate("x").is_err());
        assert!(HolidayRule::FixedDate { month: 12, day: 31 }.validate("x").is_ok());
        assert!(HolidayRule::NthWeekday { month: 5, weekday: Weekday::Mon, n: 5 }.validate("x").is_err());
        assert!(HolidayRule::NthWeekday { month: 5, weekday: Weekday::Mon, n: 0 }.validate("x").is_err());
        assert!(HolidayRule::NthWeekday { month: 0, weekday: Weekday::Mon, n: 1 }.validate("x").is_err());
        assert!(HolidayRule::NthWeekday { month: 5, weekday: Weekday::Mon, n: -4 }.validate("x").is_ok());
        assert!(HolidayRule::EasterRelative { days_from_easter: -366 }.validate("x").is_ok());
        assert_eq!(
            HolidayRule::EasterRelative { days_from_easter: i32::MAX }.validate("x"),
            Err(HolidayError::ShiftOutOfRange { name: "x".to_owned(), days: i32::MAX as i64 })
        );
        assert!(HolidayRule::EasterRelative { days_from_easter: i32::MIN }.validate("x").is_err());
    }

    #[test]
    fn oversized_easter_offset_fails_instead_of_overflowing() {
        let easter = EasterCalculator::new();
        assert!(matches!(
            HolidayRule::EasterRelative { days_from_easter: i32::MAX }.base_date(2024, &easter),
            Err(HolidayError::ShiftOutOfRange { .. })
        ));
    }

    #[test]
    fn serde_dispatches_on_holiday_type() {
        let rule: HolidayRule = serde_json::from_str(
            r#"{"holiday_type": "NthWeekday", "month": 11, "weekday": "Thu", "n": 4}"#
        ).unwrap();
        assert_eq!(rule, HolidayRule::NthWeekday { month: 11, weekday: Weekday::Thu, n: 4 });

        let rule: HolidayRule = serde_json::from_str(
            r#"{"holiday_type": "EasterRelated", "days_from_easter": 50}"#
        ).unwrap();
        assert_eq!(rule, HolidayRule::EasterRelative { days_from_easter: 50 });
    }
}
