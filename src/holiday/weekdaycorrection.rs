use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::period::Period;

/// Array-based weekday correction for O(1) lookup.
///
/// Indexed by `Weekday::num_days_from_sunday()` (0 = Sunday, 6 = Saturday);
/// each entry is the signed number of days to shift a holiday that lands on
/// that weekday.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeekdayCorrection {
    shifts: [i32; 7]
}

impl WeekdayCorrection {
    pub const NONE: WeekdayCorrection = WeekdayCorrection { shifts: [0; 7] };

    pub const fn from_shifts(shifts: [i32; 7]) -> WeekdayCorrection {
        WeekdayCorrection { shifts }
    }

    pub fn new(correction_map: &HashMap<Weekday, i32>) -> WeekdayCorrection {
        let mut shifts = [0; 7];
        for (&weekday, &shift) in correction_map {
            shifts[weekday.num_days_from_sunday() as usize] = shift;
        }
        WeekdayCorrection { shifts }
    }

    pub fn shift_for(&self, weekday: Weekday) -> i32 {
        self.shifts[weekday.num_days_from_sunday() as usize]
    }

    pub fn is_none(&self) -> bool {
        self.shifts.iter().all(|&s| s == 0)
    }

    /// Largest shift in either direction.
    pub fn max_shift(&self) -> i32 {
        self.shifts.iter().map(|s| s.saturating_abs()).max().unwrap_or(0)
    }

    /// Shifts `d` by the correction for its weekday; `None` when the result
    /// leaves chrono's date range.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        match self.shift_for(d.weekday()) {
            0 => Some(d),
            shift => Period::days(shift as i64).checked_shift_date(d)
        }
    }
}
