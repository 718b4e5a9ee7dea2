use std::collections::HashMap;
use std::sync::{
    PoisonError,
    RwLock
};

use chrono::NaiveDate;
use tracing::trace;

use crate::time::utility::year_or_current;

/// Gregorian Easter Sunday with a per-year memo.
///
/// The cache is unbounded; holiday lookups only ever touch a handful of years.
#[derive(Debug, Default)]
pub struct EasterCalculator {
    cache: RwLock<HashMap<i32, NaiveDate>>
}

impl EasterCalculator {
    pub fn new() -> EasterCalculator {
        EasterCalculator::default()
    }

    /// Easter Sunday of `year`; years outside 1583..=9999 (or `None`) use the
    /// current year.
    pub fn easter_sunday(&self, year: Option<i32>) -> NaiveDate {
        let year = year_or_current(year);

        if let Some(&d) = self.cache.read().unwrap_or_else(PoisonError::into_inner).get(&year) {
            return d;
        }

        trace!(year, "computing easter sunday");
        let easter = computus(year);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(year, easter);
        easter
    }

    pub fn cached_years(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Anonymous Gregorian algorithm (Meeus/Jones/Butcher). `year` must lie in
/// 1583..=9999.
fn computus(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let j = c % 4;
    let k = (32 + 2 * e + 2 * i - h - j) % 7;
    let l = (a + 11 * h + 22 * k) / 451;
    let m = h + k - 7 * l + 114;
    let month = (m / 31) as u32;
    let day = (m % 31 + 1) as u32;

    // month is 3 or 4 and day lies in 1..=31 for every positive year
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
