use chrono::NaiveDate;
use serde::Serialize;

use crate::locale::language::Language;

/// A holiday pinned to a concrete date of one year.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ResolvedHoliday {
    year: i32,
    language: Language,
    date: NaiveDate,
    day_name: String,
    holiday_name: String
}

impl ResolvedHoliday {
    pub fn new(year: i32, language: Language, date: NaiveDate, day_name: String, holiday_name: String) -> ResolvedHoliday {
        ResolvedHoliday { year, language, date, day_name, holiday_name }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day_name(&self) -> &str {
        &self.day_name
    }

    pub fn holiday_name(&self) -> &str {
        &self.holiday_name
    }
}
