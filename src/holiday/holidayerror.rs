use crate::locale::language::Language;

/// Hard failures of the holiday subsystem.
///
/// These signal defects in static configuration or caller logic. Soft lookup
/// problems (missing dates, unknown languages, years out of range) never end
/// up here; they fall back to defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HolidayError {
    #[error("invalid nth weekday calculation for year: {year}, month: {month}, weekday: {weekday}, n: {n}")]
    InvalidNthWeekday {
        year: i32,
        month: u32,
        weekday: u32,
        n: i32
    },

    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),

    #[error("holiday '{name}' uses language {language} which is not in the supported language set")]
    UnsupportedTableLanguage {
        language: Language,
        name: String
    },

    #[error("holiday '{name}' has an invalid fixed date {month:02}-{day:02}")]
    InvalidFixedDate {
        name: String,
        month: u32,
        day: u32
    },

    #[error("holiday '{name}' shifts by {days} days, which leaves the supported date range")]
    ShiftOutOfRange {
        name: String,
        days: i64
    }
}
