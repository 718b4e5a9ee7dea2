use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("invalid time unit '{0}'")]
    InvalidUnit(String),

    #[error("shifting {date} by {amount} {unit} leaves the supported date range")]
    OutOfRange {
        date: NaiveDateTime,
        unit: String,
        amount: i64
    }
}
