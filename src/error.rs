use chrono::NaiveDate;

/// Errors raised while validating input or computing a working-hours schedule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkingHoursError {
    /// A start or end date could not be parsed as a calendar date.
    #[error("invalid date '{input}': expected YYYY-MM-DD or an RFC 3339 date-time")]
    InvalidDate { input: String },

    #[error("start date {start} must be on or before end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Hours per week, or a computed daily value, is non-numeric, negative or not finite.
    #[error("invalid hours: {0}")]
    InvalidHours(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, WorkingHoursError>;
