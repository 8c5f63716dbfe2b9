//! Error types for timespan

use thiserror::Error;

/// Result type for timespan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or parsing schedules
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or reversed interval text / bounds
    #[error("Invalid interval '{input}': {reason}")]
    InvalidInterval { input: String, reason: String },

    /// Day mask outside `0..=127`
    #[error("Invalid day mask {0}: expected a value in 0..=127")]
    InvalidDayMask(i64),

    /// Malformed schedule group text
    #[error("Invalid schedule group '{input}': {reason}")]
    InvalidGroup { input: String, reason: String },

    /// Weekday number outside `1..=7`
    #[error("Invalid weekday {0}: expected a value in 1..=7")]
    InvalidWeekday(i64),

    /// Minute-of-day outside `0..=1440`
    #[error("Invalid minute-of-day {0}: expected a value in 0..=1440")]
    InvalidMinute(i64),

    /// Configuration or initialization error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn interval(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInterval {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn group(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidGroup {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from rejecting canonical text or raw values.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidInterval { .. }
                | Error::InvalidDayMask(_)
                | Error::InvalidGroup { .. }
                | Error::InvalidWeekday(_)
                | Error::InvalidMinute(_)
        )
    }
}
