//! Error types for calendar view-model operations.

use crate::core::domain::AppointmentId;

/// Result type for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Error type for calendar operations
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("appointment {id}: unparseable start time {value:?}")]
    StartTimeParse {
        id: AppointmentId,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid wall-clock time {value:?}, expected HH:MM")]
    WallClockParse { value: String },

    #[error("feed error: {0}")]
    Feed(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<String> for CalendarError {
    fn from(s: String) -> Self {
        CalendarError::Feed(s)
    }
}

impl From<&str> for CalendarError {
    fn from(s: &str) -> Self {
        CalendarError::Feed(s.to_string())
    }
}
