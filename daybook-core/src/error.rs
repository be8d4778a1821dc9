//! Error types for daybook.

use thiserror::Error;

use crate::date_key::DateKey;
use crate::event::EventId;

/// Reasons a user action is refused.
///
/// These are surfaced to whoever drives the UI and never abort the
/// program. Each variant corresponds to one rejection condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Please select a date and provide an event name.")]
    MissingDateOrName,

    #[error("Please provide start and end times.")]
    MissingTimes,

    #[error("Start time must be earlier than end time.")]
    StartNotBeforeEnd,

    #[error("Event times overlap with an existing event ({0}).")]
    Overlap(String),

    #[error("No events to export for the selected date.")]
    NothingToExport,
}

/// Errors that can occur in daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid month index {0}. Expected 0-11")]
    InvalidMonth(u32),

    #[error("No day selected")]
    NoDaySelected,

    #[error("No event {id} on {date}")]
    EventNotFound { date: DateKey, id: EventId },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

impl From<serde_json::Error> for DaybookError {
    fn from(e: serde_json::Error) -> Self {
        DaybookError::Serialization(e.to_string())
    }
}

/// Result type alias for daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
