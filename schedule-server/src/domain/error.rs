//! Domain error types.
//!
//! These errors represent validation failures of schedule data. They are
//! distinct from store and HTTP errors.

use super::TimeError;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Train ids must be non-empty
    #[error("train id must not be empty")]
    EmptyTrainId,

    /// An arrival or departure that is not a valid HH:MM time
    #[error("invalid {field} {value:?}: {source}")]
    InvalidTime {
        field: &'static str,
        value: String,
        source: TimeError,
    },

    /// A `days` entry that is not a weekday name
    #[error("unknown weekday: {0:?}")]
    UnknownWeekday(String),
}
