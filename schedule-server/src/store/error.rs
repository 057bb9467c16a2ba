//! Store error types.

/// Errors returned by [`ScheduleStore`](super::ScheduleStore) operations.
///
/// Every error is terminal for the operation that produced it; a failed
/// write leaves the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No station with this name
    #[error("station not found: {0}")]
    StationNotFound(String),

    /// No train with this id
    #[error("train not found: {0}")]
    TrainNotFound(String),

    /// A required field is missing or empty
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The train id is already registered
    #[error("train already exists: {0}")]
    Conflict(String),
}

impl StoreError {
    /// `add_train` called without an id or without any stops.
    pub fn missing_train_fields() -> Self {
        Self::InvalidArgument("train_id and schedule required".into())
    }
}
