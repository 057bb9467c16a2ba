//! Train identifier type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Identifier of a train in the schedule store.
///
/// Train ids are opaque strings. The only validation is that they must be
/// non-empty; a train id is the key of the trains mapping and never changes
/// once a train is registered.
///
/// # Examples
///
/// ```
/// use schedule_server::domain::TrainId;
///
/// let id = TrainId::new("12951").unwrap();
/// assert_eq!(id.as_str(), "12951");
///
/// // Empty strings are rejected
/// assert!(TrainId::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrainId(String);

impl TrainId {
    /// Create a train id, rejecting the empty string.
    pub fn new(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        if s.is_empty() {
            return Err(DomainError::EmptyTrainId);
        }
        Ok(TrainId(s))
    }

    /// Returns the train id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TrainId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TrainId::new(s)
    }
}

impl From<TrainId> for String {
    fn from(id: TrainId) -> Self {
        id.0
    }
}

// Lets maps keyed by `TrainId` be queried with a plain `&str`.
impl Borrow<str> for TrainId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_id() {
        assert!(TrainId::new("12951").is_ok());
        assert!(TrainId::new("T9").is_ok());
        assert!(TrainId::new(" ").is_ok());
    }

    #[test]
    fn reject_empty() {
        let err = TrainId::new("").unwrap_err();
        assert_eq!(err.to_string(), "train id must not be empty");
    }

    #[test]
    fn display_and_debug() {
        let id = TrainId::new("T9").unwrap();
        assert_eq!(id.to_string(), "T9");
        assert_eq!(format!("{:?}", id), "TrainId(T9)");
    }

    #[test]
    fn lookup_by_str() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(TrainId::new("T9").unwrap(), 1);
        assert_eq!(map.get("T9"), Some(&1));
        assert_eq!(map.get("T10"), None);
    }

    #[test]
    fn serde_as_plain_string() {
        let id = TrainId::new("12951").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12951\"");

        let parsed: TrainId = serde_json::from_str("\"12951\"").unwrap();
        assert_eq!(parsed, id);

        assert!(serde_json::from_str::<TrainId>("\"\"").is_err());
    }
}
