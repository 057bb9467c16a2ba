//! Startup loading of `trains.json` and `stations.json`.
//!
//! Each document is read once. A missing file is not an error: the
//! corresponding mapping starts empty and a warning is logged. What happens
//! when a file is present but unreadable or malformed is decided by
//! [`LoadPolicy`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use crate::domain::{Route, StationTimetable, TrainId};

use super::ScheduleStore;

/// What to do with a document that exists but cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Abort startup with the error.
    #[default]
    FailFast,
    /// Log the error and start with an empty mapping for that document.
    Empty,
}

/// Errors loading a startup document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid schedule document
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ScheduleStore {
    /// Load both documents and build a store from them.
    pub fn load(
        trains_path: &Path,
        stations_path: &Path,
        policy: LoadPolicy,
    ) -> Result<Self, LoadError> {
        let trains: IndexMap<TrainId, Route> = load_document(trains_path, policy)?;
        info!(path = %trains_path.display(), count = trains.len(), "trains loaded");

        let stations: IndexMap<String, StationTimetable> = load_document(stations_path, policy)?;
        info!(path = %stations_path.display(), count = stations.len(), "stations loaded");

        Ok(Self::from_parts(trains, stations))
    }
}

/// Read and parse one JSON document, applying the missing-file and
/// failure policies.
fn load_document<T>(path: &Path, policy: LoadPolicy) -> Result<T, LoadError>
where
    T: DeserializeOwned + Default,
{
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "document not found, starting empty");
            return Ok(T::default());
        }
        Err(source) => {
            let err = LoadError::Io {
                path: path.to_path_buf(),
                source,
            };
            return recover(err, policy);
        }
    };

    match serde_json::from_str(&contents) {
        Ok(doc) => Ok(doc),
        Err(source) => recover(
            LoadError::Parse {
                path: path.to_path_buf(),
                source,
            },
            policy,
        ),
    }
}

fn recover<T: Default>(err: LoadError, policy: LoadPolicy) -> Result<T, LoadError> {
    match policy {
        LoadPolicy::FailFast => Err(err),
        LoadPolicy::Empty => {
            error!(error = %err, "ignoring unloadable document, starting empty");
            Ok(T::default())
        }
    }
}
