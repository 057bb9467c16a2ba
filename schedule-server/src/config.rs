//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::store::LoadPolicy;

/// Environment variable for the listen address.
pub const BIND_ADDR_VAR: &str = "SCHEDULE_BIND_ADDR";
/// Environment variable for the trains document path.
pub const TRAINS_FILE_VAR: &str = "SCHEDULE_TRAINS_FILE";
/// Environment variable for the stations document path.
pub const STATIONS_FILE_VAR: &str = "SCHEDULE_STATIONS_FILE";
/// Environment variable selecting the [`LoadPolicy`]: `fail` or `empty`.
pub const ON_PARSE_ERROR_VAR: &str = "SCHEDULE_ON_PARSE_ERROR";

/// Errors building the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Configuration for the schedule server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Path of the trains document.
    pub trains_file: PathBuf,

    /// Path of the stations document.
    pub stations_file: PathBuf,

    /// How to treat a document that exists but cannot be loaded.
    pub load_policy: LoadPolicy,
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    ///
    /// Unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: value.clone(),
                reason: "expected host:port",
            })?;
        }

        if let Some(value) = lookup(TRAINS_FILE_VAR) {
            config.trains_file = PathBuf::from(value);
        }

        if let Some(value) = lookup(STATIONS_FILE_VAR) {
            config.stations_file = PathBuf::from(value);
        }

        if let Some(value) = lookup(ON_PARSE_ERROR_VAR) {
            config.load_policy = match value.to_ascii_lowercase().as_str() {
                "fail" => LoadPolicy::FailFast,
                "empty" => LoadPolicy::Empty,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: ON_PARSE_ERROR_VAR,
                        value,
                        reason: "expected \"fail\" or \"empty\"",
                    });
                }
            };
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            trains_file: PathBuf::from("trains.json"),
            stations_file: PathBuf::from("stations.json"),
            load_policy: LoadPolicy::FailFast,
        }
    }
}
