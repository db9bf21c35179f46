use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "MedQueue";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the SQLite database path.
pub const DB_PATH_ENV: &str = "MEDQUEUE_DB_PATH";
/// Environment variable overriding the API listen address.
pub const BIND_ADDR_ENV: &str = "MEDQUEUE_BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8470";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine home directory")]
    NoHomeDir,

    #[error("Invalid {var} value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Get the application data directory
/// ~/MedQueue/ on all platforms
pub fn app_data_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(APP_NAME))
}

/// Default location of the appointment database
pub fn default_db_path() -> Result<PathBuf, ConfigError> {
    Ok(app_data_dir()?.join("appointments.db"))
}

/// Log filter used when `RUST_LOG` is not set
pub fn default_log_filter() -> &'static str {
    "medqueue_lib=info,medqueue=info,tower_http=warn"
}

/// Runtime settings resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    pub db_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl QueueConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, falling back to defaults for
    /// unset or blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = match get(DB_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        let raw_addr = get(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: BIND_ADDR_ENV,
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { db_path, bind_addr })
    }
}
