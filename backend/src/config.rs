//! Server configuration file support.
//!
//! Settings are read from a TOML file (`janmasethu.toml`) and may be
//! overridden by the `HOST` and `PORT` environment variables. Every key is
//! optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "JANMASETHU_CONFIG";

pub const CONFIG_FILE_NAME: &str = "janmasethu.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Offset from UTC, in minutes, of the zone whose calendar date is "today".
    pub reference_utc_offset_minutes: i32,
    /// Pricing table replacing the embedded sample table. Relative paths are
    /// resolved against the config file's directory.
    pub pricing_table: Option<PathBuf>,
    /// Allowed CORS origins. Empty or `"*"` allows any origin.
    pub cors_allowed_origins: Vec<String>,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            reference_utc_offset_minutes: 330,
            pricing_table: None,
            cors_allowed_origins: Vec::new(),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: ServerConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let (Some(table), Some(dir)) = (config.pricing_table.as_ref(), path.parent()) {
            if table.is_relative() {
                config.pricing_table = Some(dir.join(table));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `janmasethu.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the effective configuration for the server process.
    ///
    /// `JANMASETHU_CONFIG` wins over the search paths; the file it names must
    /// exist. Environment overrides are applied last.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `HOST` and `PORT` from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_string();
        }

        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "PORT",
                message: format!("'{}': {}", port, e),
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reference_offset()?;
        if self.body_limit_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "body_limit_bytes",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn reference_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.reference_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "reference_utc_offset_minutes",
                message: format!("{} is not a valid UTC offset", self.reference_utc_offset_minutes),
            })
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                key: "host",
                message: format!("'{}': {}", self.host, e),
            })
    }

    /// True when CORS should allow any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.is_empty()
            || self.cors_allowed_origins.iter().any(|o| o.trim() == "*")
    }
}
