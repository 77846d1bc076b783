//! Server configuration.
//!
//! Settings come from environment variables, optionally layered over a TOML
//! file named by `XWAVE_CONFIG`.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::resolver::DEFAULT_SESAME_URL;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SESAME_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid bind address '{0}'")]
    Address(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Sesame endpoint the resolver forwards to
    pub sesame_url: String,
    /// Upper bound for one Sesame request, in seconds
    pub sesame_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sesame_url: DEFAULT_SESAME_URL.to_string(),
            sesame_timeout_secs: DEFAULT_SESAME_TIMEOUT_SECS,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            name,
            expected,
            value,
        })
}

impl ServerConfig {
    /// Load the configuration.
    ///
    /// # Environment Variables
    /// - `XWAVE_CONFIG` (optional): TOML file used as the base layer
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8080)
    /// - `SESAME_URL` (optional): Sesame endpoint
    /// - `SESAME_TIMEOUT_SECS` (optional, default: 10)
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match env::var("XWAVE_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        base.with_env_overrides()
    }

    /// Load settings from a TOML file; missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = parse_var("PORT", "a valid port number", port)?;
        }
        if let Ok(url) = env::var("SESAME_URL") {
            self.sesame_url = url;
        }
        if let Ok(timeout) = env::var("SESAME_TIMEOUT_SECS") {
            self.sesame_timeout_secs = parse_var("SESAME_TIMEOUT_SECS", "a number of seconds", timeout)?;
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::Address(addr))
    }

    pub fn sesame_timeout(&self) -> Duration {
        Duration::from_secs(self.sesame_timeout_secs)
    }
}
