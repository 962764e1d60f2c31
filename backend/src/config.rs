use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use thiserror::Error;

/// Path of an optional JSON config file.
const CONFIG_ENV: &str = "SEGMENTS_CONFIG";
/// Listen address override, e.g. `0.0.0.0:8080`.
const LISTEN_ENV: &str = "SEGMENTS_LISTEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid listen address '{value}': {source}")]
    Address {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl Config {
    /// Defaults, then the file named by `SEGMENTS_CONFIG`, then `SEGMENTS_LISTEN`.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var(CONFIG_ENV).ok();
        let listen = std::env::var(LISTEN_ENV).ok();
        Self::resolve(file.as_deref(), listen.as_deref())
    }

    fn resolve(file: Option<&str>, listen: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(value) = listen {
            config.listen = value.trim().parse().map_err(|source| ConfigError::Address {
                value: value.to_string(),
                source,
            })?;
        }

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
