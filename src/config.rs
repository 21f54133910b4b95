//! Startup configuration.
//!
//! Layers, lowest to highest: built-in defaults, an optional YAML file named
//! by `MINIHTTPD_CONFIG`, the `MINIHTTPD_HOST` / `MINIHTTPD_ROOT` /
//! `MINIHTTPD_INDEX` env vars, then the positional port argument.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub const CONFIG_ENV: &str = "MINIHTTPD_CONFIG";
pub const HOST_ENV: &str = "MINIHTTPD_HOST";
pub const ROOT_ENV: &str = "MINIHTTPD_ROOT";
pub const INDEX_ENV: &str = "MINIHTTPD_INDEX";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub document_root: PathBuf,
    pub index_file: String,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// How long a client may take to send its request head
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            document_root: PathBuf::from("./public"),
            index_file: "index.html".to_string(),
            log_level: "info".to_string(),
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    Io { path: PathBuf, source: std::io::Error },
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(raw) => {
                write!(f, "invalid port '{raw}': expected a number between 1 and 65535")
            }
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config file {}: {}", path.display(), source)
            }
            ConfigError::Yaml(e) => write!(f, "invalid config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort(_) => None,
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Yaml(e) => Some(e),
        }
    }
}

/// Parses the positional port argument. Accepts 1..=65535 only.
pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_string())),
    }
}

impl Config {
    /// Builds the process configuration from every layer.
    pub fn load(port_arg: Option<&str>) -> Result<Self, ConfigError> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        cfg.apply_env(|key| std::env::var(key).ok());

        if let Some(raw) = port_arg {
            cfg.port = parse_port(raw)?;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(ConfigError::Yaml)
    }

    /// Overrides fields from environment-style lookups.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV) {
            self.host = host;
        }
        if let Some(root) = lookup(ROOT_ENV) {
            self.document_root = PathBuf::from(root);
        }
        if let Some(index) = lookup(INDEX_ENV) {
            self.index_file = index;
        }
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
