//! Layered configuration.
//!
//! Later layers win: built-in defaults, then the YAML file, then `ATLAS_*`
//! environment variables, then command-line flags.
//!
//! ```yaml
//! # ~/.config/atlas/config.yaml
//! endpoint: https://countries.trevorblades.com/
//! page_size: 20
//! max_visible: 7
//! timeout_secs: 10
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use atlas_pager::{DEFAULT_MAX_VISIBLE, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::DEFAULT_ENDPOINT;

pub const ENV_ENDPOINT: &str = "ATLAS_ENDPOINT";
pub const ENV_PAGE_SIZE: &str = "ATLAS_PAGE_SIZE";
pub const ENV_MAX_VISIBLE: &str = "ATLAS_MAX_VISIBLE";
pub const ENV_TIMEOUT_SECS: &str = "ATLAS_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{var}={value:?} is not a valid number")]
    Env { var: &'static str, value: String },

    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub endpoint: String,
    pub page_size: usize,
    pub max_visible: usize,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_visible: DEFAULT_MAX_VISIBLE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line; `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub page_size: Option<usize>,
    pub max_visible: Option<usize>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// `<config dir>/atlas/config.yaml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("atlas").join("config.yaml"))
    }

    /// Resolves every layer.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        config.apply(overrides);
        config.validate()?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // An empty file means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `ATLAS_*` variables, read through `lookup`.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(value) = lookup(ENV_PAGE_SIZE) {
            self.page_size = parse_env(ENV_PAGE_SIZE, value)?;
        }
        if let Some(value) = lookup(ENV_MAX_VISIBLE) {
            self.max_visible = parse_env(ENV_MAX_VISIBLE, value)?;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_env(ENV_TIMEOUT_SECS, value)?;
        }
        Ok(())
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(endpoint) = &overrides.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if let Some(max_visible) = overrides.max_visible {
            self.max_visible = max_visible;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        if self.max_visible < 3 {
            return Err(ConfigError::Invalid("max_visible must be at least 3".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be at least 1".into()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_env<N: std::str::FromStr>(var: &'static str, value: String) -> Result<N, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Env { var, value })
}
