use crate::temperature::{Unit, DEFAULT_DECIMALS, MAX_DECIMALS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "tempconv.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Unit assumed when none is given on the command line
    #[serde(default)]
    pub default_unit: Unit,

    // Digits after the decimal point in the display text
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "decimals = {} exceeds the maximum of {}",
                self.decimals, MAX_DECIMALS
            )));
        }
        Ok(())
    }

    /// Load `explicit` if given, else `tempconv.toml` in the working directory
    /// when present, else the defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::load_from_file(fallback)
        } else {
            Ok(Self::empty())
        }
    }

    pub fn empty() -> Self {
        Self {
            default_unit: Unit::Celsius,
            decimals: DEFAULT_DECIMALS,
        }
    }
}
