//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Fibonacci printer settings
    #[serde(default)]
    pub fibonacci: FibonacciConfig,

    /// Simple-interest calculator settings
    #[serde(default)]
    pub interest: InterestConfig,
}

/// Fibonacci printer settings
#[derive(Debug, Deserialize, PartialEq)]
pub struct FibonacciConfig {
    /// Number of terms to print
    #[serde(default = "default_terms")]
    pub terms: u32,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            terms: default_terms(),
        }
    }
}

fn default_terms() -> u32 {
    10
}

/// Simple-interest inputs
#[derive(Debug, Deserialize, PartialEq)]
pub struct InterestConfig {
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Annual rate as a percentage
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Duration in years
    #[serde(default = "default_time")]
    pub time: f64,
}

impl Default for InterestConfig {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            rate: default_rate(),
            time: default_time(),
        }
    }
}

fn default_principal() -> f64 {
    5000.00
}
fn default_rate() -> f64 {
    5.5
}
fn default_time() -> f64 {
    2.0
}

impl Config {
    /// Load configuration from an explicit path, or the default config file
    ///
    /// An explicit path must exist. A missing default file yields the
    /// built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => {
                tracing::warn!("could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}
