//! Advisor configuration
//!
//! Defaults, then an optional TOML file, then environment overrides:
//!
//! ```toml
//! artifact_dir = "model"
//! records_path = "student_records.csv"
//! passing_average = 40.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wizard::DEFAULT_PASSING_AVERAGE;

pub const ARTIFACT_DIR_ENV: &str = "ADVISOR_ARTIFACT_DIR";
pub const RECORDS_PATH_ENV: &str = "ADVISOR_RECORDS_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("passing_average must be between 0 and 100, got {0}")]
    InvalidPassingAverage(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Directory holding `scaler.json` and `model.json`.
    pub artifact_dir: PathBuf,
    /// CSV file saved results are appended to.
    pub records_path: PathBuf,
    pub passing_average: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("model"),
            records_path: PathBuf::from("student_records.csv"),
            passing_average: DEFAULT_PASSING_AVERAGE,
        }
    }
}

impl AdvisorConfig {
    /// Resolve configuration from an optional file plus the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from `lookup` (the process environment in
    /// production) and validate the result.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ARTIFACT_DIR_ENV).filter(|v| !v.is_empty()) {
            self.artifact_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup(RECORDS_PATH_ENV).filter(|v| !v.is_empty()) {
            self.records_path = PathBuf::from(path);
        }
        if !(0.0..=100.0).contains(&self.passing_average) {
            return Err(ConfigError::InvalidPassingAverage(self.passing_average));
        }
        Ok(self)
    }
}
