//! One-off artifact re-serialization.
//!
//! Rewrites `scaler.json` and `model.json` in the canonical typed layout
//! (pretty JSON, fields in declaration order), keeping a `.backup` copy of
//! each original. Not used at runtime.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::inference::{LogisticModel, StandardScaler, MODEL_FILE, SCALER_FILE};

pub const BACKUP_SUFFIX: &str = ".backup";

#[derive(Error, Debug)]
pub enum MaintenanceError {
    #[error("Model directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid artifact: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

/// What happened to one artifact file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResaveOutcome {
    Skipped { path: PathBuf },
    Resaved { path: PathBuf, backup: PathBuf },
}

/// Back up and rewrite both artifacts in `dir`. Missing files are skipped.
pub fn resave_artifacts(dir: &Path) -> Result<Vec<ResaveOutcome>, MaintenanceError> {
    if !dir.is_dir() {
        return Err(MaintenanceError::DirectoryNotFound(dir.to_path_buf()));
    }

    let scaler = resave_one::<StandardScaler>(&dir.join(SCALER_FILE), |s| s.validate())?;
    let model = resave_one::<LogisticModel>(&dir.join(MODEL_FILE), |m| m.validate())?;
    Ok(vec![scaler, model])
}

fn resave_one<T>(
    path: &Path,
    validate: impl Fn(&T) -> Result<(), String>,
) -> Result<ResaveOutcome, MaintenanceError>
where
    T: DeserializeOwned + Serialize,
{
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "Skipping missing artifact");
        return Ok(ResaveOutcome::Skipped {
            path: path.to_path_buf(),
        });
    }

    let backup = backup_path(path);
    tracing::info!(from = %path.display(), to = %backup.display(), "Backing up artifact");
    fs::copy(path, &backup).map_err(|source| io_error(&backup, source))?;

    let raw = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    let generic: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| invalid(path, e.to_string()))?;
    let typed: T = serde_json::from_value(generic).map_err(|e| invalid(path, e.to_string()))?;
    validate(&typed).map_err(|reason| invalid(path, reason))?;

    let rendered = serde_json::to_string_pretty(&typed).map_err(|e| invalid(path, e.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, rendered + "\n").map_err(|source| io_error(&tmp, source))?;
    fs::rename(&tmp, path).map_err(|source| io_error(path, source))?;

    tracing::info!(path = %path.display(), "Re-saved artifact");
    Ok(ResaveOutcome::Resaved {
        path: path.to_path_buf(),
        backup,
    })
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

fn io_error(path: &Path, source: std::io::Error) -> MaintenanceError {
    MaintenanceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn invalid(path: &Path, reason: String) -> MaintenanceError {
    MaintenanceError::Invalid {
        path: path.to_path_buf(),
        reason,
    }
}
