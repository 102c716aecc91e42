//! Record store error types
//!
//! None of these are fatal to a questionnaire session; the front end shows
//! them as a notice and carries on.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for record store operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Permission denied: cannot write to {}. Make sure the file is not open in another program.", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No records saved yet at {}", path.display())]
    NoRecords { path: PathBuf },
}

impl PersistenceError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
