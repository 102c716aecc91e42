//! Inference error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for inference operations
pub type InferenceResult<T> = Result<T, InferenceError>;

/// Why a recommendation could not be produced. Both variants are terminal
/// for the call; no partial ranking is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// Frozen artifact missing, unreadable, malformed, or inconsistent
    /// with the class catalog.
    #[error("Model artifact unavailable ({}): {reason}", path.display())]
    ModelUnavailable { path: PathBuf, reason: String },

    /// A vector handed to a stage does not have the width that stage was
    /// fitted on.
    #[error("Invalid feature vector for {stage}: expected {expected} values, got {actual}")]
    InvalidFeatureVector {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl InferenceError {
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn dimension(stage: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidFeatureVector {
            stage,
            expected,
            actual,
        }
    }
}
