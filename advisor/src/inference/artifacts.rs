//! Frozen model artifacts on disk.
//!
//! An artifact directory holds `scaler.json` and `model.json`. Both are
//! read once at startup. Anything structurally wrong with them is reported
//! as [`InferenceError::ModelUnavailable`]; a feature-width mismatch is left
//! for the first call to report as `InvalidFeatureVector`.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::classifier::{LogisticModel, ProbabilisticClassifier};
use super::error::{InferenceError, InferenceResult};
use super::scaler::StandardScaler;
use crate::catalog::{CLASS_CATALOG, CLASS_COUNT};

pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "model.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ModelArtifacts {
    pub scaler: StandardScaler,
    pub model: LogisticModel,
}

impl ModelArtifacts {
    /// Read and check both artifacts from `dir`.
    pub fn load(dir: &Path) -> InferenceResult<Self> {
        let scaler_path = dir.join(SCALER_FILE);
        let model_path = dir.join(MODEL_FILE);

        let scaler: StandardScaler = read_json(&scaler_path)?;
        scaler
            .validate()
            .map_err(|reason| InferenceError::unavailable(&scaler_path, reason))?;

        let model: LogisticModel = read_json(&model_path)?;
        model
            .validate()
            .map_err(|reason| InferenceError::unavailable(&model_path, reason))?;
        check_label_encoding(&model).map_err(|reason| InferenceError::unavailable(&model_path, reason))?;

        tracing::info!(
            dir = %dir.display(),
            scaler_features = scaler.n_features(),
            model_features = model.n_features(),
            classes = model.n_classes(),
            "Loaded model artifacts"
        );

        Ok(Self { scaler, model })
    }
}

/// The model's outputs must line up with the class catalog position for
/// position.
fn check_label_encoding(model: &LogisticModel) -> Result<(), String> {
    if model.n_classes() != CLASS_COUNT {
        return Err(format!(
            "model has {} classes, catalog has {}",
            model.n_classes(),
            CLASS_COUNT
        ));
    }
    if let Some(classes) = &model.classes {
        if let Some((i, (found, wanted))) = classes
            .iter()
            .zip(CLASS_CATALOG)
            .enumerate()
            .find(|(_, (found, wanted))| found.as_str() != *wanted)
        {
            return Err(format!(
                "class {} is '{}' in the model but '{}' in the catalog",
                i, found, wanted
            ));
        }
    }
    Ok(())
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> InferenceResult<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| InferenceError::unavailable(path, e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| InferenceError::unavailable(path, e.to_string()))
}
