//! Fixtures shared by the inference unit tests.

use std::fs;
use std::path::Path;

use super::artifacts::{MODEL_FILE, SCALER_FILE};
use super::classifier::{LogisticModel, MultiClass, ProbabilisticClassifier};
use super::error::{InferenceError, InferenceResult};
use super::scaler::StandardScaler;
use crate::catalog::{CLASS_CATALOG, CLASS_COUNT};

/// Deterministic artifacts of the given input width.
pub fn sample_artifacts(n_features: usize) -> (StandardScaler, LogisticModel) {
    let mean = (0..n_features).map(|j| (j % 5) as f64 * 10.0).collect();
    let scale = (0..n_features).map(|j| 1.0 + (j % 3) as f64).collect();
    let coefficients = (0..CLASS_COUNT)
        .map(|k| {
            (0..n_features)
                .map(|j| ((k * 7 + j * 3) % 11) as f64 / 50.0 - 0.1)
                .collect()
        })
        .collect();
    let intercepts = (0..CLASS_COUNT).map(|k| k as f64 * 0.01).collect();
    let model = LogisticModel {
        n_features,
        classes: Some(CLASS_CATALOG.iter().map(|c| c.to_string()).collect()),
        multi_class: MultiClass::Multinomial,
        coefficients,
        intercepts,
    };
    (StandardScaler::new(mean, scale), model)
}

pub fn write_artifacts(dir: &Path, n_features: usize) {
    let (scaler, model) = sample_artifacts(n_features);
    fs::write(
        dir.join(SCALER_FILE),
        serde_json::to_string_pretty(&scaler).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(MODEL_FILE),
        serde_json::to_string_pretty(&model).unwrap(),
    )
    .unwrap();
}

/// Classifier that ignores its input and returns a fixed distribution.
pub struct FixedDistribution {
    n_features: usize,
    distribution: Vec<f64>,
}

impl FixedDistribution {
    pub fn new(n_features: usize, distribution: Vec<f64>) -> Self {
        Self {
            n_features,
            distribution,
        }
    }
}

impl ProbabilisticClassifier for FixedDistribution {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn n_classes(&self) -> usize {
        self.distribution.len()
    }

    fn predict_probabilities(&self, x: &[f64]) -> InferenceResult<Vec<f64>> {
        if x.len() != self.n_features {
            return Err(InferenceError::dimension(
                "classifier",
                self.n_features,
                x.len(),
            ));
        }
        Ok(self.distribution.clone())
    }
}
