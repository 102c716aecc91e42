//! Probabilistic classifiers
//!
//! The engine only needs a probability per class for one scaled vector;
//! [`ProbabilisticClassifier`] is that seam. [`LogisticModel`] is the
//! frozen linear model loaded from `model.json`.

use serde::{Deserialize, Serialize};

use super::error::{InferenceError, InferenceResult};

/// Anything that maps a scaled feature vector to a class distribution.
pub trait ProbabilisticClassifier: Send + Sync {
    /// Input width the classifier was fitted on.
    fn n_features(&self) -> usize;

    /// Number of classes in the output distribution.
    fn n_classes(&self) -> usize;

    /// Probability per class, in label-encoding order.
    fn predict_probabilities(&self, x: &[f64]) -> InferenceResult<Vec<f64>>;
}

/// How per-class scores become probabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiClass {
    /// Softmax over all class scores.
    #[default]
    Multinomial,
    /// Independent sigmoid per class, renormalized to sum to one.
    Ovr,
}

/// Linear model: `score_k = intercept_k + coefficients_k · x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub n_features: usize,
    /// Label for each output position, when the exporter recorded them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
    #[serde(default)]
    pub multi_class: MultiClass,
    /// One row per class, each `n_features` wide.
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LogisticModel {
    /// Structural check run once at load time.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("model has no classes".to_string());
        }
        if self.intercepts.len() != self.coefficients.len() {
            return Err(format!(
                "{} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            ));
        }
        if let Some((row, coef)) = self
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != self.n_features)
        {
            return Err(format!(
                "coefficient row {} has {} entries, expected {}",
                row,
                coef.len(),
                self.n_features
            ));
        }
        if let Some(classes) = &self.classes {
            if classes.len() != self.coefficients.len() {
                return Err(format!(
                    "{} class labels for {} coefficient rows",
                    classes.len(),
                    self.coefficients.len()
                ));
            }
        }
        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .all(|v| v.is_finite());
        if !all_finite {
            return Err("non-finite model parameter".to_string());
        }
        Ok(())
    }

    fn decision_scores(&self, x: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| b + row.iter().zip(x).map(|(w, v)| w * v).sum::<f64>())
            .collect()
    }
}

impl ProbabilisticClassifier for LogisticModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn n_classes(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_probabilities(&self, x: &[f64]) -> InferenceResult<Vec<f64>> {
        if x.len() != self.n_features {
            return Err(InferenceError::dimension(
                "classifier",
                self.n_features,
                x.len(),
            ));
        }
        let scores = self.decision_scores(x);
        Ok(match self.multi_class {
            MultiClass::Multinomial => softmax(&scores),
            MultiClass::Ovr => normalized_sigmoid(&scores),
        })
    }
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

fn normalized_sigmoid(scores: &[f64]) -> Vec<f64> {
    let sig: Vec<f64> = scores.iter().map(|s| 1.0 / (1.0 + (-s).exp())).collect();
    let sum: f64 = sig.iter().sum();
    if sum == 0.0 {
        return vec![1.0 / sig.len() as f64; sig.len()];
    }
    sig.into_iter().map(|p| p / sum).collect()
}
