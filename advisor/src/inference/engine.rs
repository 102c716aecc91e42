//! Inference engine: encode, scale, classify, rank.
//!
//! Built once from frozen artifacts and shared read-only (`Arc`) by every
//! session in the process.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::artifacts::ModelArtifacts;
use super::classifier::ProbabilisticClassifier;
use super::error::{InferenceError, InferenceResult};
use super::features::{CanonicalScores, FeatureVector};
use super::scaler::StandardScaler;
use crate::catalog::{class_label, CLASS_COUNT};
use crate::profile::StudentProfile;

/// How many careers a recommendation lists.
pub const TOP_K: usize = 3;

/// One ranked career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub label: String,
    /// Position in the class catalog.
    pub class_index: usize,
    pub probability: f64,
}

impl CareerMatch {
    /// Probability as a percentage with one decimal, e.g. `"42.5%"`.
    pub fn percentage(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }
}

/// Top-k careers, most probable first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub matches: Vec<CareerMatch>,
}

impl PredictionResult {
    pub fn top(&self) -> Option<&CareerMatch> {
        self.matches.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CareerMatch> {
        self.matches.iter()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

pub struct InferenceEngine {
    scaler: StandardScaler,
    classifier: Box<dyn ProbabilisticClassifier>,
}

impl std::fmt::Debug for InferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceEngine")
            .field("scaler_features", &self.scaler.n_features())
            .field("classifier_features", &self.classifier.n_features())
            .field("classes", &self.classifier.n_classes())
            .finish()
    }
}

impl InferenceEngine {
    /// Load `scaler.json` and `model.json` from `dir`.
    pub fn load(dir: &Path) -> InferenceResult<Self> {
        let ModelArtifacts { scaler, model } = ModelArtifacts::load(dir)?;
        Ok(Self::new(scaler, Box::new(model)))
    }

    pub fn new(scaler: StandardScaler, classifier: Box<dyn ProbabilisticClassifier>) -> Self {
        Self { scaler, classifier }
    }

    /// Rank careers for a completed profile.
    pub fn recommend(&self, profile: &StudentProfile) -> InferenceResult<PredictionResult> {
        let scores = CanonicalScores::resolve(profile);
        let features = FeatureVector::from_parts(profile, &scores);
        let probabilities = self.predict_probabilities(&features)?;
        let matches = rank_top_k(&probabilities, TOP_K);

        tracing::debug!(
            total = scores.total(),
            average = scores.average(),
            top = matches.first().map(|m| m.label.as_str()).unwrap_or("-"),
            "Computed recommendation"
        );

        Ok(PredictionResult { matches })
    }

    /// Full class distribution for an encoded vector.
    pub fn predict_probabilities(&self, features: &FeatureVector) -> InferenceResult<Vec<f64>> {
        let scaled = self.scaler.transform(features.as_slice())?;
        let probabilities = self.classifier.predict_probabilities(&scaled)?;
        if probabilities.len() != CLASS_COUNT {
            return Err(InferenceError::dimension(
                "class distribution",
                CLASS_COUNT,
                probabilities.len(),
            ));
        }
        Ok(probabilities)
    }
}

/// Highest `k` probabilities, descending. Equal probabilities keep catalog
/// order, so the lower index wins a tie.
pub fn rank_top_k(probabilities: &[f64], k: usize) -> Vec<CareerMatch> {
    let mut ranked: Vec<(usize, f64)> = probabilities.iter().copied().enumerate().collect();
    // sort_by is stable.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .filter_map(|(class_index, probability)| {
            class_label(class_index).map(|label| CareerMatch {
                label: label.to_string(),
                class_index,
                probability,
            })
        })
        .take(k)
        .collect()
}
