//! Inference pipeline
//!
//! ```text
//! StudentProfile ─encode→ FeatureVector(13) ─scale→ ─classify→ P(17) ─rank→ top 3
//! ```

pub mod artifacts;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod features;
pub mod scaler;

#[cfg(test)]
pub(crate) mod testing;

pub use artifacts::{ModelArtifacts, MODEL_FILE, SCALER_FILE};
pub use classifier::{LogisticModel, MultiClass, ProbabilisticClassifier};
pub use engine::{rank_top_k, CareerMatch, InferenceEngine, PredictionResult, TOP_K};
pub use error::{InferenceError, InferenceResult};
pub use features::{CanonicalScores, CanonicalSlot, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use scaler::StandardScaler;
