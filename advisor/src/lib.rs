//! Career Path Advisor Library
//!
//! This library provides:
//! - A nine-step questionnaire state machine that collects a student profile
//! - Deterministic encoding of that profile into a 13-feature vector
//! - Top-3 career inference from frozen scaler and classifier artifacts
//! - Static career and degree-program catalogs keyed by background
//!
//! # Modules
//!
//! - `wizard`: `WizardSession` with `advance`, `retreat`, `restart`
//! - `inference`: `InferenceEngine::recommend` and the artifact loaders
//! - `catalog`: the 17 career labels and the program lists
//! - `records`: CSV record store for finished questionnaires
//! - `config`: `AdvisorConfig` (TOML plus environment)
//! - `maintenance`: `resave_artifacts`, a one-off artifact rewrite
//!
//! # Usage
//!
//! ```no_run
//! use advisor::{InferenceEngine, StepInput, WizardSession};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = InferenceEngine::load(Path::new("model"))?;
//! let session = WizardSession::new().advance(StepInput::Name("Ana".into()))?;
//! // ... answer the remaining steps ...
//! # let _ = (&engine, &session);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod inference;
pub mod maintenance;
pub mod profile;
pub mod records;
pub mod wizard;

pub use catalog::{programs_for, ProgramList, CLASS_CATALOG, CLASS_COUNT};
pub use config::{AdvisorConfig, ConfigError};
pub use inference::{
    CareerMatch, FeatureVector, InferenceEngine, InferenceError, PredictionResult, TOP_K,
};
pub use maintenance::{resave_artifacts, MaintenanceError, ResaveOutcome};
pub use profile::{Background, Gender, StudentProfile, Subject};
pub use records::{PersistenceError, RecordStore, StudentRecord};
pub use wizard::{StepInput, WizardError, WizardSession, WizardStep};
