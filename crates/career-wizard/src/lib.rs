//! Terminal front end for the career path advisor.
//!
//! - `console`: the interactive questionnaire loop
//! - `render`: plain-text formatting of steps, programs and results

pub mod console;
pub mod render;

use advisor::{InferenceEngine, PredictionResult, StudentProfile, WizardSession};
use anyhow::{Context, Result};

pub use console::{Console, ConsoleError, ExitReason};

/// Validate a profile given as JSON and rank careers for it.
///
/// The profile is replayed through a questionnaire session, so the same
/// range and passing-average checks apply as for interactive entry. The
/// ranking is computed from the profile as given: subjects it leaves out
/// are not filled in at the editor default before slot resolution.
pub fn recommend_json(
    engine: &InferenceEngine,
    json: &str,
    passing_average: f64,
) -> Result<PredictionResult> {
    let profile: StudentProfile =
        serde_json::from_str(json).context("Profile is not valid StudentProfile JSON")?;
    let session = WizardSession::replay(&profile, passing_average)
        .context("Profile failed questionnaire validation")?;
    tracing::debug!(session = %session.short_id(), "Profile passed validation");
    let prediction = engine
        .recommend(&profile)
        .context("Recommendation failed")?;
    Ok(prediction)
}
