//! Answers submitted at each step.
//!
//! Numeric answers arrive unconstrained (`i64`) because the front end may
//! be a plain text prompt; the session enforces the ranges.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::state::WizardStep;
use crate::profile::{Background, Gender, Subject};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", content = "value", rename_all = "snake_case")]
pub enum StepInput {
    Name(String),
    Age(i64),
    Gender(Gender),
    Background(Background),
    PartTimeJob(bool),
    Extracurricular(bool),
    StudyHours(i64),
    /// Scores for the background's subjects. Subjects left out keep the
    /// value already shown in the editor.
    SubjectScores(BTreeMap<Subject, i64>),
}

impl StepInput {
    /// The step this answer belongs to.
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Name(_) => WizardStep::Name,
            Self::Age(_) => WizardStep::Age,
            Self::Gender(_) => WizardStep::Gender,
            Self::Background(_) => WizardStep::Background,
            Self::PartTimeJob(_) => WizardStep::PartTimeJob,
            Self::Extracurricular(_) => WizardStep::Extracurricular,
            Self::StudyHours(_) => WizardStep::StudyHours,
            Self::SubjectScores(_) => WizardStep::SubjectScores,
        }
    }

    /// Description of the input kind a step expects, for error messages.
    pub fn expected_for(step: WizardStep) -> &'static str {
        match step {
            WizardStep::Name => "a name",
            WizardStep::Age => "an age",
            WizardStep::Gender => "a gender",
            WizardStep::Background => "a background",
            WizardStep::PartTimeJob => "a yes/no part-time job answer",
            WizardStep::Extracurricular => "a yes/no extracurricular answer",
            WizardStep::StudyHours => "weekly study hours",
            WizardStep::SubjectScores => "subject scores",
            WizardStep::Results => "no",
        }
    }

    /// Build a score answer from `(subject, score)` pairs.
    pub fn scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (Subject, i64)>,
    {
        Self::SubjectScores(scores.into_iter().collect())
    }
}
