//! Wizard error types
//!
//! Validation failures are recoverable: the caller re-prompts the same
//! step and the session is left exactly as it was. Navigation failures
//! mean the requested move does not exist from the current step.

use thiserror::Error;

use super::state::WizardStep;
use crate::inference::InferenceError;
use crate::profile::{Background, Subject};

/// Result type alias for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;

/// Rejected step input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    EmptyName,

    #[error("Your average score is {average:.2}, below the passing average of {threshold}. Please aim to pass all subjects.")]
    BelowPassingAverage { average: f64, threshold: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRangeInput {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{subject} is not scored for the {background} background")]
    UnknownSubject {
        subject: Subject,
        background: Background,
    },

    #[error("Step {step} expects {expected} input")]
    StepMismatch {
        step: WizardStep,
        expected: &'static str,
    },
}

impl ValidationError {
    pub fn out_of_range(field: impl Into<String>, value: i64, (min, max): (i64, i64)) -> Self {
        Self::OutOfRangeInput {
            field: field.into(),
            value,
            min,
            max,
        }
    }
}

/// Requested move is not available from the current step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Already at the first step; there is nothing to go back to")]
    AtFirstStep,

    #[error("Already at the results step; restart or go back to revise scores")]
    AtFinalStep,

    #[error("Recommendations are only available once all answers are collected (current step: {current})")]
    NotAtResults { current: WizardStep },

    #[error("Invalid step transition from {from} to {to}")]
    IllegalTransition { from: WizardStep, to: WizardStep },
}

/// Errors that can occur while driving a wizard session
#[derive(Error, Debug)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl WizardError {
    /// Whether re-prompting the same step can fix this.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
