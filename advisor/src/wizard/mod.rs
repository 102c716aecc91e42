//! Questionnaire state machine
//!
//! Nine linear steps collect a [`StudentProfile`](crate::profile::StudentProfile).
//! Each forward move validates the answer for the current step; each step
//! after the first can go back; the results step gates inference.

pub mod error;
pub mod input;
pub mod session;
pub mod state;

pub use error::{NavigationError, ValidationError, WizardError, WizardResult};
pub use input::StepInput;
pub use session::{TransitionRecord, WizardSession, DEFAULT_PASSING_AVERAGE, MAX_TRANSITIONS};
pub use state::WizardStep;
