//! Student profile model: answers, backgrounds and the subjects each
//! background is scored on.

pub mod subjects;
pub mod types;

pub use subjects::{subjects_for, Subject, UnknownSubjectKey};
pub use types::*;
