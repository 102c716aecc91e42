//! Wizard steps and the legal edges between them.
//!
//! ```text
//! Name → Age → Gender → Background → PartTimeJob → Extracurricular
//!      → StudyHours → SubjectScores → Results
//! ```
//!
//! Every forward edge is validated by the session. Every step except
//! `Name` has an unconditional back edge, and `Results` can also restart.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Name,
    Age,
    Gender,
    Background,
    PartTimeJob,
    Extracurricular,
    StudyHours,
    SubjectScores,
    /// Terminal step; inference runs here.
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 9] = [
        Self::Name,
        Self::Age,
        Self::Gender,
        Self::Background,
        Self::PartTimeJob,
        Self::Extracurricular,
        Self::StudyHours,
        Self::SubjectScores,
        Self::Results,
    ];

    /// 1-based position shown to the student ("Step 3 of 9").
    pub fn number(self) -> u8 {
        match self {
            Self::Name => 1,
            Self::Age => 2,
            Self::Gender => 3,
            Self::Background => 4,
            Self::PartTimeJob => 5,
            Self::Extracurricular => 6,
            Self::StudyHours => 7,
            Self::SubjectScores => 8,
            Self::Results => 9,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Results
    }

    /// Question asked at this step.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Name => "What is your name?",
            Self::Age => "What is your age?",
            Self::Gender => "What is your gender?",
            Self::Background => "What is your academic background?",
            Self::PartTimeJob => "Do you have a part-time job?",
            Self::Extracurricular => "Do you participate in extracurricular activities?",
            Self::StudyHours => "How many hours do you study per week?",
            Self::SubjectScores => "Enter your subject scores",
            Self::Results => "Your Career Path Recommendations",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "Name"),
            Self::Age => write!(f, "Age"),
            Self::Gender => write!(f, "Gender"),
            Self::Background => write!(f, "Background"),
            Self::PartTimeJob => write!(f, "PartTimeJob"),
            Self::Extracurricular => write!(f, "Extracurricular"),
            Self::StudyHours => write!(f, "StudyHours"),
            Self::SubjectScores => write!(f, "SubjectScores"),
            Self::Results => write!(f, "Results"),
        }
    }
}

/// Edges of the step graph. Only one step forward or one step back, plus
/// restart from `Results`.
pub(crate) fn is_legal_transition(from: WizardStep, to: WizardStep) -> bool {
    if from == WizardStep::Results && to == WizardStep::Name {
        return true;
    }
    from.next() == Some(to) || from.previous() == Some(to)
}
