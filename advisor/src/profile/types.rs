//! Student profile collected by the questionnaire.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::subjects::{subjects_for, Subject};

/// Inclusive bounds for the age question.
pub const AGE_RANGE: (i64, i64) = (10, 100);
/// Inclusive bounds for weekly self-study hours.
pub const STUDY_HOURS_RANGE: (i64, i64) = (0, 100);
/// Inclusive bounds for a single subject score.
pub const SCORE_RANGE: (i64, i64) = (0, 100);
/// Value the score editor starts every subject at.
pub const DEFAULT_SUBJECT_SCORE: u8 = 50;
/// Study hours shown before the student touches the slider.
pub const DEFAULT_STUDY_HOURS: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Model encoding: Female → 1, Male → 0.
    pub fn encoded(self) -> f64 {
        match self {
            Self::Female => 1.0,
            Self::Male => 0.0,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(ParseChoiceError::new("gender", s)),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = ParseChoiceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Academic track; decides which subjects the score form asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Background {
    #[default]
    #[serde(rename = "Pre-Medical")]
    PreMedical,
    #[serde(rename = "Pre-Engineering")]
    PreEngineering,
    #[serde(rename = "ICS")]
    Ics,
    #[serde(rename = "Arts")]
    Arts,
    #[serde(rename = "Commerce")]
    Commerce,
}

impl Background {
    /// In the order the background question lists them.
    pub const ALL: [Background; 5] = [
        Self::PreMedical,
        Self::PreEngineering,
        Self::Ics,
        Self::Arts,
        Self::Commerce,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PreMedical => "Pre-Medical",
            Self::PreEngineering => "Pre-Engineering",
            Self::Ics => "ICS",
            Self::Arts => "Arts",
            Self::Commerce => "Commerce",
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Background {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseChoiceError::new("background", s))
    }
}

impl TryFrom<String> for Background {
    type Error = ParseChoiceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Text that did not match any option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {field}")]
pub struct ParseChoiceError {
    pub field: &'static str,
    pub value: String,
}

impl ParseChoiceError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Everything the questionnaire collects about one student.
///
/// `Default` is the state of a freshly started questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub part_time_job: bool,
    #[serde(default)]
    pub extracurricular: bool,
    #[serde(default = "default_study_hours")]
    pub weekly_study_hours: u8,
    #[serde(default)]
    pub subject_scores: BTreeMap<Subject, u8>,
}

fn default_study_hours() -> u8 {
    DEFAULT_STUDY_HOURS
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: None,
            gender: Gender::default(),
            background: Background::default(),
            part_time_job: false,
            extracurricular: false,
            weekly_study_hours: DEFAULT_STUDY_HOURS,
            subject_scores: BTreeMap::new(),
        }
    }
}

impl StudentProfile {
    /// Score for `subject`, only if it belongs to the selected background.
    pub fn score_for(&self, subject: Subject) -> Option<u8> {
        if !subjects_for(self.background).contains(&subject) {
            return None;
        }
        self.subject_scores.get(&subject).copied()
    }

    /// Form-side total and average over the background's own subjects,
    /// with unanswered subjects counted at the editor default.
    ///
    /// This is what the student sees on the score form. The model input
    /// recomputes its own total over the canonical slots.
    pub fn form_totals(&self) -> (u32, f64) {
        let subjects = subjects_for(self.background);
        let total: u32 = subjects
            .iter()
            .map(|s| u32::from(self.score_for(*s).unwrap_or(DEFAULT_SUBJECT_SCORE)))
            .sum();
        (total, f64::from(total) / subjects.len() as f64)
    }
}
