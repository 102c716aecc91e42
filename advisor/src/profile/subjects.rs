//! Subjects solicited by the score form, keyed by academic background.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::Background;

/// Every subject any background asks about.
///
/// The serialized key is the lowercase subject name with spaces replaced
/// by underscores (`general_mathematics`, `motal-e-quran`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "mathematics")]
    Mathematics,
    #[serde(rename = "general_mathematics")]
    GeneralMathematics,
    #[serde(rename = "physics")]
    Physics,
    #[serde(rename = "chemistry")]
    Chemistry,
    #[serde(rename = "biology")]
    Biology,
    #[serde(rename = "computer_science")]
    ComputerScience,
    #[serde(rename = "english_literature")]
    EnglishLiterature,
    #[serde(rename = "psychology")]
    Psychology,
    #[serde(rename = "statistics")]
    Statistics,
    #[serde(rename = "economics")]
    Economics,
    #[serde(rename = "urdu")]
    Urdu,
    #[serde(rename = "english")]
    English,
    #[serde(rename = "motal-e-quran")]
    MotaleQuran,
    #[serde(rename = "islamiat")]
    Islamiat,
}

impl Subject {
    pub const ALL: [Subject; 14] = [
        Self::Mathematics,
        Self::GeneralMathematics,
        Self::Physics,
        Self::Chemistry,
        Self::Biology,
        Self::ComputerScience,
        Self::EnglishLiterature,
        Self::Psychology,
        Self::Statistics,
        Self::Economics,
        Self::Urdu,
        Self::English,
        Self::MotaleQuran,
        Self::Islamiat,
    ];

    /// Human-readable name shown on the score form.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mathematics => "Mathematics",
            Self::GeneralMathematics => "General Mathematics",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::ComputerScience => "Computer Science",
            Self::EnglishLiterature => "English Literature",
            Self::Psychology => "Psychology",
            Self::Statistics => "Statistics",
            Self::Economics => "Economics",
            Self::Urdu => "Urdu",
            Self::English => "English",
            Self::MotaleQuran => "Motal-e-Quran",
            Self::Islamiat => "Islamiat",
        }
    }

    /// Stable lookup key used in score maps and JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Mathematics => "mathematics",
            Self::GeneralMathematics => "general_mathematics",
            Self::Physics => "physics",
            Self::Chemistry => "chemistry",
            Self::Biology => "biology",
            Self::ComputerScience => "computer_science",
            Self::EnglishLiterature => "english_literature",
            Self::Psychology => "psychology",
            Self::Statistics => "statistics",
            Self::Economics => "economics",
            Self::Urdu => "urdu",
            Self::English => "english",
            Self::MotaleQuran => "motal-e-quran",
            Self::Islamiat => "islamiat",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when text does not name a known subject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subject: {0}")]
pub struct UnknownSubjectKey(pub String);

impl FromStr for Subject {
    type Err = UnknownSubjectKey;

    /// Accepts either the key (`english_literature`) or the display name
    /// (`English Literature`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "_");
        Self::ALL
            .into_iter()
            .find(|subject| subject.key() == normalized)
            .ok_or_else(|| UnknownSubjectKey(s.to_string()))
    }
}

const ICS: [Subject; 7] = [
    Subject::Mathematics,
    Subject::Physics,
    Subject::ComputerScience,
    Subject::Urdu,
    Subject::English,
    Subject::MotaleQuran,
    Subject::Islamiat,
];

const PRE_MEDICAL: [Subject; 7] = [
    Subject::Mathematics,
    Subject::Biology,
    Subject::Chemistry,
    Subject::Urdu,
    Subject::English,
    Subject::MotaleQuran,
    Subject::Islamiat,
];

const PRE_ENGINEERING: [Subject; 7] = [
    Subject::Mathematics,
    Subject::Physics,
    Subject::Chemistry,
    Subject::Urdu,
    Subject::English,
    Subject::MotaleQuran,
    Subject::Islamiat,
];

const ARTS: [Subject; 7] = [
    Subject::GeneralMathematics,
    Subject::EnglishLiterature,
    Subject::Psychology,
    Subject::Urdu,
    Subject::English,
    Subject::MotaleQuran,
    Subject::Islamiat,
];

const COMMERCE: [Subject; 7] = [
    Subject::Mathematics,
    Subject::Statistics,
    Subject::Economics,
    Subject::Urdu,
    Subject::English,
    Subject::MotaleQuran,
    Subject::Islamiat,
];

/// Ordered subjects the score form asks for, given a background.
pub fn subjects_for(background: Background) -> &'static [Subject] {
    match background {
        Background::Ics => &ICS,
        Background::PreMedical => &PRE_MEDICAL,
        Background::PreEngineering => &PRE_ENGINEERING,
        Background::Arts => &ARTS,
        Background::Commerce => &COMMERCE,
    }
}
