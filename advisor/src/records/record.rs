//! One saved questionnaire result.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::inference::{CanonicalScores, CanonicalSlot, PredictionResult};
use crate::profile::StudentProfile;

/// Timestamp column format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Placeholder when no recommendation was available.
pub const NOT_AVAILABLE: &str = "N/A";

/// A flattened row of the record store. Scores are the canonical slot
/// values the model saw, not the raw background subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: Option<u8>,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Background")]
    pub background: String,
    #[serde(rename = "Part-Time Job")]
    pub part_time_job: String,
    #[serde(rename = "Extracurricular Activities")]
    pub extracurricular: String,
    #[serde(rename = "Weekly Study Hours")]
    pub weekly_study_hours: u8,
    #[serde(rename = "Math")]
    pub math: u8,
    #[serde(rename = "History")]
    pub history: u8,
    #[serde(rename = "Physics")]
    pub physics: u8,
    #[serde(rename = "Chemistry")]
    pub chemistry: u8,
    #[serde(rename = "Biology")]
    pub biology: u8,
    #[serde(rename = "English")]
    pub english: u8,
    #[serde(rename = "Geography")]
    pub geography: u8,
    #[serde(rename = "Total Score")]
    pub total_score: u32,
    #[serde(rename = "Average Score")]
    pub average_score: f64,
    #[serde(rename = "Top Career Match")]
    pub top_career_match: String,
    #[serde(rename = "Career Match Score")]
    pub career_match_score: String,
}

impl StudentRecord {
    /// Build a row stamped with the current local time.
    pub fn new(profile: &StudentProfile, prediction: Option<&PredictionResult>) -> Self {
        Self::at(Local::now(), profile, prediction)
    }

    pub fn at(
        timestamp: DateTime<Local>,
        profile: &StudentProfile,
        prediction: Option<&PredictionResult>,
    ) -> Self {
        let scores = CanonicalScores::resolve(profile);
        let top = prediction.and_then(PredictionResult::top);
        Self {
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            name: profile.name.clone(),
            age: profile.age,
            gender: profile.gender.to_string(),
            background: profile.background.to_string(),
            part_time_job: yes_no(profile.part_time_job),
            extracurricular: yes_no(profile.extracurricular),
            weekly_study_hours: profile.weekly_study_hours,
            math: scores.get(CanonicalSlot::Math),
            history: scores.get(CanonicalSlot::History),
            physics: scores.get(CanonicalSlot::Physics),
            chemistry: scores.get(CanonicalSlot::Chemistry),
            biology: scores.get(CanonicalSlot::Biology),
            english: scores.get(CanonicalSlot::English),
            geography: scores.get(CanonicalSlot::Geography),
            total_score: scores.total(),
            average_score: scores.average(),
            top_career_match: top
                .map(|m| m.label.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            career_match_score: top
                .map(|m| m.percentage())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}
