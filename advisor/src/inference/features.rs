//! Feature encoding
//!
//! Turns a [`StudentProfile`] into the fixed 13-wide vector the classifier
//! was trained on:
//!
//! ```text
//! [gender, part_time_job, extracurricular, weekly_study_hours,
//!  math, history, physics, chemistry, biology, english, geography,
//!  total, average]
//! ```
//!
//! The seven score columns are canonical slots. Each slot is filled from
//! the first subject in its fallback chain that the student's background
//! actually scores, or 50 when none applies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::{StudentProfile, Subject, DEFAULT_SUBJECT_SCORE};

/// Number of model input columns.
pub const FEATURE_COUNT: usize = 13;

/// Column names, in vector order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "gender",
    "part_time_job",
    "extracurricular_activities",
    "weekly_self_study_hours",
    "math_score",
    "history_score",
    "physics_score",
    "chemistry_score",
    "biology_score",
    "english_score",
    "geography_score",
    "total_score",
    "average_score",
];

/// The seven academic dimensions the classifier knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalSlot {
    Math,
    History,
    Physics,
    Chemistry,
    Biology,
    English,
    Geography,
}

impl CanonicalSlot {
    pub const ALL: [CanonicalSlot; 7] = [
        Self::Math,
        Self::History,
        Self::Physics,
        Self::Chemistry,
        Self::Biology,
        Self::English,
        Self::Geography,
    ];

    /// Subjects that may stand in for this slot, most specific first.
    pub fn fallback_chain(self) -> &'static [Subject] {
        match self {
            Self::Math => &[Subject::Mathematics, Subject::GeneralMathematics],
            Self::History => &[Subject::EnglishLiterature],
            Self::Physics => &[Subject::Physics, Subject::Statistics],
            Self::Chemistry => &[Subject::Chemistry, Subject::Economics],
            Self::Biology => &[Subject::Biology, Subject::Psychology],
            Self::English => &[Subject::English],
            Self::Geography => &[Subject::MotaleQuran, Subject::Islamiat],
        }
    }

    /// Column header used in exported records.
    pub fn label(self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::History => "History",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::English => "English",
            Self::Geography => "Geography",
        }
    }
}

impl fmt::Display for CanonicalSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Canonical slot values for one profile plus their total and average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalScores {
    values: [u8; 7],
}

impl CanonicalScores {
    /// Resolve every slot through its fallback chain.
    pub fn resolve(profile: &StudentProfile) -> Self {
        let mut values = [DEFAULT_SUBJECT_SCORE; 7];
        for (value, slot) in values.iter_mut().zip(CanonicalSlot::ALL) {
            *value = slot
                .fallback_chain()
                .iter()
                .find_map(|subject| profile.score_for(*subject))
                .unwrap_or(DEFAULT_SUBJECT_SCORE);
        }
        Self { values }
    }

    pub fn get(&self, slot: CanonicalSlot) -> u8 {
        self.values[slot as usize]
    }

    /// Values in canonical slot order.
    pub fn values(&self) -> [u8; 7] {
        self.values
    }

    pub fn total(&self) -> u32 {
        self.values.iter().map(|v| u32::from(*v)).sum()
    }

    pub fn average(&self) -> f64 {
        f64::from(self.total()) / self.values.len() as f64
    }
}

/// Raw (unscaled) model input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Encode a profile. Pure: the same profile always yields the same
    /// vector.
    pub fn encode(profile: &StudentProfile) -> Self {
        Self::from_parts(profile, &CanonicalScores::resolve(profile))
    }

    /// Encode with slot values that were already resolved.
    pub fn from_parts(profile: &StudentProfile, scores: &CanonicalScores) -> Self {
        let mut v = [0.0; FEATURE_COUNT];
        v[0] = profile.gender.encoded();
        v[1] = flag(profile.part_time_job);
        v[2] = flag(profile.extracurricular);
        v[3] = f64::from(profile.weekly_study_hours);
        for (dst, value) in v[4..11].iter_mut().zip(scores.values()) {
            *dst = f64::from(value);
        }
        v[11] = f64::from(scores.total());
        v[12] = scores.average();
        Self(v)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Background, Gender};

    fn arts_profile() -> StudentProfile {
        let mut profile = StudentProfile {
            name: "Sana".into(),
            age: Some(18),
            gender: Gender::Female,
            background: Background::Arts,
            part_time_job: true,
            extracurricular: false,
            weekly_study_hours: 14,
            ..Default::default()
        };
        for (subject, score) in [
            (Subject::GeneralMathematics, 70),
            (Subject::EnglishLiterature, 65),
            (Subject::Psychology, 80),
            (Subject::English, 60),
            (Subject::Islamiat, 55),
        ] {
            profile.subject_scores.insert(subject, score);
        }
        profile
    }

    #[test]
    fn test_arts_fallback_resolution() {
        let scores = CanonicalScores::resolve(&arts_profile());
        assert_eq!(scores.values(), [70, 65, 50, 50, 80, 60, 55]);
        assert_eq!(scores.total(), 430);
        assert!((scores.average() - 61.43).abs() < 0.005);
    }

    #[test]
    fn test_commerce_stands_in_for_sciences() {
        let mut profile = StudentProfile {
            background: Background::Commerce,
            ..Default::default()
        };
        profile.subject_scores.insert(Subject::Mathematics, 90);
        profile.subject_scores.insert(Subject::Statistics, 81);
        profile.subject_scores.insert(Subject::Economics, 72);
        profile.subject_scores.insert(Subject::MotaleQuran, 64);
        profile.subject_scores.insert(Subject::Islamiat, 33);
        let scores = CanonicalScores::resolve(&profile);
        assert_eq!(scores.get(CanonicalSlot::Math), 90);
        assert_eq!(scores.get(CanonicalSlot::Physics), 81);
        assert_eq!(scores.get(CanonicalSlot::Chemistry), 72);
        assert_eq!(scores.get(CanonicalSlot::Biology), 50);
        // First present key wins.
        assert_eq!(scores.get(CanonicalSlot::Geography), 64);
    }

    #[test]
    fn test_foreign_subject_is_not_used() {
        // A stale Physics score from another background must not leak in.
        let mut profile = StudentProfile {
            background: Background::Arts,
            ..Default::default()
        };
        profile.subject_scores.insert(Subject::Physics, 99);
        let scores = CanonicalScores::resolve(&profile);
        assert_eq!(scores.get(CanonicalSlot::Physics), 50);
    }

    #[test]
    fn test_empty_profile_defaults_every_slot() {
        let scores = CanonicalScores::resolve(&StudentProfile::default());
        assert_eq!(scores.values(), [50; 7]);
        assert_eq!(scores.total(), 350);
        assert_eq!(scores.average(), 50.0);
    }

    #[test]
    fn test_vector_layout() {
        let v = FeatureVector::encode(&arts_profile());
        let s = v.as_slice();
        assert_eq!(s.len(), FEATURE_COUNT);
        assert_eq!(&s[..4], &[1.0, 1.0, 0.0, 14.0]);
        assert_eq!(&s[4..11], &[70.0, 65.0, 50.0, 50.0, 80.0, 60.0, 55.0]);
        assert_eq!(s[11], 430.0);
        assert!((s[12] - 430.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_encoding_is_repeatable() {
        let profile = arts_profile();
        let a = FeatureVector::encode(&profile);
        let b = FeatureVector::encode(&profile);
        assert_eq!(
            a.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
            b.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_slot_order_matches_feature_names() {
        for (i, slot) in CanonicalSlot::ALL.iter().enumerate() {
            let name = FEATURE_NAMES[4 + i];
            assert!(name.starts_with(&slot.label().to_lowercase()), "{name}");
        }
    }
}
