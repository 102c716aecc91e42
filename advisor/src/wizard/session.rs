//! Wizard session: the answers collected so far plus the step cursor.
//!
//! A session is a plain value owned by the caller. Transitions borrow the
//! current session and hand back a new one, so a rejected answer leaves
//! the caller holding the untouched original. Hosts serving several
//! students keep one session per student; nothing here is shared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{NavigationError, ValidationError, WizardResult};
use super::input::StepInput;
use super::state::{is_legal_transition, WizardStep};
use crate::inference::{InferenceEngine, PredictionResult};
use crate::profile::{
    subjects_for, StudentProfile, AGE_RANGE, DEFAULT_SUBJECT_SCORE, SCORE_RANGE,
    STUDY_HOURS_RANGE,
};

/// Minimum form average accepted at the score step.
pub const DEFAULT_PASSING_AVERAGE: f64 = 40.0;

/// Transition log length; older entries are dropped first.
pub const MAX_TRANSITIONS: usize = 64;

/// A single recorded step change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: WizardStep,
    pub to: WizardStep,
    pub at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSession {
    id: String,
    step: WizardStep,
    profile: StudentProfile,
    passing_average: f64,
    #[serde(default)]
    transitions: Vec<TransitionRecord>,
}

impl WizardSession {
    /// Start a fresh questionnaire at the name step.
    pub fn new() -> Self {
        Self::with_passing_average(DEFAULT_PASSING_AVERAGE)
    }

    /// Start a fresh questionnaire with a custom passing average.
    pub fn with_passing_average(passing_average: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            step: WizardStep::Name,
            profile: StudentProfile::default(),
            passing_average,
            transitions: Vec::new(),
        }
    }

    /// Drive a fresh session through every step with the answers in
    /// `profile`, applying the same validation as interactive entry. A
    /// missing age is checked as age 0.
    ///
    /// Entering the score step seeds the editor, so the replayed profile
    /// carries every background subject. Rank the caller's own profile
    /// when unanswered subjects must stay absent.
    pub fn replay(profile: &StudentProfile, passing_average: f64) -> WizardResult<Self> {
        let inputs = [
            StepInput::Name(profile.name.clone()),
            StepInput::Age(profile.age.map(i64::from).unwrap_or_default()),
            StepInput::Gender(profile.gender),
            StepInput::Background(profile.background),
            StepInput::PartTimeJob(profile.part_time_job),
            StepInput::Extracurricular(profile.extracurricular),
            StepInput::StudyHours(i64::from(profile.weekly_study_hours)),
            StepInput::scores(
                profile
                    .subject_scores
                    .iter()
                    .map(|(subject, score)| (*subject, i64::from(*score))),
            ),
        ];
        inputs
            .into_iter()
            .try_fold(Self::with_passing_average(passing_average), |session, input| {
                session.advance(input)
            })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// First 8 characters of the session id, for log lines.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    pub fn passing_average(&self) -> f64 {
        self.passing_average
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Total and average the score form displays.
    pub fn form_totals(&self) -> (u32, f64) {
        self.profile.form_totals()
    }

    /// Validate `input` for the current step and move one step forward.
    pub fn advance(&self, input: StepInput) -> WizardResult<WizardSession> {
        if self.step.is_terminal() {
            return Err(NavigationError::AtFinalStep.into());
        }
        if input.step() != self.step {
            return Err(ValidationError::StepMismatch {
                step: self.step,
                expected: StepInput::expected_for(self.step),
            }
            .into());
        }

        let mut next = self.clone();
        let reason = next.apply(input)?;
        let to = self.step.next().ok_or(NavigationError::AtFinalStep)?;
        if to == WizardStep::SubjectScores {
            seed_score_editor(&mut next.profile);
        }
        next.move_to(to, reason)?;
        Ok(next)
    }

    /// Step back one question. Answers already given are kept.
    pub fn retreat(&self) -> WizardResult<WizardSession> {
        let to = self.step.previous().ok_or(NavigationError::AtFirstStep)?;
        let mut next = self.clone();
        next.move_to(to, None)?;
        Ok(next)
    }

    /// Discard everything and start over at the name step.
    pub fn restart(&self) -> WizardSession {
        tracing::debug!(session = %self.short_id(), from = %self.step, "Restarting questionnaire");
        Self::with_passing_average(self.passing_average)
    }

    /// The finished profile, available only on the results step.
    pub fn completed_profile(&self) -> WizardResult<&StudentProfile> {
        if !self.step.is_terminal() {
            return Err(NavigationError::NotAtResults { current: self.step }.into());
        }
        Ok(&self.profile)
    }

    /// Run inference on the finished profile.
    pub fn recommend(&self, engine: &InferenceEngine) -> WizardResult<PredictionResult> {
        let profile = self.completed_profile()?;
        Ok(engine.recommend(profile)?)
    }

    fn move_to(&mut self, to: WizardStep, reason: Option<String>) -> WizardResult<()> {
        if !is_legal_transition(self.step, to) {
            return Err(NavigationError::IllegalTransition {
                from: self.step,
                to,
            }
            .into());
        }

        tracing::debug!(
            session = %self.short_id(),
            from = %self.step,
            to = %to,
            "Wizard transition"
        );

        if self.transitions.len() >= MAX_TRANSITIONS {
            self.transitions.remove(0);
        }
        self.transitions.push(TransitionRecord {
            from: self.step,
            to,
            at: Utc::now(),
            reason,
        });
        self.step = to;
        Ok(())
    }

    /// Write a validated answer into the profile. Returns a short note for
    /// the transition log.
    fn apply(&mut self, input: StepInput) -> Result<Option<String>, ValidationError> {
        let profile = &mut self.profile;
        match input {
            StepInput::Name(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::EmptyName);
                }
                profile.name = trimmed.to_string();
                Ok(None)
            }
            StepInput::Age(age) => {
                profile.age = Some(checked_u8("age", age, AGE_RANGE)?);
                Ok(None)
            }
            StepInput::Gender(gender) => {
                profile.gender = gender;
                Ok(None)
            }
            StepInput::Background(background) => {
                profile.background = background;
                Ok(Some(format!("background {}", background)))
            }
            StepInput::PartTimeJob(value) => {
                profile.part_time_job = value;
                Ok(None)
            }
            StepInput::Extracurricular(value) => {
                profile.extracurricular = value;
                Ok(None)
            }
            StepInput::StudyHours(hours) => {
                profile.weekly_study_hours =
                    checked_u8("weekly study hours", hours, STUDY_HOURS_RANGE)?;
                Ok(None)
            }
            StepInput::SubjectScores(scores) => {
                let mut candidate = profile.clone();
                seed_score_editor(&mut candidate);
                let allowed = subjects_for(candidate.background);
                for (subject, score) in scores {
                    if !allowed.contains(&subject) {
                        return Err(ValidationError::UnknownSubject {
                            subject,
                            background: candidate.background,
                        });
                    }
                    let score = checked_u8(subject.display_name(), score, SCORE_RANGE)?;
                    candidate.subject_scores.insert(subject, score);
                }

                let (total, average) = candidate.form_totals();
                if average < self.passing_average {
                    return Err(ValidationError::BelowPassingAverage {
                        average,
                        threshold: self.passing_average,
                    });
                }

                *profile = candidate;
                Ok(Some(format!("total {} average {:.2}", total, average)))
            }
        }
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Put the score form into the shape the background asks for: every
/// solicited subject present (at the editor default if new) and nothing
/// left over from a previously selected background.
fn seed_score_editor(profile: &mut StudentProfile) {
    let subjects = subjects_for(profile.background);
    profile.subject_scores.retain(|s, _| subjects.contains(s));
    for subject in subjects {
        profile
            .subject_scores
            .entry(*subject)
            .or_insert(DEFAULT_SUBJECT_SCORE);
    }
}

fn checked_u8(field: &str, value: i64, range: (i64, i64)) -> Result<u8, ValidationError> {
    if value < range.0 || value > range.1 {
        return Err(ValidationError::out_of_range(field, value, range));
    }
    u8::try_from(value).map_err(|_| ValidationError::out_of_range(field, value, range))
}
