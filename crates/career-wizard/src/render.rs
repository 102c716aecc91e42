//! Plain-text rendering for the terminal front end.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use advisor::profile::subjects_for;
use advisor::{PredictionResult, ProgramList, StudentProfile, Subject, WizardStep};

const STEP_COUNT: usize = WizardStep::ALL.len();

/// `"Step 3 of 9: Gender"` plus a progress bar.
pub fn step_header(step: WizardStep) -> String {
    let filled = step.number() as usize;
    format!(
        "\n[{}{}] Step {} of {}: {}",
        "#".repeat(filled),
        "-".repeat(STEP_COUNT - filled),
        step.number(),
        STEP_COUNT,
        step
    )
}

pub fn profile_summary(profile: &StudentProfile) -> String {
    let mut out = String::new();
    let yes_no = |b: bool| if b { "Yes" } else { "No" };
    let _ = writeln!(out, "Profile summary");
    let _ = writeln!(out, "  Name:               {}", profile.name);
    let _ = writeln!(
        out,
        "  Age:                {}",
        profile.age.map(|a| a.to_string()).unwrap_or_default()
    );
    let _ = writeln!(out, "  Gender:             {}", profile.gender);
    let _ = writeln!(out, "  Background:         {}", profile.background);
    let _ = writeln!(out, "  Part-time job:      {}", yes_no(profile.part_time_job));
    let _ = writeln!(out, "  Extracurricular:    {}", yes_no(profile.extracurricular));
    let _ = writeln!(out, "  Weekly study hours: {}", profile.weekly_study_hours);
    for subject in subjects_for(profile.background) {
        let _ = writeln!(
            out,
            "  {:<20}{}",
            format!("{}:", subject.display_name()),
            profile.score_for(*subject).unwrap_or_default()
        );
    }
    let (total, average) = profile.form_totals();
    let _ = write!(out, "  Total {} / average {:.2}", total, average);
    out
}

/// Running totals shown under the score form, computed from the raw
/// answers before the session checks them.
pub fn form_totals(scores: &BTreeMap<Subject, i64>) -> String {
    let total: i64 = scores.values().sum();
    let average = total as f64 / scores.len().max(1) as f64;
    format!("Total score: {}  Average score: {:.2}", total, average)
}

pub fn program_list(list: &ProgramList) -> String {
    let mut out = format!("{} {}", list.icon, list.title);
    for program in list.programs {
        let _ = write!(out, "\n  - {}", program);
    }
    out
}

pub fn prediction(result: &PredictionResult) -> String {
    let mut out = String::from("Top career matches");
    for (rank, m) in result.iter().enumerate() {
        let _ = write!(out, "\n  {}. {:<24} {:>6}", rank + 1, m.label, m.percentage());
    }
    out
}
