//! Scripted terminal sessions against temporary artifacts and record files.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use advisor::inference::{
    CanonicalScores, CanonicalSlot, LogisticModel, MultiClass, StandardScaler, FEATURE_COUNT,
    MODEL_FILE, SCALER_FILE,
};
use advisor::{
    InferenceEngine, RecordStore, StudentProfile, WizardStep, CLASS_CATALOG, CLASS_COUNT,
};
use career_wizard::{Console, ExitReason};
use tempfile::{tempdir, TempDir};

fn write_model(dir: &Path, coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) {
    let n_features = coefficients[0].len();
    let model = LogisticModel {
        n_features,
        classes: Some(CLASS_CATALOG.iter().map(|c| c.to_string()).collect()),
        multi_class: MultiClass::Multinomial,
        coefficients,
        intercepts,
    };
    fs::write(
        dir.join(SCALER_FILE),
        serde_json::to_string(&StandardScaler::identity(n_features)).unwrap(),
    )
    .unwrap();
    fs::write(dir.join(MODEL_FILE), serde_json::to_string(&model).unwrap()).unwrap();
}

/// Zero-weight model ranking Software Engineer, then Scientist.
fn write_artifacts(dir: &Path, n_features: usize) {
    let mut intercepts = vec![0.0; CLASS_COUNT];
    intercepts[5] = 2.0;
    intercepts[8] = 1.0;
    write_model(dir, vec![vec![0.0; n_features]; CLASS_COUNT], intercepts);
}

fn engine(n_features: usize) -> (TempDir, Arc<InferenceEngine>) {
    let dir = tempdir().unwrap();
    write_artifacts(dir.path(), n_features);
    let engine = InferenceEngine::load(dir.path()).unwrap();
    (dir, Arc::new(engine))
}

/// Run `script` to completion; returns the exit reason, the final step and
/// everything written to the terminal.
fn run(
    script: &str,
    engine: Arc<InferenceEngine>,
    store: RecordStore,
) -> (ExitReason, WizardStep, String) {
    let mut console = Console::new(script.as_bytes(), Vec::new(), engine, store, 40.0);
    let reason = console.run().unwrap();
    let step = console.session().current_step();
    let output = String::from_utf8(console.into_output()).unwrap();
    (reason, step, output)
}

const BASICS: &str = "Ana\n18\nfemale\n3\nno\nyes\n12\n";

#[test]
fn test_complete_session_saves_record() {
    let (_artifacts, engine) = engine(13);
    let dir = tempdir().unwrap();
    let records = dir.path().join("student_records.csv");

    // ICS scores: Mathematics 90, everything else kept at 50.
    let script = format!("{BASICS}90\n\n\n\n\n\n\nsave\nquit\n");
    let (reason, step, output) = run(&script, engine, RecordStore::new(&records));

    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(step, WizardStep::Results);
    assert!(output.contains("Step 9 of 9"));
    assert!(output.contains("Computer Science & IT Programs"));
    assert!(output.contains("1. Software Engineer"));
    assert!(output.contains("2. Scientist"));
    assert!(output.contains("Saved your results"));

    let rows = RecordStore::new(&records).read_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].math, 90);
    assert_eq!(rows[0].gender, "Female");
    assert_eq!(rows[0].top_career_match, "Software Engineer");
}

#[test]
fn test_invalid_answers_reprompt_and_back_keeps_going() {
    let (_artifacts, engine) = engine(13);
    let dir = tempdir().unwrap();
    let script = "   \nAna\nback\nBo\nabc\n200\n20\nquit\n";
    let (reason, step, output) = run(script, engine, RecordStore::new(dir.path().join("r.csv")));

    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(step, WizardStep::Gender);
    assert!(output.contains("Please enter your name"));
    assert!(output.contains("Please enter a whole number"));
    assert!(output.contains("age must be between 10 and 100, got 200"));
}

#[test]
fn test_back_at_first_step_is_reported() {
    let (_artifacts, engine) = engine(13);
    let dir = tempdir().unwrap();
    let (_, step, output) = run("back\n", engine, RecordStore::new(dir.path().join("r.csv")));
    assert_eq!(step, WizardStep::Name);
    assert!(output.contains("Already at the first step"));
}

#[test]
fn test_failing_scores_are_offered_again() {
    let (_artifacts, engine) = engine(13);
    let dir = tempdir().unwrap();
    let failing = "10\n".repeat(7);
    let passing = "60\n".repeat(7);
    let script = format!("{BASICS}{failing}{passing}quit\n");
    let (_, step, output) = run(&script, engine, RecordStore::new(dir.path().join("r.csv")));

    assert_eq!(step, WizardStep::Results);
    assert!(output.contains("below the passing average of 40"));
    assert!(output.contains("Mathematics [10]"));
}

#[test]
fn test_restart_from_results() {
    let (_artifacts, engine) = engine(13);
    let dir = tempdir().unwrap();
    let script = format!("{BASICS}{}restart\n", "\n".repeat(7));
    let (reason, step, output) = run(&script, engine, RecordStore::new(dir.path().join("r.csv")));

    assert_eq!(reason, ExitReason::EndOfInput);
    assert_eq!(step, WizardStep::Name);
    assert!(output.contains("Starting over."));
}

#[test]
fn test_save_failure_is_not_fatal() {
    let (_artifacts, engine) = engine(13);
    let dir = tempdir().unwrap();
    // The store path is a directory, so appending fails.
    let script = format!("{BASICS}{}save\nquit\n", "\n".repeat(7));
    let (reason, step, output) = run(&script, engine, RecordStore::new(dir.path()));

    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(step, WizardStep::Results);
    assert!(output.contains("Could not save your results"));
}

#[test]
fn test_inference_failure_shows_no_result() {
    let (_artifacts, engine) = engine(12);
    let dir = tempdir().unwrap();
    let records = dir.path().join("r.csv");
    let script = format!("{BASICS}{}save\nquit\n", "\n".repeat(7));
    let (_, step, output) = run(&script, engine, RecordStore::new(&records));

    assert_eq!(step, WizardStep::Results);
    assert!(output.contains("No recommendation available"));
    assert!(!output.contains("Top career matches"));

    let rows = RecordStore::new(&records).read_all().unwrap();
    assert_eq!(rows[0].top_career_match, "N/A");
}

#[test]
fn test_export_from_results() {
    let (_artifacts, engine) = engine(13);
    let dir = tempdir().unwrap();
    let records = dir.path().join("r.csv");
    let dest = dir.path().join("export.csv");
    let script = format!(
        "{BASICS}{}save\nexport {}\nquit\n",
        "\n".repeat(7),
        dest.display()
    );
    let (_, _, output) = run(&script, engine, RecordStore::new(&records));

    assert!(output.contains("Exported"));
    assert_eq!(RecordStore::new(&dest).count().unwrap(), 1);
}

#[test]
fn test_recommend_json() {
    let (_artifacts, engine) = engine(13);
    let json = r#"{
        "name": "Ana",
        "age": 19,
        "gender": "Female",
        "background": "ICS",
        "weekly_study_hours": 10,
        "subject_scores": { "mathematics": 90, "computer_science": 95 }
    }"#;
    let prediction = career_wizard::recommend_json(&engine, json, 40.0).unwrap();
    assert_eq!(prediction.len(), 3);
    assert_eq!(prediction.top().unwrap().label, "Software Engineer");
}

#[test]
fn test_recommend_json_rejects_foreign_subjects() {
    let (_artifacts, engine) = engine(13);
    let json = r#"{"name": "Ana", "age": 19, "background": "Arts", "subject_scores": {"physics": 90}}"#;
    let err = career_wizard::recommend_json(&engine, json, 40.0).unwrap_err();
    assert!(format!("{err:#}").contains("not scored for the Arts background"));
}

/// Arts profile with Motal-e-Quran left out, so geography falls back to
/// Islamiat.
const ARTS_PROFILE: &str = r#"{
    "name": "Ana",
    "age": 19,
    "gender": "female",
    "background": "arts",
    "weekly_study_hours": 10,
    "subject_scores": {
        "general_mathematics": 70,
        "english_literature": 65,
        "psychology": 80,
        "english": 60,
        "islamiat": 55
    }
}"#;

#[test]
fn test_recommend_json_resolves_slots_from_given_scores() {
    // Software Engineer wins only when the total_score column exceeds 427.5.
    let dir = tempdir().unwrap();
    let mut coefficients = vec![vec![0.0; FEATURE_COUNT]; CLASS_COUNT];
    coefficients[5][11] = 1.0;
    let mut intercepts = vec![0.0; CLASS_COUNT];
    intercepts[5] = -427.5;
    write_model(dir.path(), coefficients, intercepts);
    let engine = InferenceEngine::load(dir.path()).unwrap();

    let profile: StudentProfile = serde_json::from_str(ARTS_PROFILE).unwrap();
    let slots = CanonicalScores::resolve(&profile);
    assert_eq!(slots.get(CanonicalSlot::Geography), 55);
    assert_eq!(slots.total(), 430);

    let prediction = career_wizard::recommend_json(&engine, ARTS_PROFILE, 40.0).unwrap();
    assert_eq!(prediction.top().unwrap().label, "Software Engineer");

    let direct = engine.recommend(&profile).unwrap();
    for (a, b) in prediction.iter().zip(direct.iter()) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.probability.to_bits(), b.probability.to_bits());
    }
}

#[test]
fn test_recommend_json_accepts_lowercase_choices() {
    let (_artifacts, engine) = engine(13);
    let prediction = career_wizard::recommend_json(&engine, ARTS_PROFILE, 40.0).unwrap();
    assert_eq!(prediction.len(), 3);
    assert_eq!(prediction.top().unwrap().label, "Software Engineer");
}
