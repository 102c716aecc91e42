//! Artifact fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use advisor::inference::{LogisticModel, MultiClass, StandardScaler, MODEL_FILE, SCALER_FILE};
use advisor::{CLASS_CATALOG, CLASS_COUNT};

/// Input-independent model: zero weights, so the distribution is the
/// softmax of `intercepts`.
pub fn write_constant_model(dir: &Path, n_features: usize, intercepts: [f64; CLASS_COUNT]) {
    let model = LogisticModel {
        n_features,
        classes: Some(CLASS_CATALOG.iter().map(|c| c.to_string()).collect()),
        multi_class: MultiClass::Multinomial,
        coefficients: vec![vec![0.0; n_features]; CLASS_COUNT],
        intercepts: intercepts.to_vec(),
    };
    write(dir, &StandardScaler::identity(n_features), &model);
}

/// Model whose top class follows the inputs: Software Engineer rises
/// with the math slot, Doctor with the biology slot.
pub fn write_responsive_model(dir: &Path) {
    let n = advisor::inference::FEATURE_COUNT;
    let mut coefficients = vec![vec![0.0; n]; CLASS_COUNT];
    coefficients[5][4] = 1.0;
    coefficients[1][8] = 1.0;
    let model = LogisticModel {
        n_features: n,
        classes: Some(CLASS_CATALOG.iter().map(|c| c.to_string()).collect()),
        multi_class: MultiClass::Multinomial,
        coefficients,
        intercepts: vec![0.0; CLASS_COUNT],
    };
    let scaler = StandardScaler::new(vec![50.0; n], vec![10.0; n]);
    write(dir, &scaler, &model);
}

/// Software Engineer first, then Scientist; every other class tied.
pub fn write_default_model(dir: &Path) {
    let mut intercepts = [0.0; CLASS_COUNT];
    intercepts[5] = 2.0;
    intercepts[8] = 1.0;
    write_constant_model(dir, advisor::inference::FEATURE_COUNT, intercepts);
}

fn write(dir: &Path, scaler: &StandardScaler, model: &LogisticModel) {
    fs::write(
        dir.join(SCALER_FILE),
        serde_json::to_string_pretty(scaler).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(MODEL_FILE),
        serde_json::to_string_pretty(model).unwrap(),
    )
    .unwrap();
}
