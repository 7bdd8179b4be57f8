//! Patient fixtures shared by unit and integration tests.

use std::collections::BTreeSet;

use medtouch_common::vitals::VitalsInput;
use medtouch_common::vocabulary::{CONDITIONS, SYMPTOMS};
use rand::Rng;

pub fn symptoms(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Elderly, hypertensive, tachycardic, febrile, hypoxic. Raw score 105 with
/// chest pain and heart disease.
pub fn critical_vitals() -> VitalsInput {
    VitalsInput {
        age: 70,
        systolic_bp: 150,
        diastolic_bp: 95,
        heart_rate: 110,
        temperature: 39.0,
        oxygen_saturation: 90.0,
        ..Default::default()
    }
}

/// Every vital inside its normal band. Raw score 0.
pub fn healthy_vitals() -> VitalsInput {
    VitalsInput {
        age: 30,
        systolic_bp: 118,
        diastolic_bp: 76,
        heart_rate: 72,
        temperature: 37.0,
        oxygen_saturation: 98.0,
        ..Default::default()
    }
}

/// Vitals drawn well beyond physiological ranges on both sides.
pub fn random_vitals<R: Rng>(rng: &mut R) -> VitalsInput {
    VitalsInput {
        age: rng.gen_range(-10..=200),
        systolic_bp: rng.gen_range(0..=300),
        diastolic_bp: rng.gen_range(0..=200),
        heart_rate: rng.gen_range(0..=250),
        temperature: rng.gen_range(30.0..45.0),
        respiratory_rate: rng.gen_range(0..=60),
        oxygen_saturation: rng.gen_range(50.0..=100.0),
        gender: "Female".to_string(),
    }
}

/// Up to five symptoms from the intake vocabulary.
pub fn random_symptoms<R: Rng>(rng: &mut R) -> BTreeSet<String> {
    let n = rng.gen_range(0..=5);
    (0..n)
        .map(|_| SYMPTOMS[rng.gen_range(0..SYMPTOMS.len())].to_string())
        .collect()
}

pub fn random_condition<R: Rng>(rng: &mut R) -> &'static str {
    CONDITIONS[rng.gen_range(0..CONDITIONS.len())]
}
