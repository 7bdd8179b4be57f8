//! Fixed intake vocabularies.
//!
//! All matching against these lists is case-sensitive and exact; free-text
//! normalisation is the intake form's job.

/// Every symptom the intake form offers.
pub const SYMPTOMS: [&str; 65] = [
    "Fever", "Cough", "Difficulty Breathing", "Chest Pain", "Headache",
    "Severe Headache", "Nausea", "Vomiting", "Abdominal Pain", "Severe Abdominal Pain",
    "Fatigue", "Dizziness", "Back Pain", "Joint Pain", "Muscle Pain",
    "Sore Throat", "Runny Nose", "Congestion", "Sneezing", "Loss of Taste",
    "Loss of Smell", "Rash", "Itching", "Swelling", "Bleeding",
    "Bruising", "Numbness", "Tingling", "Confusion", "Memory Loss",
    "Vision Problems", "Hearing Loss", "Ear Pain", "Tooth Pain", "Jaw Pain",
    "Heart Palpitations", "Irregular Heartbeat", "Shortness of Breath", "Wheezing",
    "Loss of Consciousness", "Seizures", "Tremors", "Weakness", "Paralysis",
    "Cold Symptoms", "Flu-Like Symptoms", "Allergies", "Minor Injury",
    "Stroke Symptoms", "Anxiety", "Depression", "Insomnia", "Night Sweats",
    "Weight Loss", "Weight Gain", "Appetite Loss", "Excessive Thirst",
    "Frequent Urination", "Blood in Urine", "Blood in Stool", "Constipation",
    "Diarrhea", "Heartburn", "Bloating", "Gas",
];

/// Sentinel condition meaning the patient reported no history.
pub const NO_HISTORY: &str = "No History";

/// Every pre-existing condition the intake form offers.
pub const CONDITIONS: [&str; 15] = [
    NO_HISTORY,
    "Diabetes",
    "Hypertension",
    "Heart Disease",
    "Asthma",
    "COPD",
    "Cancer",
    "Kidney Disease",
    "Liver Disease",
    "Thyroid Disorder",
    "Stroke History",
    "Allergies",
    "Arthritis",
    "Depression",
    "Anxiety",
];

/// Any one of these escalates the score by the critical-symptom rule.
pub const CRITICAL_SYMPTOMS: [&str; 4] = [
    "Difficulty Breathing",
    "Chest Pain",
    "Stroke Symptoms",
    "Loss of Consciousness",
];

/// Conditions that trigger the serious pre-existing condition rule.
pub const SERIOUS_CONDITIONS: [&str; 5] = [
    "Heart Disease",
    "Diabetes",
    "Cancer",
    "Kidney Disease",
    "COPD",
];

/// Medium-risk patients reporting one of these are routed to Cardiology.
pub const CARDIAC_SYMPTOMS: [&str; 2] = ["Chest Pain", "Heart Palpitations"];

/// Medium-risk patients reporting one of these (and no cardiac symptom) go to Gastroenterology.
pub const GASTRO_SYMPTOMS: [&str; 2] = ["Abdominal Pain", "Nausea"];

pub fn is_known_symptom(name: &str) -> bool {
    SYMPTOMS.contains(&name)
}

pub fn is_known_condition(name: &str) -> bool {
    CONDITIONS.contains(&name)
}

pub fn is_serious_condition(name: &str) -> bool {
    SERIOUS_CONDITIONS.contains(&name)
}
