//! Patient intake inputs consumed by the risk scorer.
//! Field names on the wire follow the intake form (`systolicBP`, `heartRate`, ...).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MedtouchError, Result};
use crate::vocabulary::{is_known_condition, is_known_symptom, NO_HISTORY};

// ---------------------------------------------------------------------------
// Vitals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsInput {
    pub age: i32,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: i32,
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: i32,
    pub heart_rate: i32,
    pub temperature: f64,        // °C
    pub oxygen_saturation: f64,  // percent
    #[serde(default = "default_respiratory_rate")]
    pub respiratory_rate: i32,   // carried, not scored
    #[serde(default = "default_gender")]
    pub gender: String,          // carried, not scored
}

fn default_respiratory_rate() -> i32 { 16 }
fn default_gender() -> String { "Male".to_string() }

impl Default for VitalsInput {
    /// Values the intake form starts from before anything is entered.
    fn default() -> Self {
        Self {
            age: 30,
            systolic_bp: 120,
            diastolic_bp: 80,
            heart_rate: 72,
            temperature: 36.8,
            oxygen_saturation: 98.0,
            respiratory_rate: default_respiratory_rate(),
            gender: default_gender(),
        }
    }
}

impl VitalsInput {
    /// Boundary check for callers that want to reject implausible input
    /// before scoring. The scorer itself accepts anything.
    pub fn validate(&self) -> Result<()> {
        if !(0..=120).contains(&self.age) {
            return Err(MedtouchError::validation("age", format!("{} is outside 0..=120", self.age)));
        }
        if self.systolic_bp <= 0 {
            return Err(MedtouchError::validation("systolicBP", "must be positive"));
        }
        if self.diastolic_bp <= 0 {
            return Err(MedtouchError::validation("diastolicBP", "must be positive"));
        }
        if self.heart_rate <= 0 {
            return Err(MedtouchError::validation("heartRate", "must be positive"));
        }
        if !self.temperature.is_finite() {
            return Err(MedtouchError::validation("temperature", "must be a finite number"));
        }
        if !(0.0..=100.0).contains(&self.oxygen_saturation) {
            return Err(MedtouchError::validation(
                "oxygenSaturation",
                format!("{} is outside 0..=100", self.oxygen_saturation),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Symptoms + history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalContext {
    #[serde(default)]
    pub symptoms: BTreeSet<String>,
    #[serde(default = "default_pre_existing")]
    pub pre_existing: String,
}

fn default_pre_existing() -> String { NO_HISTORY.to_string() }

impl Default for ClinicalContext {
    fn default() -> Self {
        Self {
            symptoms: BTreeSet::new(),
            pre_existing: default_pre_existing(),
        }
    }
}

impl ClinicalContext {
    pub fn new<I, S>(symptoms: I, pre_existing: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            pre_existing: pre_existing.into(),
        }
    }

    pub fn has_symptom(&self, name: &str) -> bool {
        self.symptoms.contains(name)
    }

    /// Reject labels outside the intake vocabularies.
    pub fn validate(&self) -> Result<()> {
        if let Some(unknown) = self.symptoms.iter().find(|s| !is_known_symptom(s)) {
            return Err(MedtouchError::UnknownSymptom(unknown.clone()));
        }
        if !is_known_condition(&self.pre_existing) {
            return Err(MedtouchError::UnknownCondition(self.pre_existing.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_vitals_are_valid() {
        assert!(VitalsInput::default().validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range_rejected() {
        let vitals = VitalsInput { age: 121, ..Default::default() };
        let err = vitals.validate().unwrap_err();
        assert!(matches!(err, MedtouchError::Validation { field: "age", .. }));

        let vitals = VitalsInput { age: -1, ..Default::default() };
        assert!(vitals.validate().is_err());
    }

    #[test]
    fn test_oxygen_out_of_range_rejected() {
        let vitals = VitalsInput { oxygen_saturation: 100.5, ..Default::default() };
        assert!(vitals.validate().is_err());
    }

    #[test]
    fn test_nan_temperature_rejected() {
        let vitals = VitalsInput { temperature: f64::NAN, ..Default::default() };
        assert!(vitals.validate().is_err());
    }

    #[test]
    fn test_wire_names_follow_intake_form() {
        let json = serde_json::to_value(VitalsInput::default()).unwrap();
        for key in ["age", "systolicBP", "diastolicBP", "heartRate", "temperature",
                    "respiratoryRate", "oxygenSaturation", "gender"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_scored_fields_are_required() {
        let err = serde_json::from_str::<VitalsInput>(r#"{"age": 70, "heartRate": 110}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `systolicBP`"), "{err}");

        let err = serde_json::from_str::<VitalsInput>(
            r#"{"age": 70, "systolicBP": 150, "diastolicBP": 95, "heartRate": 110, "temperature": 39.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field `oxygenSaturation`"), "{err}");
    }

    #[test]
    fn test_unscored_fields_are_optional() {
        let vitals: VitalsInput = serde_json::from_str(
            r#"{"age": 70, "systolicBP": 150, "diastolicBP": 95, "heartRate": 110,
                "temperature": 39.0, "oxygenSaturation": 90.0}"#,
        )
        .unwrap();
        assert_eq!(vitals.age, 70);
        assert_eq!(vitals.oxygen_saturation, 90.0);
        assert_eq!(vitals.respiratory_rate, 16);
        assert_eq!(vitals.gender, "Male");
    }

    #[test]
    fn test_context_defaults_to_no_history() {
        let ctx: ClinicalContext = serde_json::from_str(r#"{"symptoms": ["Cough"]}"#).unwrap();
        assert_eq!(ctx.pre_existing, "No History");
        assert!(ctx.has_symptom("Cough"));
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_unknown_labels_rejected() {
        let ctx = ClinicalContext::new(["chest pain"], NO_HISTORY);
        assert!(matches!(ctx.validate(), Err(MedtouchError::UnknownSymptom(s)) if s == "chest pain"));

        let ctx = ClinicalContext::new(Vec::<String>::new(), "Gout");
        assert!(matches!(ctx.validate(), Err(MedtouchError::UnknownCondition(_))));
    }
}
