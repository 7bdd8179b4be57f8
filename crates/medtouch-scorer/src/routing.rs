//! Risk level and department routing.

use std::collections::BTreeSet;
use std::fmt;

use medtouch_common::vocabulary::{CARDIAC_SYMPTOMS, GASTRO_SYMPTOMS};
use serde::{Deserialize, Serialize};

/// Scores strictly above this are High.
pub const HIGH_THRESHOLD: u32 = 60;
/// Scores strictly above this (and not High) are Medium.
pub const MEDIUM_THRESHOLD: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Emergency,
    Cardiology,
    Gastroenterology,
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
}

impl Department {
    pub fn as_str(self) -> &'static str {
        match self {
            Department::Emergency => "Emergency",
            Department::Cardiology => "Cardiology",
            Department::Gastroenterology => "Gastroenterology",
            Department::GeneralMedicine => "General Medicine",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map the unclamped score to a level, then route Medium patients by symptom.
pub fn classify(raw_score: u32, symptoms: &BTreeSet<String>) -> (RiskLevel, Department) {
    let has_any = |set: &[&str]| set.iter().any(|s| symptoms.contains(*s));

    if raw_score > HIGH_THRESHOLD {
        (RiskLevel::High, Department::Emergency)
    } else if raw_score > MEDIUM_THRESHOLD {
        let dept = if has_any(&CARDIAC_SYMPTOMS[..]) {
            Department::Cardiology
        } else if has_any(&GASTRO_SYMPTOMS[..]) {
            Department::Gastroenterology
        } else {
            Department::GeneralMedicine
        };
        (RiskLevel::Medium, dept)
    } else {
        (RiskLevel::Low, Department::GeneralMedicine)
    }
}

/// Display-only probability table shown beside the gauge (percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LevelProbabilities {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl LevelProbabilities {
    pub fn for_level(level: RiskLevel) -> Self {
        Self {
            high: if level == RiskLevel::High { 80.0 } else { 10.0 },
            medium: if level == RiskLevel::Medium { 75.0 } else { 15.0 },
            low: if level == RiskLevel::Low { 85.0 } else { 5.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptoms(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_level_boundaries() {
        let none = symptoms(&[]);
        assert_eq!(classify(0, &none).0, RiskLevel::Low);
        assert_eq!(classify(30, &none).0, RiskLevel::Low);
        assert_eq!(classify(31, &none).0, RiskLevel::Medium);
        assert_eq!(classify(60, &none).0, RiskLevel::Medium);
        assert_eq!(classify(61, &none).0, RiskLevel::High);
        assert_eq!(classify(135, &none).0, RiskLevel::High);
    }

    #[test]
    fn test_high_always_emergency() {
        let s = symptoms(&["Chest Pain", "Nausea"]);
        assert_eq!(classify(61, &s), (RiskLevel::High, Department::Emergency));
    }

    #[test]
    fn test_medium_routing_precedence() {
        assert_eq!(classify(45, &symptoms(&["Heart Palpitations", "Nausea"])).1, Department::Cardiology);
        assert_eq!(classify(45, &symptoms(&["Abdominal Pain"])).1, Department::Gastroenterology);
        assert_eq!(classify(45, &symptoms(&["Cough"])).1, Department::GeneralMedicine);
    }

    #[test]
    fn test_low_ignores_symptoms() {
        let s = symptoms(&["Chest Pain"]);
        assert_eq!(classify(30, &s), (RiskLevel::Low, Department::GeneralMedicine));
    }

    #[test]
    fn test_department_wire_name() {
        let json = serde_json::to_string(&Department::GeneralMedicine).unwrap();
        assert_eq!(json, "\"General Medicine\"");
        assert_eq!(Department::GeneralMedicine.to_string(), "General Medicine");
    }

    #[test]
    fn test_probability_table() {
        let p = LevelProbabilities::for_level(RiskLevel::Medium);
        assert_eq!((p.high, p.medium, p.low), (10.0, 75.0, 5.0));
    }
}
