//! Rule-based risk assessment.
//!
//! raw = Σ delta(rule) over fired rules
//! level, department = classify(raw, symptoms)
//! risk_score = min(100, raw)

use std::collections::BTreeSet;

use medtouch_common::vitals::{ClinicalContext, VitalsInput};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::confidence::{ConfidenceSource, RandomConfidence};
use crate::routing::{classify, Department, LevelProbabilities, RiskLevel};
use crate::rules::evaluate_rules;

pub const MAX_RISK_SCORE: u32 = 100;
pub const MODEL_TYPE: &str = "Rule-Based Fallback";

/// Final assessment handed to the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Clamped to [0, 100].
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub department: Department,
    /// Percent. Not a function of the inputs unless a deterministic source is used.
    pub confidence: f64,
    /// One label per fired rule, in rule order.
    pub factors: Vec<String>,
    pub department_confidence: f64,
    pub level_probabilities: LevelProbabilities,
    pub model_type: String,
    /// Always false: this engine is the rule-based path, not a trained model.
    pub ml_used: bool,
}

impl RiskAssessment {
    /// The parts of an assessment fixed by the inputs alone.
    pub fn deterministic_part(&self) -> (u32, RiskLevel, Department, &[String]) {
        (self.risk_score, self.risk_level, self.department, &self.factors)
    }
}

/// Scores patients against the rule table with a pluggable confidence source.
pub struct RiskScorer {
    confidence: Box<dyn ConfidenceSource>,
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(Box::new(RandomConfidence::default()))
    }
}

impl RiskScorer {
    pub fn new(confidence: Box<dyn ConfidenceSource>) -> Self {
        Self { confidence }
    }

    pub fn has_deterministic_confidence(&self) -> bool {
        self.confidence.is_deterministic()
    }

    pub fn score(
        &self,
        vitals: &VitalsInput,
        symptoms: &BTreeSet<String>,
        pre_existing: &str,
    ) -> RiskAssessment {
        let outcome = evaluate_rules(vitals, symptoms, pre_existing);
        // Level and department come from the raw sum; only the report is clamped.
        let (risk_level, department) = classify(outcome.raw_score, symptoms);
        let risk_score = outcome.raw_score.min(MAX_RISK_SCORE);

        debug!(
            raw_score = outcome.raw_score,
            risk_score,
            level = %risk_level,
            department = %department,
            fired = outcome.triggered.len(),
            "Scored patient"
        );

        RiskAssessment {
            risk_score,
            risk_level,
            department,
            confidence: self.confidence.confidence(risk_score),
            factors: outcome.factors(),
            department_confidence: self.confidence.confidence(risk_score),
            level_probabilities: LevelProbabilities::for_level(risk_level),
            model_type: MODEL_TYPE.to_string(),
            ml_used: false,
        }
    }

    pub fn score_context(&self, vitals: &VitalsInput, context: &ClinicalContext) -> RiskAssessment {
        self.score(vitals, &context.symptoms, &context.pre_existing)
    }
}

/// Score with the default randomized confidence source.
pub fn score(
    vitals: &VitalsInput,
    symptoms: &BTreeSet<String>,
    pre_existing: &str,
) -> RiskAssessment {
    RiskScorer::default().score(vitals, symptoms, pre_existing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::FixedConfidence;

    #[test]
    fn test_clamp_keeps_high_level() {
        let vitals = VitalsInput {
            age: 80,
            systolic_bp: 170,
            diastolic_bp: 100,
            heart_rate: 130,
            temperature: 40.0,
            oxygen_saturation: 85.0,
            ..Default::default()
        };
        let symptoms: BTreeSet<String> = ["Loss of Consciousness".to_string()].into_iter().collect();
        let a = RiskScorer::new(Box::new(FixedConfidence(80.0))).score(&vitals, &symptoms, "Cancer");
        assert_eq!(a.risk_score, 100);
        assert_eq!(a.risk_level, RiskLevel::High);
        assert_eq!(a.department, Department::Emergency);
        assert_eq!(a.factors.len(), 7);
    }

    #[test]
    fn test_supplementary_fields() {
        let a = RiskScorer::new(Box::new(FixedConfidence(82.0)))
            .score(&VitalsInput::default(), &BTreeSet::new(), "No History");
        assert_eq!(a.confidence, 82.0);
        assert_eq!(a.department_confidence, 82.0);
        assert_eq!(a.level_probabilities, LevelProbabilities::for_level(RiskLevel::Low));
        assert_eq!(a.model_type, "Rule-Based Fallback");
        assert!(!a.ml_used);
    }

    #[test]
    fn test_wire_shape() {
        let a = RiskScorer::new(Box::new(FixedConfidence(80.0)))
            .score(&VitalsInput::default(), &BTreeSet::new(), "No History");
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["riskScore"], 0);
        assert_eq!(json["riskLevel"], "Low");
        assert_eq!(json["department"], "General Medicine");
        assert_eq!(json["levelProbabilities"]["Low"], 85.0);
        assert!(json["factors"].as_array().unwrap().is_empty());
        assert_eq!(json["mlUsed"], false);
        assert_eq!(json["modelType"], "Rule-Based Fallback");
    }

    #[test]
    fn test_score_context_matches_score() {
        let scorer = RiskScorer::new(Box::new(FixedConfidence(80.0)));
        let ctx = ClinicalContext::new(["Nausea"], "Diabetes");
        let vitals = VitalsInput { age: 60, oxygen_saturation: 93.0, ..Default::default() };
        assert_eq!(
            scorer.score_context(&vitals, &ctx),
            scorer.score(&vitals, &ctx.symptoms, &ctx.pre_existing)
        );
    }
}
