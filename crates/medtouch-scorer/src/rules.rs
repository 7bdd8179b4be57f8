//! The fixed rule table.
//!
//! Rules are evaluated in declaration order. Each contributes its delta
//! independently; only the age rules are mutually exclusive. No rule can
//! short-circuit the others.

use std::collections::BTreeSet;

use medtouch_common::vitals::VitalsInput;
use medtouch_common::vocabulary::{is_serious_condition, CRITICAL_SYMPTOMS};
use serde::{Deserialize, Serialize};

pub const AGE_SENIOR: i32 = 65;
pub const AGE_MIDDLE: i32 = 50;
pub const SYSTOLIC_HIGH: i32 = 140;
pub const DIASTOLIC_HIGH: i32 = 90;
pub const HEART_RATE_HIGH: i32 = 100;
pub const HEART_RATE_LOW: i32 = 60;
pub const TEMPERATURE_HIGH: f64 = 38.5;
pub const TEMPERATURE_LOW: f64 = 36.0;
pub const OXYGEN_LOW: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    AgeOver65,
    AgeOver50,
    HighBloodPressure,
    AbnormalHeartRate,
    AbnormalTemperature,
    LowOxygenSaturation,
    CriticalSymptoms,
    SeriousPreExisting,
}

impl Rule {
    /// Declaration order, which is also evaluation and factor order.
    pub const ALL: [Rule; 8] = [
        Rule::AgeOver65,
        Rule::AgeOver50,
        Rule::HighBloodPressure,
        Rule::AbnormalHeartRate,
        Rule::AbnormalTemperature,
        Rule::LowOxygenSaturation,
        Rule::CriticalSymptoms,
        Rule::SeriousPreExisting,
    ];

    pub const fn delta(self) -> u32 {
        match self {
            Rule::AgeOver65 => 20,
            Rule::AgeOver50 => 10,
            Rule::HighBloodPressure => 15,
            Rule::AbnormalHeartRate => 12,
            Rule::AbnormalTemperature => 18,
            Rule::LowOxygenSaturation => 25,
            Rule::CriticalSymptoms => 30,
            Rule::SeriousPreExisting => 15,
        }
    }

    /// Factor label. The pre-existing rule appends the condition name
    /// when it fires; see [`TriggeredRule::label`].
    pub const fn label(self) -> &'static str {
        match self {
            Rule::AgeOver65 => "Age > 65",
            Rule::AgeOver50 => "Age > 50",
            Rule::HighBloodPressure => "High Blood Pressure",
            Rule::AbnormalHeartRate => "Abnormal Heart Rate",
            Rule::AbnormalTemperature => "Abnormal Temperature",
            Rule::LowOxygenSaturation => "Low Oxygen Saturation",
            Rule::CriticalSymptoms => "Critical Symptoms",
            Rule::SeriousPreExisting => "Serious Pre-existing Condition",
        }
    }
}

/// A rule that fired for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggeredRule {
    pub rule: Rule,
    pub delta: u32,
    pub label: String,
}

impl TriggeredRule {
    fn new(rule: Rule) -> Self {
        Self { rule, delta: rule.delta(), label: rule.label().to_string() }
    }
}

/// Result of running the rule table, before clamping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Sum of all fired deltas. Can exceed 100.
    pub raw_score: u32,
    pub triggered: Vec<TriggeredRule>,
}

impl RuleOutcome {
    fn fire(&mut self, hit: TriggeredRule) {
        self.raw_score += hit.delta;
        self.triggered.push(hit);
    }

    pub fn factors(&self) -> Vec<String> {
        self.triggered.iter().map(|t| t.label.clone()).collect()
    }

    pub fn fired(&self, rule: Rule) -> bool {
        self.triggered.iter().any(|t| t.rule == rule)
    }
}

/// Run every rule against the inputs. Out-of-range values are compared as given.
pub fn evaluate_rules(
    vitals: &VitalsInput,
    symptoms: &BTreeSet<String>,
    pre_existing: &str,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    // Age: only the higher band fires
    if vitals.age > AGE_SENIOR {
        outcome.fire(TriggeredRule::new(Rule::AgeOver65));
    } else if vitals.age > AGE_MIDDLE {
        outcome.fire(TriggeredRule::new(Rule::AgeOver50));
    }

    if vitals.systolic_bp > SYSTOLIC_HIGH || vitals.diastolic_bp > DIASTOLIC_HIGH {
        outcome.fire(TriggeredRule::new(Rule::HighBloodPressure));
    }

    if vitals.heart_rate > HEART_RATE_HIGH || vitals.heart_rate < HEART_RATE_LOW {
        outcome.fire(TriggeredRule::new(Rule::AbnormalHeartRate));
    }

    if vitals.temperature > TEMPERATURE_HIGH || vitals.temperature < TEMPERATURE_LOW {
        outcome.fire(TriggeredRule::new(Rule::AbnormalTemperature));
    }

    if vitals.oxygen_saturation < OXYGEN_LOW {
        outcome.fire(TriggeredRule::new(Rule::LowOxygenSaturation));
    }

    if CRITICAL_SYMPTOMS.iter().any(|s| symptoms.contains(*s)) {
        outcome.fire(TriggeredRule::new(Rule::CriticalSymptoms));
    }

    if is_serious_condition(pre_existing) {
        let mut hit = TriggeredRule::new(Rule::SeriousPreExisting);
        hit.label = format!("{}: {}", Rule::SeriousPreExisting.label(), pre_existing);
        outcome.fire(hit);
    }

    outcome
}
