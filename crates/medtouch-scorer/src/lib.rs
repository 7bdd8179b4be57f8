//! medtouch-scorer — Deterministic rule-based patient risk scoring.
//! Sums fixed rule contributions over vitals, symptoms, and history, then
//! maps the total to a risk level and a recommended department.

pub mod rules;
pub mod routing;
pub mod confidence;
pub mod scorer;

pub use routing::{Department, LevelProbabilities, RiskLevel};
pub use scorer::{score, RiskAssessment, RiskScorer};
