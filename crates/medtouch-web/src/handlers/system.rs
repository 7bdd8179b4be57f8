//! Service health and model metadata.

use axum::{extract::State, Json};
use medtouch_common::vocabulary::{CONDITIONS, CRITICAL_SYMPTOMS, SERIOUS_CONDITIONS, SYMPTOMS};
use medtouch_scorer::routing::{HIGH_THRESHOLD, MEDIUM_THRESHOLD};
use medtouch_scorer::rules::Rule;
use medtouch_scorer::scorer::{MAX_RISK_SCORE, MODEL_TYPE};
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub engine: &'static str,
    pub deterministic_confidence: bool,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        engine: MODEL_TYPE,
        deterministic_confidence: state.scorer.has_deterministic_confidence(),
    })
}

#[derive(Debug, Serialize)]
pub struct RuleInfo {
    pub id: Rule,
    pub label: &'static str,
    pub delta: u32,
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub model_type: &'static str,
    pub rules: Vec<RuleInfo>,
    pub medium_threshold: u32,
    pub high_threshold: u32,
    pub max_risk_score: u32,
    pub symptoms: &'static [&'static str],
    pub conditions: &'static [&'static str],
    pub critical_symptoms: &'static [&'static str],
    pub serious_conditions: &'static [&'static str],
}

/// GET /api/model-info — rule table and intake vocabularies
pub async fn model_info() -> Json<ModelInfo> {
    let rules = Rule::ALL
        .iter()
        .map(|&rule| RuleInfo { id: rule, label: rule.label(), delta: rule.delta() })
        .collect();

    Json(ModelInfo {
        model_type: MODEL_TYPE,
        rules,
        medium_threshold: MEDIUM_THRESHOLD,
        high_threshold: HIGH_THRESHOLD,
        max_risk_score: MAX_RISK_SCORE,
        symptoms: &SYMPTOMS,
        conditions: &CONDITIONS,
        critical_symptoms: &CRITICAL_SYMPTOMS,
        serious_conditions: &SERIOUS_CONDITIONS,
    })
}
