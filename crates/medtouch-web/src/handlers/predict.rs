//! Risk prediction API — scores one patient with the rule engine.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use medtouch_common::error::ApiError;
use medtouch_common::vitals::{ClinicalContext, VitalsInput};
use medtouch_scorer::RiskAssessment;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::state::SharedState;

/// Body of `POST /api/predict`, as accumulated by the intake wizard.
/// `vitals` and its scored fields are required; symptoms and history default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub vitals: VitalsInput,
    #[serde(flatten)]
    pub context: ClinicalContext,
}

/// POST /api/predict — Validate the intake form and return an assessment
pub async fn api_predict(
    State(state): State<SharedState>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<RiskAssessment>, ApiError> {
    let Json(req) = body?;
    req.vitals.validate()?;
    req.context.validate()?;

    let assessment = state.scorer.score_context(&req.vitals, &req.context);
    info!(
        risk_score = assessment.risk_score,
        level = %assessment.risk_level,
        department = %assessment.department,
        "Prediction served"
    );

    Ok(Json(assessment))
}
