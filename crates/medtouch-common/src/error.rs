use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MedtouchError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("Unknown pre-existing condition: {0}")]
    UnknownCondition(String),
}

impl MedtouchError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, MedtouchError>;

/// Error returned from HTTP handlers. Renders as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

impl From<MedtouchError> for ApiError {
    fn from(err: MedtouchError) -> Self {
        Self::bad_request(err.to_string())
    }
}

/// Malformed bodies and missing fields are client errors, reported in the same shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let api: ApiError = MedtouchError::validation("age", "must be within 0..=120").into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.message, "Invalid age: must be within 0..=120");
    }

    #[test]
    fn test_unknown_condition_maps_to_bad_request() {
        let api: ApiError = MedtouchError::UnknownCondition("Gout".into()).into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.message, "Unknown pre-existing condition: Gout");
    }
}
