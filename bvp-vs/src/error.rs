//! Error types for bvp-vs
//!
//! Maps pipeline and storage failures onto HTTP responses. Every estimation
//! failure kind keeps its identity in the error code so clients can tell a
//! bad record from an unreachable model.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::valuation::EstimateError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Estimation pipeline failure
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    /// bvp-common error (database, config)
    #[error("Common error: {0}")]
    Common(#[from] bvp_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Estimate(ref err) => {
                let (status, code) = match err {
                    EstimateError::UnknownDistrict(_) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "UNKNOWN_DISTRICT")
                    }
                    EstimateError::MissingDongToken(_) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_DONG_TOKEN")
                    }
                    EstimateError::MalformedYearBuilt(_) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "MALFORMED_YEAR_BUILT")
                    }
                    EstimateError::InvalidFloorCount { .. } => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_FLOOR_COUNT")
                    }
                    EstimateError::InvalidLandValue { .. } => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_LAND_VALUE")
                    }
                    EstimateError::PredictionRejectedInput(_) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "PREDICTION_REJECTED_INPUT")
                    }
                    EstimateError::PredictionUnavailable(_) => {
                        (StatusCode::BAD_GATEWAY, "PREDICTION_UNAVAILABLE")
                    }
                };
                (status, code, err.to_string())
            }
            ApiError::Common(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn parse_failures_are_unprocessable() {
        let err = EstimateError::UnknownDistrict("해운대구".to_string());
        assert_eq!(status_of(err.into()), StatusCode::UNPROCESSABLE_ENTITY);

        let err = EstimateError::MissingDongToken("서울 강남구 테헤란로 1".to_string());
        assert_eq!(status_of(err.into()), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unreachable_model_is_bad_gateway() {
        let err = EstimateError::PredictionUnavailable("timed out".to_string());
        assert_eq!(status_of(err.into()), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unknown_building_is_not_found() {
        let err = ApiError::NotFound("building 123".to_string());
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }
}
