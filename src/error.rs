//! HTTP error mapping for the oracle API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;
use crate::services::OracleError;

pub const INVALID_BODY: &str = "Invalid request body";
pub const MISSING_FIELDS: &str = "Missing required fields";
pub const DELEGATION_NOT_FOUND: &str = "Nominator has not delegated to the specified validator";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Failure of an API request, rendered in the shapes existing clients parse:
/// input errors and signing faults as plain text, delegation outcomes as JSON.
#[derive(Debug)]
pub enum ApiError {
    InvalidBody,
    Oracle(OracleError),
}

impl From<OracleError> for ApiError {
    fn from(err: OracleError) -> Self {
        ApiError::Oracle(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody => (StatusCode::BAD_REQUEST, INVALID_BODY).into_response(),
            ApiError::Oracle(OracleError::MissingField(_)) => {
                (StatusCode::BAD_REQUEST, MISSING_FIELDS).into_response()
            }
            ApiError::Oracle(OracleError::DelegationNotFound) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "delegation_not_found".to_string(),
                    message: DELEGATION_NOT_FOUND.to_string(),
                }),
            )
                .into_response(),
            ApiError::Oracle(OracleError::VerificationFailed(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "verification_failed".to_string(),
                    message: format!("Failed to verify delegation: {e}"),
                }),
            )
                .into_response(),
            ApiError::Oracle(OracleError::Signing(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
            }
        }
    }
}
