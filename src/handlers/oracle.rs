use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{HealthResponse, InfoResponse, VerifyRequest, VerifyResponse};
use crate::services::OracleService;

/// `POST /verify`. The body is decoded here rather than through the `Json`
/// extractor so every malformed payload gets the same plain-text 400.
pub async fn verify(
    State(oracle): State<Arc<OracleService>>,
    body: Bytes,
) -> Result<Json<VerifyResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    async move {
        let request: VerifyRequest = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "rejected: invalid request body");
            ApiError::InvalidBody
        })?;

        let response = oracle.handle_verify(request).await?;
        tracing::info!(
            nominator = %response.nominator_address,
            validator = %response.validator_address,
            "signed delegation message"
        );
        Ok(Json(response))
    }
    .instrument(info_span!("verify", %request_id))
    .await
}

pub async fn info(State(oracle): State<Arc<OracleService>>) -> Json<InfoResponse> {
    Json(InfoResponse {
        public_key: oracle.public_key_hex(),
        address: oracle.address().to_string(),
        status: "ready".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
