use serde::{Deserialize, Serialize};
use validator::Validate;

use super::delegation::DelegationMessage;

/// Body of `POST /verify`. Absent fields decode as empty strings so that
/// "missing" and "empty" are rejected the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub validator_address: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub nominator_address: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub msg: String,
}

impl From<VerifyRequest> for DelegationMessage {
    fn from(request: VerifyRequest) -> Self {
        DelegationMessage::new(request.validator_address, request.nominator_address, request.msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub validator_address: String,
    pub nominator_address: String,
    pub msg: String,
    pub signature: String, // 0x-prefixed hex
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub public_key: String,
    pub address: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
