use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A nominator's report about a validator. Addresses are opaque,
/// chain-specific strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationMessage {
    validator_address: String,
    nominator_address: String,
    text: String,
}

impl DelegationMessage {
    pub fn new(
        validator_address: impl Into<String>,
        nominator_address: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            validator_address: validator_address.into(),
            nominator_address: nominator_address.into(),
            text: text.into(),
        }
    }

    pub fn validator_address(&self) -> &str {
        &self.validator_address
    }

    pub fn nominator_address(&self) -> &str {
        &self.nominator_address
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Stage-by-stage outcome of the v2 delegation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub nominator_address: String,
    pub validator_address: String,
    pub is_valid: bool,
    pub address_validation: bool,
    /// Never set by the v2 path.
    pub extrinsic_validation: bool,
    pub storage_validation: bool,
    pub active_era_validation: bool,
    pub error: String,
    pub additional_info: String,
    pub timestamp: DateTime<Utc>,
}

impl VerificationResult {
    pub fn new(nominator_address: &str, validator_address: &str) -> Self {
        Self {
            nominator_address: nominator_address.to_string(),
            validator_address: validator_address.to_string(),
            is_valid: false,
            address_validation: false,
            extrinsic_validation: false,
            storage_validation: false,
            active_era_validation: false,
            error: String::new(),
            additional_info: String::new(),
            timestamp: Utc::now(),
        }
    }
}

/// A staking-related extrinsic found on chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingExtrinsic {
    pub block_hash: String,
    pub block_number: Option<u64>,
    pub extrinsic_index: usize,
    pub method: String,
}
