//! Request orchestration for `/verify`: validate input, check the
//! delegation, then sign.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};
use validator::Validate;

use super::delegation_service::{DelegationCheck, DelegationError};
use crate::crypto::{Address, CryptoError, Signature, SignatureEngine};
use crate::models::{VerifyRequest, VerifyResponse};

/// What the `/verify` signature covers.
///
/// `PlainMessage` signs `keccak256(msg)` alone, which is what existing
/// clients of the endpoint expect; it does NOT satisfy the contract's
/// `submitMessage`. `Triplet` signs the EIP-191 wrapped
/// `keccak256(validator ++ nominator ++ msg)` that the contract recovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningScheme {
    #[default]
    PlainMessage,
    Triplet,
}

impl FromStr for SigningScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::PlainMessage),
            "triplet" => Ok(Self::Triplet),
            other => Err(format!("unknown signing scheme {other:?} (expected plain or triplet)")),
        }
    }
}

impl fmt::Display for SigningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlainMessage => f.write_str("plain"),
            Self::Triplet => f.write_str("triplet"),
        }
    }
}

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingField(Vec<String>),

    #[error("failed to verify delegation: {0}")]
    VerificationFailed(#[source] DelegationError),

    #[error("nominator has not delegated to the specified validator")]
    DelegationNotFound,

    #[error("failed to sign message: {0}")]
    Signing(#[source] CryptoError),
}

/// The oracle: an immutable signing key plus a delegation checker.
pub struct OracleService {
    engine: SignatureEngine,
    delegation: Arc<dyn DelegationCheck>,
    scheme: SigningScheme,
}

impl OracleService {
    pub fn new(
        engine: SignatureEngine,
        delegation: Arc<dyn DelegationCheck>,
        scheme: SigningScheme,
    ) -> Self {
        Self {
            engine,
            delegation,
            scheme,
        }
    }

    pub fn address(&self) -> Address {
        self.engine.address()
    }

    pub fn public_key_hex(&self) -> String {
        self.engine.public_key_hex()
    }

    pub fn scheme(&self) -> SigningScheme {
        self.scheme
    }

    /// One attempt per request; any failure ends it and nothing is retried.
    pub async fn handle_verify(
        &self,
        request: VerifyRequest,
    ) -> Result<VerifyResponse, OracleError> {
        if let Err(errors) = request.validate() {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();
            return Err(OracleError::MissingField(fields));
        }

        debug!(stage = "validating_delegation");
        let delegated = self
            .delegation
            .is_active_delegation(&request.nominator_address, &request.validator_address)
            .await
            .map_err(|e| {
                error!(error = %e, "error verifying delegation");
                OracleError::VerificationFailed(e)
            })?;

        if !delegated {
            info!(
                nominator = %request.nominator_address,
                validator = %request.validator_address,
                "rejected: delegation not found"
            );
            return Err(OracleError::DelegationNotFound);
        }

        debug!(stage = "signing", scheme = %self.scheme);
        let signature = self.sign(&request).map_err(|e| {
            error!(error = %e, "error signing message");
            OracleError::Signing(e)
        })?;

        Ok(VerifyResponse {
            validator_address: request.validator_address,
            nominator_address: request.nominator_address,
            msg: request.msg,
            signature: signature.to_hex_prefixed(),
        })
    }

    fn sign(&self, request: &VerifyRequest) -> Result<Signature, CryptoError> {
        match self.scheme {
            SigningScheme::PlainMessage => self.engine.sign_message(&request.msg),
            SigningScheme::Triplet => self.engine.sign_triplet(
                &request.validator_address,
                &request.nominator_address,
                &request.msg,
            ),
        }
    }
}
