//! Off-chain mirror of the contract's `submitMessage` signature check.

use thiserror::Error;
use tracing::warn;

use crate::crypto::{self, hash_message, to_signed_hash, Address, CryptoError, SIGNATURE_LENGTH};
use crate::models::DelegationMessage;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifierError {
    #[error("invalid oracle address: {0}")]
    InvalidOracleAddress(String),

    #[error("invalid signature hex: {0}")]
    InvalidHex(String),

    #[error("invalid signature length: expected 65, got {0}")]
    InvalidSignatureLength(usize),

    #[error("failed to recover signer: {0}")]
    Recovery(#[source] CryptoError),

    #[error("signature not from oracle: expected {expected}, got {got}")]
    SignerNotOracle { expected: Address, got: Address },
}

/// Checks that a signature over a (validator, nominator, text) triplet was
/// produced by the configured oracle. Pure: no I/O, no state changes.
#[derive(Debug, Clone, Copy)]
pub struct VerifierService {
    oracle_address: Address,
}

impl VerifierService {
    pub fn new(oracle_address: Address) -> Self {
        Self { oracle_address }
    }

    pub fn from_address_str(oracle_address: &str) -> Result<Self, VerifierError> {
        let address = oracle_address
            .parse()
            .map_err(|_| VerifierError::InvalidOracleAddress(oracle_address.to_string()))?;
        Ok(Self::new(address))
    }

    pub fn oracle_address(&self) -> Address {
        self.oracle_address
    }

    /// Same steps as the contract: decode, length check, triplet hash,
    /// EIP-191 wrap, recover, compare.
    pub fn submit_message(
        &self,
        validator: &str,
        nominator: &str,
        text: &str,
        signature_hex: &str,
    ) -> Result<(), VerifierError> {
        let digits = signature_hex.strip_prefix("0x").unwrap_or(signature_hex);
        let signature =
            hex::decode(digits).map_err(|e| VerifierError::InvalidHex(e.to_string()))?;
        if signature.len() != SIGNATURE_LENGTH {
            return Err(VerifierError::InvalidSignatureLength(signature.len()));
        }

        let signed_hash = to_signed_hash(&hash_message(validator, nominator, text));
        let got = crypto::recover_address(&signed_hash, &signature)
            .map_err(VerifierError::Recovery)?;

        if got != self.oracle_address {
            warn!(
                expected = %self.oracle_address,
                %got,
                validator,
                nominator,
                "signature not from oracle"
            );
            return Err(VerifierError::SignerNotOracle {
                expected: self.oracle_address,
                got,
            });
        }
        Ok(())
    }

    pub fn verify_message(
        &self,
        message: &DelegationMessage,
        signature_hex: &str,
    ) -> Result<(), VerifierError> {
        self.submit_message(
            message.validator_address(),
            message.nominator_address(),
            message.text(),
            signature_hex,
        )
    }
}
