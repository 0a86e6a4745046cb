//! Errors raised by hashing, signing and signer recovery.

use thiserror::Error;

use super::address::Address;

/// Errors from the oracle's ECDSA operations.
///
/// Length and encoding problems are kept apart from recovery failures, and
/// both are kept apart from a signer mismatch: the first two mean the input
/// was malformed, the last means a well-formed signature came from the
/// wrong key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The configured private key is not a valid secp256k1 scalar.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Signatures are exactly 65 bytes: r (32) || s (32) || v (1).
    #[error("invalid signature length: expected 65, got {0}")]
    InvalidSignatureLength(usize),

    /// v must be 0, 1, 27 or 28.
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Curve point recovery failed for the given hash and signature.
    #[error("failed to recover public key: {0}")]
    RecoveryFailure(String),

    #[error("signer mismatch: expected {expected}, got {got}")]
    SignerMismatch { expected: Address, got: Address },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("signing failed: {0}")]
    SigningFailure(String),
}
