//! Message hashing shared by the oracle and the on-chain verifier.
//!
//! The contract computes `keccak256(abi.encodePacked(validator, nominator, msgText))`
//! and then wraps it with the EIP-191 prefix before `ecrecover`. For string
//! arguments `abi.encodePacked` is plain concatenation of the UTF-8 bytes, so
//! the three fields are joined with no separator and no length prefix.

use sha3::{Digest, Keccak256};

/// 32-byte Keccak-256 digest.
pub type Hash = [u8; 32];

/// `"\x19Ethereum Signed Message:\n32"`, the EIP-191 prefix for a 32-byte payload.
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

/// Keccak-256 (the pre-standard padding, not SHA3-256).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash of `validator ++ nominator ++ text`.
pub fn hash_message(validator: &str, nominator: &str, text: &str) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(validator.as_bytes());
    hasher.update(nominator.as_bytes());
    hasher.update(text.as_bytes());
    hasher.finalize().into()
}

/// Hash of `ETH_SIGNED_MESSAGE_PREFIX ++ message_hash`.
pub fn to_signed_hash(message_hash: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(ETH_SIGNED_MESSAGE_PREFIX);
    hasher.update(message_hash);
    hasher.finalize().into()
}
