//! Message hashing, oracle signing and signer recovery.
//!
//! Everything here is pure: no I/O and no shared mutable state.

pub mod address;
pub mod error;
pub mod message;
pub mod signer;

pub use address::Address;
pub use error::CryptoError;
pub use message::{hash_message, keccak256, to_signed_hash, Hash, ETH_SIGNED_MESSAGE_PREFIX};
pub use signer::{
    recover_address, verify_against_oracle, Signature, SignatureEngine, SIGNATURE_LENGTH,
};
