//! Oracle signing key and secp256k1 signer recovery.

use std::fmt;

use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, SigningKey, VerifyingKey};
use tracing::warn;
use zeroize::Zeroizing;

use super::address::Address;
use super::error::CryptoError;
use super::message::{hash_message, keccak256, to_signed_hash, Hash};

/// Length of an `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// A recoverable secp256k1 signature laid out as `r (32) || s (32) || v (1)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; SIGNATURE_LENGTH] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureLength(bytes.len()))?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    pub fn recovery_byte(&self) -> u8 {
        self.0[64]
    }

    /// Lowercase hex with a leading `0x`.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex_prefixed())
    }
}

/// Holds the oracle's private key for the lifetime of the process.
///
/// The key is decoded once at construction and never exposed again; the
/// `Debug` output only carries the derived address.
pub struct SignatureEngine {
    signing_key: SigningKey,
    address: Address,
}

impl SignatureEngine {
    /// Decode a hex secret (optional `0x` prefix). Fails immediately on
    /// malformed hex, a length other than 32 bytes, or an out-of-range scalar.
    pub fn from_hex(secret: &str) -> Result<Self, CryptoError> {
        let trimmed = secret.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);

        let bytes = Zeroizing::new(
            hex::decode(digits)
                .map_err(|e| CryptoError::InvalidKeyMaterial(format!("malformed hex: {e}")))?,
        );
        if bytes.len() != 32 {
            return Err(CryptoError::InvalidKeyMaterial(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }

        let signing_key = SigningKey::from_slice(&bytes)
            .map_err(|_| CryptoError::InvalidKeyMaterial("scalar out of range".to_string()))?;
        Ok(Self::from_signing_key(signing_key))
    }

    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = Address::from_verifying_key(signing_key.verifying_key());
        Self {
            signing_key,
            address,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Uncompressed SEC1 public key (`04 || x || y`) as hex, no `0x`.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.verifying_key().to_encoded_point(false).as_bytes())
    }

    /// Sign a 32-byte digest. The result is low-S with `v` in {0, 1}.
    pub fn sign(&self, hash: &Hash) -> Result<Signature, CryptoError> {
        let (mut signature, mut recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(hash)
            .map_err(|e| CryptoError::SigningFailure(e.to_string()))?;

        if let Some(normalized) = signature.normalize_s() {
            signature = normalized;
            recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
        }

        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = recovery_id.to_byte();
        Ok(Signature(bytes))
    }

    /// Signs `keccak256(text)` with no EIP-191 wrapping.
    pub fn sign_message(&self, text: &str) -> Result<Signature, CryptoError> {
        self.sign(&keccak256(text.as_bytes()))
    }

    /// Signs the EIP-191 wrapped `keccak256(text)`.
    pub fn sign_eth_message(&self, text: &str) -> Result<Signature, CryptoError> {
        self.sign(&to_signed_hash(&keccak256(text.as_bytes())))
    }

    /// Signs the hash the on-chain `submitMessage` recovers against.
    pub fn sign_triplet(
        &self,
        validator: &str,
        nominator: &str,
        text: &str,
    ) -> Result<Signature, CryptoError> {
        self.sign(&to_signed_hash(&hash_message(validator, nominator, text)))
    }
}

impl fmt::Debug for SignatureEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureEngine")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Recover the address whose key produced `signature` over `hash`.
///
/// The length is checked before any curve arithmetic is attempted. High-S
/// signatures are accepted like `ecrecover` does: `(r, n - s, v ^ 1)`
/// recovers the same key as `(r, s, v)`.
pub fn recover_address(hash: &Hash, signature: &[u8]) -> Result<Address, CryptoError> {
    let signature = Signature::from_slice(signature)?;
    let mut recovery_id = parse_recovery_id(signature.recovery_byte())?;

    let mut ecdsa_signature = EcdsaSignature::from_slice(&signature.as_bytes()[..64])
        .map_err(|e| CryptoError::RecoveryFailure(e.to_string()))?;
    if let Some(normalized) = ecdsa_signature.normalize_s() {
        ecdsa_signature = normalized;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }
    let key = VerifyingKey::recover_from_prehash(hash, &ecdsa_signature, recovery_id)
        .map_err(|e| CryptoError::RecoveryFailure(e.to_string()))?;

    Ok(Address::from_verifying_key(&key))
}

/// Recover the signer and require it to be `expected`.
pub fn verify_against_oracle(
    hash: &Hash,
    signature: &[u8],
    expected: Address,
) -> Result<(), CryptoError> {
    let got = recover_address(hash, signature)?;
    if got != expected {
        warn!(%expected, %got, "recovered signer does not match oracle address");
        return Err(CryptoError::SignerMismatch { expected, got });
    }
    Ok(())
}

/// Both the 0/1 and the 27/28 conventions are in circulation.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(CryptoError::InvalidRecoveryId(v)),
    };
    RecoveryId::from_byte(id).ok_or(CryptoError::InvalidRecoveryId(v))
}
