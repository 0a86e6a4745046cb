//! 20-byte account addresses derived from secp256k1 public keys.

use std::fmt;
use std::str::FromStr;

use k256::ecdsa::VerifyingKey;
use serde::{Serialize, Serializer};

use super::error::CryptoError;
use super::message::keccak256;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Low 20 bytes of `keccak256(x || y)` over the uncompressed public key.
    pub fn from_verifying_key(key: &VerifyingKey) -> Self {
        let encoded = key.to_encoded_point(false);
        // Skip the 0x04 SEC1 tag.
        let hash = keccak256(&encoded.as_bytes()[1..]);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// EIP-55 mixed-case checksum encoding, `0x`-prefixed.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl FromStr for Address {
    type Err = CryptoError;

    /// Accepts 40 hex digits, with or without `0x`, in any case. The
    /// checksum casing is not enforced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != 40 {
            return Err(CryptoError::InvalidAddress(s.to_string()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| CryptoError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::SigningKey;

    #[test]
    fn test_eip55_vectors() {
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let address: Address = expected.to_lowercase().parse().unwrap();
            assert_eq!(address.to_string(), expected);
        }
    }

    #[test]
    fn test_address_of_private_key_one() {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let key = SigningKey::from_slice(&secret).unwrap();
        let address = Address::from_verifying_key(key.verifying_key());
        assert_eq!(
            address.to_string(),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }

    #[test]
    fn test_parse_without_prefix() {
        let with: Address = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf".parse().unwrap();
        let without: Address = "7E5F4552091A69125D5DFCB7B8C2659029395BDF".parse().unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("".parse::<Address>().is_err());
        assert!("0x1234".parse::<Address>().is_err());
        assert!("0xZZ5f4552091a69125d5dfcb7b8c2659029395bdf".parse::<Address>().is_err());
        assert!("0x7e5f4552091a69125d5dfcb7b8c2659029395bdf00"
            .parse::<Address>()
            .is_err());
    }

    #[test]
    fn test_serializes_as_checksum_string() {
        let address: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            "\"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed\""
        );
    }
}
