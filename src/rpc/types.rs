//! JSON-RPC envelopes and typed results for the chain methods the checker uses.
//!
//! Results are decoded from `serde_json::Value` field by field so an absent or
//! mistyped field becomes an explicit error instead of a silent default.

use serde::Serialize;
use serde_json::Value;

use super::client::RpcError;

pub const METHOD_GET_STORAGE: &str = "state_getStorage";
pub const METHOD_GET_HEADER: &str = "chain_getHeader";
pub const METHOD_GET_BLOCK_HASH: &str = "chain_getBlockHash";
pub const METHOD_GET_BLOCK: &str = "chain_getBlock";

/// Storage key probed for the active era.
pub const ACTIVE_ERA_STORAGE_KEY: &str =
    "0x5f3e4907f716ac89b6347d15ececedca3ed14b45ed20d054f05e37e2542cfe70";

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: Value,
    pub id: u64,
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: Value, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id,
        }
    }
}

/// Active era as read from storage.
///
/// The node returns `null` when the key is unset. When present, the value is
/// SCALE-encoded and starts with the era index as a little-endian `u32`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveEra {
    pub raw: Option<String>,
    pub index: Option<u32>,
}

impl ActiveEra {
    pub fn from_result(result: Value) -> Result<Self, RpcError> {
        let raw = match result {
            Value::Null => return Ok(Self::default()),
            Value::String(raw) => raw,
            other => {
                return Err(unexpected(
                    METHOD_GET_STORAGE,
                    format!("expected hex string or null, got {other}"),
                ))
            }
        };

        let bytes = decode_hex(METHOD_GET_STORAGE, &raw)?;
        let index = bytes
            .get(..4)
            .map(|head| u32::from_le_bytes([head[0], head[1], head[2], head[3]]));

        Ok(Self {
            raw: Some(raw),
            index,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub number: u64,
    pub parent_hash: Option<String>,
}

impl BlockHeader {
    pub fn from_result(result: Value) -> Result<Self, RpcError> {
        let number = result
            .get("number")
            .and_then(Value::as_str)
            .ok_or_else(|| unexpected(METHOD_GET_HEADER, "header has no number field"))?;
        let number = parse_hex_u64(number)
            .ok_or_else(|| unexpected(METHOD_GET_HEADER, format!("bad block number {number}")))?;

        let parent_hash = result
            .get("parentHash")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Ok(Self {
            number,
            parent_hash,
        })
    }
}

pub fn block_hash_from_result(result: Value) -> Result<String, RpcError> {
    match result {
        Value::String(hash) => Ok(hash),
        Value::Null => Err(unexpected(METHOD_GET_BLOCK_HASH, "block not found")),
        other => Err(unexpected(
            METHOD_GET_BLOCK_HASH,
            format!("expected string, got {other}"),
        )),
    }
}

/// Extrinsics of a block as returned by `chain_getBlock`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBody {
    pub extrinsics: Vec<String>,
}

impl BlockBody {
    pub fn from_result(result: Value) -> Result<Self, RpcError> {
        if result.is_null() {
            return Err(unexpected(METHOD_GET_BLOCK, "block not found"));
        }

        let extrinsics = result
            .pointer("/block/extrinsics")
            .and_then(Value::as_array)
            .ok_or_else(|| unexpected(METHOD_GET_BLOCK, "block has no extrinsics list"))?
            .iter()
            .map(|extrinsic| match extrinsic {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();

        Ok(Self { extrinsics })
    }
}

pub fn parse_hex_u64(value: &str) -> Option<u64> {
    let digits = value.strip_prefix("0x")?;
    u64::from_str_radix(digits, 16).ok()
}

fn decode_hex(method: &str, value: &str) -> Result<Vec<u8>, RpcError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(digits).map_err(|e| unexpected(method, format!("invalid hex: {e}")))
}

fn unexpected(method: &str, reason: impl Into<String>) -> RpcError {
    RpcError::UnexpectedResult {
        method: method.to_string(),
        reason: reason.into(),
    }
}
