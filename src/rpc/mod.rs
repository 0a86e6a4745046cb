//! Chain JSON-RPC access.

pub mod client;
pub mod types;

pub use client::{parse_envelope, ChainRpc, HttpRpcClient, RpcError};
pub use types::{ActiveEra, BlockBody, BlockHeader};
