//! JSON-RPC transport to the chain endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::types::RpcRequest;

/// Failures talking to the chain endpoint. Every variant names the endpoint
/// so a network fault is never mistaken for a negative delegation result.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("malformed JSON-RPC response from {endpoint}: {reason}")]
    MalformedEnvelope { endpoint: String, reason: String },

    #[error("RPC error {code} from {endpoint}: {message}")]
    Remote {
        endpoint: String,
        code: i64,
        message: String,
    },

    #[error("unexpected result for {method}: {reason}")]
    UnexpectedResult { method: String, reason: String },
}

/// A JSON-RPC 2.0 endpoint. Implementations must be safe to share across
/// concurrent requests.
#[async_trait]
pub trait ChainRpc: Send + Sync {
    fn endpoint(&self) -> &str;

    /// Issue `method` and return the envelope's `result` (which may be `null`).
    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError>;
}

/// `ChainRpc` over HTTP POST with a bounded per-request timeout.
pub struct HttpRpcClient {
    rpc_url: String,
    http: Client,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    pub fn new(rpc_url: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RpcError::ClientBuild)?;

        Ok(Self {
            rpc_url: rpc_url.into(),
            http,
            next_id: AtomicU64::new(1),
        })
    }

    fn transport(&self, source: reqwest::Error) -> RpcError {
        RpcError::Transport {
            endpoint: self.rpc_url.clone(),
            source,
        }
    }
}

#[async_trait]
impl ChainRpc for HttpRpcClient {
    fn endpoint(&self) -> &str {
        &self.rpc_url
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, endpoint = %self.rpc_url, "chain rpc call");

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&RpcRequest::new(method, params, id))
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status {
                endpoint: self.rpc_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport(e))?;
        parse_envelope(&self.rpc_url, &body)
    }
}

/// Extract `result` from a JSON-RPC response body, surfacing an `error`
/// member as `RpcError::Remote`.
pub fn parse_envelope(endpoint: &str, body: &[u8]) -> Result<Value, RpcError> {
    let malformed = |reason: String| RpcError::MalformedEnvelope {
        endpoint: endpoint.to_string(),
        reason,
    };

    let value: Value = serde_json::from_slice(body).map_err(|e| malformed(e.to_string()))?;
    let envelope = value
        .as_object()
        .ok_or_else(|| malformed("response is not a JSON object".to_string()))?;

    if let Some(error) = envelope.get("error").filter(|e| !e.is_null()) {
        return Err(RpcError::Remote {
            endpoint: endpoint.to_string(),
            code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        });
    }

    envelope
        .get("result")
        .cloned()
        .ok_or_else(|| malformed("response has neither result nor error".to_string()))
}
