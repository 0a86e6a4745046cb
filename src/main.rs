//! Delegation oracle server
//!
//! Exposes `POST /verify`, `GET /info` and `GET /health`. The signing key is
//! loaded once from `PRIVATE_KEY` and never leaves the process.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use delegation_oracle::app_state::AppState;
use delegation_oracle::config::OracleConfig;
use delegation_oracle::crypto::SignatureEngine;
use delegation_oracle::routes;
use delegation_oracle::rpc::HttpRpcClient;
use delegation_oracle::services::{DelegationService, OracleService, SigningScheme};

const DEFAULT_LOG_FILTER: &str = "delegation_oracle=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before the filter reads RUST_LOG
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if dotenv.is_err() {
        info!("no .env file found, using process environment");
    }

    let config = OracleConfig::from_env().context("failed to load configuration")?;

    let engine =
        SignatureEngine::from_hex(&config.private_key).context("failed to create signing oracle")?;
    let rpc = HttpRpcClient::new(config.rpc_url.clone(), config.rpc_timeout)
        .context("failed to build RPC client")?;
    let delegation = DelegationService::new(Arc::new(rpc));
    let oracle = OracleService::new(engine, Arc::new(delegation), config.signing_scheme);

    info!(public_key = %oracle.public_key_hex(), "oracle public key");
    info!(address = %oracle.address(), "oracle address");
    info!(rpc_url = %config.rpc_url, "using chain RPC endpoint");
    if oracle.scheme() == SigningScheme::PlainMessage {
        warn!(
            scheme = %oracle.scheme(),
            "signatures cover keccak256(msg) only and will not pass contract submitMessage; \
             set SIGNING_SCHEME=triplet for contract-verifiable signatures"
        );
    } else {
        info!(scheme = %oracle.scheme(), "signing scheme");
    }

    let app = routes::create_router(AppState::new(Arc::new(oracle)));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Oracle server starting on {}", addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
