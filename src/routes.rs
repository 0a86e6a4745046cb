//! Route definitions for the oracle API

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::{health, info, verify};

pub fn oracle_routes() -> Router<AppState> {
    Router::new()
        .route("/verify", post(verify))
        .route("/info", get(info))
        .route("/health", get(health))
}

/// The complete service: routes, CORS and request tracing. The CORS layer
/// answers every `OPTIONS` request itself.
pub fn create_router(state: AppState) -> Router {
    oracle_routes()
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
