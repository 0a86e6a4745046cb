//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::services::OracleService;

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<OracleService>,
}

impl AppState {
    pub fn new(oracle: Arc<OracleService>) -> Self {
        Self { oracle }
    }
}

impl FromRef<AppState> for Arc<OracleService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.oracle.clone()
    }
}
