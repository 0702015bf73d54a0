//! Password Generator Router

use crate::application::config::PassgenConfig;
use crate::presentation::handlers::{self, PassgenAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Routes under `/passgen`, with full paths so the app can merge them
pub fn passgen_router(config: PassgenConfig) -> Router {
    let state = PassgenAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/passgen/", get(handlers::index))
        .route("/passgen/generate", post(handlers::generate))
        .with_state(state)
}
