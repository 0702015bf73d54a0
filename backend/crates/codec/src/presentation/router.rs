//! Base64 Router

use crate::presentation::handlers;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes under `/base`
pub fn codec_router() -> Router {
    Router::new()
        .route("/base/", get(handlers::index))
        .route("/base/convert", post(handlers::convert))
}
