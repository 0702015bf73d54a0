//! Scanner Router

use crate::application::config::ScannerConfig;
use crate::domain::repository::{RuleCatalog, SignatureEngine, UploadStore};
use crate::infra::{rules_dir::FsRuleCatalog, temp_store::TempUploadStore, yara_engine::YaraEngine};
use crate::presentation::handlers::{self, ScannerAppState};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the scanner router backed by libyara and the local filesystem
pub fn scanner_router(config: ScannerConfig) -> Router {
    let store = TempUploadStore::new(config.upload_dir.clone());
    let engine = YaraEngine::new(config.scan_timeout_secs());
    let catalog = FsRuleCatalog::new(config.rules_dir.clone());

    scanner_router_generic(store, engine, catalog, config)
}

/// Create a scanner router for any store/engine/catalog implementation
pub fn scanner_router_generic<S, E, C>(store: S, engine: E, catalog: C, config: ScannerConfig) -> Router
where
    S: UploadStore + Send + Sync + 'static,
    E: SignatureEngine + Send + Sync + 'static,
    C: RuleCatalog + Send + Sync + 'static,
{
    let body_limit = config.max_upload_bytes;
    let state = ScannerAppState {
        store: Arc::new(store),
        engine: Arc::new(engine),
        catalog: Arc::new(catalog),
        config: Arc::new(config),
    };

    Router::new()
        .route("/yara/", get(handlers::dashboard::<S, E, C>))
        .route("/yara/check", post(handlers::check::<S, E, C>))
        .route(
            "/yara/test-rule",
            get(handlers::test_rule_form).post(handlers::test_rule::<S, E, C>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
