//! HTTP Handlers

use crate::application::check_file::CheckFileUseCase;
use crate::application::config::ScannerConfig;
use crate::application::list_rules::ListRulesUseCase;
use crate::application::test_rule::{TestRuleInput, TestRuleUseCase};
use crate::domain::repository::{RuleCatalog, SignatureEngine, UploadStore};
use crate::error::{ScannerError, ScannerResult};
use crate::presentation::multipart::collect_files;
use crate::presentation::pages;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::Html;
use std::sync::Arc;

/// Shared state for scanner handlers
pub struct ScannerAppState<S, E, C> {
    pub store: Arc<S>,
    pub engine: Arc<E>,
    pub catalog: Arc<C>,
    pub config: Arc<ScannerConfig>,
}

impl<S, E, C> Clone for ScannerAppState<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            engine: self.engine.clone(),
            catalog: self.catalog.clone(),
            config: self.config.clone(),
        }
    }
}

/// GET /yara/
pub async fn dashboard<S, E, C>(
    State(state): State<ScannerAppState<S, E, C>>,
) -> ScannerResult<Html<String>>
where
    S: UploadStore + Send + Sync + 'static,
    E: SignatureEngine + Send + Sync + 'static,
    C: RuleCatalog + Send + Sync + 'static,
{
    let rules = ListRulesUseCase::new(state.catalog.clone()).execute().await?;
    Ok(Html(pages::dashboard_page(&rules)))
}

/// POST /yara/check
pub async fn check<S, E, C>(
    State(state): State<ScannerAppState<S, E, C>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ScannerResult<Html<String>>
where
    S: UploadStore + Send + Sync + 'static,
    E: SignatureEngine + Send + Sync + 'static,
    C: RuleCatalog + Send + Sync + 'static,
{
    let mut files = collect_files(multipart?, &["file"]).await?;
    let upload = files.remove("file").ok_or(ScannerError::MissingUpload)?;

    let use_case =
        CheckFileUseCase::new(state.store.clone(), state.engine.clone(), state.config.clone());
    let report = use_case.execute(upload).await.map_err(ScannerError::check)?;

    Ok(Html(pages::result_page(&report)))
}

/// GET /yara/test-rule
pub async fn test_rule_form() -> Html<String> {
    Html(pages::test_rule_page())
}

/// POST /yara/test-rule
pub async fn test_rule<S, E, C>(
    State(state): State<ScannerAppState<S, E, C>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ScannerResult<Html<String>>
where
    S: UploadStore + Send + Sync + 'static,
    E: SignatureEngine + Send + Sync + 'static,
    C: RuleCatalog + Send + Sync + 'static,
{
    let mut files = collect_files(multipart?, &["rulefile", "targetfile"]).await?;
    let (Some(rule_file), Some(target_file)) = (files.remove("rulefile"), files.remove("targetfile"))
    else {
        return Err(ScannerError::MissingRuleOrTarget);
    };

    let use_case = TestRuleUseCase::new(state.store.clone(), state.engine.clone());
    let report = use_case
        .execute(TestRuleInput {
            rule_file,
            target_file,
        })
        .await
        .map_err(ScannerError::test_rule)?;

    Ok(Html(pages::result_page(&report)))
}
