//! Test Rule Use Case
//!
//! Compiles an uploaded rule file and matches it against an uploaded
//! target. Both uploads are stored under random names and both are removed
//! before returning, whatever happened in between.

use crate::domain::entities::{ScanReport, UploadedFile};
use crate::domain::repository::{SignatureEngine, UploadStore};
use crate::domain::value_objects::UploadName;
use crate::error::ScannerResult;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TestRuleInput {
    pub rule_file: UploadedFile,
    pub target_file: UploadedFile,
}

pub struct TestRuleUseCase<S, E>
where
    S: UploadStore,
    E: SignatureEngine,
{
    store: Arc<S>,
    engine: Arc<E>,
}

impl<S, E> TestRuleUseCase<S, E>
where
    S: UploadStore,
    E: SignatureEngine,
{
    pub fn new(store: Arc<S>, engine: Arc<E>) -> Self {
        Self { store, engine }
    }

    pub async fn execute(&self, input: TestRuleInput) -> ScannerResult<ScanReport> {
        let rule_path = self
            .store
            .save(&UploadName::generated(Some("yar")), &input.rule_file.bytes)
            .await?;

        let target_path = match self
            .store
            .save(&UploadName::generated(Some("bin")), &input.target_file.bytes)
            .await
        {
            Ok(path) => path,
            Err(e) => {
                self.discard(&rule_path).await;
                return Err(e);
            }
        };

        let outcome = self.engine.scan_file(&rule_path, &target_path).await;

        self.discard(&rule_path).await;
        self.discard(&target_path).await;

        let matches = outcome?;
        let report = ScanReport::new(&input.target_file, matches);

        tracing::info!(
            rule = %input.rule_file.display_name(),
            target = %report.file_name,
            matches = report.matches.len(),
            "Tested uploaded rule"
        );

        Ok(report)
    }

    async fn discard(&self, path: &Path) {
        if let Err(e) = self.store.remove(path).await {
            tracing::warn!(error = %e, path = %path.display(), "Failed to remove upload");
        }
    }
}
