//! Check Upload Use Case
//!
//! Scans one upload against the aggregate rule file.

use crate::application::config::ScannerConfig;
use crate::domain::entities::{ScanReport, UploadedFile};
use crate::domain::repository::{SignatureEngine, UploadStore};
use crate::domain::value_objects::UploadName;
use crate::error::ScannerResult;
use std::sync::Arc;

pub struct CheckFileUseCase<S, E>
where
    S: UploadStore,
    E: SignatureEngine,
{
    store: Arc<S>,
    engine: Arc<E>,
    config: Arc<ScannerConfig>,
}

impl<S, E> CheckFileUseCase<S, E>
where
    S: UploadStore,
    E: SignatureEngine,
{
    pub fn new(store: Arc<S>, engine: Arc<E>, config: Arc<ScannerConfig>) -> Self {
        Self {
            store,
            engine,
            config,
        }
    }

    pub async fn execute(&self, upload: UploadedFile) -> ScannerResult<ScanReport> {
        let name = UploadName::from_client(upload.file_name.as_deref());
        let path = self.store.save(&name, &upload.bytes).await?;

        let outcome = self
            .engine
            .scan_file(&self.config.aggregate_rule_path(), &path)
            .await;

        // removed on success and on engine failure alike
        if let Err(e) = self.store.remove(&path).await {
            tracing::warn!(error = %e, path = %path.display(), "Failed to remove upload");
        }

        let matches = outcome?;
        let report = ScanReport::new(&upload, matches);

        tracing::info!(
            file = %report.file_name,
            size = report.size,
            sha256 = %report.sha256,
            matches = report.matches.len(),
            "Checked upload against aggregate rules"
        );

        Ok(report)
    }
}
