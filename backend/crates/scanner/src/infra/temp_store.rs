//! Temp-directory Upload Store

use crate::domain::repository::UploadStore;
use crate::domain::value_objects::UploadName;
use crate::error::{ScannerError, ScannerResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores uploads as plain files in one directory
#[derive(Debug, Clone)]
pub struct TempUploadStore {
    dir: PathBuf,
}

impl TempUploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl UploadStore for TempUploadStore {
    async fn save(&self, name: &UploadName, bytes: &[u8]) -> ScannerResult<PathBuf> {
        let path = self.dir.join(name.as_str());

        if let Err(e) = tokio::fs::write(&path, bytes).await {
            // drop whatever part of the file made it to disk
            match tokio::fs::remove_file(&path).await {
                Err(cleanup) if cleanup.kind() != ErrorKind::NotFound => {
                    tracing::warn!(
                        error = %cleanup,
                        path = %path.display(),
                        "Failed to remove partial upload"
                    );
                }
                _ => {}
            }
            return Err(ScannerError::Storage(e));
        }

        tracing::debug!(path = %path.display(), size = bytes.len(), "Saved upload");
        Ok(path)
    }

    async fn remove(&self, path: &Path) -> ScannerResult<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Removed upload");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ScannerError::Storage(e)),
        }
    }
}
