//! Rules Directory Catalog

use crate::domain::repository::RuleCatalog;
use crate::error::{ScannerError, ScannerResult};
use std::path::{Path, PathBuf};

/// Lists rule files in a directory (non-recursive)
#[derive(Debug, Clone)]
pub struct FsRuleCatalog {
    rules_dir: PathBuf,
}

impl FsRuleCatalog {
    pub fn new(rules_dir: impl Into<PathBuf>) -> Self {
        Self {
            rules_dir: rules_dir.into(),
        }
    }
}

/// `.yar` or `.yara`
pub fn is_rule_file(name: &str) -> bool {
    matches!(
        Path::new(name).extension().and_then(|e| e.to_str()),
        Some("yar") | Some("yara")
    )
}

impl RuleCatalog for FsRuleCatalog {
    async fn list(&self) -> ScannerResult<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.rules_dir)
            .await
            .map_err(ScannerError::RulesDirectory)?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(ScannerError::RulesDirectory)?
        {
            if let Some(name) = entry.file_name().to_str() {
                if is_rule_file(name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
