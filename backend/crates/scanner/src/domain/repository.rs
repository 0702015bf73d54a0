//! Repository Traits
//!
//! Seams to the filesystem and the signature engine. Implementations live
//! in the infrastructure layer.

use crate::domain::entities::RuleMatch;
use crate::domain::value_objects::UploadName;
use crate::error::ScannerResult;
use std::path::{Path, PathBuf};

/// Where uploads are parked while they are scanned
#[trait_variant::make(UploadStore: Send)]
pub trait LocalUploadStore {
    /// Write `bytes` under `name`; returns the full path.
    /// An existing file with the same name is overwritten.
    async fn save(&self, name: &UploadName, bytes: &[u8]) -> ScannerResult<PathBuf>;

    /// Delete a saved upload. Deleting a missing file is not an error.
    async fn remove(&self, path: &Path) -> ScannerResult<()>;
}

/// Compiles rule files and matches them against targets
#[trait_variant::make(SignatureEngine: Send)]
pub trait LocalSignatureEngine {
    /// Compile `rule_file` and match it against `target`
    async fn scan_file(&self, rule_file: &Path, target: &Path) -> ScannerResult<Vec<RuleMatch>>;
}

/// Read-only view of the rules directory
#[trait_variant::make(RuleCatalog: Send)]
pub trait LocalRuleCatalog {
    /// Rule file names (`.yar` / `.yara`), sorted
    async fn list(&self) -> ScannerResult<Vec<String>>;
}
