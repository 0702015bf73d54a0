//! Application Configuration

use std::path::PathBuf;
use std::time::Duration;

/// Default location of the rules directory on the dashboard host
pub const DEFAULT_RULES_DIR: &str = "/var/www/passgen/yara_rules";
/// Rule file the check workflow compiles
pub const DEFAULT_AGGREGATE_RULE: &str = "all_rules.yar";

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Directory holding `.yar` / `.yara` files
    pub rules_dir: PathBuf,
    /// File name inside `rules_dir` used by the check workflow
    pub aggregate_rule: String,
    /// Where uploads are written while they are scanned
    pub upload_dir: PathBuf,
    /// Request body limit for the scanner routes
    pub max_upload_bytes: usize,
    /// Engine timeout per scan
    pub scan_timeout: Duration,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            rules_dir: PathBuf::from(DEFAULT_RULES_DIR),
            aggregate_rule: DEFAULT_AGGREGATE_RULE.to_string(),
            upload_dir: std::env::temp_dir(),
            max_upload_bytes: 32 * 1024 * 1024,
            scan_timeout: Duration::from_secs(60),
        }
    }
}

impl ScannerConfig {
    pub fn aggregate_rule_path(&self) -> PathBuf {
        self.rules_dir.join(&self.aggregate_rule)
    }

    /// Timeout in whole seconds as libyara expects it, saturating at `i32::MAX`
    pub fn scan_timeout_secs(&self) -> i32 {
        i32::try_from(self.scan_timeout.as_secs()).unwrap_or(i32::MAX)
    }
}
