//! libyara Signature Engine
//!
//! Each call compiles the given rule file from scratch and scans the target
//! on a blocking thread. Nothing is cached: the check workflow always picks
//! up the current aggregate rule file, and test-rule uploads are one-offs.

use crate::domain::entities::{MetaValue, RuleMatch, StringMatch};
use crate::domain::repository::SignatureEngine;
use crate::error::{ScannerError, ScannerResult};
use std::path::Path;
use std::time::Instant;
use yara::{Compiler, MetadataValue};

#[derive(Debug, Clone)]
pub struct YaraEngine {
    timeout_secs: i32,
}

impl YaraEngine {
    pub fn new(timeout_secs: i32) -> Self {
        Self { timeout_secs }
    }
}

impl SignatureEngine for YaraEngine {
    async fn scan_file(&self, rule_file: &Path, target: &Path) -> ScannerResult<Vec<RuleMatch>> {
        let rule_file = rule_file.to_path_buf();
        let target = target.to_path_buf();
        let timeout = self.timeout_secs;

        tokio::task::spawn_blocking(move || scan_blocking(&rule_file, &target, timeout))
            .await
            .map_err(|e| ScannerError::Internal(format!("scan task failed: {e}")))?
    }
}

fn scan_blocking(rule_file: &Path, target: &Path, timeout: i32) -> ScannerResult<Vec<RuleMatch>> {
    let started = Instant::now();

    let rules = Compiler::new()
        .map_err(|e| ScannerError::Compile(e.to_string()))?
        .add_rules_file(rule_file)
        .map_err(|e| ScannerError::Compile(e.to_string()))?
        .compile_rules()
        .map_err(|e| ScannerError::Compile(e.to_string()))?;

    let results = rules
        .scan_file(target, timeout)
        .map_err(|e| ScannerError::Scan(e.to_string()))?;

    let matches: Vec<RuleMatch> = results.iter().map(convert_rule).collect();

    tracing::info!(
        rule_file = %rule_file.display(),
        matches = matches.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "YARA scan finished"
    );

    Ok(matches)
}

fn convert_rule(rule: &yara::Rule<'_>) -> RuleMatch {
    let strings = rule
        .strings
        .iter()
        .flat_map(|s| {
            s.matches.iter().map(move |m| StringMatch {
                identifier: s.identifier.to_string(),
                offset: m.offset,
                length: m.length,
            })
        })
        .collect();

    let metadata = rule
        .metadatas
        .iter()
        .map(|m| {
            let value = match &m.value {
                MetadataValue::Integer(i) => MetaValue::Integer(*i),
                MetadataValue::String(s) => MetaValue::Text(s.to_string()),
                MetadataValue::Boolean(b) => MetaValue::Boolean(*b),
            };
            (m.identifier.to_string(), value)
        })
        .collect();

    RuleMatch {
        identifier: rule.identifier.to_string(),
        namespace: rule.namespace.to_string(),
        tags: rule.tags.iter().map(|t| t.to_string()).collect(),
        metadata,
        strings,
    }
}
