//! Domain Entities

use std::fmt;

/// A file received from a multipart field
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Name the client sent, if any
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }

    /// Name shown in reports
    pub fn display_name(&self) -> &str {
        self.file_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("(unnamed)")
    }
}

/// Rule metadata value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Integer(i64),
    Text(String),
    Boolean(bool),
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Integer(i) => write!(f, "{i}"),
            MetaValue::Text(s) => f.write_str(s),
            MetaValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// One hit of a rule string inside the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringMatch {
    /// e.g. `$marker`
    pub identifier: String,
    pub offset: usize,
    pub length: usize,
}

/// A rule that matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub identifier: String,
    pub namespace: String,
    pub tags: Vec<String>,
    pub metadata: Vec<(String, MetaValue)>,
    pub strings: Vec<StringMatch>,
}

impl RuleMatch {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            namespace: "default".to_string(),
            tags: Vec::new(),
            metadata: Vec::new(),
            strings: Vec::new(),
        }
    }
}

/// Outcome of scanning one target
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub file_name: String,
    pub size: u64,
    /// Lowercase hex SHA-256 of the target
    pub sha256: String,
    pub matches: Vec<RuleMatch>,
}

impl ScanReport {
    pub fn new(target: &UploadedFile, matches: Vec<RuleMatch>) -> Self {
        Self {
            file_name: target.display_name().to_string(),
            size: target.bytes.len() as u64,
            sha256: platform::crypto::sha256_hex(&target.bytes),
            matches,
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.identifier.as_str()).collect()
    }
}
