//! Domain Value Objects

use kernel::id::UploadId;
use std::fmt;

/// File name an upload is stored under inside the upload directory.
///
/// Always a single path component: no separators, never `.` or `..`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadName(String);

impl UploadName {
    /// Keep the client's name, reduced to its final path component.
    ///
    /// Falls back to a generated token when nothing usable is left.
    /// Identical client names map to the same stored name.
    pub fn from_client(file_name: Option<&str>) -> Self {
        file_name
            .and_then(Self::base_name)
            .map(|name| Self(name.to_string()))
            .unwrap_or_else(|| Self::generated(None))
    }

    /// Random 32-hex-digit stem, optionally with an extension
    pub fn generated(extension: Option<&str>) -> Self {
        let stem = UploadId::new().simple();
        match extension {
            Some(ext) => Self(format!("{stem}.{ext}")),
            None => Self(stem),
        }
    }

    fn base_name(raw: &str) -> Option<&str> {
        let name = raw.rsplit(|c: char| c == '/' || c == '\\').next()?.trim();
        if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
            None
        } else {
            Some(name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
