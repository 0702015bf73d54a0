//! Multipart field collection

use crate::domain::entities::UploadedFile;
use crate::error::ScannerResult;
use axum::extract::Multipart;
use std::collections::HashMap;

/// Read the file fields named in `wanted`; other fields are skipped.
/// A repeated field keeps its last occurrence.
pub async fn collect_files(
    mut multipart: Multipart,
    wanted: &[&str],
) -> ScannerResult<HashMap<String, UploadedFile>> {
    let mut files = HashMap::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if !wanted.contains(&name.as_str()) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await?;
        files.insert(name, UploadedFile::new(file_name, bytes.to_vec()));
    }

    Ok(files)
}
