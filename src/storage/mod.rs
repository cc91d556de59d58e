//! Reading and writing the interchange document.
//!
//! The document is a single JSON file: `generatedAt`, `total` and `results`.
//! Output is pretty-printed with two-space indentation.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::error_handling::{DatasetError, DatasetWarning};
use crate::models::EntryDataset;

/// Parses a document from a string.
pub fn parse_dataset(raw: &str) -> Result<EntryDataset, DatasetError> {
    serde_json::from_str(raw).map_err(DatasetError::ParseError)
}

/// Reads and parses the document at `path`.
pub async fn load_dataset(path: &Path) -> Result<EntryDataset, DatasetError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DatasetError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Read {} bytes from {}", raw.len(), path.display());
    parse_dataset(&raw)
}

/// Serializes the document as pretty-printed JSON.
pub fn render_dataset(dataset: &EntryDataset) -> Result<String, DatasetError> {
    serde_json::to_string_pretty(dataset).map_err(DatasetError::SerializeError)
}

/// Writes the document to `path`, replacing any existing file.
pub async fn save_dataset(path: &Path, dataset: &EntryDataset) -> Result<(), DatasetError> {
    let rendered = render_dataset(dataset)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| DatasetError::WriteError {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(path, rendered)
        .await
        .map_err(|source| DatasetError::WriteError {
            path: path.to_path_buf(),
            source,
        })
}

/// Checks the document-level invariants.
///
/// Duplicate `cca3` codes are an error. A wrong `total` and records carrying a
/// fetch `error` are returned as warnings.
pub fn validate_dataset(dataset: &EntryDataset) -> Result<Vec<DatasetWarning>, DatasetError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(dataset.results.len());
    for (index, record) in dataset.results.iter().enumerate() {
        if let Some(first) = seen.insert(record.cca3.as_str(), index) {
            return Err(DatasetError::DuplicateCode {
                code: record.cca3.clone(),
                first,
                second: index,
            });
        }
    }

    let mut warnings = Vec::new();
    if dataset.total != dataset.results.len() {
        warnings.push(DatasetWarning::TotalMismatch {
            declared: dataset.total,
            actual: dataset.results.len(),
        });
    }
    for record in &dataset.results {
        if let Some(message) = record.extra.get("error") {
            let message = message
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| message.to_string());
            warnings.push(DatasetWarning::FetchError {
                cca3: record.cca3.clone(),
                message,
            });
        }
    }
    Ok(warnings)
}
