//! JSON record files.
//!
//! Loading never fails: a missing, unreadable or corrupt file yields an
//! empty list. Writing reports errors so callers can decide to continue.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while persisting records.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Reads a JSON array of records, substituting an empty list on any failure.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No record file yet");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Unreadable record file, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&content) {
        Ok(records) => {
            tracing::debug!(path = %path.display(), count = records.len(), "Loaded records");
            records
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Corrupt record file, starting empty");
            Vec::new()
        }
    }
}

/// Writes records as a pretty-printed JSON array.
pub fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), HistoryError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|source| HistoryError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = records.len(), "Saved records");
    Ok(())
}
