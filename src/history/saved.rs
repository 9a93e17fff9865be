//! Saved password fingerprints.
//!
//! Only a truncated SHA-256 hex digest is stored, never the password.

use super::file::{load_records, save_records, HistoryError};
use super::store::DATE_FORMAT;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Hex characters kept from the digest.
const FINGERPRINT_LEN: usize = 20;

/// Returns the stored fingerprint of `password`.
pub fn fingerprint(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    let mut hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex.truncate(FINGERPRINT_LEN);
    hex
}

/// A labelled fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPassword {
    /// `Password_<n>`, numbered from 1.
    pub label: String,
    /// Fingerprint, see [`fingerprint`].
    pub password: String,
    /// Local time of saving, in [`DATE_FORMAT`](super::DATE_FORMAT).
    pub date: String,
}

/// List of saved fingerprints, written through to a JSON file.
#[derive(Debug)]
pub struct SavedStore {
    path: Option<PathBuf>,
    entries: Vec<SavedPassword>,
}

impl SavedStore {
    /// Loads from `path`. A missing or corrupt file starts empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_records(&path);
        Self {
            path: Some(path),
            entries,
        }
    }

    /// A store that is never written to disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: Vec::new(),
        }
    }

    /// Saved fingerprints, oldest first.
    pub fn entries(&self) -> &[SavedPassword] {
        &self.entries
    }

    /// Appends a fingerprint labelled `Password_<n>` and saves.
    pub fn save_password(
        &mut self,
        password: &str,
        at: NaiveDateTime,
    ) -> Result<&SavedPassword, HistoryError> {
        let entry = SavedPassword {
            label: format!("Password_{}", self.entries.len() + 1),
            password: fingerprint(password),
            date: at.format(DATE_FORMAT).to_string(),
        };
        self.entries.push(entry);

        if let Some(path) = &self.path {
            save_records(path, &self.entries)?;
        }

        let index = self.entries.len() - 1;
        tracing::info!(label = %self.entries[index].label, "Password fingerprint saved");
        Ok(&self.entries[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_fingerprint_is_sha256_prefix() {
        // sha256("abc") = ba7816bf8f01cfea414140de5dae2223...
        assert_eq!(fingerprint("abc"), "ba7816bf8f01cfea4141");
        assert_eq!(fingerprint("anything").len(), FINGERPRINT_LEN);
    }

    #[test]
    fn test_labels_count_up() {
        let mut store = SavedStore::in_memory();
        assert_eq!(store.save_password("one", noon()).unwrap().label, "Password_1");
        assert_eq!(store.save_password("two", noon()).unwrap().label, "Password_2");
        assert_eq!(store.entries()[1].date, "2024-01-02 12:00");
    }

    #[test]
    fn test_plaintext_never_stored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved_passwords.json");

        let mut store = SavedStore::load(&path);
        store.save_password("Sup3r$ecret", noon()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("Sup3r$ecret"));
        assert_eq!(SavedStore::load(&path).entries().len(), 1);
    }
}
