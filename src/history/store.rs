//! Generation history.

use super::file::{load_records, save_records, HistoryError};
use crate::strength::{score, Level};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp format used in record files.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One generated password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Local time of generation, in [`DATE_FORMAT`].
    pub date: String,
    /// The generated password, stored in plain text.
    pub password: String,
    /// Length in characters.
    pub length: usize,
    /// Level at the time of generation.
    pub strength: Level,
}

impl HistoryEntry {
    /// Builds an entry, scoring the password.
    pub fn new(password: impl Into<String>, at: NaiveDateTime) -> Self {
        let password = password.into();
        Self {
            date: at.format(DATE_FORMAT).to_string(),
            length: password.chars().count(),
            strength: score(&password).level,
            password,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Password: {}", self.password)?;
        write!(f, "Length: {} | Strength: {}", self.length, self.strength)
    }
}

/// Newest-first list of generated passwords, bounded in size.
///
/// Backed by a JSON file when a path is given; every mutation is
/// written through immediately.
#[derive(Debug)]
pub struct HistoryStore {
    path: Option<PathBuf>,
    max_entries: usize,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Loads history from `path`. A missing or corrupt file starts empty.
    pub fn load(path: impl Into<PathBuf>, max_entries: usize) -> Self {
        let path = path.into();
        let entries = load_records(&path);
        Self {
            path: Some(path),
            max_entries: max_entries.max(1),
            entries,
        }
    }

    /// A history that is never written to disk.
    pub fn in_memory(max_entries: usize) -> Self {
        Self {
            path: None,
            max_entries: max_entries.max(1),
            entries: Vec::new(),
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends an entry, drops the oldest beyond the limit, and saves.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_entries);
        self.save()
    }

    /// Removes every entry and saves.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        tracing::info!("Password history cleared");
        self.save()
    }

    /// Writes the current entries to the backing file, if any.
    pub fn save(&self) -> Result<(), HistoryError> {
        match &self.path {
            Some(path) => save_records(path, &self.entries),
            None => Ok(()),
        }
    }

    /// Renders the plain-text export.
    pub fn render_export(&self) -> String {
        let mut out = String::new();
        out.push_str("Password History Export\n");
        out.push_str(&"=".repeat(50));
        out.push_str("\n\n");
        for entry in &self.entries {
            out.push_str(&format!("Date: {}\n", entry.date));
            out.push_str(&format!("Password: {}\n", entry.password));
            out.push_str(&format!("Length: {}\n", entry.length));
            out.push_str(&format!("Strength: {}\n", entry.strength));
            out.push_str(&"-".repeat(30));
            out.push('\n');
        }
        out
    }

    /// Writes the plain-text export to `path`. Returns the entry count.
    pub fn export(&self, path: &Path) -> Result<usize, HistoryError> {
        fs::write(path, self.render_export()).map_err(|source| HistoryError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), count = self.entries.len(), "History exported");
        Ok(self.entries.len())
    }
}
