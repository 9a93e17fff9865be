//! Local persistence of generated and saved passwords.
//!
//! Records are JSON arrays of flat objects. A missing or corrupt file
//! is replaced by an empty list; write failures are returned to the
//! caller, which typically logs them and keeps the in-memory list.

mod file;
mod saved;
mod store;

pub use file::{load_records, save_records, HistoryError};
pub use saved::{fingerprint, SavedPassword, SavedStore};
pub use store::{HistoryEntry, HistoryStore, DATE_FORMAT};
