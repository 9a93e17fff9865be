//! Crate-level error type.

use crate::config::ConfigError;
use crate::generation::GenerationError;
use crate::history::HistoryError;
use thiserror::Error;

/// Errors surfaced by [`Session`](crate::session::Session) operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("no password has been generated yet")]
    NothingGenerated,
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;
