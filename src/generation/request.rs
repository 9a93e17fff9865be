//! Generation requests and their errors.

use crate::charset::ClassSet;
use thiserror::Error;

/// Errors returned by [`generate`](super::generate).
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The request itself is malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),
    /// The random source failed and no fallback was permitted.
    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(#[source] rand_core::Error),
}

impl GenerationError {
    /// Returns true for caller errors in the request itself.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, GenerationError::InvalidRequest(_))
    }
}

/// Reasons a request cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The class set is empty.
    #[error("no character class selected")]
    NoClasses,
    /// Fewer positions than selected classes.
    #[error("length {length} cannot hold one character from each of {classes} classes")]
    LengthTooShort {
        /// Requested length.
        length: usize,
        /// Number of selected classes.
        classes: usize,
    },
}

/// A password generation request.
///
/// The engine does not enforce the recommended 8-32 length range;
/// callers apply their own bounds (see [`GeneratorConfig`]).
///
/// [`GeneratorConfig`]: crate::config::GeneratorConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    /// Creates an unvalidated request; [`generate`](super::generate) checks it.
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    /// Requested password length in characters.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Requested character classes.
    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    /// Checks that the request can be satisfied.
    ///
    /// The class set must be non-empty and the length must leave room
    /// for one representative of every requested class.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.classes.is_empty() {
            return Err(RequestError::NoClasses);
        }
        if self.length < self.classes.len() {
            return Err(RequestError::LengthTooShort {
                length: self.length,
                classes: self.classes.len(),
            });
        }
        Ok(())
    }
}
