//! Keysmith Password Library
//!
//! Generates passwords from selected character classes and scores
//! password strength with a fixed-weight heuristic.
//!
//! # Architecture
//!
//! ```text
//! charset → generation ← randomness
//!               ↓
//!           strength → history
//!               ↓
//!            session (front-end state)
//! ```
//!
//! # Design Principles
//!
//! - **Class coverage**: every requested class appears at least once,
//!   and no unrequested class contributes characters
//! - **Secure by default**: OS entropy; degraded fallback is opt-in
//! - **Injected randomness**: any `RngCore` works, so tests are reproducible
//! - **Pure scoring**: the same password always gets the same result
//!
//! # Example
//!
//! ```no_run
//! use keysmith::{
//!     charset::ClassSet,
//!     generation::{generate, GenerationRequest},
//!     randomness::RandomSource,
//!     strength::score,
//! };
//!
//! let mut source = RandomSource::secure();
//! let request = GenerationRequest::new(16, ClassSet::all());
//!
//! let password = generate(&request, &mut source).unwrap();
//! let result = score(&password);
//!
//! println!("{} ({}/100, {})", password, result.score, result.level);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod charset;
pub mod config;
pub mod error;
pub mod generation;
pub mod history;
pub mod randomness;
pub mod session;
pub mod strength;

// Re-export commonly used types at crate root
pub use charset::{CharacterClass, ClassSet};
pub use config::{ConfigError, FileConfig};
pub use error::{Error, Result};
pub use generation::{generate, GenerationError, GenerationRequest};
pub use history::{HistoryEntry, HistoryStore, SavedStore};
pub use randomness::{RandomSource, SourcePolicy};
pub use session::Session;
pub use strength::{analyze, score, Level, StrengthResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generates a password from the OS CSPRNG, never downgrading.
pub fn generate_password(
    length: usize,
    classes: ClassSet,
) -> std::result::Result<String, GenerationError> {
    generate(
        &GenerationRequest::new(length, classes),
        &mut RandomSource::secure(),
    )
}
