//! Random sources and unbiased sampling.
//!
//! Generation takes any [`rand_core::RngCore`]. [`RandomSource`] is the
//! production choice: OS entropy with an explicit, opt-in degraded mode.
//! Tests inject a seeded `ChaCha20Rng` for reproducible output.

mod sample;
mod source;

pub use sample::{choose, uniform_index};
pub use source::{RandomSource, SourcePolicy};
