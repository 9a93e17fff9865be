//! Password generation.
//!
//! Draws characters uniformly from the union of the requested alphabets,
//! then repairs the draw so every requested class is represented.

mod generator;
mod request;

pub use generator::generate;
pub use request::{GenerationError, GenerationRequest, RequestError};
