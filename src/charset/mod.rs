//! Character classes and their alphabets.
//!
//! Every class maps to a fixed ASCII alphabet. Classes are always
//! visited in canonical order (lowercase, uppercase, digit, symbol),
//! which keeps pool layout and repair order reproducible.

mod class;
mod set;

pub use class::{CharacterClass, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use set::ClassSet;
