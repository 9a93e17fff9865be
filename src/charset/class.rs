//! Character class definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase ASCII letters.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII digits.
pub const DIGITS: &[u8] = b"0123456789";
/// The fixed symbol set.
pub const SYMBOLS: &[u8] = b"!@#$%^&*";

/// A class of characters a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// `a-z`
    Lowercase,
    /// `A-Z`
    Uppercase,
    /// `0-9`
    Digit,
    /// `!@#$%^&*`
    Symbol,
}

impl CharacterClass {
    /// All classes in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Returns the alphabet for this class.
    #[inline]
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Returns true if `c` belongs to this class.
    #[inline]
    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Symbol => c.is_ascii() && SYMBOLS.contains(&(c as u8)),
        }
    }

    /// Returns true if any character of `s` belongs to this class.
    pub fn is_present_in(self, s: &str) -> bool {
        s.chars().any(|c| self.contains(c))
    }

    /// Returns true if `c` earns this class's bonus when scoring.
    ///
    /// Letters and digits match across Unicode; symbols stay the fixed set.
    #[inline]
    pub fn scores(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_lowercase(),
            CharacterClass::Uppercase => c.is_uppercase(),
            CharacterClass::Digit => c.is_numeric(),
            CharacterClass::Symbol => self.contains(c),
        }
    }

    /// Returns true if any character of `s` earns this class's bonus.
    pub fn is_scored_in(self, s: &str) -> bool {
        s.chars().any(|c| self.scores(c))
    }

    /// Position of this class in canonical order.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        };
        f.write_str(name)
    }
}
