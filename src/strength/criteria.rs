//! Security checklist and combined analysis.

use super::score::{blacklist_hits, score, StrengthResult};
use crate::charset::CharacterClass;
use serde::{Deserialize, Serialize};

/// Minimum length for the "long enough" criterion.
pub const RECOMMENDED_LENGTH: usize = 12;

/// Pass/fail checklist shown alongside a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// At least [`RECOMMENDED_LENGTH`] characters.
    pub long_enough: bool,
    /// Contains a lowercase letter.
    pub has_lowercase: bool,
    /// Contains an uppercase letter.
    pub has_uppercase: bool,
    /// Contains a digit.
    pub has_digit: bool,
    /// Contains one of the fixed symbols.
    pub has_symbol: bool,
}

impl Criteria {
    /// Evaluates the checklist for `password`.
    pub fn check(password: &str) -> Self {
        Self {
            long_enough: password.chars().count() >= RECOMMENDED_LENGTH,
            has_lowercase: CharacterClass::Lowercase.is_scored_in(password),
            has_uppercase: CharacterClass::Uppercase.is_scored_in(password),
            has_digit: CharacterClass::Digit.is_scored_in(password),
            has_symbol: CharacterClass::Symbol.is_scored_in(password),
        }
    }

    /// Labelled entries, in display order.
    pub fn items(&self) -> [(&'static str, bool); 5] {
        [
            ("Length >= 12 characters", self.long_enough),
            ("Contains lowercase", self.has_lowercase),
            ("Contains uppercase", self.has_uppercase),
            ("Contains digits", self.has_digit),
            ("Contains symbols", self.has_symbol),
        ]
    }

    /// Number of criteria met.
    pub fn passed(&self) -> usize {
        self.items().iter().filter(|(_, ok)| *ok).count()
    }
}

/// Full analysis of a password: score, checklist and matched patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Score and level.
    pub strength: StrengthResult,
    /// Checklist results.
    pub criteria: Criteria,
    /// Blacklisted patterns found, in blacklist order.
    pub patterns: Vec<&'static str>,
}

/// Scores `password` and explains the result.
pub fn analyze(password: &str) -> Analysis {
    Analysis {
        strength: score(password),
        criteria: Criteria::check(password),
        patterns: blacklist_hits(password),
    }
}
