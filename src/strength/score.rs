//! Fixed-weight strength heuristic.
//!
//! The score is a sum of a capped length term and all-or-nothing class
//! bonuses, minus a flat penalty per blacklisted substring, clamped to
//! `0..=100`. Symbols carry the largest class bonus. Letter and digit
//! bonuses apply to any Unicode letter or digit; the symbol bonus only to
//! the fixed symbol set.

use super::level::Level;
use crate::charset::CharacterClass;
use serde::{Deserialize, Serialize};

/// Points per character.
pub const POINTS_PER_CHAR: u32 = 2;
/// Cap on the length contribution.
pub const MAX_LENGTH_POINTS: u32 = 40;
/// Penalty per blacklisted pattern found.
pub const PATTERN_PENALTY: u32 = 20;
/// Upper bound of the score.
pub const MAX_SCORE: u8 = 100;

/// Patterns that cost points when found (case-insensitive).
pub const BLACKLIST: [&str; 5] = ["123", "abc", "password", "qwerty", "admin"];

/// Bonus for containing at least one character of `class`.
pub fn class_bonus(class: CharacterClass) -> u32 {
    match class {
        CharacterClass::Lowercase => 10,
        CharacterClass::Uppercase => 15,
        CharacterClass::Digit => 15,
        CharacterClass::Symbol => 20,
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// Score in `0..=100`.
    pub score: u8,
    /// Level derived from the score.
    pub level: Level,
}

impl StrengthResult {
    fn from_score(score: u8) -> Self {
        Self {
            score,
            level: Level::from_score(score),
        }
    }
}

/// Scores a password. Pure and deterministic; the empty string scores 0.
pub fn score(password: &str) -> StrengthResult {
    let length = password.chars().count() as u32;
    let length_points = length.saturating_mul(POINTS_PER_CHAR).min(MAX_LENGTH_POINTS);

    let class_points: u32 = CharacterClass::ALL
        .into_iter()
        .filter(|class| class.is_scored_in(password))
        .map(class_bonus)
        .sum();

    let penalty = blacklist_hits(password).len() as u32 * PATTERN_PENALTY;

    let raw = (length_points + class_points).saturating_sub(penalty);
    StrengthResult::from_score(raw.min(MAX_SCORE as u32) as u8)
}

/// Returns the blacklisted patterns found in `password`, in list order.
pub fn blacklist_hits(password: &str) -> Vec<&'static str> {
    let lowered = password.to_lowercase();
    BLACKLIST
        .into_iter()
        .filter(|pattern| lowered.contains(pattern))
        .collect()
}
