//! Qualitative strength levels.
//!
//! Levels partition the score range into half-open bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative strength level derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Below 30.
    #[serde(rename = "Very Weak")]
    VeryWeak,
    /// 30 to 49.
    #[serde(rename = "Weak")]
    Weak,
    /// 50 to 69.
    #[serde(rename = "Moderate")]
    Moderate,
    /// 70 to 84.
    #[serde(rename = "Strong")]
    Strong,
    /// 85 and above.
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

/// Lower bound (inclusive) of each level above `VeryWeak`.
const WEAK_FROM: u8 = 30;
const MODERATE_FROM: u8 = 50;
const STRONG_FROM: u8 = 70;
const VERY_STRONG_FROM: u8 = 85;

impl Level {
    /// Maps a score in `0..=100` to its level.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s < WEAK_FROM => Level::VeryWeak,
            s if s < MODERATE_FROM => Level::Weak,
            s if s < STRONG_FROM => Level::Moderate,
            s if s < VERY_STRONG_FROM => Level::Strong,
            _ => Level::VeryStrong,
        }
    }

    /// Human-readable label, as stored in history files.
    pub fn label(self) -> &'static str {
        match self {
            Level::VeryWeak => "Very Weak",
            Level::Weak => "Weak",
            Level::Moderate => "Moderate",
            Level::Strong => "Strong",
            Level::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Level::from_score(0), Level::VeryWeak);
        assert_eq!(Level::from_score(29), Level::VeryWeak);
        assert_eq!(Level::from_score(30), Level::Weak);
        assert_eq!(Level::from_score(49), Level::Weak);
        assert_eq!(Level::from_score(50), Level::Moderate);
        assert_eq!(Level::from_score(69), Level::Moderate);
        assert_eq!(Level::from_score(70), Level::Strong);
        assert_eq!(Level::from_score(84), Level::Strong);
        assert_eq!(Level::from_score(85), Level::VeryStrong);
        assert_eq!(Level::from_score(100), Level::VeryStrong);
    }

    #[test]
    fn test_serialized_labels() {
        let json = serde_json::to_string(&Level::VeryStrong).unwrap();
        assert_eq!(json, "\"Very Strong\"");

        let level: Level = serde_json::from_str("\"Very Weak\"").unwrap();
        assert_eq!(level, Level::VeryWeak);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(Level::VeryWeak < Level::Weak);
        assert!(Level::Strong < Level::VeryStrong);
    }
}
