//! Password strength scoring.
//!
//! A fixed-weight heuristic, not an entropy estimate. Scoring is pure:
//! the same input always yields the same [`StrengthResult`].

mod criteria;
mod level;
mod score;

pub use criteria::{analyze, Analysis, Criteria, RECOMMENDED_LENGTH};
pub use level::Level;
pub use score::{
    blacklist_hits, class_bonus, score, StrengthResult, BLACKLIST, MAX_LENGTH_POINTS,
    PATTERN_PENALTY, POINTS_PER_CHAR,
};
