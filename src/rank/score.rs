//! Real-valued rank strength for sorting and comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score derived from a [`Rank`](super::Rank), monotonic with true ladder
/// position: higher score means stronger rank.
///
/// Scores are finite by construction (`tier base + division offset +
/// LP/100`), so `PartialOrd` comparisons never hit NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct RankScore(pub f64);

impl RankScore {
    /// Sentinel for unranked/unknown, strictly below every ranked score.
    ///
    /// Callers must exclude it from averages; "no data" is not a
    /// zero-value competitive rank.
    pub const UNRANKED: RankScore = RankScore(-1.0);

    pub fn as_f64(self) -> f64 {
        self.0
    }

    pub fn is_unranked(self) -> bool {
        self == Self::UNRANKED
    }
}

impl fmt::Display for RankScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
