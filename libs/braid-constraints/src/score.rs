//! # Manufacturability Score
//!
//! Linear penalty model: every error and every warning deducts a fixed
//! number of points from [`MAX_SCORE`], floored at zero.

use config::constants::{
    CAUTION_SCORE_MIN, ERROR_PENALTY, GREEN_SCORE_MIN, MAX_SCORE, RISK_SCORE_MIN, WARNING_PENALTY,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Computes `clamp(100 - 20·errors - 8·warnings, 0, 100)`.
///
/// # Example
///
/// ```rust
/// use braid_constraints::manufacturability_score;
///
/// assert_eq!(manufacturability_score(0, 0), 100);
/// assert_eq!(manufacturability_score(1, 1), 72);
/// assert_eq!(manufacturability_score(6, 0), 0);
/// ```
pub fn manufacturability_score(errors: usize, warnings: usize) -> u8 {
    let errors = u32::try_from(errors).unwrap_or(u32::MAX);
    let warnings = u32::try_from(warnings).unwrap_or(u32::MAX);
    let penalty = errors
        .saturating_mul(ERROR_PENALTY)
        .saturating_add(warnings.saturating_mul(WARNING_PENALTY));
    let score = u32::from(MAX_SCORE).saturating_sub(penalty);
    // Never exceeds MAX_SCORE, so the conversion cannot fail.
    u8::try_from(score).unwrap_or(MAX_SCORE)
}

/// Status band shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreBand {
    Fail,
    Risk,
    Caution,
    Green,
}

impl ScoreBand {
    /// Classifies a score.
    ///
    /// # Example
    ///
    /// ```rust
    /// use braid_constraints::ScoreBand;
    ///
    /// assert_eq!(ScoreBand::from_score(100), ScoreBand::Green);
    /// assert_eq!(ScoreBand::from_score(72), ScoreBand::Caution);
    /// assert_eq!(ScoreBand::from_score(34), ScoreBand::Fail);
    /// ```
    pub fn from_score(score: u8) -> Self {
        if score >= GREEN_SCORE_MIN {
            ScoreBand::Green
        } else if score >= CAUTION_SCORE_MIN {
            ScoreBand::Caution
        } else if score >= RISK_SCORE_MIN {
            ScoreBand::Risk
        } else {
            ScoreBand::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Green => "Green",
            ScoreBand::Caution => "Caution",
            ScoreBand::Risk => "Risk",
            ScoreBand::Fail => "Fail",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
