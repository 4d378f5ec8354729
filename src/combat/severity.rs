//! Hit severity tiers
//!
//! The tier picks both the narration and the explosion: a tier-N explosion
//! lights up to N cells and flashes N times.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    CRITICAL_THRESHOLD, EXCELLENT_THRESHOLD, GOOD_THRESHOLD, GREAT_THRESHOLD,
};

/// Severity categories, ordered from weakest to critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// 25 points or less
    Weak,
    /// Above 25
    Good,
    /// Above 50
    Great,
    /// Above 75
    Excellent,
    /// 95 or better
    Critical,
}

impl Severity {
    pub fn all() -> [Severity; 5] {
        [
            Severity::Weak,
            Severity::Good,
            Severity::Great,
            Severity::Excellent,
            Severity::Critical,
        ]
    }

    /// Numeric tier: 1-4, or 9 for a critical
    pub fn tier(self) -> u8 {
        match self {
            Severity::Weak => 1,
            Severity::Good => 2,
            Severity::Great => 3,
            Severity::Excellent => 4,
            Severity::Critical => 9,
        }
    }

    pub fn is_critical(self) -> bool {
        self == Severity::Critical
    }

    /// Hit-quality text for the status line
    pub fn narration(self) -> &'static str {
        match self {
            Severity::Critical => "Beautiful shot, captain",
            Severity::Excellent => "Excellent hit",
            Severity::Great => "Great hit",
            Severity::Good => "Good hit",
            Severity::Weak => "Weak hit",
        }
    }
}

/// Classify a damage value into a tier
///
/// Total over every f32: NaN and anything at or below 25 is `Weak`.
pub fn classify_severity(damage: f32) -> Severity {
    if damage >= CRITICAL_THRESHOLD {
        Severity::Critical
    } else if damage > EXCELLENT_THRESHOLD {
        Severity::Excellent
    } else if damage > GREAT_THRESHOLD {
        Severity::Great
    } else if damage > GOOD_THRESHOLD {
        Severity::Good
    } else {
        Severity::Weak
    }
}
