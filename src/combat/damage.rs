//! Shot damage model
//!
//! A shot's damage is a linear rescaling of a uniform roll. With perfect aim
//! the damage equals the roll; as aim drops the whole range slides below
//! zero, so misses become more likely while a lucky roll still reaches 100.
//! Anything at or below zero is a miss.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::constants::{GUARANTEED_MISS, MAX_AIM, MAX_ROLL, MIN_ROLL};
use crate::combat::severity::{classify_severity, Severity};

/// Damage produced by a specific roll at a specific aim
///
/// Evaluates `(100 / aim) * roll - (100 - aim) * 100 / aim` in the equivalent
/// integer-numerator form so the range ends land exactly on 0 and 100.
pub fn damage_for_roll(aim: u8, roll: u8) -> f32 {
    let aim = aim.min(MAX_AIM);
    if aim == 0 {
        return GUARANTEED_MISS;
    }

    let numerator = 100 * (i32::from(roll) + i32::from(aim) - 100);
    numerator as f32 / f32::from(aim)
}

/// Roll the damage for one shot
///
/// `tracking_speed` is clamped into 0..=100 first. A tracking speed of 0
/// never hits.
pub fn calculate_damage<R: Rng>(tracking_speed: i32, rng: &mut R) -> f32 {
    let aim = tracking_speed.clamp(0, i32::from(MAX_AIM)) as u8;
    if aim == 0 {
        return GUARANTEED_MISS;
    }

    let roll = rng.gen_range(MIN_ROLL..=MAX_ROLL);
    damage_for_roll(aim, roll)
}

/// Outcome of one trigger pull
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    /// Raw damage; zero or negative for a miss
    pub damage: f32,
    pub hit: bool,
    /// Tier of the raw damage; only meaningful when `hit` is set
    pub severity: Severity,
}

impl ShotResult {
    pub fn from_damage(damage: f32) -> Self {
        Self {
            damage,
            hit: damage > 0.0,
            severity: classify_severity(damage),
        }
    }

    /// Roll a fresh shot
    pub fn roll<R: Rng>(tracking_speed: i32, rng: &mut R) -> Self {
        Self::from_damage(calculate_damage(tracking_speed, rng))
    }

    /// Health the defender actually loses
    ///
    /// Criticals are scaled by `critical_multiplier`; misses deal nothing.
    pub fn effective_damage(&self, critical_multiplier: f32) -> f32 {
        if !self.hit {
            0.0
        } else if self.severity.is_critical() {
            self.damage * critical_multiplier
        } else {
            self.damage
        }
    }
}
