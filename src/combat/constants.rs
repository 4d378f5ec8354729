//! Combat constants - all tunable values in one place

// Damage draw
pub const MAX_AIM: u8 = 100;
pub const MIN_ROLL: u8 = 1;
pub const MAX_ROLL: u8 = 100;
/// Returned for aim 0, where the damage formula would divide by zero
pub const GUARANTEED_MISS: f32 = 0.0;

// Severity thresholds (damage points)
pub const CRITICAL_THRESHOLD: f32 = 95.0;
pub const EXCELLENT_THRESHOLD: f32 = 75.0;
pub const GREAT_THRESHOLD: f32 = 50.0;
pub const GOOD_THRESHOLD: f32 = 25.0;
