pub mod constants;
pub mod damage;
pub mod match_state;
pub mod severity;

pub use damage::{calculate_damage, damage_for_roll, ShotResult};
pub use match_state::{Match, MatchPhase, NextTurnPolicy};
pub use severity::{classify_severity, Severity};
