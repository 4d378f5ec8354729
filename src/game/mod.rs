//! Game loop and its cabinet
//!
//! Control flow per trigger: damage model, strip animation, match update,
//! status report.

pub mod cabinet;
pub mod duel;
pub mod events;
pub mod scoreboard;

pub use cabinet::{Cabinet, ScriptedCabinet};
pub use duel::Duel;
pub use events::{DuelEvent, ShotReport};
pub use scoreboard::Scoreboard;
