//! LED strip rendering
//!
//! Turns duel events into timed frames on a strip. This module never touches
//! match state.

pub mod animation;
pub mod colors;
pub mod pacer;
pub mod strip;

pub use animation::{AnimationTiming, StripRenderer, EXPLOSION_SPAN};
pub use colors::{hex, Rgb, OFF};
pub use pacer::{FramePacer, RecordingPacer, SleepPacer};
pub use strip::{LedStrip, MemoryStrip};
