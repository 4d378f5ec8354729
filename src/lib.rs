//! Space Duel - turn-based two-player arcade duel on an LED strip

pub mod combat;
pub mod core;
pub mod game;
pub mod render;
pub mod ui;
