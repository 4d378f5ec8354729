//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two captains.
///
/// Red sits at the left end of the strip (index 0), Green at the right end
/// (index N-1). Shots always travel from the attacker's end toward the
/// defender's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Green,
}

impl Side {
    /// Both sides, in strip order
    pub fn all() -> [Side; 2] {
        [Side::Red, Side::Green]
    }

    /// The side being shot at when `self` fires
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Green,
            Side::Green => Side::Red,
        }
    }

    /// Display name used in status lines
    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Green => "Green",
        }
    }

    /// Stable index for per-side arrays
    pub fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Green => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trigger levels sampled in one pass of the polling loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triggers {
    pub red: bool,
    pub green: bool,
}

impl Triggers {
    /// Neither button held
    pub fn none() -> Self {
        Self::default()
    }

    /// Only `side`'s button held
    pub fn only(side: Side) -> Self {
        let mut triggers = Self::default();
        triggers.set(side, true);
        triggers
    }

    /// Both buttons held
    pub fn both() -> Self {
        Self { red: true, green: true }
    }

    pub fn is_pressed(&self, side: Side) -> bool {
        match side {
            Side::Red => self.red,
            Side::Green => self.green,
        }
    }

    pub fn set(&mut self, side: Side, pressed: bool) {
        match side {
            Side::Red => self.red = pressed,
            Side::Green => self.green = pressed,
        }
    }
}
