//! Match state: both healths and whose turn it is
//!
//! Health is never clamped at zero. A finishing blow can leave a side well
//! below zero and that value is what gets reported.

use serde::{Deserialize, Serialize};

use crate::core::types::Side;

/// Who opens the next match after a game over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextTurnPolicy {
    /// The side that just lost
    #[default]
    Loser,
    /// The side that just won
    Winner,
    /// Always Red
    Red,
    /// Always Green
    Green,
}

impl NextTurnPolicy {
    /// Side that opens the next match after `winner` won
    pub fn next_turn(self, winner: Side) -> Side {
        match self {
            NextTurnPolicy::Loser => winner.opponent(),
            NextTurnPolicy::Winner => winner,
            NextTurnPolicy::Red => Side::Red,
            NextTurnPolicy::Green => Side::Green,
        }
    }
}

/// Where the match is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Waiting for the given side to fire
    AwaitingShot(Side),
    /// A side has been defeated and the reset has not run yet
    GameOver,
}

/// Health and turn for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub red_health: f32,
    pub green_health: f32,
    pub turn: Side,
    /// Cleared when a side is defeated, set again by the reset
    pub round_active: bool,
    starting_health: f32,
}

impl Match {
    pub fn new(starting_health: f32, first_turn: Side) -> Self {
        Self {
            red_health: starting_health,
            green_health: starting_health,
            turn: first_turn,
            round_active: true,
            starting_health,
        }
    }

    pub fn starting_health(&self) -> f32 {
        self.starting_health
    }

    pub fn health(&self, side: Side) -> f32 {
        match side {
            Side::Red => self.red_health,
            Side::Green => self.green_health,
        }
    }

    fn health_mut(&mut self, side: Side) -> &mut f32 {
        match side {
            Side::Red => &mut self.red_health,
            Side::Green => &mut self.green_health,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        if self.round_active {
            MatchPhase::AwaitingShot(self.turn)
        } else {
            MatchPhase::GameOver
        }
    }

    /// Apply a resolved shot from `attacker`
    ///
    /// Only a hit reduces the defender's health. Callers must check
    /// [`Match::defeated`] afterwards.
    pub fn apply_damage(&mut self, attacker: Side, damage: f32, hit: bool) {
        if hit {
            *self.health_mut(attacker.opponent()) -= damage;
        }
        if self.defeated().is_some() {
            self.round_active = false;
        }
    }

    /// Side whose health has reached zero or below, if any
    ///
    /// Red is checked first; a single shot only ever damages one side.
    pub fn defeated(&self) -> Option<Side> {
        Side::all().into_iter().find(|&side| self.health(side) <= 0.0)
    }

    /// Hand the turn to the other side
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Reset for the next match and return the side that opens it
    pub fn resolve_game_over(&mut self, winner: Side, policy: NextTurnPolicy) -> Side {
        self.red_health = self.starting_health;
        self.green_health = self.starting_health;
        self.turn = policy.next_turn(winner);
        self.round_active = true;
        self.turn
    }
}
