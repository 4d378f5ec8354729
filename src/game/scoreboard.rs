//! In-memory tallies for the lifetime of the process

use serde::Serialize;

use crate::combat::ShotResult;
use crate::core::types::Side;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scoreboard {
    pub red_wins: u32,
    pub green_wins: u32,
    pub shots: u32,
    pub hits: u32,
    pub misses: u32,
    pub criticals: u32,
    /// Sum of health removed, critical bonus included
    pub damage_dealt: f64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_shot(&mut self, shot: &ShotResult, dealt: f32) {
        self.shots += 1;
        if shot.hit {
            self.hits += 1;
            if shot.severity.is_critical() {
                self.criticals += 1;
            }
            self.damage_dealt += f64::from(dealt);
        } else {
            self.misses += 1;
        }
    }

    pub fn record_win(&mut self, winner: Side) {
        match winner {
            Side::Red => self.red_wins += 1,
            Side::Green => self.green_wins += 1,
        }
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red_wins,
            Side::Green => self.green_wins,
        }
    }

    pub fn matches_completed(&self) -> u32 {
        self.red_wins + self.green_wins
    }

    /// Fraction of shots that landed, 0.0 before the first shot
    pub fn hit_rate(&self) -> f32 {
        if self.shots == 0 {
            0.0
        } else {
            self.hits as f32 / self.shots as f32
        }
    }
}
