//! Duel events and their status-line text

use std::fmt;

use serde::Serialize;

use crate::combat::ShotResult;
use crate::core::types::Side;

/// Everything reported for one resolved shot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotReport {
    pub attacker: Side,
    pub defender: Side,
    pub shot: ShotResult,
    /// Health actually taken from the defender, critical bonus included
    pub damage_dealt: f32,
    pub red_health: f32,
    pub green_health: f32,
}

impl fmt::Display for ShotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shot.hit {
            write!(
                f,
                "{} hit {} for {:.2} points! {}",
                self.attacker,
                self.defender,
                self.damage_dealt,
                self.shot.severity.narration()
            )?;
        } else {
            write!(f, "{} missed {}", self.attacker, self.defender)?;
        }
        write!(
            f,
            "! Red's health: {:.2} | Green's health: {:.2}",
            self.red_health, self.green_health
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DuelEvent {
    /// A match is about to begin
    MatchStarted { match_number: u32, first_turn: Side },
    Shot(ShotReport),
    /// A side ran out of health; the match has already been reset
    GameOver { winner: Side, next_turn: Side },
}

impl fmt::Display for DuelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuelEvent::MatchStarted { first_turn, .. } => {
                write!(f, "Let's play Space Duel! {} goes first!", first_turn)
            }
            DuelEvent::Shot(report) => write!(f, "{}", report),
            DuelEvent::GameOver { winner, next_turn } => write!(
                f,
                "Game over! {} wins! New game, {} goes first!",
                winner, next_turn
            ),
        }
    }
}
