//! The duel loop: poll, fire, animate, apply, report
//!
//! Single-threaded by construction. A shot runs start to finish, animation
//! included, before the next poll, so the trigger of the side that just
//! fired (and the opponent's, during the animation) is simply never seen.

use rand::Rng;

use crate::combat::{Match, MatchPhase, ShotResult};
use crate::core::config::DuelConfig;
use crate::core::error::Result;
use crate::core::types::{Side, Triggers};
use crate::game::cabinet::Cabinet;
use crate::game::events::{DuelEvent, ShotReport};
use crate::game::scoreboard::Scoreboard;
use crate::render::colors::{hex, Rgb};
use crate::render::{AnimationTiming, FramePacer, LedStrip, StripRenderer};

pub struct Duel<S: LedStrip, P: FramePacer, R: Rng> {
    config: DuelConfig,
    state: Match,
    renderer: StripRenderer<S, P>,
    rng: R,
    scoreboard: Scoreboard,
    shot_color: Rgb,
    match_number: u32,
    announce_pending: bool,
}

impl<S: LedStrip, P: FramePacer, R: Rng> Duel<S, P, R> {
    pub fn new(config: DuelConfig, strip: S, pacer: P, rng: R) -> Result<Self> {
        config.validate()?;
        if strip.len() != config.pixels {
            tracing::warn!(
                configured = config.pixels,
                device = strip.len(),
                "strip length differs from config, using device length"
            );
        }

        let renderer = StripRenderer::new(strip, pacer, AnimationTiming::from_config(&config));
        let state = Match::new(config.starting_health, config.first_turn);
        let shot_color = hex(config.shot_color);

        Ok(Self {
            config,
            state,
            renderer,
            rng,
            scoreboard: Scoreboard::new(),
            shot_color,
            match_number: 1,
            announce_pending: true,
        })
    }

    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    pub fn state(&self) -> &Match {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn renderer(&self) -> &StripRenderer<S, P> {
        &self.renderer
    }

    pub fn turn(&self) -> Side {
        self.state.turn
    }

    /// Number of the match in progress, starting at 1
    pub fn match_number(&self) -> u32 {
        self.match_number
    }

    /// One pass of the polling loop
    ///
    /// Only the trigger of the side holding the turn is honoured.
    pub fn tick(&mut self, triggers: Triggers) -> Result<Vec<DuelEvent>> {
        let mut events = Vec::new();

        if self.announce_pending {
            self.announce_pending = false;
            tracing::info!(
                match_number = self.match_number,
                first_turn = %self.state.turn,
                "match started"
            );
            events.push(DuelEvent::MatchStarted {
                match_number: self.match_number,
                first_turn: self.state.turn,
            });
        }

        let turn = self.state.turn;
        if triggers.is_pressed(turn) {
            let shot = ShotResult::roll(self.config.tracking_speed, &mut self.rng);
            events.extend(self.resolve_shot(turn, shot)?);
        }

        Ok(events)
    }

    /// Animate and apply an already-rolled shot
    ///
    /// Ignored (no events) unless `attacker` holds the turn in a live match.
    pub fn resolve_shot(&mut self, attacker: Side, shot: ShotResult) -> Result<Vec<DuelEvent>> {
        if self.state.phase() != MatchPhase::AwaitingShot(attacker) {
            tracing::debug!(%attacker, turn = %self.state.turn, "shot out of turn ignored");
            return Ok(Vec::new());
        }

        let defender = attacker.opponent();
        self.renderer.render_shot(attacker, self.shot_color, &shot)?;

        let dealt = shot.effective_damage(self.config.critical_multiplier);
        self.state.apply_damage(attacker, dealt, shot.hit);
        self.scoreboard.record_shot(&shot, dealt);

        tracing::info!(
            %attacker,
            %defender,
            damage = shot.damage,
            dealt,
            hit = shot.hit,
            tier = shot.severity.tier(),
            "shot resolved"
        );

        let mut events = vec![DuelEvent::Shot(ShotReport {
            attacker,
            defender,
            shot,
            damage_dealt: dealt,
            red_health: self.state.red_health,
            green_health: self.state.green_health,
        })];

        match self.state.defeated() {
            Some(loser) => {
                let winner = loser.opponent();
                self.renderer.victory_flash(winner)?;
                self.scoreboard.record_win(winner);
                let next_turn = self.state.resolve_game_over(winner, self.config.next_turn);

                tracing::info!(
                    %winner,
                    %next_turn,
                    match_number = self.match_number,
                    "game over"
                );

                self.match_number += 1;
                self.announce_pending = true;
                events.push(DuelEvent::GameOver { winner, next_turn });
            }
            None => self.state.advance_turn(),
        }

        Ok(events)
    }

    /// Poll the cabinet until it asks to stop
    pub fn run<C: Cabinet>(&mut self, cabinet: &mut C) -> Result<()> {
        loop {
            cabinet.show_turn(self.state.turn)?;

            let Some(triggers) = cabinet.poll_triggers()? else {
                break;
            };

            for event in self.tick(triggers)? {
                cabinet.report(&event)?;
            }
        }

        tracing::info!(
            matches = self.scoreboard.matches_completed(),
            shots = self.scoreboard.shots,
            "duel stopped"
        );
        self.renderer.clear()
    }
}
