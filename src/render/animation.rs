//! Shot, explosion and victory animations
//!
//! Every animation is addressed in *logical* offsets measured from one end
//! of the strip. Offsets from Red's end map straight onto indices; offsets
//! from Green's end are mirrored. Both directions therefore share one code
//! path and are exact mirror images of each other.
//!
//! Offsets past the far end of the strip are skipped, never written.

use std::time::Duration;

use crate::combat::{Severity, ShotResult};
use crate::core::config::DuelConfig;
use crate::core::error::Result;
use crate::core::types::Side;
use crate::render::colors::{
    is_off, side_color, Rgb, EXPLOSION_CORE, EXPLOSION_EMBER, OFF,
};
use crate::render::pacer::FramePacer;
use crate::render::strip::LedStrip;

/// Most cells an explosion lights, counted from the defender's end
pub const EXPLOSION_SPAN: usize = 6;

/// Frame cadence for all animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub pulse_length: usize,
    pub pulse_interval: Duration,
    pub explosion_frame: Duration,
    pub critical_frame: Duration,
    pub victory_frame: Duration,
    pub victory_flashes: u32,
}

impl AnimationTiming {
    pub fn from_config(config: &DuelConfig) -> Self {
        Self {
            pulse_length: config.pulse_length,
            pulse_interval: config.pulse_interval(),
            explosion_frame: config.explosion_frame(),
            critical_frame: config.critical_frame(),
            victory_frame: config.victory_frame(),
            victory_flashes: config.victory_flashes,
        }
    }

    /// Per-frame delay of an explosion of this severity
    pub fn explosion_frame_for(&self, severity: Severity) -> Duration {
        if severity.is_critical() {
            self.critical_frame
        } else {
            self.explosion_frame
        }
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self::from_config(&DuelConfig::default())
    }
}

/// Number of cells and repetitions for an explosion
fn explosion_shape(severity: Severity) -> (usize, usize) {
    let tier = usize::from(severity.tier());
    (tier.min(EXPLOSION_SPAN), tier)
}

/// Drives one strip through the duel's animations
///
/// Owns the strip for its whole life; nothing else writes to it.
pub struct StripRenderer<S: LedStrip, P: FramePacer> {
    strip: S,
    pacer: P,
    timing: AnimationTiming,
}

impl<S: LedStrip, P: FramePacer> StripRenderer<S, P> {
    pub fn new(strip: S, pacer: P, timing: AnimationTiming) -> Self {
        Self {
            strip,
            pacer,
            timing,
        }
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }

    /// Strip index of the cell `offset` steps in from `origin`'s end
    pub fn physical_index(&self, origin: Side, offset: usize) -> Option<usize> {
        let len = self.strip.len();
        if offset >= len {
            return None;
        }
        match origin {
            Side::Red => Some(offset),
            Side::Green => Some(len - 1 - offset),
        }
    }

    fn paint(&mut self, origin: Side, offset: usize, color: Rgb) {
        if let Some(index) = self.physical_index(origin, offset) {
            self.strip.set(index, color);
        }
    }

    fn paint_span(&mut self, origin: Side, cells: usize, color: Rgb) {
        for offset in 0..cells {
            self.paint(origin, offset, color);
        }
    }

    fn frame(&mut self, delay: Duration) -> Result<()> {
        self.strip.show()?;
        self.pacer.wait(delay);
        Ok(())
    }

    /// Black out the whole strip
    pub fn clear(&mut self) -> Result<()> {
        let len = self.strip.len();
        self.paint_span(Side::Red, len, OFF);
        self.strip.show()
    }

    /// Full animation for one trigger pull: travel, then the explosion on a hit
    ///
    /// A black `color` means "no shot": nothing is drawn and nothing waits.
    pub fn render_shot(&mut self, attacker: Side, color: Rgb, shot: &ShotResult) -> Result<()> {
        if is_off(color) {
            tracing::debug!(%attacker, "black shot color, skipping animation");
            return Ok(());
        }

        self.travel(attacker, color)?;
        if shot.hit {
            self.explode(attacker.opponent(), shot.severity)?;
        }
        Ok(())
    }

    /// Move a pulse from `origin`'s end to the far end
    ///
    /// Frame `i` lights offsets `[i, i + pulse_length)` clipped to the strip,
    /// shows, waits one pulse interval, then clears offset `i`. The strip is
    /// dark afterwards.
    pub fn travel(&mut self, origin: Side, color: Rgb) -> Result<()> {
        if is_off(color) {
            return Ok(());
        }

        let len = self.strip.len();
        let pulse = self.timing.pulse_length;
        let interval = self.timing.pulse_interval;

        for head in 0..len {
            for offset in head..head.saturating_add(pulse).min(len) {
                self.paint(origin, offset, color);
            }
            self.frame(interval)?;
            self.paint(origin, head, OFF);
        }
        self.strip.show()
    }

    /// Flash the cells at `end` alternately core and ember
    ///
    /// Tier T lights `min(T, 6)` cells and flashes T times. Criticals use the
    /// shorter frame. The flashed cells are cleared at the end.
    pub fn explode(&mut self, end: Side, severity: Severity) -> Result<()> {
        let (cells, repetitions) = explosion_shape(severity);
        let delay = self.timing.explosion_frame_for(severity);

        for _ in 0..repetitions {
            self.paint_span(end, cells, EXPLOSION_CORE);
            self.frame(delay)?;
            self.paint_span(end, cells, EXPLOSION_EMBER);
            self.frame(delay)?;
        }

        self.paint_span(end, cells, OFF);
        self.strip.show()
    }

    /// Flash the whole strip in the winner's color
    pub fn victory_flash(&mut self, winner: Side) -> Result<()> {
        let len = self.strip.len();
        let color = side_color(winner);
        let delay = self.timing.victory_frame;

        for _ in 0..self.timing.victory_flashes {
            self.paint_span(Side::Red, len, color);
            self.frame(delay)?;
            self.paint_span(Side::Red, len, OFF);
            self.frame(delay)?;
        }
        Ok(())
    }

    /// How long [`StripRenderer::render_shot`] blocks for this shot
    pub fn shot_duration(&self, color: Rgb, shot: &ShotResult) -> Duration {
        if is_off(color) {
            return Duration::ZERO;
        }

        let frames = u32::try_from(self.strip.len()).unwrap_or(u32::MAX);
        let mut total = self.timing.pulse_interval * frames;
        if shot.hit {
            let (_, repetitions) = explosion_shape(shot.severity);
            total += self.timing.explosion_frame_for(shot.severity) * (2 * repetitions as u32);
        }
        total
    }
}
