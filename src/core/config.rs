//! Duel configuration with documented constants
//!
//! Every tunable of the cabinet lives here. Defaults reproduce the classic
//! 64-pixel build; a TOML file may override any subset of them.

use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::combat::match_state::NextTurnPolicy;
use crate::core::error::{DuelError, Result};
use crate::core::types::Side;

/// Configuration for one cabinet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    // === STRIP ===
    /// Number of addressable cells on the strip
    pub pixels: usize,

    /// Length of the salvo in cells
    pub pulse_length: usize,

    /// Time between pulse steps, in microseconds
    ///
    /// Lower for faster shots. At 5000 µs a 64-cell strip is crossed in
    /// about a third of a second.
    pub pulse_interval_us: u64,

    /// Color of the salvo, 0xRRGGBB. Black disables the travel animation.
    pub shot_color: u32,

    // === EXPLOSION ===
    /// Duration of each explosion frame for tiers 1-4, in milliseconds
    pub explosion_frame_ms: u64,

    /// Duration of each explosion frame for critical hits, in milliseconds
    ///
    /// Must be shorter than `explosion_frame_ms` so criticals flash faster.
    pub critical_frame_ms: u64,

    /// Duration of each on/off phase of the victory flash, in milliseconds
    pub victory_frame_ms: u64,

    /// Number of on/off cycles in the victory flash
    pub victory_flashes: u32,

    // === RULES ===
    /// Health each side starts a match with
    ///
    /// Damage ranges from 0 to 100 per shot, so this controls game length.
    pub starting_health: f32,

    /// Aim quality between 0 (always misses) and 100 (always hits)
    ///
    /// Values outside the range are clamped, never rejected. At 75 a shot
    /// lands 75% of the time.
    pub tracking_speed: i32,

    /// Multiplier applied to critical hits before health is reduced
    ///
    /// 1.0 disables the bonus.
    pub critical_multiplier: f32,

    /// Side holding the turn when the cabinet powers on
    pub first_turn: Side,

    /// Who opens each match after the first
    pub next_turn: NextTurnPolicy,

    /// Seed for the shot RNG; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            // Strip
            pixels: 64,
            pulse_length: 8,
            pulse_interval_us: 5_000,
            shot_color: 0xff8800,

            // Explosion (critical = half the frame time)
            explosion_frame_ms: 200,
            critical_frame_ms: 100,
            victory_frame_ms: 250,
            victory_flashes: 3,

            // Rules
            starting_health: 300.0,
            tracking_speed: 75,
            critical_multiplier: 1.5,
            first_turn: Side::Red,
            next_turn: NextTurnPolicy::Loser,
            seed: None,
        }
    }
}

impl DuelConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DuelConfig = toml::from_str(content)?;
        config.validate()?;
        if config.aim() as i32 != config.tracking_speed {
            tracing::warn!(
                tracking_speed = config.tracking_speed,
                clamped = config.aim(),
                "tracking_speed outside 0..=100, clamping"
            );
        }
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded duel config");
        Ok(config)
    }

    /// Tracking speed clamped into 0..=100
    pub fn aim(&self) -> u8 {
        self.tracking_speed.clamp(0, 100) as u8
    }

    pub fn pulse_interval(&self) -> Duration {
        Duration::from_micros(self.pulse_interval_us)
    }

    pub fn explosion_frame(&self) -> Duration {
        Duration::from_millis(self.explosion_frame_ms)
    }

    pub fn critical_frame(&self) -> Duration {
        Duration::from_millis(self.critical_frame_ms)
    }

    pub fn victory_frame(&self) -> Duration {
        Duration::from_millis(self.victory_frame_ms)
    }

    /// Validate configuration for internal consistency
    ///
    /// Tracking speed is deliberately not checked here; it is clamped.
    pub fn validate(&self) -> Result<()> {
        if self.pixels == 0 {
            return Err(DuelError::InvalidConfig("pixels must be at least 1".into()));
        }

        if self.pulse_length == 0 {
            return Err(DuelError::InvalidConfig(
                "pulse_length must be at least 1".into(),
            ));
        }

        if self.shot_color > 0xff_ffff {
            return Err(DuelError::InvalidConfig(format!(
                "shot_color ({:#x}) is wider than 24 bits",
                self.shot_color
            )));
        }

        if !(self.starting_health > 0.0) {
            return Err(DuelError::InvalidConfig(format!(
                "starting_health ({}) must be positive",
                self.starting_health
            )));
        }

        if !(self.critical_multiplier > 0.0) {
            return Err(DuelError::InvalidConfig(format!(
                "critical_multiplier ({}) must be positive",
                self.critical_multiplier
            )));
        }

        if self.critical_frame_ms >= self.explosion_frame_ms {
            return Err(DuelError::InvalidConfig(format!(
                "critical_frame_ms ({}) should be < explosion_frame_ms ({})",
                self.critical_frame_ms, self.explosion_frame_ms
            )));
        }

        Ok(())
    }
}

/// Command-line overrides shared by the binaries
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// TOML config file; defaults apply when omitted
    #[arg(long, short = 'c')]
    pub config: Option<std::path::PathBuf>,

    /// Number of cells on the strip
    #[arg(long)]
    pub pixels: Option<usize>,

    /// Health each side starts with
    #[arg(long)]
    pub starting_health: Option<f32>,

    /// Aim between 0 (never hits) and 100 (always hits); clamped
    #[arg(long, allow_hyphen_values = true)]
    pub tracking_speed: Option<i32>,

    /// Who opens each match after the first: loser, winner, red or green
    #[arg(long, value_parser = parse_policy)]
    pub next_turn: Option<NextTurnPolicy>,

    /// Random seed for deterministic runs
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_policy(value: &str) -> std::result::Result<NextTurnPolicy, String> {
    match value.to_ascii_lowercase().as_str() {
        "loser" => Ok(NextTurnPolicy::Loser),
        "winner" => Ok(NextTurnPolicy::Winner),
        "red" => Ok(NextTurnPolicy::Red),
        "green" => Ok(NextTurnPolicy::Green),
        other => Err(format!("unknown next-turn policy '{}'", other)),
    }
}

impl ConfigOverrides {
    /// Load the config file (if any), then apply the flags on top
    pub fn resolve(&self) -> Result<DuelConfig> {
        let mut config = match &self.config {
            Some(path) => DuelConfig::load(path)?,
            None => DuelConfig::default(),
        };

        if let Some(pixels) = self.pixels {
            config.pixels = pixels;
        }
        if let Some(health) = self.starting_health {
            config.starting_health = health;
        }
        if let Some(speed) = self.tracking_speed {
            config.tracking_speed = speed;
        }
        if let Some(policy) = self.next_turn {
            config.next_turn = policy;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}
