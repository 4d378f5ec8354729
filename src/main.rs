//! Space Duel - Entry Point
//!
//! Runs the duel in the terminal: the strip is drawn as a row of colored
//! cells and two keys stand in for the trigger buttons.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use space_duel::core::{ConfigOverrides, Result};
use space_duel::game::Duel;
use space_duel::render::SleepPacer;
use space_duel::ui::{TerminalCabinet, TerminalSession, TerminalStrip};

/// Space Duel - two captains, one LED strip
#[derive(Parser, Debug)]
#[command(name = "space-duel")]
#[command(about = "Turn-based two-player arcade duel on an emulated LED strip")]
struct Args {
    #[command(flatten)]
    overrides: ConfigOverrides,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never land on the game screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("space_duel=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.overrides.resolve()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, pixels = config.pixels, "Space Duel starting...");

    let strip = TerminalStrip::new(config.pixels);
    let mut duel = Duel::new(config, strip, SleepPacer, ChaCha8Rng::seed_from_u64(seed))?;

    let session = TerminalSession::start()?;
    let mut cabinet = TerminalCabinet::new();
    let outcome = duel.run(&mut cabinet);
    drop(session);

    let board = duel.scoreboard();
    println!(
        "Final score - Red: {}  Green: {}  ({} shots, {} hits, {} criticals)",
        board.red_wins, board.green_wins, board.shots, board.hits, board.criticals
    );
    outcome
}
