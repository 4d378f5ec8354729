//! Headless Duel Simulator
//!
//! Plays whole matches with both triggers held down and prints a summary.
//! Animations run against an in-memory strip and never sleep; the time they
//! would have blocked a real cabinet is reported instead.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use space_duel::core::{ConfigOverrides, Result, Triggers};
use space_duel::game::Duel;
use space_duel::render::{MemoryStrip, RecordingPacer};

/// Headless Duel Simulator - tune starting health and tracking speed
#[derive(Parser, Debug)]
#[command(name = "duel_sim")]
#[command(about = "Simulate Space Duel matches and report balance statistics")]
struct Args {
    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Number of matches to play
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Give up after this many shots (a tracking speed of 0 never ends)
    #[arg(long, default_value_t = 1_000_000)]
    max_shots: u32,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every duel event to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct SimSummary {
    seed: u64,
    games_completed: u32,
    red_wins: u32,
    green_wins: u32,
    shots: u32,
    hits: u32,
    misses: u32,
    criticals: u32,
    hit_rate: f32,
    avg_shots_per_game: f32,
    animation_seconds: f64,
    timed_out: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("space_duel=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.overrides.resolve()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let strip = MemoryStrip::new(config.pixels);
    let mut duel = Duel::new(
        config,
        strip,
        RecordingPacer::totals_only(),
        ChaCha8Rng::seed_from_u64(seed),
    )?;

    while duel.scoreboard().matches_completed() < args.games
        && duel.scoreboard().shots < args.max_shots
    {
        for event in duel.tick(Triggers::both())? {
            if args.verbose {
                eprintln!("{}", event);
            }
        }
    }

    let board = duel.scoreboard();
    let timed_out = board.matches_completed() < args.games;
    if timed_out {
        tracing::warn!(max_shots = args.max_shots, "shot limit reached before all games finished");
    }

    let games = board.matches_completed();
    let summary = SimSummary {
        seed,
        games_completed: games,
        red_wins: board.red_wins,
        green_wins: board.green_wins,
        shots: board.shots,
        hits: board.hits,
        misses: board.misses,
        criticals: board.criticals,
        hit_rate: board.hit_rate(),
        avg_shots_per_game: if games == 0 {
            0.0
        } else {
            board.shots as f32 / games as f32
        },
        animation_seconds: duel.renderer().pacer().total().as_secs_f64(),
        timed_out,
    };

    if args.format == "text" {
        println!("=== Space Duel simulation (seed {}) ===", summary.seed);
        println!(
            "Games: {}  Red wins: {}  Green wins: {}",
            summary.games_completed, summary.red_wins, summary.green_wins
        );
        println!(
            "Shots: {}  Hits: {}  Misses: {}  Criticals: {}  Hit rate: {:.1}%",
            summary.shots,
            summary.hits,
            summary.misses,
            summary.criticals,
            summary.hit_rate * 100.0
        );
        println!(
            "Avg shots per game: {:.1}  Animation time: {:.1}s",
            summary.avg_shots_per_game, summary.animation_seconds
        );
        if summary.timed_out {
            println!("Stopped early: shot limit reached");
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
