//! Full duel integration tests
//!
//! Plays seeded matches end to end through the public game loop.

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use space_duel::combat::{NextTurnPolicy, ShotResult};
use space_duel::core::{DuelConfig, Side, Triggers};
use space_duel::game::{Duel, DuelEvent, ScriptedCabinet, ShotReport};
use space_duel::render::{MemoryStrip, RecordingPacer};

type TestDuel = Duel<MemoryStrip, RecordingPacer, ChaCha8Rng>;

fn duel_with(config: DuelConfig, seed: u64) -> TestDuel {
    let strip = MemoryStrip::new(config.pixels);
    Duel::new(
        config,
        strip,
        RecordingPacer::totals_only(),
        ChaCha8Rng::seed_from_u64(seed),
    )
    .unwrap()
}

/// Hold both triggers until `games` matches have finished
fn play(duel: &mut TestDuel, games: u32) -> Vec<DuelEvent> {
    let mut events = Vec::new();
    while duel.scoreboard().matches_completed() < games {
        events.extend(duel.tick(Triggers::both()).unwrap());
        assert!(duel.scoreboard().shots < 100_000, "match never ended");
    }
    events
}

fn reports(events: &[DuelEvent]) -> Vec<&ShotReport> {
    events
        .iter()
        .filter_map(|e| match e {
            DuelEvent::Shot(r) => Some(r),
            _ => None,
        })
        .collect()
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/duel.toml");
    let config = DuelConfig::load(&path).unwrap();
    assert_eq!(config, DuelConfig::default());
}

#[test]
fn test_turns_alternate_within_a_match() {
    let mut duel = duel_with(DuelConfig::default(), 11);
    let events = play(&mut duel, 3);

    let mut last_attacker: Option<Side> = None;
    for event in &events {
        match event {
            DuelEvent::Shot(report) => {
                if let Some(previous) = last_attacker {
                    assert_eq!(report.attacker, previous.opponent());
                }
                assert_eq!(report.defender, report.attacker.opponent());
                last_attacker = Some(report.attacker);
            }
            DuelEvent::GameOver { .. } | DuelEvent::MatchStarted { .. } => last_attacker = None,
        }
    }
}

#[test]
fn test_loser_opens_next_match() {
    let mut duel = duel_with(DuelConfig::default(), 5);
    let events = play(&mut duel, 4);

    let mut pending_loser: Option<Side> = None;
    let mut starts = 0;
    for event in &events {
        match event {
            DuelEvent::GameOver { winner, next_turn } => {
                assert_eq!(*next_turn, winner.opponent());
                pending_loser = Some(winner.opponent());
            }
            DuelEvent::MatchStarted { first_turn, .. } => {
                starts += 1;
                if let Some(loser) = pending_loser.take() {
                    assert_eq!(*first_turn, loser);
                }
            }
            DuelEvent::Shot(_) => {}
        }
    }

    // The announcement for match 5 waits for the next tick
    assert_eq!(starts, 4);
    assert_eq!(duel.match_number(), 5);
}

#[test]
fn test_finishing_shot_reports_negative_health_then_resets() {
    let mut duel = duel_with(DuelConfig::default(), 3);
    let events = play(&mut duel, 1);

    let shots = reports(&events);
    let last = shots.last().unwrap();
    assert!(last.shot.hit);
    assert!(last.red_health <= 0.0 || last.green_health <= 0.0);

    assert_eq!(duel.state().red_health, 300.0);
    assert_eq!(duel.state().green_health, 300.0);
}

#[test]
fn test_health_only_drops_by_dealt_damage() {
    let mut duel = duel_with(DuelConfig::default(), 21);
    let events = play(&mut duel, 1);

    let mut red = 300.0f32;
    let mut green = 300.0f32;
    for report in reports(&events) {
        match report.defender {
            Side::Red => red -= report.damage_dealt,
            Side::Green => green -= report.damage_dealt,
        }
        assert_eq!(report.red_health, red);
        assert_eq!(report.green_health, green);
        if !report.shot.hit {
            assert_eq!(report.damage_dealt, 0.0);
        }
    }
}

#[test]
fn test_perfect_aim_never_misses() {
    let config = DuelConfig {
        tracking_speed: 100,
        ..DuelConfig::default()
    };
    let mut duel = duel_with(config, 8);
    play(&mut duel, 5);

    assert_eq!(duel.scoreboard().misses, 0);
    assert_eq!(duel.scoreboard().hits, duel.scoreboard().shots);
}

#[test]
fn test_zero_aim_never_hits() {
    let config = DuelConfig {
        tracking_speed: 0,
        ..DuelConfig::default()
    };
    let mut duel = duel_with(config, 8);
    for _ in 0..200 {
        duel.tick(Triggers::both()).unwrap();
    }

    assert_eq!(duel.scoreboard().shots, 200);
    assert_eq!(duel.scoreboard().hits, 0);
    assert_eq!(duel.state().red_health, 300.0);
    assert_eq!(duel.state().green_health, 300.0);
}

#[test]
fn test_oversized_pulse_length_still_finishes_a_shot() {
    let config = DuelConfig {
        pulse_length: usize::MAX,
        ..DuelConfig::default()
    };
    let mut duel = duel_with(config, 13);
    let events = duel.tick(Triggers::both()).unwrap();

    assert_eq!(reports(&events).len(), 1);
    assert_eq!(duel.renderer().strip().rejected_writes(), 0);
    assert!(duel.renderer().strip().is_dark());
}

#[test]
fn test_same_seed_same_duel() {
    let mut a = duel_with(DuelConfig::default(), 99);
    let mut b = duel_with(DuelConfig::default(), 99);
    assert_eq!(play(&mut a, 2), play(&mut b, 2));
}

#[test]
fn test_winner_policy_keeps_winner_on_turn() {
    let config = DuelConfig {
        next_turn: NextTurnPolicy::Winner,
        critical_multiplier: 1.0,
        starting_health: 50.0,
        ..DuelConfig::default()
    };
    let mut duel = duel_with(config, 1);
    duel.tick(Triggers::none()).unwrap();

    let events = duel
        .resolve_shot(Side::Red, ShotResult::from_damage(70.0))
        .unwrap();
    assert_eq!(
        events.last(),
        Some(&DuelEvent::GameOver {
            winner: Side::Red,
            next_turn: Side::Red
        })
    );
    assert_eq!(duel.turn(), Side::Red);
}

#[test]
fn test_cabinet_sees_lamps_and_reports() {
    let mut duel = duel_with(DuelConfig::default(), 4);
    let mut cabinet = ScriptedCabinet::new(vec![Triggers::both(); 10]);

    duel.run(&mut cabinet).unwrap();

    assert_eq!(cabinet.remaining(), 0);
    assert_eq!(cabinet.turn_lamps.len(), 11);
    assert_eq!(reports(&cabinet.events).len(), 10);
    assert!(duel.renderer().strip().is_dark());

    // Lamp before each poll names the side whose shot follows
    let attackers: Vec<Side> = reports(&cabinet.events).iter().map(|r| r.attacker).collect();
    assert_eq!(&cabinet.turn_lamps[..10], attackers.as_slice());
}

#[test]
fn test_animation_time_accumulates() {
    let mut duel = duel_with(DuelConfig::default(), 6);
    duel.tick(Triggers::both()).unwrap();

    // At least one full crossing of 64 cells at 5 ms
    let total = duel.renderer().pacer().total();
    assert!(total.as_micros() >= 64 * 5_000);
}
