//! Damage model and match state integration tests
//!
//! Covers the hit-probability curve, the aim extremes, severity tiers and
//! the health bookkeeping scenarios of a full match.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use space_duel::combat::constants::{MAX_ROLL, MIN_ROLL};
use space_duel::combat::*;
use space_duel::core::types::Side;

fn hits_at(aim: u8) -> usize {
    (MIN_ROLL..=MAX_ROLL)
        .filter(|&roll| damage_for_roll(aim, roll) > 0.0)
        .count()
}

#[test]
fn test_hit_probability_increases_with_aim() {
    let mut previous = 0;
    for aim in 1..=100u8 {
        let hits = hits_at(aim);
        assert!(hits >= previous, "aim {} hits {} < {}", aim, hits, previous);
        previous = hits;
    }
    assert_eq!(hits_at(100), 100);
}

#[test]
fn test_perfect_aim_always_hits() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..5_000 {
        let damage = calculate_damage(100, &mut rng);
        assert!(damage > 0.0 && damage <= 100.0);
    }
}

#[test]
fn test_zero_aim_always_misses() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..5_000 {
        let shot = ShotResult::roll(0, &mut rng);
        assert!(!shot.hit);
        assert!(!shot.damage.is_nan());
    }
}

#[test]
fn test_sampled_hit_rate_tracks_aim() {
    // 20k draws keep the sampled rate well within 2 points of aim/100
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for aim in [10, 50, 75, 90] {
        let hits = (0..20_000)
            .filter(|_| calculate_damage(aim, &mut rng) > 0.0)
            .count();
        let rate = hits as f32 / 20_000.0;
        assert!((rate - aim as f32 / 100.0).abs() < 0.02, "aim {} rate {}", aim, rate);
    }
}

#[test]
fn test_severity_boundaries() {
    assert_eq!(classify_severity(95.0).tier(), 9);
    assert_eq!(classify_severity(75.0).tier(), 3);
    assert_eq!(classify_severity(50.0).tier(), 2);
    assert_eq!(classify_severity(25.0).tier(), 1);
    assert_eq!(classify_severity(0.0).tier(), 1);
}

#[test]
fn test_overkill_scenario() {
    // Starting health 300, Red hits for 310: Green ends at -10 and loses
    let mut state = Match::new(300.0, Side::Red);
    state.apply_damage(Side::Red, 310.0, true);

    assert_eq!(state.health(Side::Green), -10.0);
    assert_eq!(state.defeated(), Some(Side::Green));
}

#[test]
fn test_miss_scenario_flips_turn() {
    let mut state = Match::new(300.0, Side::Red);
    state.apply_damage(Side::Red, 64.0, false);
    assert_eq!(state.defeated(), None);
    state.advance_turn();

    assert_eq!(state.health(Side::Red), 300.0);
    assert_eq!(state.health(Side::Green), 300.0);
    assert_eq!(state.phase(), MatchPhase::AwaitingShot(Side::Green));
}

#[test]
fn test_game_over_reset_policies() {
    for (policy, winner, expected) in [
        (NextTurnPolicy::Loser, Side::Red, Side::Green),
        (NextTurnPolicy::Loser, Side::Green, Side::Red),
        (NextTurnPolicy::Winner, Side::Green, Side::Green),
        (NextTurnPolicy::Red, Side::Green, Side::Red),
    ] {
        let mut state = Match::new(120.0, winner);
        state.apply_damage(winner, 500.0, true);
        assert_eq!(state.phase(), MatchPhase::GameOver);

        assert_eq!(state.resolve_game_over(winner, policy), expected);
        assert_eq!(state.health(Side::Red), 120.0);
        assert_eq!(state.health(Side::Green), 120.0);
        assert_eq!(state.phase(), MatchPhase::AwaitingShot(expected));
    }
}

proptest! {
    #[test]
    fn prop_damage_never_exceeds_100(aim in 1u8..=100, roll in MIN_ROLL..=MAX_ROLL) {
        prop_assert!(damage_for_roll(aim, roll) <= 100.0);
    }

    #[test]
    fn prop_any_tracking_speed_is_safe(speed in any::<i32>(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let damage = calculate_damage(speed, &mut rng);
        prop_assert!(damage.is_finite());
        prop_assert!(damage <= 100.0);
    }

    #[test]
    fn prop_classify_is_total(damage in any::<f32>()) {
        let tier = classify_severity(damage).tier();
        prop_assert!(matches!(tier, 1..=4 | 9));
    }

    #[test]
    fn prop_hit_subtracts_exactly(health in 1.0f32..1000.0, damage in 0.5f32..100.0) {
        let mut state = Match::new(health, Side::Green);
        state.apply_damage(Side::Green, damage, true);
        prop_assert_eq!(state.health(Side::Red), health - damage);
        prop_assert_eq!(state.health(Side::Green), health);
        prop_assert_eq!(state.defeated().is_some(), health - damage <= 0.0);
    }

    #[test]
    fn prop_miss_leaves_health(health in 1.0f32..1000.0, damage in -100.0f32..100.0) {
        let mut state = Match::new(health, Side::Red);
        state.apply_damage(Side::Red, damage, false);
        prop_assert_eq!(state.health(Side::Green), health);
        prop_assert_eq!(state.defeated(), None);
    }
}
