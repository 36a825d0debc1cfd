//! Integration test: combat outcome forecasting
//!
//! Exact enumeration invariants, the crit-free round count, the beast's
//! first strike, and agreement between the exact and sampled forecasts.

use survivor_combat::character::{Adventurer, Stats};
use survivor_combat::core::combat_math::calculate_attack_damage;
use survivor_combat::items::Item;
use survivor_combat::{
    sample_combat_outcomes, simulate_combat_outcomes, Beast, SimulationOptions, SimulationResult,
};

fn adventurer(health: u32, strength: u32, luck: u32) -> Adventurer {
    let mut adventurer = Adventurer {
        health,
        xp: 100,
        stats: Stats {
            strength,
            vitality: 62,
            luck,
            ..Stats::default()
        },
        ..Adventurer::default()
    };
    adventurer.equipment.equip(Item::new(42, 100)).unwrap();
    adventurer
}

fn forecast(adventurer: &Adventurer, beast: &Beast) -> SimulationResult {
    simulate_combat_outcomes(Some(adventurer), Some(beast), &SimulationOptions::default())
}

// =========================================================================
// Missing and finished fights
// =========================================================================

#[test]
fn test_defeated_beast_is_a_win() {
    let beast = Beast::new(1, 3, 10, 0);
    let result = forecast(&adventurer(100, 5, 0), &beast);
    assert!(result.has_outcome, "A dead beast is still an outcome");
    assert_eq!(result.win_rate, 100.0);
    assert_eq!(result.mode_rounds, 0);
    assert_eq!(result.max_rounds, 0);

    // A dead adventurer still reads the fight as won
    let options = SimulationOptions::default();
    let fallen = adventurer(0, 5, 0);
    for result in [
        simulate_combat_outcomes(Some(&fallen), Some(&beast), &options),
        sample_combat_outcomes(Some(&fallen), Some(&beast), &options, 100, 1),
    ] {
        assert!(result.has_outcome);
        assert_eq!(result.win_rate, 100.0);
    }
}

#[test]
fn test_missing_inputs_have_no_outcome() {
    let beast = Beast::new(1, 3, 10, 40);
    let adventurer = adventurer(100, 5, 0);
    let options = SimulationOptions::default();

    assert!(!simulate_combat_outcomes(None, Some(&beast), &options).has_outcome);
    assert!(!simulate_combat_outcomes(Some(&adventurer), None, &options).has_outcome);
    assert!(!simulate_combat_outcomes(None, None, &options).has_outcome);
}

#[test]
fn test_dead_adventurer_has_no_outcome() {
    let beast = Beast::new(1, 3, 10, 40);
    let result = forecast(&adventurer(0, 5, 0), &beast);
    assert_eq!(result, SimulationResult::default());
}

// =========================================================================
// Exact enumeration
// =========================================================================

#[test]
fn test_crit_free_rounds_match_ceiling() {
    let adventurer = adventurer(1000, 5, 0);
    for health in [40, 82, 83, 123, 400, 777] {
        let beast = Beast::new(1, 3, 10, health);
        let base = calculate_attack_damage(adventurer.weapon(), &adventurer, &beast).base_damage;
        assert_eq!(base, 82);

        let result = forecast(&adventurer, &beast);
        let expected = health.div_ceil(base);
        assert_eq!(
            result.mode_rounds, expected,
            "Beast health {health}: expected {expected} rounds"
        );
        assert_eq!(result.max_rounds, expected, "No crits means no variance in rounds");
        assert_eq!(result.mode_damage_dealt, health);
        assert!((result.win_rate - 100.0).abs() < 1e-6);
    }
}

#[test]
fn test_rates_stay_in_bounds() {
    let adventurer = adventurer(100, 3, 20);
    for id in [1, 30, 60] {
        for tier in [1, 3, 5] {
            for level in [5, 20] {
                for health in [30, 150] {
                    let beast = Beast::new(id, tier, level, health);
                    let result = forecast(&adventurer, &beast);
                    assert!(result.has_outcome);
                    for rate in [result.win_rate, result.loss_rate, result.otk_rate] {
                        assert!(
                            (0.0..=100.0).contains(&rate),
                            "Rate {rate} out of bounds for beast {id} T{tier} L{level}"
                        );
                    }
                    assert!(result.win_rate + result.loss_rate <= 100.0 + 1e-6);
                }
            }
        }
    }
}

#[test]
fn test_unlosable_fight_reports_full_win_rate() {
    // Crits on both sides branch the states until some fall under the floor,
    // but a T5 level 3 beast can't get through 1023 health in time
    let adventurer = adventurer(1023, 5, 30);
    let beast = Beast::new(1, 5, 3, 600);
    let result = forecast(&adventurer, &beast);
    assert_eq!(result.loss_rate, 0.0);
    assert!(
        (result.win_rate - 100.0).abs() < 1e-9,
        "Win rate {} should be 100",
        result.win_rate
    );
    assert!(result.stalemate_rate() < 1e-9);
}

#[test]
fn test_forecast_is_reproducible() {
    let adventurer = adventurer(140, 2, 30);
    let beast = Beast::new(30, 2, 12, 220);
    assert_eq!(forecast(&adventurer, &beast), forecast(&adventurer, &beast));
}

#[test]
fn test_forecast_does_not_mutate_inputs() {
    let adventurer = adventurer(140, 2, 30);
    let beast = Beast::new(30, 2, 12, 220);
    let (adventurer_before, beast_before) = (adventurer.clone(), beast.clone());
    forecast(&adventurer, &beast);
    assert_eq!(adventurer, adventurer_before);
    assert_eq!(beast, beast_before);
}

#[test]
fn test_otk_rate_counts_lethal_strikes() {
    // Unarmored against a T2 level 10 beast: 60 base, 120 crit, 10% crit
    let beast = Beast::new(30, 2, 10, 500);
    let mut adventurer = adventurer(100, 0, 0);
    adventurer.stats.vitality = 0;

    let result = forecast(&adventurer, &beast);
    assert!((result.otk_rate - 10.0).abs() < 1e-9, "Only crits kill from 100, got {}", result.otk_rate);

    adventurer.health = 50;
    let result = forecast(&adventurer, &beast);
    assert!((result.otk_rate - 100.0).abs() < 1e-9);
}

// =========================================================================
// Beast first strike
// =========================================================================

#[test]
fn test_beast_first_strike_hurts() {
    let adventurer = adventurer(150, 2, 10);
    let beast = Beast::new(30, 2, 10, 200);

    let normal = forecast(&adventurer, &beast);
    let beast_first = simulate_combat_outcomes(
        Some(&adventurer),
        Some(&beast),
        &SimulationOptions::beast_first(),
    );
    assert!(
        beast_first.win_rate <= normal.win_rate + 1e-6,
        "Giving up the first strike can't help: {} vs {}",
        beast_first.win_rate,
        normal.win_rate
    );
}

// =========================================================================
// Monte Carlo cross-check
// =========================================================================

#[test]
fn test_sampled_forecast_matches_exact() {
    let mut adventurer = adventurer(120, 2, 25);
    adventurer.equipment.equip(Item::new(42, 36)).unwrap();
    let beast = Beast::new(30, 3, 8, 90);
    let options = SimulationOptions::default();

    let exact = simulate_combat_outcomes(Some(&adventurer), Some(&beast), &options);
    let sampled = sample_combat_outcomes(Some(&adventurer), Some(&beast), &options, 4000, 7);

    assert!(exact.win_rate > 5.0 && exact.win_rate < 95.0, "Fight should be contested");
    assert!(
        (exact.win_rate - sampled.win_rate).abs() < 4.0,
        "Exact {} vs sampled {}",
        exact.win_rate,
        sampled.win_rate
    );
    assert_eq!(exact.otk_rate, sampled.otk_rate);
}

#[test]
fn test_sampled_forecast_is_seeded() {
    let adventurer = adventurer(120, 2, 25);
    let beast = Beast::new(30, 3, 8, 300);
    let options = SimulationOptions::default();

    let first = sample_combat_outcomes(Some(&adventurer), Some(&beast), &options, 300, 99);
    let second = sample_combat_outcomes(Some(&adventurer), Some(&beast), &options, 300, 99);
    assert_eq!(first, second);
}
