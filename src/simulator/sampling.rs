//! Monte Carlo combat forecast, for cross-checking the exact one.

use super::config::SimulationOptions;
use super::outcome::{Matchup, OutcomeTally, Prepared};
use super::report::SimulationResult;
use crate::beast::Beast;
use crate::character::Adventurer;
use crate::core::combat_math::{apply_damage, is_alive};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How one sampled fight ended.
#[derive(Debug, Clone, Copy)]
struct FightRecord {
    won: bool,
    rounds: u32,
    dealt: u32,
    taken: u32,
}

fn roll_strike(matchup: &Matchup, rng: &mut impl Rng) -> u32 {
    let slot = rng.gen_range(0..matchup.beast_slots.len());
    matchup.beast_slots[slot].roll(matchup.beast_crit, rng).damage
}

/// Play one fight to the end. `None` when the round cap is reached first.
fn play_out(
    matchup: &Matchup,
    options: &SimulationOptions,
    rng: &mut impl Rng,
) -> Option<FightRecord> {
    let mut adventurer_hp = matchup.adventurer_health;
    let mut beast_hp = matchup.beast_health;

    let lost = |rounds: u32, beast_hp: u32| FightRecord {
        won: false,
        rounds,
        dealt: matchup.beast_health - beast_hp,
        taken: matchup.adventurer_health,
    };

    if options.initial_beast_strike {
        adventurer_hp = apply_damage(adventurer_hp, roll_strike(matchup, rng));
        if !is_alive(adventurer_hp) {
            return Some(lost(0, beast_hp));
        }
    }

    for round in 1..=options.max_rounds {
        let hit = matchup.attack.roll(matchup.attack_crit, rng);
        beast_hp = apply_damage(beast_hp, hit.damage);
        if !is_alive(beast_hp) {
            return Some(FightRecord {
                won: true,
                rounds: round,
                dealt: matchup.beast_health,
                taken: matchup.adventurer_health - adventurer_hp,
            });
        }

        adventurer_hp = apply_damage(adventurer_hp, roll_strike(matchup, rng));
        if !is_alive(adventurer_hp) {
            return Some(lost(round, beast_hp));
        }
    }
    None
}

/// Forecast the fight by sampling `samples` fights.
///
/// Sample `i` uses a `ChaCha8Rng` seeded with `seed + i`, so a fixed seed
/// reproduces the same result. The one-turn-kill rate is computed exactly.
pub fn sample_combat_outcomes(
    adventurer: Option<&Adventurer>,
    beast: Option<&Beast>,
    options: &SimulationOptions,
    samples: u32,
    seed: u64,
) -> SimulationResult {
    let matchup = match Matchup::prepare(adventurer, beast) {
        Prepared::NoOutcome => return SimulationResult::default(),
        Prepared::AlreadyWon => return SimulationResult::already_won(),
        Prepared::Fight(matchup) => matchup,
    };
    if samples == 0 {
        return SimulationResult::default();
    }

    let weight = 1.0 / samples as f64;
    let mut tally = OutcomeTally::default();
    let mut stalemate = 0.0;

    for sample in 0..samples {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(sample as u64));
        match play_out(&matchup, options, &mut rng) {
            Some(fight) => tally.record(fight.won, fight.rounds, fight.dealt, fight.taken, weight),
            None => stalemate += weight,
        }
    }

    tracing::debug!(samples, seed, stalemate, "sampled combat forecast");
    tally.finish(matchup.otk_rate(), stalemate, options.max_rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Stats;
    use crate::items::Item;

    fn adventurer() -> Adventurer {
        let mut adventurer = Adventurer {
            health: 120,
            xp: 100,
            stats: Stats {
                strength: 2,
                vitality: 10,
                luck: 25,
                ..Stats::default()
            },
            ..Adventurer::default()
        };
        adventurer.equipment.equip(Item::new(42, 36)).unwrap();
        adventurer
    }

    #[test]
    fn test_same_seed_same_result() {
        let adventurer = adventurer();
        let beast = Beast::new(30, 3, 8, 90);
        let options = SimulationOptions::default();
        let first = sample_combat_outcomes(Some(&adventurer), Some(&beast), &options, 500, 42);
        let second = sample_combat_outcomes(Some(&adventurer), Some(&beast), &options, 500, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_samples_has_no_outcome() {
        let adventurer = adventurer();
        let beast = Beast::new(30, 3, 8, 90);
        let result =
            sample_combat_outcomes(Some(&adventurer), Some(&beast), &SimulationOptions::default(), 0, 1);
        assert!(!result.has_outcome);
    }

    #[test]
    fn test_missing_beast_has_no_outcome() {
        let adventurer = adventurer();
        let result =
            sample_combat_outcomes(Some(&adventurer), None, &SimulationOptions::default(), 100, 1);
        assert_eq!(result, SimulationResult::default());
    }
}
