//! Exact combat forecast.
//!
//! Each round the adventurer attacks (base or critical), then, if the beast
//! survives, the beast strikes one of the five armor slots at random (base or
//! critical). The joint distribution over `(adventurer health, beast health)`
//! is carried round by round until every branch has ended or the round cap
//! is hit.

use super::config::SimulationOptions;
use super::report::SimulationResult;
use crate::beast::Beast;
use crate::character::Adventurer;
use crate::core::combat_math::{
    apply_damage, beast_damage_by_slot, calculate_attack_damage, is_alive, DamageSummary,
};
use crate::core::constants::PROBABILITY_FLOOR;
use crate::core::progression::{adventurer_critical_chance, beast_critical_chance};
use std::collections::BTreeMap;

type HealthStates = BTreeMap<(u32, u32), f64>;

/// Damage figures for one adventurer against one beast. Gear does not
/// change mid-fight, so these hold for every round.
pub(super) struct Matchup {
    pub(super) adventurer_health: u32,
    pub(super) beast_health: u32,
    pub(super) attack: DamageSummary,
    pub(super) attack_crit: u32,
    pub(super) beast_slots: [DamageSummary; 5],
    pub(super) beast_crit: u32,
}

pub(super) enum Prepared {
    NoOutcome,
    AlreadyWon,
    Fight(Matchup),
}

impl Matchup {
    pub(super) fn prepare(adventurer: Option<&Adventurer>, beast: Option<&Beast>) -> Prepared {
        let (Some(adventurer), Some(beast)) = (adventurer, beast) else {
            return Prepared::NoOutcome;
        };
        if beast.is_defeated() {
            return Prepared::AlreadyWon;
        }
        if !adventurer.is_alive() {
            return Prepared::NoOutcome;
        }

        Prepared::Fight(Matchup {
            adventurer_health: adventurer.health,
            beast_health: beast.health,
            attack: calculate_attack_damage(adventurer.weapon(), adventurer, beast),
            attack_crit: adventurer_critical_chance(adventurer.stats.luck),
            beast_slots: beast_damage_by_slot(beast, adventurer),
            beast_crit: beast_critical_chance(adventurer.xp),
        })
    }

    /// Distinct damage values of one adventurer attack with their probabilities.
    fn attack_distribution(&self) -> Vec<(u32, f64)> {
        damage_branches([(self.attack, 1.0)], self.attack_crit)
    }

    /// Distinct damage values of one beast strike, over all armor slots.
    fn strike_distribution(&self) -> Vec<(u32, f64)> {
        let weight = 1.0 / self.beast_slots.len() as f64;
        damage_branches(self.beast_slots.map(|s| (s, weight)), self.beast_crit)
    }

    /// Chance, in percent, that the next beast strike kills the adventurer
    /// from full current health.
    pub(super) fn otk_rate(&self) -> f64 {
        let rate: f64 = self
            .strike_distribution()
            .into_iter()
            .filter(|&(damage, _)| damage >= self.adventurer_health)
            .map(|(_, p)| p)
            .sum();
        (rate * 100.0).clamp(0.0, 100.0)
    }

    /// Apply one beast strike to every live state. Deaths are tallied as
    /// losses ending in `round`.
    fn resolve_strikes(
        &self,
        states: HealthStates,
        strikes: &[(u32, f64)],
        round: u32,
        tally: &mut OutcomeTally,
    ) -> HealthStates {
        let mut next = HealthStates::new();
        for ((adventurer_hp, beast_hp), p) in states {
            for &(damage, q) in strikes {
                let remaining = apply_damage(adventurer_hp, damage);
                if is_alive(remaining) {
                    *next.entry((remaining, beast_hp)).or_insert(0.0) += p * q;
                } else {
                    tally.record(
                        false,
                        round,
                        self.beast_health - beast_hp,
                        self.adventurer_health,
                        p * q,
                    );
                }
            }
        }
        next
    }
}

fn damage_branches(
    hits: impl IntoIterator<Item = (DamageSummary, f64)>,
    crit_chance_percent: u32,
) -> Vec<(u32, f64)> {
    let crit = crit_chance_percent.min(100) as f64 / 100.0;
    let mut merged: BTreeMap<u32, f64> = BTreeMap::new();
    for (hit, weight) in hits {
        for (damage, p) in [
            (hit.base_damage, weight * (1.0 - crit)),
            (hit.critical_damage, weight * crit),
        ] {
            if p > 0.0 {
                *merged.entry(damage).or_insert(0.0) += p;
            }
        }
    }
    merged.into_iter().collect()
}

/// Terminal outcomes collected during a forecast.
#[derive(Debug, Default)]
pub(super) struct OutcomeTally {
    win: f64,
    loss: f64,
    rounds: BTreeMap<u32, f64>,
    dealt: BTreeMap<u32, f64>,
    taken: BTreeMap<u32, f64>,
    longest: u32,
}

impl OutcomeTally {
    pub(super) fn record(&mut self, won: bool, rounds: u32, dealt: u32, taken: u32, p: f64) {
        if won {
            self.win += p;
        } else {
            self.loss += p;
        }
        *self.rounds.entry(rounds).or_insert(0.0) += p;
        *self.dealt.entry(dealt).or_insert(0.0) += p;
        *self.taken.entry(taken).or_insert(0.0) += p;
        self.longest = self.longest.max(rounds);
    }

    pub(super) fn finish(self, otk_rate: f64, stalemate: f64, round_cap: u32) -> SimulationResult {
        let max_rounds = if stalemate > PROBABILITY_FLOOR {
            round_cap
        } else {
            self.longest
        };

        // Pruned branches leave the tracked mass short of 1
        let tracked = self.win + self.loss + stalemate;
        let scale = if tracked > 0.0 { 100.0 / tracked } else { 0.0 };

        SimulationResult {
            win_rate: (self.win * scale).clamp(0.0, 100.0),
            loss_rate: (self.loss * scale).clamp(0.0, 100.0),
            otk_rate,
            mode_rounds: mode(&self.rounds),
            mode_damage_dealt: mode(&self.dealt),
            mode_damage_taken: mode(&self.taken),
            max_rounds,
            has_outcome: true,
        }
    }
}

/// Most likely value; ties go to the smaller value.
fn mode(distribution: &BTreeMap<u32, f64>) -> u32 {
    let mut best = (0, 0.0);
    for (&value, &p) in distribution {
        if p > best.1 {
            best = (value, p);
        }
    }
    best.0
}

/// Forecast the fight between `adventurer` and `beast` by exact enumeration.
///
/// Missing inputs or a dead adventurer give a result with
/// `has_outcome == false`. A beast at zero health is an immediate win.
pub fn simulate_combat_outcomes(
    adventurer: Option<&Adventurer>,
    beast: Option<&Beast>,
    options: &SimulationOptions,
) -> SimulationResult {
    let matchup = match Matchup::prepare(adventurer, beast) {
        Prepared::NoOutcome => return SimulationResult::default(),
        Prepared::AlreadyWon => return SimulationResult::already_won(),
        Prepared::Fight(matchup) => matchup,
    };

    let attacks = matchup.attack_distribution();
    let strikes = matchup.strike_distribution();
    let mut tally = OutcomeTally::default();

    let mut states = HealthStates::new();
    states.insert((matchup.adventurer_health, matchup.beast_health), 1.0);
    if options.initial_beast_strike {
        states = matchup.resolve_strikes(states, &strikes, 0, &mut tally);
    }

    let mut round = 0;
    while !states.is_empty() && round < options.max_rounds {
        round += 1;

        let mut survivors = HealthStates::new();
        for ((adventurer_hp, beast_hp), p) in states {
            for &(damage, q) in &attacks {
                let remaining = apply_damage(beast_hp, damage);
                if is_alive(remaining) {
                    *survivors.entry((adventurer_hp, remaining)).or_insert(0.0) += p * q;
                } else {
                    tally.record(
                        true,
                        round,
                        matchup.beast_health,
                        matchup.adventurer_health - adventurer_hp,
                        p * q,
                    );
                }
            }
        }

        states = matchup.resolve_strikes(survivors, &strikes, round, &mut tally);

        let live = states.len();
        states.retain(|_, p| *p >= PROBABILITY_FLOOR);
        tracing::trace!(
            round,
            states = states.len(),
            pruned = live - states.len(),
            "resolved round"
        );
    }

    let stalemate: f64 = states.values().sum();
    tracing::debug!(
        rounds = round,
        win = tally.win,
        loss = tally.loss,
        stalemate,
        "combat forecast complete"
    );
    tally.finish(matchup.otk_rate(), stalemate, options.max_rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Stats;
    use crate::items::Item;

    fn adventurer(health: u32, luck: u32) -> Adventurer {
        let mut adventurer = Adventurer {
            health,
            xp: 100,
            stats: Stats {
                strength: 5,
                vitality: 20,
                luck,
                ..Stats::default()
            },
            ..Adventurer::default()
        };
        adventurer.equipment.equip(Item::new(42, 100)).unwrap();
        adventurer
    }

    #[test]
    fn test_damage_branches_merge_equal_values() {
        let hit = DamageSummary {
            base_damage: 4,
            critical_damage: 4,
        };
        let branches = damage_branches([(hit, 1.0)], 30);
        assert_eq!(branches.len(), 1);
        assert!((branches[0].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_damage_branches_skip_zero_probability() {
        let hit = DamageSummary {
            base_damage: 10,
            critical_damage: 20,
        };
        assert_eq!(damage_branches([(hit, 1.0)], 0), vec![(10, 1.0)]);
        assert_eq!(damage_branches([(hit, 1.0)], 100), vec![(20, 1.0)]);
    }

    #[test]
    fn test_mode_prefers_smaller_on_tie() {
        let distribution = BTreeMap::from([(3, 0.4), (2, 0.4), (5, 0.2)]);
        assert_eq!(mode(&distribution), 2);
        assert_eq!(mode(&BTreeMap::new()), 0);
    }

    #[test]
    fn test_single_hit_kill() {
        // Katana deals 82 base against this beast; 40 health dies in one hit
        let adventurer = adventurer(400, 0);
        let beast = Beast::new(1, 3, 10, 40);
        let result = simulate_combat_outcomes(
            Some(&adventurer),
            Some(&beast),
            &SimulationOptions::default(),
        );
        assert_eq!(result.win_rate, 100.0);
        assert_eq!(result.mode_rounds, 1);
        assert_eq!(result.max_rounds, 1);
        assert_eq!(result.mode_damage_dealt, 40);
        assert_eq!(result.mode_damage_taken, 0);
    }

    #[test]
    fn test_rates_sum_to_one_hundred() {
        let adventurer = adventurer(60, 40);
        let beast = Beast::new(30, 2, 10, 300);
        let result = simulate_combat_outcomes(
            Some(&adventurer),
            Some(&beast),
            &SimulationOptions::default(),
        );
        assert!(result.has_outcome);
        assert!((result.win_rate + result.loss_rate - 100.0).abs() < 1e-6);
        assert!(result.loss_rate > 0.0);
    }

    #[test]
    fn test_pruned_mass_is_spread_over_outcomes() {
        let mut tally = OutcomeTally::default();
        tally.record(true, 3, 120, 10, 0.75 - 1e-6);
        tally.record(false, 2, 60, 100, 0.25 - 1e-6);
        let result = tally.finish(0.0, 0.0, 600);
        assert!((result.win_rate + result.loss_rate - 100.0).abs() < 1e-9);
        assert!((result.win_rate - 75.0).abs() < 1e-3);

        let mut tally = OutcomeTally::default();
        tally.record(true, 1, 40, 0, 0.999_999);
        let result = tally.finish(0.0, 0.0, 600);
        assert!((result.win_rate - 100.0).abs() < 1e-9);
        assert_eq!(result.max_rounds, 1);
    }

    #[test]
    fn test_dead_beast_wins_before_dead_adventurer() {
        let beast = Beast::new(1, 3, 10, 0);
        assert!(matches!(
            Matchup::prepare(Some(&adventurer(0, 0)), Some(&beast)),
            Prepared::AlreadyWon
        ));
        assert!(matches!(
            Matchup::prepare(Some(&adventurer(0, 0)), Some(&Beast::new(1, 3, 10, 40))),
            Prepared::NoOutcome
        ));
    }

    #[test]
    fn test_round_cap_leaves_stalemate() {
        let adventurer = adventurer(400, 0);
        let beast = Beast::new(1, 3, 10, 1000);
        let options = SimulationOptions {
            max_rounds: 2,
            ..Default::default()
        };
        let result = simulate_combat_outcomes(Some(&adventurer), Some(&beast), &options);
        assert_eq!(result.max_rounds, 2);
        assert!(result.stalemate_rate() > 99.0);
    }

    #[test]
    fn test_initial_strike_can_end_fight_at_round_zero() {
        // Empty armor against a level 10 tier 2 beast always takes at least 60
        let mut adventurer = adventurer(50, 0);
        adventurer.stats.vitality = 0;
        let beast = Beast::new(30, 2, 10, 40);
        let result = simulate_combat_outcomes(
            Some(&adventurer),
            Some(&beast),
            &SimulationOptions::beast_first(),
        );
        assert!((result.loss_rate - 100.0).abs() < 1e-9);
        assert_eq!(result.mode_rounds, 0);
        assert!((result.otk_rate - 100.0).abs() < 1e-9);
    }
}
