//! Survivor Combat CLI.
//!
//! Reads a JSON snapshot of an adventurer, their bag and a beast, then prints
//! damage figures, a combat forecast or a gear suggestion.
//!
//! Usage:
//!   survivor-combat damage fight.json
//!   survivor-combat simulate fight.json --beast-first
//!   survivor-combat simulate fight.json --monte-carlo --seed 7
//!   survivor-combat simulate fight.json --samples 20000 --json
//!   survivor-combat suggest fight.json
//!
//! Set `RUST_LOG=survivor_combat=debug` to see search and forecast details.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use survivor_combat::core::combat_math::{
    beast_damage_by_slot, calculate_attack_damage, calculate_gold_reward,
};
use survivor_combat::core::constants::DEFAULT_MONTE_CARLO_SAMPLES;
use survivor_combat::core::progression::{
    ability_based_percentage, adventurer_critical_chance, beast_critical_chance, potion_price,
};
use survivor_combat::items::catalog::item_name;
use survivor_combat::items::{
    calculate_combat_stats, new_items_equipped, suggest_best_combat_gear, EquipmentSlot,
};
use survivor_combat::{
    sample_combat_outcomes, simulate_combat_outcomes, Beast, CombatSnapshot, SimulationOptions,
};

/// Combat forecasts and gear suggestions
#[derive(Parser)]
#[command(name = "survivor-combat")]
#[command(about = "Combat forecasts and gear suggestions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show damage dealt and taken with the current gear
    Damage(DamageArgs),

    /// Forecast the fight against the beast
    Simulate(SimulateArgs),

    /// Suggest a better equipment configuration from the bag
    Suggest(SuggestArgs),
}

#[derive(Args)]
struct DamageArgs {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SimulateArgs {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// The beast strikes first (gear was changed mid-fight)
    #[arg(long)]
    beast_first: bool,

    /// Rounds before the fight counts as a stalemate
    #[arg(long, value_name = "ROUNDS")]
    max_rounds: Option<u32>,

    /// Sample random fights instead of enumerating exactly
    #[arg(long)]
    monte_carlo: bool,

    /// Number of sampled fights (implies --monte-carlo)
    #[arg(long, value_name = "N")]
    samples: Option<u32>,

    /// Seed for sampled fights
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SuggestArgs {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Damage(args) => damage(args),
        Command::Simulate(args) => simulate(args),
        Command::Suggest(args) => suggest(args),
    }
}

fn load_snapshot(path: &Path) -> Result<CombatSnapshot> {
    let snapshot = CombatSnapshot::from_path(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    snapshot
        .validate()
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded snapshot");
    Ok(snapshot)
}

fn require_beast(snapshot: &CombatSnapshot) -> Result<&Beast> {
    snapshot
        .beast
        .as_ref()
        .context("Snapshot has no beast to fight")
}

fn damage(args: DamageArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let beast = require_beast(&snapshot)?;
    let adventurer = &snapshot.adventurer;

    let stats = calculate_combat_stats(adventurer, &snapshot.bag, beast);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let attack = calculate_attack_damage(adventurer.weapon(), adventurer, beast);
    let weapon = adventurer.weapon().map_or("(none)", |w| item_name(w.id));
    println!("── ATTACK ─────────────────────────────────────");
    println!("  Weapon:          {}", weapon);
    println!(
        "  Damage:          {} ({} crit, {}% chance)",
        attack.base_damage,
        attack.critical_damage,
        adventurer_critical_chance(adventurer.stats.luck)
    );
    if stats.best_damage > attack.base_damage {
        println!("  Best available:  {}", stats.best_damage);
    }

    println!("── DEFENSE ────────────────────────────────────");
    println!(
        "  Beast crit:      {}%",
        beast_critical_chance(adventurer.xp)
    );
    let by_slot = beast_damage_by_slot(beast, adventurer);
    for (slot, hit) in EquipmentSlot::ARMOR.iter().zip(by_slot.iter()) {
        let armor = adventurer.equipment.get(*slot).map_or("(empty)", |a| item_name(a.id));
        println!(
            "  {:<6} {:<20} {:>5} ({} crit)",
            slot.name(),
            armor,
            hit.base_damage,
            hit.critical_damage
        );
    }
    println!(
        "  Expected per hit: {:.1} (best {:.1})",
        stats.damage_taken, stats.best_damage_taken
    );

    println!("── ODDS ───────────────────────────────────────");
    println!(
        "  Flee:            {}%",
        ability_based_percentage(adventurer.xp, adventurer.stats.dexterity)
    );
    println!(
        "  Dodge obstacle:  {}%",
        ability_based_percentage(adventurer.xp, adventurer.stats.intelligence)
    );
    println!(
        "  Avoid ambush:    {}%",
        ability_based_percentage(adventurer.xp, adventurer.stats.wisdom)
    );
    println!(
        "  Gold reward:     {}",
        calculate_gold_reward(beast, adventurer.equipment.get(EquipmentSlot::Ring))
    );
    println!(
        "  Potion price:    {}",
        potion_price(adventurer.level(), adventurer.stats.charisma)
    );
    Ok(())
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let mut options = SimulationOptions {
        initial_beast_strike: args.beast_first,
        ..Default::default()
    };
    if let Some(max_rounds) = args.max_rounds {
        options.max_rounds = max_rounds;
    }

    let samples = args
        .samples
        .or(args.monte_carlo.then_some(DEFAULT_MONTE_CARLO_SAMPLES));
    let result = match samples {
        Some(samples) => sample_combat_outcomes(
            Some(&snapshot.adventurer),
            snapshot.beast.as_ref(),
            &options,
            samples,
            args.seed,
        ),
        None => simulate_combat_outcomes(
            Some(&snapshot.adventurer),
            snapshot.beast.as_ref(),
            &options,
        ),
    };

    if args.json {
        println!("{}", result.to_json());
    } else {
        print!("{}", result.to_text());
    }
    Ok(())
}

fn suggest(args: SuggestArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let beast = require_beast(&snapshot)?;

    let Some(suggestion) = suggest_best_combat_gear(&snapshot.adventurer, &snapshot.bag, beast)
    else {
        if args.json {
            println!("null");
        } else {
            println!("Current gear is already the best against this beast.");
        }
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    println!("Suggested changes:");
    for slot in &suggestion.changed_slots {
        let old = snapshot
            .adventurer
            .equipment
            .get(*slot)
            .map_or("(empty)", |item| item_name(item.id));
        let new = suggestion
            .adventurer
            .equipment
            .get(*slot)
            .map_or("(empty)", |item| item_name(item.id));
        println!("  {:<6} {} -> {}", slot.name(), old, new);
    }

    // Swapping gear hands the beast the next strike
    let swapped = new_items_equipped(
        &suggestion.adventurer.equipment,
        &snapshot.adventurer.equipment,
    );
    let options = SimulationOptions {
        initial_beast_strike: !swapped.is_empty(),
        ..Default::default()
    };
    let before = simulate_combat_outcomes(
        Some(&snapshot.adventurer),
        Some(beast),
        &SimulationOptions::default(),
    );
    let after = simulate_combat_outcomes(Some(&suggestion.adventurer), Some(beast), &options);
    println!();
    println!(
        "Win rate: {:.1}% now, {:.1}% after swapping",
        before.win_rate, after.win_rate
    );
    Ok(())
}
