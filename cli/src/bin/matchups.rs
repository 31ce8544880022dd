use arena::{fight, Side, Silent};
use arena_cli::load_roster;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matchups")]
#[command(about = "Head-to-head table: every ordered pairing from fresh health")]
struct Args {
    /// Roster YAML (defaults to the built-in classic roster)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Round cap per duel (defaults to the roster's own setting)
    #[arg(long)]
    round_cap: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let roster = load_roster(args.roster.as_deref())?;
    let round_cap = args.round_cap.unwrap_or(roster.arena.round_cap);
    let fighters = roster.build()?;

    println!(
        "{:<8} {:<8} {:>6} {:>6} {:>8} {:>8}",
        "first", "second", "hit", "taken", "winner", "rounds"
    );
    println!("{}", "-".repeat(49));

    let mut draws = 0u32;
    for (i, base_a) in fighters.iter().enumerate() {
        for (j, base_b) in fighters.iter().enumerate() {
            if i == j {
                continue;
            }
            let mut a = base_a.clone();
            let mut b = base_b.clone();
            a.restore_health();
            b.restore_health();

            let hit = a.damage_against(&b);
            let taken = b.damage_against(&a);
            let outcome = fight(&mut a, &mut b, round_cap, &mut Silent);
            let winner = match outcome.winner {
                Some(Side::First) => a.race().to_string(),
                Some(Side::Second) => b.race().to_string(),
                None => {
                    draws += 1;
                    "draw".to_string()
                }
            };

            println!(
                "{:<8} {:<8} {:>6} {:>6} {:>8} {:>8}",
                a.race(),
                b.race(),
                hit,
                taken,
                winner,
                outcome.rounds
            );
        }
    }

    println!();
    println!("round cap: {}", round_cap);
    println!("draws:     {}", draws);
    Ok(())
}
