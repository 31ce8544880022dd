use anyhow::Result;
use arena::{Arena, Combatant, Event, Narrator, Race};
use arena_cli::load_roster;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Subcommand)]
enum Cmd {
    /// Round-robin then king of the hill (the default when no command is given)
    All,
    /// Every fighter meets every other fighter once
    Tournament,
    /// King of the hill: the champion keeps its wounds between battles
    Gauntlet,
    /// A single duel between two races from the roster
    Duel {
        /// Race that strikes first
        first: String,
        /// Race that strikes second
        second: String,
    },
    /// Print the resolved roster as JSON
    Roster {
        /// Single-line JSON instead of pretty-printed
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
}

#[derive(Parser)]
#[command(name = "arena-cli")]
#[command(about = "Deterministic arena tournaments between the four races")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,

    /// Roster YAML (defaults to the built-in classic roster)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Override the per-battle round cap
    #[arg(long, global = true)]
    round_cap: Option<u32>,

    /// Emit narration as JSON lines instead of text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Prints each event as soon as the core emits it.
struct Printer {
    json: bool,
}

impl Narrator for Printer {
    fn emit(&mut self, event: Event) {
        if !self.json {
            println!("{}", event);
            return;
        }
        match event.to_json_line() {
            Ok(line) => println!("{}", line),
            Err(err) => tracing::warn!(%err, "dropping event that failed to encode"),
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Takes the first roster fighter of `race`, or an unequipped one if absent.
fn pick_fighter(fighters: &[Combatant], name: &str) -> Result<Combatant> {
    let race: Race = name.parse()?;
    Ok(fighters
        .iter()
        .find(|f| f.race() == race)
        .cloned()
        .unwrap_or_else(|| Combatant::new(race)))
}

fn run_tournament(arena: &mut Arena<Printer>, fighters: &mut [Combatant]) {
    arena.round_robin(fighters);
}

fn run_gauntlet(arena: &mut Arena<Printer>, fighters: &mut [Combatant], json: bool) {
    for f in fighters.iter_mut() {
        f.restore_health();
    }
    let report = arena.sequential_elimination(fighters);
    if let (Some(idx), false) = (report.champion, json) {
        println!("{}", fighters[idx].status());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let roster = load_roster(cli.roster.as_deref())?;
    let mut config = roster.arena;
    if let Some(cap) = cli.round_cap {
        config.round_cap = cap;
    }
    let mut fighters = roster.build()?;
    tracing::info!(fighters = fighters.len(), round_cap = config.round_cap, "roster ready");

    let mut arena = Arena::new(config, Printer { json: cli.json });
    match cli.cmd.unwrap_or(Cmd::All) {
        Cmd::All => {
            run_tournament(&mut arena, &mut fighters);
            run_gauntlet(&mut arena, &mut fighters, cli.json);
        }
        Cmd::Tournament => run_tournament(&mut arena, &mut fighters),
        Cmd::Gauntlet => run_gauntlet(&mut arena, &mut fighters, cli.json),
        Cmd::Duel { first, second } => {
            let mut a = pick_fighter(&fighters, &first)?;
            let mut b = pick_fighter(&fighters, &second)?;
            a.restore_health();
            b.restore_health();
            arena.fight(&mut a, &mut b);
            if !cli.json {
                println!("{} | {}", a.status(), b.status());
            }
        }
        Cmd::Roster { compact } => {
            if compact {
                println!("{}", serde_json::to_string(&roster)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&roster)?);
            }
        }
    }
    Ok(())
}
