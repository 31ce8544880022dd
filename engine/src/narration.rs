use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::race::Race;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    RoundRobin,
    Sequential,
}

/// Structured narration emitted by the combat core. Rendering is `Display`'s job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    TournamentStart {
        format: Format,
    },
    BattleStart {
        first: Race,
        second: Race,
    },
    Round {
        number: u32,
    },
    Attack {
        attacker: Race,
        target: Race,
        damage: i32,
        target_health: i32,
        target_max_health: i32,
    },
    Death {
        race: Race,
    },
    BattleEnd {
        winner: Option<Race>,
        rounds: u32,
    },
    ResultsHeader,
    TallyLine {
        race: Race,
        wins: u32,
    },
    ChampionHolds {
        race: Race,
    },
    NewChampion {
        race: Race,
    },
    SequenceHalted,
    FinalChampion {
        race: Race,
    },
}

impl Event {
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::TournamentStart {
                format: Format::RoundRobin,
            } => {
                write!(f, "=== ROUND-ROBIN TOURNAMENT ===")
            }
            Event::TournamentStart {
                format: Format::Sequential,
            } => {
                write!(f, "=== KING OF THE HILL ===")
            }
            Event::BattleStart { first, second } => write!(f, "BATTLE: {} vs {}", first, second),
            Event::Round { number } => write!(f, "--- Round {} ---", number),
            Event::Attack {
                attacker,
                target,
                damage,
                target_health,
                target_max_health,
            } => write!(
                f,
                "{} attacks {} for {} damage ({} HP {}/{})",
                attacker, target, damage, target, target_health, target_max_health
            ),
            Event::Death { race } => write!(f, "{} has fallen!", race),
            Event::BattleEnd {
                winner: Some(race),
                rounds,
            } => {
                write!(f, "Winner: {} after {} rounds", race, rounds)
            }
            Event::BattleEnd {
                winner: None,
                rounds,
            } => {
                write!(f, "Draw after {} rounds", rounds)
            }
            Event::ResultsHeader => write!(f, "=== RESULTS ==="),
            Event::TallyLine { race, wins } => write!(f, "{}: {} wins", race, wins),
            Event::ChampionHolds { race } => write!(f, "{} holds the hill", race),
            Event::NewChampion { race } => write!(f, "{} is the new champion", race),
            Event::SequenceHalted => write!(f, "No champion left standing; sequence over"),
            Event::FinalChampion { race } => write!(f, "Final champion: {}", race),
        }
    }
}

/// Append-only sink for narration events.
pub trait Narrator {
    fn emit(&mut self, event: Event);
}

impl Narrator for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl<N: Narrator + ?Sized> Narrator for &mut N {
    fn emit(&mut self, event: Event) {
        (**self).emit(event);
    }
}

/// Drops everything. Useful when only the returned outcomes matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Narrator for Silent {
    fn emit(&mut self, _event: Event) {}
}

/// Keeps events in order and mirrors each one to `tracing` at trace level.
#[derive(Debug, Default, Clone)]
pub struct BattleLog {
    events: Vec<Event>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(|e| e.to_string()).collect()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Narrator for BattleLog {
    fn emit(&mut self, event: Event) {
        tracing::trace!(%event, "narration");
        self.events.push(event);
    }
}
