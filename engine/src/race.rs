use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// Playable races. Races differ only in their stat row, never in behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Orc,
    Dwarf,
    Human,
    Elf,
}

/// Static stat row for a race. Only `strength` and `health` feed combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RaceStats {
    pub height: u32,
    pub weight: u32,
    pub strength: i32,
    pub health: i32,
    pub age: u32,
}

impl Race {
    pub const ALL: [Race; 4] = [Race::Orc, Race::Dwarf, Race::Human, Race::Elf];

    pub fn stats(self) -> RaceStats {
        match self {
            Race::Orc => RaceStats {
                height: 210,
                weight: 120,
                strength: 18,
                health: 100,
                age: 35,
            },
            Race::Dwarf => RaceStats {
                height: 140,
                weight: 80,
                strength: 16,
                health: 90,
                age: 150,
            },
            Race::Human => RaceStats {
                height: 180,
                weight: 85,
                strength: 15,
                health: 85,
                age: 30,
            },
            Race::Elf => RaceStats {
                height: 190,
                weight: 75,
                strength: 14,
                health: 80,
                age: 200,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Race::Orc => "Orc",
            Race::Dwarf => "Dwarf",
            Race::Human => "Human",
            Race::Elf => "Elf",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Race {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "orc" => Ok(Race::Orc),
            "dwarf" => Ok(Race::Dwarf),
            "human" => Ok(Race::Human),
            "elf" => Ok(Race::Elf),
            _ => Err(ArenaError::UnknownRace(s.to_string())),
        }
    }
}
