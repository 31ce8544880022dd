use serde::{Deserialize, Serialize};

use crate::battle::{self, BattleOutcome, DEFAULT_ROUND_CAP};
use crate::combatant::Combatant;
use crate::narration::Narrator;
use crate::tournament::{self, SequenceReport, Tally};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ArenaConfig {
    #[serde(default = "default_round_cap")]
    pub round_cap: u32,
}

fn default_round_cap() -> u32 {
    DEFAULT_ROUND_CAP
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            round_cap: DEFAULT_ROUND_CAP,
        }
    }
}

/// Orchestration context: settings plus the narration sink every battle writes to.
#[derive(Debug)]
pub struct Arena<N: Narrator> {
    config: ArenaConfig,
    narrator: N,
}

impl<N: Narrator> Arena<N> {
    pub fn new(config: ArenaConfig, narrator: N) -> Self {
        Self { config, narrator }
    }

    pub fn config(&self) -> ArenaConfig {
        self.config
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    pub fn into_narrator(self) -> N {
        self.narrator
    }

    pub fn fight(&mut self, first: &mut Combatant, second: &mut Combatant) -> BattleOutcome {
        battle::fight(first, second, self.config.round_cap, &mut self.narrator)
    }

    pub fn round_robin(&mut self, fighters: &mut [Combatant]) -> Tally {
        tournament::round_robin(fighters, self.config.round_cap, &mut self.narrator)
    }

    pub fn sequential_elimination(&mut self, fighters: &mut [Combatant]) -> SequenceReport {
        tournament::sequential_elimination(fighters, self.config.round_cap, &mut self.narrator)
    }
}
