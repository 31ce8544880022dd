use serde::Serialize;

use crate::combatant::Combatant;
use crate::narration::{Event, Narrator};
use crate::race::Race;

/// Rounds a duel may last before it is called a draw.
pub const DEFAULT_ROUND_CAP: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BattleOutcome {
    /// `None` means both were still standing when the round cap hit.
    pub winner: Option<Side>,
    pub rounds: u32,
}

impl BattleOutcome {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    pub fn winner_race(&self, first: &Combatant, second: &Combatant) -> Option<Race> {
        self.winner.map(|side| match side {
            Side::First => first.race(),
            Side::Second => second.race(),
        })
    }
}

/// Duel `first` against `second` until one falls or `round_cap` rounds pass.
///
/// `first` always strikes first in a round. A strike that kills ends the
/// duel on the spot, so the fallen side never answers. Neither combatant is
/// healed here; restoring health is the caller's job.
pub fn fight(
    first: &mut Combatant,
    second: &mut Combatant,
    round_cap: u32,
    narrator: &mut impl Narrator,
) -> BattleOutcome {
    narrator.emit(Event::BattleStart {
        first: first.race(),
        second: second.race(),
    });
    tracing::info!(first = %first.race(), second = %second.race(), "battle start");

    let mut rounds = 0u32;
    while first.is_alive() && second.is_alive() && rounds < round_cap {
        rounds += 1;
        narrator.emit(Event::Round { number: rounds });

        first.attack(second, narrator);
        if !second.is_alive() {
            break;
        }

        second.attack(first, narrator);
        if !first.is_alive() {
            break;
        }
    }

    let winner = match (first.is_alive(), second.is_alive()) {
        (true, false) => Some(Side::First),
        (false, true) => Some(Side::Second),
        // Both standing at the cap. Both down cannot happen since a dead
        // combatant never swings, but treat it as a draw as well.
        _ => None,
    };
    let outcome = BattleOutcome { winner, rounds };

    let winner_race = outcome.winner_race(first, second);
    narrator.emit(Event::BattleEnd {
        winner: winner_race,
        rounds,
    });
    match winner_race {
        Some(race) => tracing::info!(winner = %race, rounds, "battle end"),
        None => tracing::info!(rounds, "battle drawn at round cap"),
    }

    outcome
}
