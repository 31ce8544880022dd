use indexmap::IndexMap;
use serde::Serialize;

use crate::battle::{fight, Side};
use crate::combatant::Combatant;
use crate::narration::{Event, Format, Narrator};
use crate::race::Race;

/// Win counts per race, in order of each race's first win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    wins: IndexMap<Race, u32>,
    draws: u32,
    battles: u32,
}

impl Tally {
    pub fn record_win(&mut self, race: Race) {
        *self.wins.entry(race).or_insert(0) += 1;
        self.battles += 1;
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
        self.battles += 1;
    }

    pub fn wins(&self, race: Race) -> u32 {
        self.wins.get(&race).copied().unwrap_or(0)
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn battles(&self) -> u32 {
        self.battles
    }

    pub fn iter(&self) -> impl Iterator<Item = (Race, u32)> + '_ {
        self.wins.iter().map(|(race, wins)| (*race, *wins))
    }
}

/// Every unordered pair fights once, `(i, j)` with `i < j`, in ascending order.
/// Both fighters are restored before each of their battles.
pub fn round_robin(
    fighters: &mut [Combatant],
    round_cap: u32,
    narrator: &mut impl Narrator,
) -> Tally {
    narrator.emit(Event::TournamentStart {
        format: Format::RoundRobin,
    });
    tracing::info!(fighters = fighters.len(), "round-robin start");

    let mut tally = Tally::default();
    for i in 0..fighters.len() {
        for j in (i + 1)..fighters.len() {
            let (head, tail) = fighters.split_at_mut(j);
            let first = &mut head[i];
            let second = &mut tail[0];

            first.restore_health();
            second.restore_health();

            let outcome = fight(first, second, round_cap, narrator);
            match outcome.winner_race(first, second) {
                Some(race) => tally.record_win(race),
                None => tally.record_draw(),
            }
        }
    }

    narrator.emit(Event::ResultsHeader);
    for (race, wins) in tally.iter() {
        narrator.emit(Event::TallyLine { race, wins });
    }
    tracing::info!(battles = tally.battles(), draws = tally.draws(), "round-robin done");

    tally
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceReport {
    /// Index of the last champion if still standing, `None` if the sequence halted.
    pub champion: Option<usize>,
    pub battles: u32,
}

/// King of the hill. The first fighter holds the hill and takes on each
/// following fighter in list order. Only the challenger is restored before a
/// battle, so the champion carries its wounds forward. A challenger who wins
/// takes over the hill. If the champion is found fallen before a battle the
/// whole sequence stops.
pub fn sequential_elimination(
    fighters: &mut [Combatant],
    round_cap: u32,
    narrator: &mut impl Narrator,
) -> SequenceReport {
    narrator.emit(Event::TournamentStart {
        format: Format::Sequential,
    });

    let mut report = SequenceReport {
        champion: None,
        battles: 0,
    };
    if fighters.is_empty() {
        return report;
    }

    let mut champion = 0usize;
    for challenger in 1..fighters.len() {
        if !fighters[champion].is_alive() {
            narrator.emit(Event::SequenceHalted);
            tracing::info!(battles = report.battles, "sequence halted");
            return report;
        }

        let (head, tail) = fighters.split_at_mut(challenger);
        let holder = &mut head[champion];
        let next = &mut tail[0];
        next.restore_health();

        let outcome = fight(holder, next, round_cap, narrator);
        report.battles += 1;

        if outcome.winner == Some(Side::Second) {
            champion = challenger;
            narrator.emit(Event::NewChampion { race: next.race() });
        } else {
            narrator.emit(Event::ChampionHolds {
                race: holder.race(),
            });
        }
    }

    if fighters[champion].is_alive() {
        narrator.emit(Event::FinalChampion {
            race: fighters[champion].race(),
        });
        report.champion = Some(champion);
    } else {
        narrator.emit(Event::SequenceHalted);
    }
    tracing::info!(battles = report.battles, champion = ?report.champion, "sequence done");

    report
}
