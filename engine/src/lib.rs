//! Deterministic arena combat: race-based combatants, single duels,
//! round-robin tournaments and king-of-the-hill sequences.

pub mod arena;
pub mod battle;
pub mod combatant;
pub mod content;
pub mod equipment;
pub mod error;
pub mod narration;
pub mod race;
pub mod roster;
pub mod tournament;

pub use arena::{Arena, ArenaConfig};
pub use battle::{fight, BattleOutcome, Side, DEFAULT_ROUND_CAP};
pub use combatant::{Combatant, Strike, MIN_DAMAGE, UNARMED_DAMAGE};
pub use equipment::{Armor, ArmorSet, ArmorSlot, Weapon};
pub use error::{ArenaError, Result};
pub use narration::{BattleLog, Event, Format, Narrator, Silent};
pub use race::{Race, RaceStats};
pub use roster::{FighterSpec, Roster};
pub use tournament::{round_robin, sequential_elimination, SequenceReport, Tally};
