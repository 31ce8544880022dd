use std::fmt;

use serde::Serialize;

use crate::equipment::{Armor, ArmorSet, ArmorSlot, Weapon};
use crate::narration::{Event, Narrator};
use crate::race::{Race, RaceStats};

/// Damage contributed by bare hands when no weapon is equipped.
pub const UNARMED_DAMAGE: u32 = 5;
/// Every landed strike deals at least this much, whatever the armor.
pub const MIN_DAMAGE: i32 = 1;

/// Result of a single strike that actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub damage: i32,
    pub killed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Combatant {
    race: Race,
    stats: RaceStats,
    health: i32,
    alive: bool,
    weapon: Option<Weapon>,
    armor: ArmorSet,
}

impl Combatant {
    pub fn new(race: Race) -> Self {
        let stats = race.stats();
        Self {
            race,
            stats,
            health: stats.health,
            alive: true,
            weapon: None,
            armor: ArmorSet::default(),
        }
    }

    /// Builds a combatant from a race identifier such as `"orc"`.
    pub fn from_race_name(name: &str) -> crate::Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn stats(&self) -> RaceStats {
        self.stats
    }

    pub fn strength(&self) -> i32 {
        self.stats.strength
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.stats.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn armor(&self) -> &ArmorSet {
        &self.armor
    }

    pub fn equip_weapon(&mut self, weapon: Weapon) {
        tracing::debug!(race = %self.race, weapon = %weapon.name, "equip weapon");
        self.weapon = Some(weapon);
    }

    pub fn equip_armor(&mut self, slot: ArmorSlot, armor: Armor) {
        tracing::debug!(race = %self.race, %slot, armor = %armor.name, "equip armor");
        self.armor.set(slot, armor);
    }

    /// String-keyed equip. Unrecognized slot names are ignored, not rejected.
    pub fn equip_armor_named(&mut self, slot: &str, armor: Armor) {
        match slot.parse::<ArmorSlot>() {
            Ok(slot) => self.equip_armor(slot, armor),
            Err(_) => {
                tracing::debug!(race = %self.race, slot, "ignoring unknown armor slot");
            }
        }
    }

    pub fn total_armor(&self) -> u32 {
        self.armor.total_defense()
    }

    /// Strength plus weapon damage, before the target's armor. Widened to
    /// `i64` so no stat combination can overflow.
    pub fn base_damage(&self) -> i64 {
        let weapon = self.weapon.as_ref().map_or(UNARMED_DAMAGE, |w| w.damage);
        i64::from(self.stats.strength) + i64::from(weapon)
    }

    /// What a strike from `self` would take off `target` right now.
    pub fn damage_against(&self, target: &Combatant) -> i32 {
        let raw = self.base_damage() - i64::from(target.total_armor());
        i32::try_from(raw.max(i64::from(MIN_DAMAGE))).unwrap_or(i32::MAX)
    }

    /// Strike `target` once. Returns `None` without emitting anything when
    /// either side is already down.
    pub fn attack(&self, target: &mut Combatant, narrator: &mut impl Narrator) -> Option<Strike> {
        if !self.alive || !target.alive {
            return None;
        }

        let damage = self.damage_against(target);
        let killed = target.take_damage(damage);
        tracing::debug!(
            attacker = %self.race,
            target = %target.race,
            damage,
            hp = target.health,
            "strike"
        );

        narrator.emit(Event::Attack {
            attacker: self.race,
            target: target.race,
            damage,
            target_health: target.health,
            target_max_health: target.max_health(),
        });
        if killed {
            narrator.emit(Event::Death { race: target.race });
        }

        Some(Strike { damage, killed })
    }

    /// Returns true if this hit dropped the combatant to 0.
    fn take_damage(&mut self, amount: i32) -> bool {
        self.health = (self.health - amount).clamp(0, self.max_health());
        if self.health == 0 && self.alive {
            self.alive = false;
            return true;
        }
        false
    }

    /// Full heal and revive. Safe to call at any time.
    pub fn restore_health(&mut self) {
        self.health = self.max_health();
        self.alive = true;
    }

    pub fn status(&self) -> String {
        format!("{} [{}/{} HP]", self.race, self.health, self.max_health())
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status())
    }
}
