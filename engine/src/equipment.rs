use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}

/// One of the four fixed armor positions on a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSlot {
    Chest,
    Helmet,
    Leggings,
    Pants,
}

impl ArmorSlot {
    pub const ALL: [ArmorSlot; 4] = [
        ArmorSlot::Chest,
        ArmorSlot::Helmet,
        ArmorSlot::Leggings,
        ArmorSlot::Pants,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArmorSlot::Chest => "chest",
            ArmorSlot::Helmet => "helmet",
            ArmorSlot::Leggings => "leggings",
            ArmorSlot::Pants => "pants",
        }
    }

    fn index(self) -> usize {
        match self {
            ArmorSlot::Chest => 0,
            ArmorSlot::Helmet => 1,
            ArmorSlot::Leggings => 2,
            ArmorSlot::Pants => 3,
        }
    }
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit error: the caller decides whether an unknown slot matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSlot;

impl FromStr for ArmorSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chest" => Ok(ArmorSlot::Chest),
            "helmet" => Ok(ArmorSlot::Helmet),
            "leggings" => Ok(ArmorSlot::Leggings),
            "pants" => Ok(ArmorSlot::Pants),
            _ => Err(UnknownSlot),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub defense: u32,
    pub slot: ArmorSlot,
}

impl Armor {
    pub fn new(name: impl Into<String>, defense: u32, slot: ArmorSlot) -> Self {
        Self {
            name: name.into(),
            defense,
            slot,
        }
    }
}

/// Exactly four slots, each holding at most one piece.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorSet {
    slots: [Option<Armor>; 4],
}

impl ArmorSet {
    pub fn get(&self, slot: ArmorSlot) -> Option<&Armor> {
        self.slots[slot.index()].as_ref()
    }

    /// Overwrites whatever the slot held; returns the previous piece.
    pub fn set(&mut self, slot: ArmorSlot, armor: Armor) -> Option<Armor> {
        self.slots[slot.index()].replace(armor)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = (ArmorSlot, &Armor)> {
        ArmorSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|a| (slot, a)))
    }

    /// Saturates at `u32::MAX` rather than wrapping.
    pub fn total_defense(&self) -> u32 {
        self.iter_equipped()
            .fold(0u32, |total, (_, a)| total.saturating_add(a.defense))
    }
}
