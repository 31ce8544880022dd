use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::arena::ArenaConfig;
use crate::combatant::Combatant;
use crate::equipment::{Armor, Weapon};
use crate::error::{ArenaError, Result};
use crate::race::Race;

/// One fighter's starting kit, referencing catalog ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FighterSpec {
    pub race: String,
    #[serde(default)]
    pub weapon: Option<String>,
    /// Slot name -> armor id. Slot names are not validated here.
    #[serde(default)]
    pub armor: IndexMap<String, String>,
}

/// A full scenario: the equipment catalog plus the ordered fighter list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Roster {
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub weapons: IndexMap<String, Weapon>,
    #[serde(default)]
    pub armor: IndexMap<String, Armor>,
    #[serde(default)]
    pub fighters: Vec<FighterSpec>,
}

impl Roster {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Construct and equip every fighter, in roster order.
    pub fn build(&self) -> Result<Vec<Combatant>> {
        self.fighters.iter().map(|f| self.build_fighter(f)).collect()
    }

    fn build_fighter(&self, spec: &FighterSpec) -> Result<Combatant> {
        let race: Race = spec.race.parse()?;
        let mut fighter = Combatant::new(race);

        if let Some(id) = &spec.weapon {
            let weapon = self
                .weapons
                .get(id)
                .cloned()
                .ok_or_else(|| ArenaError::UnknownWeapon {
                    race: spec.race.clone(),
                    id: id.clone(),
                })?;
            fighter.equip_weapon(weapon);
        }

        for (slot, id) in &spec.armor {
            let armor = self
                .armor
                .get(id)
                .cloned()
                .ok_or_else(|| ArenaError::UnknownArmor {
                    race: spec.race.clone(),
                    id: id.clone(),
                })?;
            fighter.equip_armor_named(slot, armor);
        }

        Ok(fighter)
    }
}
