use std::collections::HashMap;

use crate::error::{ArenaError, Result};
use crate::roster::Roster;

pub const CLASSIC_ROSTER: &str = "classic";

pub fn builtin_rosters() -> HashMap<&'static str, &'static str> {
    HashMap::from([(
        CLASSIC_ROSTER,
        include_str!("../content/rosters/classic.yaml"),
    )])
}

pub fn builtin_roster(id: &str) -> Result<Roster> {
    let text = builtin_rosters()
        .get(id)
        .copied()
        .ok_or_else(|| ArenaError::UnknownRoster(id.to_string()))?;
    Roster::from_yaml(text)
}

pub fn classic_roster() -> Result<Roster> {
    builtin_roster(CLASSIC_ROSTER)
}
