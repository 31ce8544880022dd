use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("unknown race: '{0}'")]
    UnknownRace(String),

    #[error("fighter {race} references unknown weapon '{id}'")]
    UnknownWeapon { race: String, id: String },

    #[error("fighter {race} references unknown armor '{id}'")]
    UnknownArmor { race: String, id: String },

    #[error("no built-in roster named '{0}'")]
    UnknownRoster(String),

    #[error("failed to parse roster: {0}")]
    Roster(#[from] serde_yaml::Error),

    #[error("failed to encode event: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
