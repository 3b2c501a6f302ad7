use thiserror::Error;

use crate::models::{PlayerId, TeamSide};

/// Pre-simulation failures. Nothing here can happen once the first tick runs.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid lineup size for {side:?}: expected {expected}, found {found}")]
    InvalidLineupSize { side: TeamSide, expected: usize, found: usize },

    #[error("Lineup of {side:?} references unknown player {player_id}")]
    UnknownLineupPlayer { side: TeamSide, player_id: PlayerId },

    #[error("Player {player_id} appears more than once")]
    DuplicatePlayer { player_id: PlayerId },

    #[error("Player {player_id} belongs to team {found}, expected team {expected}")]
    TeamMismatch { player_id: PlayerId, expected: u32, found: u32 },

    #[error("Invalid player position: {0}")]
    InvalidPosition(String),

    #[error("Player id {0} is reserved")]
    ReservedPlayerId(PlayerId),

    #[error("Player {player_id} has strength {strength}, expected 1..=100")]
    InvalidStrength { player_id: PlayerId, strength: u8 },

    #[error("Home and away teams share id {0}")]
    SameTeam(u32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(u8),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl MatchError {
    /// Input problems the caller can fix by resubmitting a corrected request.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, MatchError::Serialization(_))
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            MatchError::Deserialization(err.to_string())
        } else {
            MatchError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
