use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::tactics::TeamTactics;

pub const LINEUP_SIZE: usize = 11;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    pub fn is_home(self) -> bool {
        self == TeamSide::Home
    }
}

/// One starter bound to a formation slot (e.g. `"CB2"` -> player 14).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineupSlot {
    pub slot: String,
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: u32,
    pub name: String,
    /// Exactly 11 starters, in formation order
    pub lineup: Vec<LineupSlot>,
    #[serde(default)]
    pub tactics: TeamTactics,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>, lineup: Vec<LineupSlot>) -> Self {
        Self { id, name: name.into(), lineup, tactics: TeamTactics::default() }
    }

    pub fn with_tactics(mut self, tactics: TeamTactics) -> Self {
        self.tactics = tactics;
        self
    }

    pub fn starter_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.lineup.iter().map(|s| s.player_id)
    }

    pub fn has_starter(&self, id: PlayerId) -> bool {
        self.lineup.iter().any(|s| s.player_id == id)
    }
}
