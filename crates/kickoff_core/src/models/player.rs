use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchError;

pub type PlayerId = u32;

/// Reserved for the synthetic placeholder returned by exhausted selection fallbacks.
pub const PLACEHOLDER_PLAYER_ID: PlayerId = 0;

/// Player data for the match engine.
///
/// Immutable for the whole match; everything that changes during play
/// (ratings, counters, possession) lives in `MatchState`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub group: PositionGroup,
    /// Ability score, 1..=100
    pub strength: u8,
    pub team_id: u32,
}

impl Player {
    pub fn new(
        id: PlayerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: Position,
        strength: u8,
        team_id: u32,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            position,
            group: position.group(),
            strength,
            team_id,
        }
    }

    /// Stand-in used when every selection fallback comes up empty.
    pub fn placeholder(team_id: u32) -> Self {
        Self {
            id: PLACEHOLDER_PLAYER_ID,
            first_name: String::new(),
            last_name: "Unknown Opponent".to_string(),
            position: Position::DF,
            group: PositionGroup::Defense,
            strength: 50,
            team_id,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_PLAYER_ID
    }

    pub fn display_name(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.group == PositionGroup::Goalkeeper
    }
}

/// Coarse role classification used by the zone model and action tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionGroup {
    Goalkeeper,
    Defense,
    Midfield,
    Attack,
}

impl PositionGroup {
    /// Build-up order: keeper < defense < midfield < attack.
    pub fn line_index(self) -> i8 {
        match self {
            PositionGroup::Goalkeeper => 0,
            PositionGroup::Defense => 1,
            PositionGroup::Midfield => 2,
            PositionGroup::Attack => 3,
        }
    }

    /// Coarse marking mirror: attack faces defense, midfield faces midfield.
    pub fn mirror(self) -> PositionGroup {
        match self {
            PositionGroup::Goalkeeper => PositionGroup::Attack,
            PositionGroup::Defense => PositionGroup::Attack,
            PositionGroup::Midfield => PositionGroup::Midfield,
            PositionGroup::Attack => PositionGroup::Defense,
        }
    }
}

/// Detailed position code.
///
/// Codes arriving from rosters may carry a numeric suffix to tell duplicate
/// roles apart (`CB1`, `CB2`); parsing strips it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    GK,
    LB,
    CB,
    RB,
    LWB,
    RWB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    CF,
    ST,
    // Generic positions
    DF,
    MF,
    FW,
}

impl Position {
    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::RB => "RB",
            Position::LWB => "LWB",
            Position::RWB => "RWB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LM => "LM",
            Position::RM => "RM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::CF => "CF",
            Position::ST => "ST",
            Position::DF => "DF",
            Position::MF => "MF",
            Position::FW => "FW",
        }
    }

    pub fn group(&self) -> PositionGroup {
        match self {
            Position::GK => PositionGroup::Goalkeeper,
            Position::LB
            | Position::CB
            | Position::RB
            | Position::LWB
            | Position::RWB
            | Position::DF => PositionGroup::Defense,
            Position::CDM
            | Position::CM
            | Position::CAM
            | Position::LM
            | Position::RM
            | Position::MF => PositionGroup::Midfield,
            Position::LW | Position::RW | Position::CF | Position::ST | Position::FW => {
                PositionGroup::Attack
            }
        }
    }

    /// Flank roles: the natural crossers and cross targets on the outside.
    pub fn is_wide(&self) -> bool {
        matches!(
            self,
            Position::LB
                | Position::RB
                | Position::LWB
                | Position::RWB
                | Position::LM
                | Position::RM
                | Position::LW
                | Position::RW
        )
    }

    /// Direct marking roles on the other team (1..=3 entries).
    pub fn direct_markers(&self) -> &'static [Position] {
        match self {
            Position::ST | Position::CF | Position::FW => &[Position::CB, Position::DF],
            Position::LW => &[Position::RB, Position::RWB],
            Position::RW => &[Position::LB, Position::LWB],
            Position::CAM => &[Position::CDM, Position::CM],
            Position::CM | Position::MF => &[Position::CM, Position::CDM, Position::CAM],
            Position::CDM => &[Position::CAM, Position::CM],
            Position::LM => &[Position::RM, Position::RB],
            Position::RM => &[Position::LM, Position::LB],
            Position::LB | Position::LWB => &[Position::RW, Position::RM],
            Position::RB | Position::RWB => &[Position::LW, Position::LM],
            Position::CB | Position::DF => &[Position::ST, Position::CF, Position::FW],
            Position::GK => &[Position::ST, Position::CF],
        }
    }
}

impl FromStr for Position {
    type Err = MatchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw.trim().trim_end_matches(|c: char| c.is_ascii_digit()).to_ascii_uppercase();
        let position = match code.as_str() {
            "GK" => Position::GK,
            "LB" => Position::LB,
            "CB" => Position::CB,
            "RB" => Position::RB,
            "LWB" => Position::LWB,
            "RWB" => Position::RWB,
            "CDM" | "DM" => Position::CDM,
            "CM" => Position::CM,
            "CAM" | "AM" => Position::CAM,
            "LM" => Position::LM,
            "RM" => Position::RM,
            "LW" => Position::LW,
            "RW" => Position::RW,
            "CF" => Position::CF,
            "ST" => Position::ST,
            "DF" => Position::DF,
            "MF" => Position::MF,
            "FW" => Position::FW,
            _ => return Err(MatchError::InvalidPosition(raw.to_string())),
        };
        Ok(position)
    }
}

impl TryFrom<String> for Position {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.code().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
