//! Zone & Possession Model
//!
//! The pitch is three bands deep. A `Zone` names a band from one team's
//! point of view: `(Home, Defense)` is the home penalty-area third, which is
//! the same grass as `(Away, Attack)`. The ball's zone is always stored from
//! the possessing team's perspective, so a turnover is a `mirror()`.

use serde::{Deserialize, Serialize};

use crate::models::{Player, PositionGroup, TeamSide};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    Defense,
    Midfield,
    Attack,
}

impl Depth {
    pub fn index(self) -> u8 {
        match self {
            Depth::Defense => 0,
            Depth::Midfield => 1,
            Depth::Attack => 2,
        }
    }

    pub fn from_index(idx: u8) -> Depth {
        match idx {
            0 => Depth::Defense,
            1 => Depth::Midfield,
            _ => Depth::Attack,
        }
    }

    /// Depth reflected through the halfway line.
    pub fn reflect(self) -> Depth {
        Depth::from_index(2 - self.index())
    }

    /// Where a position group naturally operates.
    pub fn of_group(group: PositionGroup) -> Depth {
        match group {
            PositionGroup::Goalkeeper | PositionGroup::Defense => Depth::Defense,
            PositionGroup::Midfield => Depth::Midfield,
            PositionGroup::Attack => Depth::Attack,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Zone {
    pub side: TeamSide,
    pub depth: Depth,
}

impl Zone {
    pub fn new(side: TeamSide, depth: Depth) -> Self {
        Self { side, depth }
    }

    /// One band forward, clamped at the attacking third.
    pub fn next(self) -> Zone {
        Zone::new(self.side, Depth::from_index((self.depth.index() + 1).min(2)))
    }

    /// One band back, clamped at the defensive third.
    pub fn previous(self) -> Zone {
        Zone::new(self.side, Depth::from_index(self.depth.index().saturating_sub(1)))
    }

    pub fn advance(self, steps: u8) -> Zone {
        (0..steps).fold(self, |z, _| z.next())
    }

    /// Same grass, seen by the other team.
    pub fn mirror(self) -> Zone {
        Zone::new(self.side.opponent(), self.depth.reflect())
    }

    /// Re-express this zone from `side`'s perspective.
    pub fn seen_by(self, side: TeamSide) -> Zone {
        if self.side == side {
            self
        } else {
            self.mirror()
        }
    }

    pub fn is_final_third(self) -> bool {
        self.depth == Depth::Attack
    }

    /// Absolute band index measured from the home goal line (0..=2).
    pub fn absolute_index(self) -> u8 {
        match self.side {
            TeamSide::Home => self.depth.index(),
            TeamSide::Away => 2 - self.depth.index(),
        }
    }
}

/// Players whose position group maps onto `depth`.
pub fn players_in<'a, I>(players: I, depth: Depth) -> Vec<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    players.into_iter().filter(|p| Depth::of_group(p.group) == depth).collect()
}
