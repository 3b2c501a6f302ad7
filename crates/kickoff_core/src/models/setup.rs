//! Match setup and pre-simulation validation.
//!
//! Validation runs before any tick: a half-built MatchState would break the
//! log and rating invariants the moment the first resolver touched it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Player, PlayerId, Team, TeamSide, LINEUP_SIZE, PLACEHOLDER_PLAYER_ID};
use crate::error::{MatchError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSetup {
    pub home: Team,
    pub away: Team,
    /// Every player referenced by either lineup (bench players may be included)
    pub roster: Vec<Player>,
    /// Whether ratings from this match should be persisted downstream
    #[serde(default)]
    pub competitive: bool,
}

impl MatchSetup {
    pub fn new(home: Team, away: Team, roster: Vec<Player>) -> Self {
        Self { home, away, roster, competitive: false }
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.home.id == self.away.id {
            return Err(MatchError::SameTeam(self.home.id));
        }

        let mut seen = HashSet::new();
        for p in &self.roster {
            if p.id == PLACEHOLDER_PLAYER_ID {
                return Err(MatchError::ReservedPlayerId(p.id));
            }
            if !seen.insert(p.id) {
                return Err(MatchError::DuplicatePlayer { player_id: p.id });
            }
            if p.strength == 0 || p.strength > 100 {
                return Err(MatchError::InvalidStrength { player_id: p.id, strength: p.strength });
            }
            if p.group != p.position.group() {
                return Err(MatchError::InvalidPosition(format!(
                    "{} listed as {:?} for player {}",
                    p.position, p.group, p.id
                )));
            }
        }

        let mut starters = HashSet::new();
        for side in [TeamSide::Home, TeamSide::Away] {
            let team = self.team(side);
            if team.lineup.len() != LINEUP_SIZE {
                return Err(MatchError::InvalidLineupSize {
                    side,
                    expected: LINEUP_SIZE,
                    found: team.lineup.len(),
                });
            }
            for player_id in team.starter_ids() {
                let player = self
                    .player(player_id)
                    .ok_or(MatchError::UnknownLineupPlayer { side, player_id })?;
                if player.team_id != team.id {
                    return Err(MatchError::TeamMismatch {
                        player_id,
                        expected: team.id,
                        found: player.team_id,
                    });
                }
                if !starters.insert(player_id) {
                    return Err(MatchError::DuplicatePlayer { player_id });
                }
            }
        }
        Ok(())
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    /// The 22 players on the pitch, home starters first, in lineup order.
    ///
    /// Call after `validate()`; unknown ids are skipped here.
    pub fn starters(&self) -> Vec<Player> {
        [TeamSide::Home, TeamSide::Away]
            .into_iter()
            .flat_map(|side| self.team(side).starter_ids().collect::<Vec<_>>())
            .filter_map(|id| self.player(id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::*;

    #[test]
    fn test_standard_setup_is_valid() {
        let setup = standard_setup();
        assert!(setup.validate().is_ok());
        assert_eq!(setup.starters().len(), 22);
    }

    #[test]
    fn test_short_lineup_rejected() {
        let mut setup = standard_setup();
        setup.away.lineup.pop();
        assert!(matches!(
            setup.validate(),
            Err(MatchError::InvalidLineupSize { side: TeamSide::Away, found: 10, .. })
        ));
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut setup = standard_setup();
        setup.home.lineup[3].player_id = 999;
        assert!(matches!(
            setup.validate(),
            Err(MatchError::UnknownLineupPlayer { player_id: 999, .. })
        ));
    }

    #[test]
    fn test_player_from_other_team_rejected() {
        let mut setup = standard_setup();
        let away_player = setup.away.lineup[5].player_id;
        setup.home.lineup[5].player_id = away_player;
        assert!(matches!(setup.validate(), Err(MatchError::TeamMismatch { .. })));
    }

    #[test]
    fn test_duplicate_roster_id_rejected() {
        let mut setup = standard_setup();
        let dup = setup.roster[0].clone();
        setup.roster.push(dup);
        assert!(matches!(setup.validate(), Err(MatchError::DuplicatePlayer { .. })));
    }

    #[test]
    fn test_keeperless_team_is_allowed() {
        let setup = setup_without_home_keeper();
        assert!(setup.validate().is_ok());
    }
}
