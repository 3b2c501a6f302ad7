//! Match Result Data Structures
//!
//! What a finished match hands to the outside world: score, ordered log,
//! ratings and stat records. Plain serde values, nothing engine-internal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::events::MatchEvent;
use super::match_state::{MatchState, PlayerStats};
use crate::error::Result;
use crate::models::{PlayerId, Team};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub score_home: u8,
    pub score_away: u8,
    pub events: Vec<MatchEvent>,
    /// Final ratings on the 1.00-10.00 scale
    pub ratings: BTreeMap<PlayerId, f32>,
    pub stats: BTreeMap<PlayerId, PlayerStats>,
    /// Whether downstream storage should keep these ratings
    pub persist_ratings: bool,
    pub seed: u64,
    pub minutes_played: u8,
}

/// Per-team sums derived from the player stat records.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamTotals {
    pub goals: u32,
    pub shots: u32,
    pub shots_on_target: u32,
    pub passes: u32,
    pub passes_completed: u32,
    pub fouls: u32,
    pub saves: u32,
}

impl MatchResult {
    pub fn from_state(state: &MatchState, seed: u64) -> Self {
        Self {
            score_home: state.score_home,
            score_away: state.score_away,
            events: state.log.clone(),
            ratings: state.ratings.iter().map(|(id, r)| (*id, r.as_f32())).collect(),
            stats: state.stats.clone(),
            persist_ratings: state.competitive,
            seed,
            minutes_played: state.minute,
        }
    }

    pub fn team_totals(&self, team: &Team) -> TeamTotals {
        team.starter_ids()
            .filter_map(|id| self.stats.get(&id))
            .fold(TeamTotals::default(), |mut t, s| {
                t.goals += s.goals as u32;
                t.shots += s.shots as u32;
                t.shots_on_target += s.shots_on_target as u32;
                t.passes += s.passes as u32;
                t.passes_completed += s.passes_completed as u32;
                t.fouls += s.fouls_committed as u32;
                t.saves += s.saves as u32;
                t
            })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::*;

    #[test]
    fn test_totals_sum_one_side_only() {
        let mut state = kickoff_state();
        state.record(HOME_ST, |s| {
            s.shots = 3;
            s.goals = 1;
        });
        state.record(HOME_CM, |s| s.shots = 2);
        state.record(AWAY_ST, |s| s.shots = 7);
        let setup = standard_setup();
        let result = MatchResult::from_state(&state, 1);

        let home = result.team_totals(&setup.home);
        assert_eq!(home.shots, 5);
        assert_eq!(home.goals, 1);
        assert_eq!(result.team_totals(&setup.away).shots, 7);
    }

    #[test]
    fn test_ratings_are_on_display_scale() {
        let state = kickoff_state();
        let result = MatchResult::from_state(&state, 9);
        assert!(result.ratings.values().all(|r| (*r - 6.0).abs() < 1e-6));
        assert_eq!(result.seed, 9);
        assert!(!result.persist_ratings);
    }
}
