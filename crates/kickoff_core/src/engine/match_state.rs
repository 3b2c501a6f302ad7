//! Match state records.
//!
//! `MatchState` is a value: resolvers clone it, change the clone and hand
//! it back. The roster and teams sit behind `Arc` so a clone per tick only
//! copies the parts that actually change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::events::MatchEvent;
use super::zone::{Depth, Zone};
use crate::models::{Player, PlayerId, PositionGroup, Team, TeamSide};

/// Longest possession sequence remembered for rotation / bounce checks.
const SEQUENCE_CAP: usize = 6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextKind {
    #[default]
    Kickoff,
    OpenPlay,
    FreeKick,
    Rebound,
}

/// Phase-of-play metadata carried on the ball.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BallContext {
    pub kind: ContextKind,
    /// Last teammate to feed the carrier; credited if the move ends in a goal
    pub potential_assist: Option<PlayerId>,
    /// A prior action made a shot the priority
    pub must_shoot: bool,
    /// The carrier is receiving in the air (after a cross)
    pub aerial: bool,
    /// Defender just beaten in this possession; may not re-contest
    pub beaten: Option<PlayerId>,
    /// Where the foul happened, from the fouled team's perspective
    pub foul_zone: Option<Zone>,
    /// Carriers in the current move, oldest first
    pub sequence: Vec<PlayerId>,
}

impl BallContext {
    pub fn kickoff() -> Self {
        Self { kind: ContextKind::Kickoff, ..Default::default() }
    }

    pub fn open_play() -> Self {
        Self { kind: ContextKind::OpenPlay, ..Default::default() }
    }

    pub fn free_kick(zone: Zone) -> Self {
        Self { kind: ContextKind::FreeKick, foul_zone: Some(zone), ..Default::default() }
    }

    pub fn rebound() -> Self {
        Self { kind: ContextKind::Rebound, ..Default::default() }
    }

    /// Player who passed to the current carrier, if the move has one.
    pub fn previous_carrier(&self) -> Option<PlayerId> {
        self.sequence.iter().rev().nth(1).copied()
    }

    /// Touches `id` has had in the current move.
    pub fn touches_in_move(&self, id: PlayerId) -> usize {
        self.sequence.iter().filter(|&&p| p == id).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BallState {
    pub possession: TeamSide,
    /// `None` only while a rebound is being contested
    pub carrier: Option<PlayerId>,
    /// Always expressed from the possessing team's perspective
    pub zone: Zone,
    pub context: BallContext,
}

/// Fixed-point rating in hundredths (600 = 6.00).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Rating(pub i16);

impl Rating {
    pub fn as_f32(self) -> f32 {
        self.0 as f32 / 100.0
    }
}

/// Cumulative per-player counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlayerStats {
    pub touches: u16,
    pub passes: u16,
    pub passes_completed: u16,
    pub shots: u16,
    pub shots_on_target: u16,
    pub goals: u16,
    pub assists: u16,
    pub dribbles: u16,
    pub dribbles_succeeded: u16,
    pub tackles: u16,
    pub tackles_succeeded: u16,
    pub crosses: u16,
    pub crosses_completed: u16,
    pub through_balls: u16,
    pub through_balls_completed: u16,
    pub saves: u16,
    pub fouls_committed: u16,
}

#[derive(Debug, Clone)]
pub struct MatchState {
    pub minute: u8,
    pub match_length: u8,
    pub home: Arc<Team>,
    pub away: Arc<Team>,
    /// The 22 players on the pitch
    pub players: Arc<Vec<Player>>,
    pub ball: BallState,
    pub score_home: u8,
    pub score_away: u8,
    pub ratings: BTreeMap<PlayerId, Rating>,
    pub stats: BTreeMap<PlayerId, PlayerStats>,
    pub log: Vec<MatchEvent>,
    pub competitive: bool,
    pub finished: bool,
}

impl MatchState {
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn side_of(&self, player: &Player) -> TeamSide {
        if player.team_id == self.home.id {
            TeamSide::Home
        } else {
            TeamSide::Away
        }
    }

    pub fn team_players(&self, side: TeamSide) -> impl Iterator<Item = &Player> + '_ {
        let team_id = self.team(side).id;
        self.players.iter().filter(move |p| p.team_id == team_id)
    }

    pub fn group_players(&self, side: TeamSide, group: PositionGroup) -> Vec<&Player> {
        self.team_players(side).filter(|p| p.group == group).collect()
    }

    pub fn goalkeeper(&self, side: TeamSide) -> Option<&Player> {
        self.team_players(side).find(|p| p.is_goalkeeper())
    }

    pub fn carrier(&self) -> Option<&Player> {
        self.ball.carrier.and_then(|id| self.player(id))
    }

    pub fn score(&self, side: TeamSide) -> u8 {
        match side {
            TeamSide::Home => self.score_home,
            TeamSide::Away => self.score_away,
        }
    }

    pub fn rating(&self, id: PlayerId) -> Option<Rating> {
        self.ratings.get(&id).copied()
    }

    pub fn player_stats(&self, id: PlayerId) -> Option<&PlayerStats> {
        self.stats.get(&id)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Hand the ball to `carrier` of `side`, placed in `depth` of that side.
    ///
    /// Keeps the move's carrier sequence when possession does not change.
    pub(crate) fn give_ball(
        &mut self,
        side: TeamSide,
        carrier: PlayerId,
        depth: Depth,
        mut context: BallContext,
    ) {
        let mut sequence = if side == self.ball.possession && context.kind == ContextKind::OpenPlay {
            std::mem::take(&mut self.ball.context.sequence)
        } else {
            Vec::new()
        };
        sequence.push(carrier);
        if sequence.len() > SEQUENCE_CAP {
            sequence.remove(0);
        }
        context.sequence = sequence;

        self.ball = BallState { possession: side, carrier: Some(carrier), zone: Zone::new(side, depth), context };
        if let Some(stats) = self.stats.get_mut(&carrier) {
            stats.touches += 1;
        }
    }

    /// Loose ball in `zone` of the attacking `side`; nobody has it.
    pub(crate) fn loose_ball(&mut self, side: TeamSide, depth: Depth) {
        self.ball = BallState {
            possession: side,
            carrier: None,
            zone: Zone::new(side, depth),
            context: BallContext::rebound(),
        };
    }

    /// Possession / carrier agreement (checked after every tick in debug builds).
    pub fn is_consistent(&self) -> bool {
        if self.ball.zone.side != self.ball.possession {
            return false;
        }
        match self.ball.carrier {
            None => self.ball.context.kind == ContextKind::Rebound,
            Some(id) => match self.player(id) {
                Some(p) => self.side_of(p) == self.ball.possession,
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::*;

    #[test]
    fn test_initial_state_is_consistent() {
        let state = kickoff_state();
        assert!(state.is_consistent());
        assert_eq!(state.ball.context.kind, ContextKind::Kickoff);
        assert_eq!(state.minute, 0);
        assert_eq!(state.ratings.len(), 22);
    }

    #[test]
    fn test_give_ball_tracks_sequence_within_possession() {
        let mut state = open_play_state(TeamSide::Home, 4, Depth::Midfield);
        state.give_ball(TeamSide::Home, 5, Depth::Midfield, BallContext::open_play());
        state.give_ball(TeamSide::Home, 6, Depth::Attack, BallContext::open_play());
        assert_eq!(state.ball.context.sequence, vec![4, 5, 6]);
        assert_eq!(state.ball.context.previous_carrier(), Some(5));

        state.give_ball(TeamSide::Away, 14, Depth::Defense, BallContext::open_play());
        assert_eq!(state.ball.context.sequence, vec![14]);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_loose_ball_only_in_rebound() {
        let mut state = open_play_state(TeamSide::Home, 4, Depth::Attack);
        state.loose_ball(TeamSide::Home, Depth::Attack);
        assert!(state.is_consistent());
        state.ball.context.kind = ContextKind::OpenPlay;
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_carrier_must_belong_to_possession() {
        let mut state = open_play_state(TeamSide::Home, 4, Depth::Midfield);
        state.ball.carrier = Some(15);
        assert!(!state.is_consistent());
    }
}
