//! Test Fixtures Module
//!
//! Shared builders for engine tests.
//!
//! ## Usage
//! ```rust,ignore
//! #[cfg(test)]
//! use crate::engine::test_fixtures::*;
//! ```
//!
//! Both teams line up 4-4-2. Home ids run 1..=11, away ids 12..=22, in the
//! order GK, LB, CB, CB, RB, LM, CM, CM, RM, ST, ST.

use std::sync::Arc;

use super::config::EngineConfig;
use super::driver::initial_state;
use super::match_state::{BallContext, MatchState};
use super::zone::Depth;
use crate::models::{LineupSlot, MatchSetup, Player, PlayerId, Position, Team, TeamSide};

pub const HOME_TEAM_ID: u32 = 1;
pub const AWAY_TEAM_ID: u32 = 2;

pub const HOME_GK: PlayerId = 1;
pub const HOME_LB: PlayerId = 2;
pub const HOME_CB: PlayerId = 3;
pub const HOME_RB: PlayerId = 5;
pub const HOME_LM: PlayerId = 6;
pub const HOME_CM: PlayerId = 7;
pub const HOME_RM: PlayerId = 9;
pub const HOME_ST: PlayerId = 10;

pub const AWAY_GK: PlayerId = 12;
pub const AWAY_CB: PlayerId = 14;
pub const AWAY_CM: PlayerId = 18;
pub const AWAY_ST: PlayerId = 21;

// =============================================================================
// Setup builders
// =============================================================================

pub fn standard_442_positions() -> [Position; 11] {
    [
        Position::GK,
        Position::LB,
        Position::CB,
        Position::CB,
        Position::RB,
        Position::LM,
        Position::CM,
        Position::CM,
        Position::RM,
        Position::ST,
        Position::ST,
    ]
}

fn build_side(
    team_id: u32,
    name: &str,
    first_id: PlayerId,
    positions: &[Position],
    strength: u8,
) -> (Team, Vec<Player>) {
    let players: Vec<Player> = positions
        .iter()
        .enumerate()
        .map(|(i, &pos)| {
            Player::new(first_id + i as PlayerId, name, format!("Player {}", i + 1), pos, strength, team_id)
        })
        .collect();
    let lineup = players
        .iter()
        .enumerate()
        .map(|(i, p)| LineupSlot { slot: format!("{}{}", p.position, i + 1), player_id: p.id })
        .collect();
    (Team::new(team_id, name, lineup), players)
}

pub fn setup_with(home_positions: &[Position], away_positions: &[Position], strength: u8) -> MatchSetup {
    let (home, mut roster) = build_side(HOME_TEAM_ID, "Home", 1, home_positions, strength);
    let (away, away_players) = build_side(AWAY_TEAM_ID, "Away", 12, away_positions, strength);
    roster.extend(away_players);
    MatchSetup::new(home, away, roster)
}

/// Two 4-4-2 sides, every player at strength 70.
pub fn standard_setup() -> MatchSetup {
    setup_with(&standard_442_positions(), &standard_442_positions(), 70)
}

/// Home side fields a centre-back in goal.
pub fn setup_without_home_keeper() -> MatchSetup {
    let mut home = standard_442_positions();
    home[0] = Position::CB;
    setup_with(&home, &standard_442_positions(), 70)
}

// =============================================================================
// State builders
// =============================================================================

pub fn state_from(setup: &MatchSetup) -> MatchState {
    initial_state(setup, &EngineConfig::test(), TeamSide::Home)
}

/// Minute 0, home kicking off.
pub fn kickoff_state() -> MatchState {
    state_from(&standard_setup())
}

/// Open play with `carrier` of `side` on the ball in `depth`.
pub fn open_play_state(side: TeamSide, carrier: PlayerId, depth: Depth) -> MatchState {
    let mut state = kickoff_state();
    state.minute = 10;
    state.give_ball(side, carrier, depth, BallContext::open_play());
    state
}

pub fn state_with_away_positions(positions: &[Position]) -> MatchState {
    state_from(&setup_with(&standard_442_positions(), positions, 70))
}

pub fn setup_state_without_home_keeper() -> MatchState {
    state_from(&setup_without_home_keeper())
}

/// Away team has nobody on the pitch (exercises the placeholder fallbacks).
pub fn state_with_empty_away() -> MatchState {
    let mut state = kickoff_state();
    let home: Vec<Player> =
        state.players.iter().filter(|p| p.team_id == HOME_TEAM_ID).cloned().collect();
    state.players = Arc::new(home);
    state
}
