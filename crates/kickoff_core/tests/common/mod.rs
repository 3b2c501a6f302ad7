//! Setup builders shared by the integration tests.

#![allow(dead_code)]

use kickoff_core::{LineupSlot, MatchSetup, Player, PlayerId, Position, Team};

pub const HOME_ST: PlayerId = 10;

pub fn positions_442() -> Vec<Position> {
    use Position::*;
    vec![GK, LB, CB, CB, RB, LM, CM, CM, RM, ST, ST]
}

fn side(team_id: u32, name: &str, first_id: PlayerId, positions: &[Position], strength: u8) -> (Team, Vec<Player>) {
    let players: Vec<Player> = positions
        .iter()
        .enumerate()
        .map(|(i, &pos)| Player::new(first_id + i as PlayerId, name, format!("No.{}", i + 1), pos, strength, team_id))
        .collect();
    let lineup = players
        .iter()
        .enumerate()
        .map(|(i, p)| LineupSlot { slot: format!("{}{}", p.position, i + 1), player_id: p.id })
        .collect();
    (Team::new(team_id, name, lineup), players)
}

pub fn setup(home: &[Position], away: &[Position], strength: u8) -> MatchSetup {
    let (home_team, mut roster) = side(1, "Rovers", 1, home, strength);
    let (away_team, away_players) = side(2, "United", 12, away, strength);
    roster.extend(away_players);
    MatchSetup::new(home_team, away_team, roster)
}

pub fn equal_setup() -> MatchSetup {
    setup(&positions_442(), &positions_442(), 70)
}

/// Home fields a centre-back where the keeper would be.
pub fn keeperless_home_setup() -> MatchSetup {
    let mut home = positions_442();
    home[0] = Position::CB;
    setup(&home, &positions_442(), 70)
}
