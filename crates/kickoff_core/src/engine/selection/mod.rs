//! Opponent & recipient selection
//!
//! Every lookup here degrades through a fallback chain instead of failing:
//! narrow rule -> relaxed rule -> anyone eligible -> synthetic placeholder.

mod recipient;
mod softmax_scorer;
mod weighted;

pub use recipient::{
    legal_targets, policy_for, resolve_recipient, PassIntent, RecipientPolicy,
};
pub use softmax_scorer::SoftmaxRecipientScorer;
pub use weighted::WeightedRecipientPicker;

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::warn;

use super::match_state::MatchState;
use crate::models::{Player, PlayerId, PositionGroup, TeamSide};

fn choose<'a>(rng: &mut dyn RngCore, pool: &[&'a Player]) -> Option<&'a Player> {
    pool.choose(rng).copied()
}

fn placeholder_for(state: &MatchState, side: TeamSide, what: &str) -> Player {
    warn!(?side, what, "selection exhausted every fallback, using placeholder");
    Player::placeholder(state.team(side).id)
}

/// Direct marker of `player` on the other team.
///
/// Uses the position marking table, then the coarse group mirror, then any
/// outfield opponent, then any opponent. `exclude` (a defender just beaten)
/// is skipped by the first three rules.
pub fn direct_opponent(
    state: &MatchState,
    player: &Player,
    exclude: Option<PlayerId>,
    rng: &mut dyn RngCore,
) -> Player {
    let side = state.side_of(player).opponent();
    let eligible = |p: &&Player| Some(p.id) != exclude;

    let markers = player.position.direct_markers();
    let by_table: Vec<&Player> = state
        .team_players(side)
        .filter(eligible)
        .filter(|p| markers.contains(&p.position))
        .collect();
    if let Some(p) = choose(rng, &by_table) {
        return p.clone();
    }

    let mirror = player.group.mirror();
    let by_group: Vec<&Player> =
        state.team_players(side).filter(eligible).filter(|p| p.group == mirror).collect();
    if let Some(p) = choose(rng, &by_group) {
        return p.clone();
    }

    let outfield: Vec<&Player> =
        state.team_players(side).filter(eligible).filter(|p| !p.is_goalkeeper()).collect();
    if let Some(p) = choose(rng, &outfield) {
        return p.clone();
    }

    let anyone: Vec<&Player> = state.team_players(side).collect();
    match choose(rng, &anyone) {
        Some(p) => p.clone(),
        None => placeholder_for(state, side, "direct_opponent"),
    }
}

/// Defender for a 1v1 duel, drawn from the wider pool of defenders and
/// midfielders; falls back to the direct-opponent chain.
pub fn duel_opponent(
    state: &MatchState,
    attacker: &Player,
    exclude: Option<PlayerId>,
    rng: &mut dyn RngCore,
) -> Player {
    let side = state.side_of(attacker).opponent();
    let markers = attacker.position.direct_markers();
    let pool: Vec<&Player> = state
        .team_players(side)
        .filter(|p| Some(p.id) != exclude)
        .filter(|p| {
            matches!(p.group, PositionGroup::Defense | PositionGroup::Midfield)
                || markers.contains(&p.position)
        })
        .collect();
    match choose(rng, &pool) {
        Some(p) => p.clone(),
        None => direct_opponent(state, attacker, exclude, rng),
    }
}

/// Attacker contesting a loose ball for `side`.
pub fn rebound_attacker(state: &MatchState, side: TeamSide, rng: &mut dyn RngCore) -> Player {
    pick_by_group(state, side, PositionGroup::Attack, rng, "rebound_attacker")
}

/// Defender contesting a loose ball for `side`.
pub fn rebound_defender(state: &MatchState, side: TeamSide, rng: &mut dyn RngCore) -> Player {
    pick_by_group(state, side, PositionGroup::Defense, rng, "rebound_defender")
}

fn pick_by_group(
    state: &MatchState,
    side: TeamSide,
    group: PositionGroup,
    rng: &mut dyn RngCore,
    what: &str,
) -> Player {
    let preferred = state.group_players(side, group);
    if let Some(p) = choose(rng, &preferred) {
        return p.clone();
    }
    let outfield: Vec<&Player> = state.team_players(side).filter(|p| !p.is_goalkeeper()).collect();
    if let Some(p) = choose(rng, &outfield) {
        return p.clone();
    }
    let anyone: Vec<&Player> = state.team_players(side).collect();
    match choose(rng, &anyone) {
        Some(p) => p.clone(),
        None => placeholder_for(state, side, what),
    }
}

/// Who restarts for `side` after a goal kick: keeper, else a defender, else anyone.
pub fn restart_taker(state: &MatchState, side: TeamSide) -> Option<&Player> {
    state
        .goalkeeper(side)
        .or_else(|| state.team_players(side).find(|p| p.group == PositionGroup::Defense))
        .or_else(|| state.team_players(side).next())
}

/// Who takes a kickoff for `side`: first attacker, else midfielder, else anyone.
pub fn kickoff_taker(state: &MatchState, side: TeamSide) -> Option<&Player> {
    state
        .team_players(side)
        .find(|p| p.group == PositionGroup::Attack)
        .or_else(|| state.team_players(side).find(|p| p.group == PositionGroup::Midfield))
        .or_else(|| state.team_players(side).next())
}
