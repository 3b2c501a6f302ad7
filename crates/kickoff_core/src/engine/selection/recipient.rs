//! Pass recipient policies.
//!
//! Both strategies share the same legality rules and the same fallback
//! chain; only the way a legal target is preferred differs.

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use super::softmax_scorer::SoftmaxRecipientScorer;
use super::weighted::WeightedRecipientPicker;
use crate::engine::config::{RecipientConfig, RecipientStrategy};
use crate::engine::match_state::MatchState;
use crate::models::{Player, PlayerId, PositionGroup};

/// What kind of ball the passer is trying to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassIntent {
    Short,
    Long,
    Cross,
    Through,
}

/// Strategy for choosing who receives a pass.
pub trait RecipientPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Pick a legal target, or `None` when the passer has no legal option.
    fn pick(
        &self,
        state: &MatchState,
        passer: &Player,
        intent: PassIntent,
        rng: &mut dyn RngCore,
    ) -> Option<PlayerId>;
}

/// Build the policy selected by `cfg.strategy`.
pub fn policy_for(cfg: &RecipientConfig) -> Box<dyn RecipientPolicy> {
    match cfg.strategy {
        RecipientStrategy::Weighted => Box::new(WeightedRecipientPicker::from_config(cfg)),
        RecipientStrategy::Softmax => Box::new(SoftmaxRecipientScorer::new(cfg.softmax.clone())),
    }
}

fn allowed_groups(passer: PositionGroup, intent: PassIntent) -> &'static [PositionGroup] {
    use PositionGroup::*;
    match (passer, intent) {
        (_, PassIntent::Cross) => &[Attack],
        (Goalkeeper, PassIntent::Long) => &[Defense, Midfield],
        (Goalkeeper, _) => &[Defense],
        (Defense, PassIntent::Short) => &[Defense, Midfield],
        (Defense, PassIntent::Long) => &[Midfield, Attack],
        (Defense, PassIntent::Through) => &[Midfield, Attack],
        (Midfield, PassIntent::Short) => &[Defense, Midfield, Attack],
        (Midfield, PassIntent::Long) => &[Midfield, Attack],
        (Midfield, PassIntent::Through) => &[Attack],
        // attackers never play it back to the defence or the keeper
        (Attack, PassIntent::Through) => &[Attack],
        (Attack, _) => &[Midfield, Attack],
    }
}

/// Teammates `passer` may legally aim `intent` at.
pub fn legal_targets<'a>(
    state: &'a MatchState,
    passer: &Player,
    intent: PassIntent,
) -> Vec<&'a Player> {
    let side = state.side_of(passer);
    let groups = allowed_groups(passer.group, intent);
    state
        .team_players(side)
        .filter(|p| p.id != passer.id && groups.contains(&p.group))
        .collect()
}

/// Ask `policy`, then degrade: any non-keeper teammate, any teammate, the
/// passer themself. An attacker skips straight to keeping the ball, since
/// the relaxed steps would play it backwards.
pub fn resolve_recipient(
    policy: &dyn RecipientPolicy,
    state: &MatchState,
    passer: &Player,
    intent: PassIntent,
    rng: &mut dyn RngCore,
) -> PlayerId {
    if let Some(id) = policy.pick(state, passer, intent, rng) {
        return id;
    }
    debug!(passer = passer.id, ?intent, policy = policy.name(), "no legal recipient, falling back");
    if passer.group == PositionGroup::Attack {
        return passer.id;
    }

    let side = state.side_of(passer);
    let outfield: Vec<&Player> = state
        .team_players(side)
        .filter(|p| p.id != passer.id && !p.is_goalkeeper())
        .collect();
    if let Some(p) = outfield.choose(rng) {
        return p.id;
    }
    let anyone: Vec<&Player> = state.team_players(side).filter(|p| p.id != passer.id).collect();
    match anyone.choose(rng) {
        Some(p) => p.id,
        None => passer.id,
    }
}
