use rand::RngCore;

use super::recipient::{legal_targets, PassIntent, RecipientPolicy};
use crate::engine::config::RecipientConfig;
use crate::engine::match_state::MatchState;
use crate::engine::weights::weighted_index;
use crate::models::{Player, PlayerId};

/// Strength-weighted pick among legal targets.
///
/// weight = strength + bonus for a more advanced group + bonus for a wide
/// target when crossing or when the team plays with wing focus.
#[derive(Debug, Clone)]
pub struct WeightedRecipientPicker {
    pub advanced_group_bonus: f32,
    pub wide_bonus: f32,
}

impl WeightedRecipientPicker {
    pub fn from_config(cfg: &RecipientConfig) -> Self {
        Self { advanced_group_bonus: cfg.advanced_group_bonus, wide_bonus: cfg.wide_bonus }
    }

    fn weight(&self, passer: &Player, target: &Player, prefer_wide: bool) -> f32 {
        let mut w = target.strength as f32;
        if target.group.line_index() > passer.group.line_index() {
            w += self.advanced_group_bonus;
        }
        if prefer_wide && target.position.is_wide() {
            w += self.wide_bonus;
        }
        w
    }
}

impl RecipientPolicy for WeightedRecipientPicker {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn pick(
        &self,
        state: &MatchState,
        passer: &Player,
        intent: PassIntent,
        rng: &mut dyn RngCore,
    ) -> Option<PlayerId> {
        let targets = legal_targets(state, passer, intent);
        let prefer_wide =
            intent == PassIntent::Cross || state.team(state.side_of(passer)).tactics.wing_focus;
        let weights: Vec<f32> =
            targets.iter().map(|t| self.weight(passer, t, prefer_wide)).collect();
        weighted_index(rng, &weights).map(|i| targets[i].id)
    }
}
