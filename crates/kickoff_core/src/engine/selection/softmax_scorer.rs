//! Softmax recipient scorer
//!
//! Each legal target gets a composite score:
//!
//! ```text
//! score = ability + role + progression - distance + openness - rotation - bounce
//! ```
//!
//! (each term multiplied by its configured weight), the scores go through a
//! temperature softmax and the final pick is either ε-greedy over the top-K
//! or a straight draw from the distribution.

use rand::{Rng, RngCore};
use tracing::trace;

use super::recipient::{legal_targets, PassIntent, RecipientPolicy};
use crate::engine::config::{SamplingMode, SoftmaxWeights};
use crate::engine::match_state::MatchState;
use crate::engine::weights::{softmax, top_k_indices, weighted_index};
use crate::models::{Player, PlayerId, PositionGroup};

#[derive(Debug, Clone)]
pub struct SoftmaxRecipientScorer {
    pub weights: SoftmaxWeights,
}

/// Build-up preference for (passer group, target group).
fn role_bias(passer: PositionGroup, target: PositionGroup) -> f32 {
    use PositionGroup::*;
    match (passer, target) {
        (Goalkeeper, Defense) => 1.0,
        (Goalkeeper, Midfield) => 0.6,
        (Defense, Midfield) => 1.0,
        (Defense, Attack) => 0.5,
        (Defense, Defense) => 0.3,
        (Midfield, Attack) => 0.8,
        (Midfield, Midfield) => 0.6,
        (Midfield, Defense) => 0.2,
        (Attack, Attack) => 0.8,
        (Attack, Midfield) => 0.5,
        _ => 0.0,
    }
}

impl SoftmaxRecipientScorer {
    pub fn new(weights: SoftmaxWeights) -> Self {
        Self { weights }
    }

    /// Composite score of `target` for a pass from `passer`.
    pub fn score(&self, state: &MatchState, passer: &Player, target: &Player, intent: PassIntent) -> f32 {
        let w = &self.weights;
        let side = state.side_of(passer);
        let jump = target.group.line_index() - passer.group.line_index();

        let ability = target.strength as f32 / 100.0;
        let role = role_bias(passer.group, target.group);

        let mut progression = match jump {
            1 => 1.0,
            2 => 0.8,
            j if j >= 3 => 0.4,
            _ => 0.0,
        };
        if intent == PassIntent::Long {
            progression *= w.long_ball_scale;
        }

        // short(-) / long(+) bias shrinks or grows the cost of a big jump
        let mut bias = state.team(side).tactics.long_pass_bias();
        if intent == PassIntent::Long {
            bias += 0.5;
        }
        let distance = jump.unsigned_abs() as f32 * (1.0 - bias).max(0.0);

        // markers on the target's line against teammates sharing it
        let markers = state.group_players(side.opponent(), target.group.mirror()).len() as f32;
        let mates = state.group_players(side, target.group).len().max(1) as f32;
        let openness = 1.0 / (1.0 + markers / mates);

        let ctx = &state.ball.context;
        let touches = ctx.touches_in_move(target.id);
        let rotation = touches.saturating_sub(w.rotation_threshold.saturating_sub(1)) as f32;
        let bounce = if ctx.previous_carrier() == Some(target.id) { 1.0 } else { 0.0 };

        w.ability * ability + w.role * role + w.progression * progression - w.distance * distance
            + w.openness * openness
            - w.rotation * rotation
            - w.bounce * bounce
    }

    /// Pick using an explicit ε instead of the configured one.
    pub fn pick_with_epsilon(
        &self,
        state: &MatchState,
        passer: &Player,
        intent: PassIntent,
        epsilon: f32,
        rng: &mut dyn RngCore,
    ) -> Option<PlayerId> {
        let w = &self.weights;
        let intent = if passer.is_goalkeeper()
            && intent == PassIntent::Short
            && rng.gen_bool(w.keeper_long_ball_chance)
        {
            PassIntent::Long
        } else {
            intent
        };

        let targets = legal_targets(state, passer, intent);
        if targets.is_empty() {
            return None;
        }
        let scores: Vec<f32> = targets.iter().map(|t| self.score(state, passer, t, intent)).collect();
        let probs = softmax(&scores, w.temperature);
        trace!(passer = passer.id, ?scores, "recipient scores");

        let idx = match w.sampling {
            SamplingMode::EpsilonGreedyTopK => {
                let top = top_k_indices(&probs, w.top_k);
                if rng.gen::<f32>() < epsilon {
                    top[rng.gen_range(0..top.len())]
                } else {
                    top[0]
                }
            }
            SamplingMode::Weighted => weighted_index(rng, &probs)?,
        };
        Some(targets[idx].id)
    }
}

impl RecipientPolicy for SoftmaxRecipientScorer {
    fn name(&self) -> &'static str {
        "softmax"
    }

    fn pick(
        &self,
        state: &MatchState,
        passer: &Player,
        intent: PassIntent,
        rng: &mut dyn RngCore,
    ) -> Option<PlayerId> {
        self.pick_with_epsilon(state, passer, intent, self.weights.epsilon, rng)
    }
}
