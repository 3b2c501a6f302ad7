//! Pass recipient selection settings.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Which `RecipientPolicy` the driver wires in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecipientStrategy {
    /// Strength-weighted pick over the legal target groups
    #[default]
    Weighted,
    /// Composite score -> softmax -> ε-greedy / weighted draw
    Softmax,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// With probability ε pick uniformly among the top-K, else take the best
    #[default]
    EpsilonGreedyTopK,
    /// Draw from the full softmax distribution
    Weighted,
}

/// Composite score weights for the softmax scorer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SoftmaxWeights {
    pub ability: f32,
    pub role: f32,
    pub progression: f32,
    pub distance: f32,
    pub openness: f32,
    pub rotation: f32,
    pub bounce: f32,
    pub temperature: f32,
    pub epsilon: f32,
    pub top_k: usize,
    pub sampling: SamplingMode,
    /// Progression multiplier for a deliberate long ball
    pub long_ball_scale: f32,
    /// Chance a keeper goes long instead of the short default
    pub keeper_long_ball_chance: f64,
    /// Touches in the current move before the rotation penalty applies
    pub rotation_threshold: usize,
}

impl Default for SoftmaxWeights {
    fn default() -> Self {
        Self {
            ability: 1.0,
            role: 0.6,
            progression: 0.8,
            distance: 0.5,
            openness: 0.7,
            rotation: 0.6,
            bounce: 1.5,
            temperature: 0.7,
            epsilon: 0.1,
            top_k: 3,
            sampling: SamplingMode::EpsilonGreedyTopK,
            long_ball_scale: 1.5,
            keeper_long_ball_chance: 0.25,
            rotation_threshold: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecipientConfig {
    pub strategy: RecipientStrategy,
    /// Weighted pick: flat bonus for a target in a more advanced group
    pub advanced_group_bonus: f32,
    /// Weighted pick: flat bonus for a wide target on crosses / wing focus
    pub wide_bonus: f32,
    pub softmax: SoftmaxWeights,
}

impl Default for RecipientConfig {
    fn default() -> Self {
        Self {
            strategy: RecipientStrategy::Weighted,
            advanced_group_bonus: 15.0,
            wide_bonus: 10.0,
            softmax: SoftmaxWeights::default(),
        }
    }
}

impl RecipientConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        let s = &self.softmax;
        let terms = [s.ability, s.role, s.progression, s.distance, s.openness, s.rotation, s.bounce];
        let extras = [s.long_ball_scale, self.advanced_group_bonus, self.wide_bonus];
        if !terms.iter().chain(extras.iter()).all(|v| v.is_finite()) {
            return Err(MatchError::InvalidConfig("recipient weights must be finite".into()));
        }
        if !(s.temperature.is_finite() && s.temperature > 0.0) {
            return Err(MatchError::InvalidConfig("softmax temperature must be > 0".into()));
        }
        if s.top_k == 0 {
            return Err(MatchError::InvalidConfig("top_k must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&s.epsilon) || !(0.0..=1.0).contains(&s.keeper_long_ball_chance) {
            return Err(MatchError::InvalidConfig("probabilities must be in [0, 1]".into()));
        }
        Ok(())
    }
}
