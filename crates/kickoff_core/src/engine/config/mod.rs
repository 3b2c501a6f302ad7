//! # Engine Configuration
//!
//! 모든 튜닝 상수를 한 곳에서 관리한다. Weight tables, rating deltas and
//! position modifiers are plain data handed to the driver, so a test can
//! override any of them without touching module globals.
//!
//! ```rust
//! use kickoff_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let arcade = EngineConfig::arcade();
//! assert!(arcade.validate().is_ok());
//! ```

mod action_weights;
mod rating_config;
mod recipient_config;
mod resolver_config;

pub use action_weights::{ActionWeights, GroupWeights};
pub use rating_config::{RatingConfig, RatingDelta};
pub use recipient_config::{RecipientConfig, RecipientStrategy, SamplingMode, SoftmaxWeights};
pub use resolver_config::{ContestParams, PositionModifiers, ResolverConfig, SkillModifiers};

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Who takes the first kickoff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum KickoffRule {
    /// Home team always kicks off
    #[default]
    Home,
    /// Coin toss on the match generator
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchClockConfig {
    /// Minute at which the match ends (기본: 90)
    pub match_length: u8,
    /// Minutes advanced per tick (기본: 1)
    pub minute_step: u8,
    #[serde(default)]
    pub kickoff: KickoffRule,
}

impl Default for MatchClockConfig {
    fn default() -> Self {
        Self { match_length: 90, minute_step: 1, kickoff: KickoffRule::Home }
    }
}

/// Every tunable table the engine reads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub clock: MatchClockConfig,
    #[serde(default)]
    pub ratings: RatingConfig,
    #[serde(default)]
    pub actions: ActionWeights,
    #[serde(default)]
    pub resolvers: ResolverConfig,
    #[serde(default)]
    pub modifiers: PositionModifiers,
    #[serde(default)]
    pub recipients: RecipientConfig,
}

impl EngineConfig {
    /// 현실적인 시뮬레이션 (기본)
    pub fn realistic() -> Self {
        Self::default()
    }

    /// 아케이드 스타일 (더 많은 슛, 더 많은 골)
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.resolvers.shot_goal.base += 0.08;
        cfg.resolvers.header_goal.base += 0.06;
        cfg.actions.attack.shoot = 4.0;
        cfg.actions.midfield.shoot = 2.0;
        cfg.resolvers.rebound_after_save = 0.35;
        cfg
    }

    /// 테스트용: no noise on any contest, outcomes follow skill alone
    pub fn test() -> Self {
        let mut cfg = Self::default();
        cfg.resolvers.for_each_contest(|c| c.spread = 0.0);
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.clock.match_length == 0 {
            return Err(MatchError::InvalidConfig("match_length must be positive".into()));
        }
        if self.clock.minute_step == 0 {
            return Err(MatchError::InvalidConfig("minute_step must be positive".into()));
        }
        self.ratings.validate()?;
        self.resolvers.validate()?;
        self.recipients.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        assert!(EngineConfig::realistic().validate().is_ok());
        assert!(EngineConfig::arcade().validate().is_ok());
        assert!(EngineConfig::test().validate().is_ok());
    }

    #[test]
    fn test_zero_step_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.clock.minute_step = 0;
        assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_finite_contest_rejected() {
        for bad in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let mut cfg = EngineConfig::default();
            cfg.resolvers.pass.spread = bad;
            assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))), "spread {bad}");

            let mut cfg = EngineConfig::default();
            cfg.resolvers.shot_goal.base = bad;
            assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))), "base {bad}");
        }
    }

    #[test]
    fn test_non_finite_softmax_settings_rejected() {
        for bad in [f32::INFINITY, f32::NAN] {
            let mut cfg = EngineConfig::default();
            cfg.recipients.softmax.temperature = bad;
            assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))), "temperature {bad}");

            let mut cfg = EngineConfig::default();
            cfg.recipients.softmax.epsilon = bad;
            assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))), "epsilon {bad}");

            let mut cfg = EngineConfig::default();
            cfg.recipients.softmax.rotation = bad;
            assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))), "rotation {bad}");
        }
    }

    #[test]
    fn test_test_preset_has_no_spread() {
        let cfg = EngineConfig::test();
        assert_eq!(cfg.resolvers.pass.spread, 0.0);
        assert_eq!(cfg.resolvers.shot_goal.spread, 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: EngineConfig =
            serde_json::from_str(r#"{"clock":{"match_length":45,"minute_step":1}}"#).unwrap();
        assert_eq!(cfg.clock.match_length, 45);
        assert_eq!(cfg.ratings, RatingConfig::default());
    }
}
