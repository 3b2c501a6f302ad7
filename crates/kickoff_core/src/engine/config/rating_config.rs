//! Rating deltas
//!
//! Ratings are fixed-point hundredths: 600 = 6.00. Deltas use the same unit.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

pub type RatingDelta = i16;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RatingConfig {
    /// Starting rating (기본: 6.00)
    pub baseline: i16,
    pub min: i16,
    pub max: i16,

    pub pass_success: RatingDelta,
    pub pass_fail: RatingDelta,
    pub progressive_pass: RatingDelta,
    pub interception: RatingDelta,
    pub dribble_win: RatingDelta,
    pub dribble_loss: RatingDelta,
    pub duel_win: RatingDelta,
    pub duel_loss: RatingDelta,
    pub cross_success: RatingDelta,
    pub cross_fail: RatingDelta,
    pub through_ball_success: RatingDelta,
    pub through_ball_fail: RatingDelta,
    pub killer_pass_success: RatingDelta,
    pub killer_pass_fail: RatingDelta,
    pub shot_on_target: RatingDelta,
    pub shot_off_target: RatingDelta,
    pub goal: RatingDelta,
    pub header_goal: RatingDelta,
    pub free_kick_goal: RatingDelta,
    pub assist: RatingDelta,
    pub save: RatingDelta,
    pub goal_conceded: RatingDelta,
    pub foul_drawn: RatingDelta,
    pub foul_committed: RatingDelta,

    /// Pull toward baseline per tick, in hundredths (0 = off)
    pub decay_per_tick: i16,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            baseline: 600,
            min: 100,
            max: 1000,

            pass_success: 2,
            pass_fail: -3,
            progressive_pass: 1,
            interception: 3,
            dribble_win: 4,
            dribble_loss: -4,
            duel_win: 3,
            duel_loss: -3,
            cross_success: 3,
            cross_fail: -3,
            through_ball_success: 4,
            through_ball_fail: -3,
            killer_pass_success: 6,
            killer_pass_fail: -5,
            shot_on_target: 5,
            shot_off_target: -2,
            goal: 18,
            header_goal: 16,
            free_kick_goal: 20,
            assist: 10,
            save: 5,
            goal_conceded: -8,
            foul_drawn: 3,
            foul_committed: -3,

            decay_per_tick: 0,
        }
    }
}

impl RatingConfig {
    pub fn clamp(&self, value: i32) -> i16 {
        value.clamp(self.min as i32, self.max as i32) as i16
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.min >= self.max || !(self.min..=self.max).contains(&self.baseline) {
            return Err(MatchError::InvalidConfig(format!(
                "rating baseline {} outside [{}, {}]",
                self.baseline, self.min, self.max
            )));
        }
        if self.decay_per_tick < 0 {
            return Err(MatchError::InvalidConfig("decay_per_tick must be >= 0".into()));
        }
        Ok(())
    }
}
