//! Open-play action menu weights per position group.
//!
//! Goalkeepers are pass-only and have no row here.

use serde::{Deserialize, Serialize};

/// 한 포지션 그룹의 액션 가중치
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupWeights {
    pub pass: f32,
    /// PASS weight when a shot is the priority
    pub pass_priority: f32,
    pub dribble: f32,
    pub through_ball: f32,
    pub cross: f32,
    /// CROSS weight inside the final third
    pub cross_final_third: f32,
    pub shoot: f32,
    pub shoot_priority: f32,
    /// KILLER_PASS weight right after beating a man outside the defensive third
    pub killer_pass: f32,
    /// Direct DUEL weight (normally 0: duels come from failure branches)
    pub duel: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActionWeights {
    pub defense: GroupWeights,
    pub midfield: GroupWeights,
    pub attack: GroupWeights,
    /// Extra CROSS weight for a team playing with wing focus
    pub wing_focus_cross_bonus: f32,
    /// DUEL weight added when the defending team presses high
    pub press_duel_weight: f32,
    /// Extra KILLER_PASS weight for a wide player who just beat his man
    pub wide_killer_bonus: f32,
}

impl Default for ActionWeights {
    fn default() -> Self {
        Self {
            defense: GroupWeights {
                pass: 7.0,
                pass_priority: 7.0,
                dribble: 2.0,
                through_ball: 1.0,
                cross: 0.0,
                cross_final_third: 0.0,
                shoot: 0.0,
                shoot_priority: 0.0,
                killer_pass: 0.0,
                duel: 0.0,
            },
            midfield: GroupWeights {
                pass: 6.0,
                pass_priority: 4.0,
                dribble: 3.0,
                through_ball: 3.0,
                cross: 1.0,
                cross_final_third: 2.0,
                shoot: 1.0,
                shoot_priority: 3.0,
                killer_pass: 1.0,
                duel: 0.0,
            },
            attack: GroupWeights {
                pass: 4.0,
                pass_priority: 3.0,
                dribble: 3.0,
                through_ball: 2.0,
                cross: 0.0,
                cross_final_third: 1.0,
                shoot: 3.0,
                shoot_priority: 6.0,
                killer_pass: 1.0,
                duel: 0.0,
            },
            wing_focus_cross_bonus: 1.0,
            press_duel_weight: 2.0,
            wide_killer_bonus: 2.0,
        }
    }
}
