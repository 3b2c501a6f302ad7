//! Contest parameters per resolver and skill modifiers per position group.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::models::PositionGroup;

/// One `sample()` call site: nominal base, scale K, noise spread, threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ContestParams {
    pub base: f32,
    pub scale: f32,
    pub spread: f32,
    pub threshold: f32,
}

impl ContestParams {
    pub const fn new(base: f32, scale: f32, spread: f32, threshold: f32) -> Self {
        Self { base, scale, spread, threshold }
    }

    pub fn is_finite(&self) -> bool {
        [self.base, self.scale, self.spread, self.threshold].iter().all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverConfig {
    pub pass: ContestParams,
    pub dribble: ContestParams,
    pub shot_on_target: ContestParams,
    pub shot_goal: ContestParams,
    pub header_on_target: ContestParams,
    pub header_goal: ContestParams,
    pub free_kick_on_target: ContestParams,
    pub free_kick_goal: ContestParams,
    pub rebound_contest: ContestParams,
    pub cross: ContestParams,
    pub through_ball: ContestParams,
    pub killer_pass: ContestParams,
    pub duel: ContestParams,

    /// Reference skill a shooter is measured against for the on-target roll
    pub on_target_baseline: f32,
    /// On-target base shift when shooting from the middle third
    pub midfield_shot_penalty: f32,
    /// On-target base shift when shooting from the own third
    pub defense_shot_penalty: f32,
    /// Chance a failed dribble is a foul on the dribbler
    pub foul_on_dribble_fail: f64,
    /// Chance the loser of a duel concedes a foul instead
    pub duel_foul: f64,
    /// Chance a save spills into a loose-ball scramble
    pub rebound_after_save: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            pass: ContestParams::new(0.78, 150.0, 0.25, 0.5),
            dribble: ContestParams::new(0.5, 120.0, 0.3, 0.52),
            shot_on_target: ContestParams::new(0.5, 150.0, 0.3, 0.5),
            shot_goal: ContestParams::new(0.38, 100.0, 0.3, 0.5),
            header_on_target: ContestParams::new(0.45, 150.0, 0.3, 0.5),
            header_goal: ContestParams::new(0.33, 100.0, 0.3, 0.5),
            free_kick_on_target: ContestParams::new(0.42, 150.0, 0.3, 0.5),
            free_kick_goal: ContestParams::new(0.36, 100.0, 0.3, 0.5),
            rebound_contest: ContestParams::new(0.45, 100.0, 0.3, 0.5),
            cross: ContestParams::new(0.5, 150.0, 0.3, 0.55),
            through_ball: ContestParams::new(0.45, 150.0, 0.3, 0.5),
            killer_pass: ContestParams::new(0.4, 150.0, 0.3, 0.57),
            duel: ContestParams::new(0.5, 100.0, 0.3, 0.5),

            on_target_baseline: 60.0,
            midfield_shot_penalty: -0.15,
            defense_shot_penalty: -0.3,
            foul_on_dribble_fail: 0.12,
            duel_foul: 0.1,
            rebound_after_save: 0.25,
        }
    }
}

impl ResolverConfig {
    fn contests(&self) -> [ContestParams; 13] {
        [
            self.pass,
            self.dribble,
            self.shot_on_target,
            self.shot_goal,
            self.header_on_target,
            self.header_goal,
            self.free_kick_on_target,
            self.free_kick_goal,
            self.rebound_contest,
            self.cross,
            self.through_ball,
            self.killer_pass,
            self.duel,
        ]
    }

    pub(crate) fn for_each_contest(&mut self, mut f: impl FnMut(&mut ContestParams)) {
        for c in [
            &mut self.pass,
            &mut self.dribble,
            &mut self.shot_on_target,
            &mut self.shot_goal,
            &mut self.header_on_target,
            &mut self.header_goal,
            &mut self.free_kick_on_target,
            &mut self.free_kick_goal,
            &mut self.rebound_contest,
            &mut self.cross,
            &mut self.through_ball,
            &mut self.killer_pass,
            &mut self.duel,
        ] {
            f(c);
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.contests().iter().any(|c| !c.is_finite()) {
            return Err(MatchError::InvalidConfig("contest parameters must be finite".into()));
        }
        if self.contests().iter().any(|c| c.scale <= 0.0 || c.spread < 0.0) {
            return Err(MatchError::InvalidConfig("contest scale must be > 0, spread >= 0".into()));
        }
        for (name, p) in [
            ("foul_on_dribble_fail", self.foul_on_dribble_fail),
            ("duel_foul", self.duel_foul),
            ("rebound_after_save", self.rebound_after_save),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(MatchError::InvalidConfig(format!("{name} must be in [0, 1]")));
            }
        }
        Ok(())
    }
}

/// Multipliers applied to raw strength for each skill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SkillModifiers {
    pub pass: f32,
    pub dribble: f32,
    pub shoot: f32,
    pub tackle: f32,
    pub save: f32,
    pub cross: f32,
    pub header: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PositionModifiers {
    pub goalkeeper: SkillModifiers,
    pub defense: SkillModifiers,
    pub midfield: SkillModifiers,
    pub attack: SkillModifiers,
    /// Added to the cross modifier of flank roles
    pub wide_cross_bonus: f32,
}

impl Default for PositionModifiers {
    fn default() -> Self {
        Self {
            goalkeeper: SkillModifiers {
                pass: 0.85,
                dribble: 0.5,
                shoot: 0.3,
                tackle: 0.6,
                save: 1.2,
                cross: 0.5,
                header: 0.5,
            },
            defense: SkillModifiers {
                pass: 0.95,
                dribble: 0.8,
                shoot: 0.7,
                tackle: 1.15,
                save: 0.2,
                cross: 0.9,
                header: 1.1,
            },
            midfield: SkillModifiers {
                pass: 1.1,
                dribble: 1.0,
                shoot: 0.9,
                tackle: 1.0,
                save: 0.2,
                cross: 1.05,
                header: 0.9,
            },
            attack: SkillModifiers {
                pass: 0.95,
                dribble: 1.1,
                shoot: 1.15,
                tackle: 0.75,
                save: 0.2,
                cross: 1.0,
                header: 1.1,
            },
            wide_cross_bonus: 0.1,
        }
    }
}

impl PositionModifiers {
    pub fn for_group(&self, group: PositionGroup) -> &SkillModifiers {
        match group {
            PositionGroup::Goalkeeper => &self.goalkeeper,
            PositionGroup::Defense => &self.defense,
            PositionGroup::Midfield => &self.midfield,
            PositionGroup::Attack => &self.attack,
        }
    }
}
