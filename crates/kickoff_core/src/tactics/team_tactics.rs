//! Team-wide Tactical Settings
//!
//! Four knobs per team, each converted to a numeric nudge at the resolver
//! that cares about it. The conversions live here so the tuning of
//! "what does a high line mean" sits next to the enum that names it.

use serde::{Deserialize, Serialize};

/// Team-wide tactical configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TeamTactics {
    #[serde(default)]
    pub pass_style: PassStyle,
    #[serde(default)]
    pub defensive_line: DefensiveLine,
    /// Push play toward the flanks (more crosses, wide targets preferred)
    #[serde(default)]
    pub wing_focus: bool,
    /// Press the carrier high up the pitch (pressing duels in open play)
    #[serde(default)]
    pub high_press: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PassStyle {
    Safe,
    #[default]
    Neutral,
    Risky,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DefensiveLine {
    High,
    #[default]
    Neutral,
    Low,
}

impl TeamTactics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift applied to the nominal pass success base.
    ///
    /// Safe passing trades progression for completion, risky the opposite.
    pub fn pass_success_shift(&self) -> f32 {
        match self.pass_style {
            PassStyle::Safe => 0.05,
            PassStyle::Neutral => 0.0,
            PassStyle::Risky => -0.05,
        }
    }

    /// Short(-) / long(+) bias fed into the recipient scorer's distance cost.
    pub fn long_pass_bias(&self) -> f32 {
        match self.pass_style {
            PassStyle::Safe => -0.5,
            PassStyle::Neutral => 0.0,
            PassStyle::Risky => 0.5,
        }
    }

    /// Shift applied to through balls played AGAINST this team.
    ///
    /// A high line leaves space in behind; a low block closes it.
    pub fn through_ball_exposure(&self) -> f32 {
        match self.defensive_line {
            DefensiveLine::High => 0.06,
            DefensiveLine::Neutral => 0.0,
            DefensiveLine::Low => -0.06,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_neutral() {
        let t = TeamTactics::default();
        assert_eq!(t.pass_success_shift(), 0.0);
        assert_eq!(t.through_ball_exposure(), 0.0);
        assert!(!t.wing_focus && !t.high_press);
    }

    #[test]
    fn test_safe_passing_raises_odds() {
        let safe = TeamTactics { pass_style: PassStyle::Safe, ..Default::default() };
        let risky = TeamTactics { pass_style: PassStyle::Risky, ..Default::default() };
        assert!(safe.pass_success_shift() > risky.pass_success_shift());
        assert!(safe.long_pass_bias() < risky.long_pass_bias());
    }

    #[test]
    fn test_high_line_is_exposed() {
        let high = TeamTactics { defensive_line: DefensiveLine::High, ..Default::default() };
        let low = TeamTactics { defensive_line: DefensiveLine::Low, ..Default::default() };
        assert!(high.through_ball_exposure() > 0.0);
        assert!(low.through_ball_exposure() < 0.0);
    }

    #[test]
    fn test_deserialize_partial() {
        let t: TeamTactics = serde_json::from_str(r#"{"pass_style":"risky","high_press":true}"#).unwrap();
        assert_eq!(t.pass_style, PassStyle::Risky);
        assert_eq!(t.defensive_line, DefensiveLine::Neutral);
        assert!(t.high_press);
    }
}
