//! Team tactical settings consumed by the match engine.

pub mod team_tactics;

pub use team_tactics::{DefensiveLine, PassStyle, TeamTactics};
