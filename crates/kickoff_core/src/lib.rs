//! # kickoff_core - Zone-Based Football Match Simulation
//!
//! A match is a sequence of one-minute ticks over a six-zone pitch. Each tick
//! picks one action for the ball carrier, resolves it with a skill-weighted
//! probability roll and produces the next immutable `MatchState`.
//!
//! ## Features
//! - Deterministic: same seed and inputs give a byte-identical result
//! - Tunable tables with realistic / arcade / test presets
//! - Live stepping (`MatchEngine::tick`) or run-to-completion
//! - Parallel batch simulation
//! - JSON API
//!
//! ```rust,ignore
//! use kickoff_core::{simulate, EngineConfig};
//!
//! let result = simulate(&setup, 42, EngineConfig::default())?;
//! println!("{} - {}", result.score_home, result.score_away);
//! ```

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]
// Struct initialization pattern used intentionally in tests and presets
#![allow(clippy::field_reassign_with_default)]
// Contest helpers take both players, both skills and the tables
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod tactics;

pub use api::{simulate_match_json, simulate_request, MatchRequest, MatchResponse};
pub use engine::{
    simulate, simulate_batch, EngineConfig, EventType, MatchEngine, MatchEvent, MatchResult, MatchState,
    TeamTotals,
};
pub use error::{MatchError, Result};
pub use models::{LineupSlot, MatchSetup, Player, PlayerId, Position, PositionGroup, Team, TeamSide};
pub use tactics::TeamTactics;
