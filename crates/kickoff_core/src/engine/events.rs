//! Structured match log entries.
//!
//! The log is observational: nothing in the engine reads it back to decide
//! what happens next.

use serde::{Deserialize, Serialize};

use crate::models::{PlayerId, TeamSide};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub minute: u8,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub category: EventCategory,
    pub text: String,
    /// Team of the primary player
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<TeamSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerId>,
    /// Opponent or recipient, when the action has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<PlayerId>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    KickOff,
    Pass,
    PassIntercepted,
    Dribble,
    DribbleLost,
    ShotOffTarget,
    ShotSaved,
    Goal,
    EmptyNetGoal,
    HeaderGoal,
    FreeKickGoal,
    GoalKick,
    Cross,
    CrossFailed,
    ThroughBall,
    ThroughBallFailed,
    KillerPass,
    KillerPassFailed,
    DuelWon,
    DuelLost,
    Foul,
    FreeKick,
    Rebound,
    ReboundCleared,
    FullTime,
}

/// Presentation bucket for UI colouring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Goal,
    Positive,
    Negative,
    Neutral,
}

impl EventType {
    pub fn category(self) -> EventCategory {
        match self {
            EventType::Goal
            | EventType::EmptyNetGoal
            | EventType::HeaderGoal
            | EventType::FreeKickGoal => EventCategory::Goal,
            EventType::Pass
            | EventType::Dribble
            | EventType::Cross
            | EventType::ThroughBall
            | EventType::KillerPass
            | EventType::DuelWon
            | EventType::ShotSaved
            | EventType::Rebound => EventCategory::Positive,
            EventType::PassIntercepted
            | EventType::DribbleLost
            | EventType::ShotOffTarget
            | EventType::CrossFailed
            | EventType::ThroughBallFailed
            | EventType::KillerPassFailed
            | EventType::DuelLost
            | EventType::Foul
            | EventType::ReboundCleared => EventCategory::Negative,
            EventType::KickOff | EventType::GoalKick | EventType::FreeKick | EventType::FullTime => {
                EventCategory::Neutral
            }
        }
    }

    pub fn is_goal(self) -> bool {
        self.category() == EventCategory::Goal
    }
}

/// Clamp every entry into `[0, match_length]` and restore minute order.
///
/// The sort is stable, so entries of the same minute keep their order.
pub fn normalize_log(log: &mut [MatchEvent], match_length: u8) {
    for event in log.iter_mut() {
        event.minute = event.minute.min(match_length);
    }
    log.sort_by_key(|e| e.minute);
}
