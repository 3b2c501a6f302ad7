//! Whole-match properties checked through the public API.

mod common;

use kickoff_core::engine::config::EngineConfig;
use kickoff_core::engine::{ContextKind, MatchEngine};
use kickoff_core::{simulate, EventType, TeamSide};

use common::*;

#[test]
fn test_equal_sides_full_match() {
    let result = simulate(&equal_setup(), 2024, EngineConfig::default()).unwrap();

    assert_eq!(result.minutes_played, 90);
    assert!(result.events.iter().any(|e| e.event_type == EventType::KickOff));
    let terminal = result.events.iter().filter(|e| e.event_type == EventType::FullTime).count();
    assert_eq!(terminal, 1);
}

#[test]
fn test_log_is_ordered_and_within_length() {
    for seed in 0..10 {
        let result = simulate(&equal_setup(), seed, EngineConfig::default()).unwrap();
        assert!(result.events.windows(2).all(|w| w[0].minute <= w[1].minute), "seed {seed}");
        assert!(result.events.iter().all(|e| e.minute <= 90), "seed {seed}");
    }
}

#[test]
fn test_score_monotonic_and_kickoff_to_conceding_side() {
    let config = EngineConfig::arcade();
    for seed in 0..10 {
        let mut engine = MatchEngine::new(&equal_setup(), seed, config.clone()).unwrap();
        let (mut home, mut away) = (0u8, 0u8);
        while !engine.is_finished() {
            let state = engine.tick();
            assert!(state.score_home >= home && state.score_away >= away);

            let conceding = if state.score_home > home {
                Some(TeamSide::Away)
            } else if state.score_away > away {
                Some(TeamSide::Home)
            } else {
                None
            };
            if let Some(side) = conceding {
                assert_eq!(state.ball.context.kind, ContextKind::Kickoff, "seed {seed}");
                assert_eq!(state.ball.possession, side, "seed {seed}");
            }
            home = state.score_home;
            away = state.score_away;
        }
    }
}

#[test]
fn test_ratings_stay_in_bounds_every_tick() {
    let config = EngineConfig::arcade();
    let mut engine = MatchEngine::new(&equal_setup(), 99, config).unwrap();
    while !engine.is_finished() {
        let state = engine.tick();
        assert!(state.ratings.values().all(|r| (100..=1000).contains(&r.0)));
        assert!(state.is_consistent());
    }
}

#[test]
fn test_keeperless_side_is_never_saved_against() {
    let setup = keeperless_home_setup();
    let mut empty_net_goals = 0;
    for seed in 0..20 {
        let result = simulate(&setup, seed, EngineConfig::arcade()).unwrap();
        let saved_by_home =
            result.events.iter().any(|e| e.event_type == EventType::ShotSaved && e.side == Some(TeamSide::Away));
        assert!(!saved_by_home, "seed {seed}");
        empty_net_goals += result
            .events
            .iter()
            .filter(|e| e.event_type == EventType::EmptyNetGoal && e.side == Some(TeamSide::Away))
            .count();
    }
    assert!(empty_net_goals > 0);
}

#[test]
fn test_goal_entries_match_score() {
    let result = simulate(&equal_setup(), 31, EngineConfig::arcade()).unwrap();
    let goals = |side| result.events.iter().filter(|e| e.event_type.is_goal() && e.side == Some(side)).count();
    assert_eq!(goals(TeamSide::Home), result.score_home as usize);
    assert_eq!(goals(TeamSide::Away), result.score_away as usize);
}
