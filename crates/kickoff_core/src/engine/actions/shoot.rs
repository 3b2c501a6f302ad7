//! SHOOT / HEADER resolver.
//!
//! Two rolls. The on-target roll compares the shooter with a fixed
//! baseline (the keeper does not matter yet); the goal roll is shooter
//! against keeper. No keeper on the pitch means an on-target shot is in.

use rand::Rng;

use super::{hand_over, set_kickoff, ResolveCtx};
use crate::engine::config::{ContestParams, EngineConfig, RatingDelta};
use crate::engine::events::EventType;
use crate::engine::match_state::{BallContext, MatchState};
use crate::engine::probability::{contest, player_contest, skill_modifier, Skill};
use crate::engine::selection::restart_taker;
use crate::engine::zone::Depth;
use crate::models::{Player, PositionGroup, TeamSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotKind {
    Open,
    Header,
    FreeKick,
    Rebound,
}

struct ShotProfile<'a> {
    on_target: &'a ContestParams,
    goal: &'a ContestParams,
    skill: Skill,
    goal_event: EventType,
    goal_delta: RatingDelta,
}

fn profile(kind: ShotKind, cfg: &EngineConfig) -> ShotProfile<'_> {
    let res = &cfg.resolvers;
    let r = &cfg.ratings;
    match kind {
        ShotKind::Open | ShotKind::Rebound => ShotProfile {
            on_target: &res.shot_on_target,
            goal: &res.shot_goal,
            skill: Skill::Shoot,
            goal_event: EventType::Goal,
            goal_delta: r.goal,
        },
        ShotKind::Header => ShotProfile {
            on_target: &res.header_on_target,
            goal: &res.header_goal,
            skill: Skill::Header,
            goal_event: EventType::HeaderGoal,
            goal_delta: r.header_goal,
        },
        ShotKind::FreeKick => ShotProfile {
            on_target: &res.free_kick_on_target,
            goal: &res.free_kick_goal,
            skill: Skill::Shoot,
            goal_event: EventType::FreeKickGoal,
            goal_delta: r.free_kick_goal,
        },
    }
}

/// Shots from deeper lines start from a lower base.
fn group_penalty(group: PositionGroup, cfg: &EngineConfig) -> f32 {
    let res = &cfg.resolvers;
    match group {
        PositionGroup::Attack => 0.0,
        PositionGroup::Midfield => res.midfield_shot_penalty,
        PositionGroup::Defense | PositionGroup::Goalkeeper => res.defense_shot_penalty,
    }
}

pub fn resolve_header(state: &MatchState, shooter: &Player, ctx: &mut ResolveCtx) -> MatchState {
    resolve_shot(state, shooter, ShotKind::Header, ctx)
}

pub fn resolve_shot(
    state: &MatchState,
    shooter: &Player,
    kind: ShotKind,
    ctx: &mut ResolveCtx,
) -> MatchState {
    let cfg = ctx.config;
    let p = profile(kind, cfg);
    let side = state.side_of(shooter);
    let defending = side.opponent();

    let mut next = state.clone();
    next.record(shooter.id, |s| s.shots += 1);

    let penalty = group_penalty(shooter.group, cfg);
    let on_target = contest(
        ctx.rng,
        p.on_target,
        shooter.strength as f32,
        skill_modifier(&cfg.modifiers, shooter, p.skill),
        cfg.resolvers.on_target_baseline,
        1.0,
        penalty,
    );
    if !on_target.success() {
        next.adjust_rating(shooter.id, cfg.ratings.shot_off_target, &cfg.ratings);
        ctx.log(&mut next, EventType::ShotOffTarget, Some(shooter), None);
        goal_kick(&mut next, defending, ctx);
        return next;
    }

    next.record(shooter.id, |s| s.shots_on_target += 1);
    next.adjust_rating(shooter.id, cfg.ratings.shot_on_target, &cfg.ratings);

    let keeper = match state.goalkeeper(defending) {
        Some(k) => k,
        None => {
            score_goal(&mut next, state, shooter, None, EventType::EmptyNetGoal, p.goal_delta, ctx);
            return next;
        }
    };

    let goal = player_contest(
        ctx.rng,
        p.goal,
        &cfg.modifiers,
        shooter,
        p.skill,
        keeper,
        Skill::Save,
        0.0,
    );
    if goal.success() {
        score_goal(&mut next, state, shooter, Some(keeper), p.goal_event, p.goal_delta, ctx);
        return next;
    }

    next.record(keeper.id, |s| s.saves += 1);
    next.adjust_rating(keeper.id, cfg.ratings.save, &cfg.ratings);
    if ctx.rng.gen_bool(cfg.resolvers.rebound_after_save) {
        next.loose_ball(side, Depth::Attack);
    } else {
        next.give_ball(defending, keeper.id, Depth::Defense, BallContext::open_play());
    }
    ctx.log(&mut next, EventType::ShotSaved, Some(shooter), Some(keeper));
    next
}

fn score_goal(
    next: &mut MatchState,
    state: &MatchState,
    shooter: &Player,
    keeper: Option<&Player>,
    event_type: EventType,
    delta: RatingDelta,
    ctx: &mut ResolveCtx,
) {
    let cfg = ctx.config;
    let side = state.side_of(shooter);
    match side {
        TeamSide::Home => next.score_home = next.score_home.saturating_add(1),
        TeamSide::Away => next.score_away = next.score_away.saturating_add(1),
    }
    next.record(shooter.id, |s| s.goals += 1);
    next.adjust_rating(shooter.id, delta, &cfg.ratings);
    if let Some(k) = keeper {
        next.adjust_rating(k.id, cfg.ratings.goal_conceded, &cfg.ratings);
    }

    let assist = state
        .ball
        .context
        .potential_assist
        .filter(|&id| id != shooter.id)
        .and_then(|id| state.player(id))
        .filter(|p| state.side_of(p) == side);
    if let Some(provider) = assist {
        next.record(provider.id, |s| s.assists += 1);
        next.adjust_rating(provider.id, cfg.ratings.assist, &cfg.ratings);
    }

    ctx.log(next, event_type, Some(shooter), keeper);
    set_kickoff(next, side.opponent());
}

/// Off target: the defending keeper (or a defender) restarts from the back.
fn goal_kick(next: &mut MatchState, defending: TeamSide, ctx: &mut ResolveCtx) {
    let taker = restart_taker(next, defending).cloned();
    if let Some(taker) = taker {
        hand_over(next, defending, &taker, Depth::Defense, BallContext::open_play());
        ctx.log(next, EventType::GoalKick, Some(&taker), None);
    }
}
