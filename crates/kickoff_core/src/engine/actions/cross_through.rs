//! CROSS, THROUGH_BALL and KILLER_PASS resolvers.
//!
//! All three put the receiver in a shooting position: success raises the
//! "must shoot" priority on the new context.

use super::{turnover, ResolveCtx};
use crate::engine::config::{ContestParams, RatingDelta};
use crate::engine::events::EventType;
use crate::engine::match_state::{BallContext, MatchState};
use crate::engine::probability::{player_contest, Skill};
use crate::engine::selection::{direct_opponent, resolve_recipient, PassIntent};
use crate::engine::zone::Depth;
use crate::models::Player;

pub fn resolve_cross(state: &MatchState, crosser: &Player, ctx: &mut ResolveCtx) -> MatchState {
    let cfg = ctx.config;
    let defender = direct_opponent(state, crosser, state.ball.context.beaten, ctx.rng);
    let roll = player_contest(
        ctx.rng,
        &cfg.resolvers.cross,
        &cfg.modifiers,
        crosser,
        Skill::Cross,
        &defender,
        Skill::Header,
        0.0,
    );

    let mut next = state.clone();
    next.record(crosser.id, |s| s.crosses += 1);

    // a cross needs someone in the box to aim at; no fallback chain here
    let target = if roll.success() {
        ctx.recipients
            .pick(state, crosser, PassIntent::Cross, ctx.rng)
            .and_then(|id| state.player(id))
    } else {
        None
    };

    match target {
        Some(target) => {
            next.record(crosser.id, |s| s.crosses_completed += 1);
            next.adjust_rating(crosser.id, cfg.ratings.cross_success, &cfg.ratings);
            let context = BallContext {
                potential_assist: Some(crosser.id),
                must_shoot: true,
                aerial: true,
                ..BallContext::open_play()
            };
            next.give_ball(state.side_of(crosser), target.id, Depth::Attack, context);
            ctx.log(&mut next, EventType::Cross, Some(crosser), Some(target));
        }
        None => {
            next.adjust_rating(crosser.id, cfg.ratings.cross_fail, &cfg.ratings);
            turnover(&mut next, &defender);
            ctx.log(&mut next, EventType::CrossFailed, Some(crosser), Some(&defender));
        }
    }
    next
}

struct BallInBehind<'a> {
    params: &'a ContestParams,
    success_delta: RatingDelta,
    fail_delta: RatingDelta,
    advance: u8,
    success_event: EventType,
    fail_event: EventType,
}

pub fn resolve_through_ball(state: &MatchState, passer: &Player, ctx: &mut ResolveCtx) -> MatchState {
    let cfg = ctx.config;
    let kind = BallInBehind {
        params: &cfg.resolvers.through_ball,
        success_delta: cfg.ratings.through_ball_success,
        fail_delta: cfg.ratings.through_ball_fail,
        advance: 2,
        success_event: EventType::ThroughBall,
        fail_event: EventType::ThroughBallFailed,
    };
    ball_in_behind(state, passer, kind, ctx)
}

/// Higher-risk through ball played right after beating a man; lands the
/// receiver straight in the final third.
pub fn resolve_killer_pass(state: &MatchState, passer: &Player, ctx: &mut ResolveCtx) -> MatchState {
    let cfg = ctx.config;
    let kind = BallInBehind {
        params: &cfg.resolvers.killer_pass,
        success_delta: cfg.ratings.killer_pass_success,
        fail_delta: cfg.ratings.killer_pass_fail,
        advance: 3,
        success_event: EventType::KillerPass,
        fail_event: EventType::KillerPassFailed,
    };
    ball_in_behind(state, passer, kind, ctx)
}

fn ball_in_behind(
    state: &MatchState,
    passer: &Player,
    kind: BallInBehind<'_>,
    ctx: &mut ResolveCtx,
) -> MatchState {
    let cfg = ctx.config;
    let side = state.side_of(passer);
    let defender = direct_opponent(state, passer, state.ball.context.beaten, ctx.rng);
    // the defending team's line decides how much room there is in behind
    let exposure = state.team(side.opponent()).tactics.through_ball_exposure();
    let roll = player_contest(
        ctx.rng,
        kind.params,
        &cfg.modifiers,
        passer,
        Skill::Pass,
        &defender,
        Skill::Tackle,
        exposure,
    );

    let mut next = state.clone();
    next.record(passer.id, |s| s.through_balls += 1);

    let recipient = if roll.success() {
        let id = resolve_recipient(ctx.recipients, state, passer, PassIntent::Through, ctx.rng);
        state.player(id).filter(|p| p.id != passer.id)
    } else {
        None
    };

    match recipient {
        Some(recipient) => {
            next.record(passer.id, |s| s.through_balls_completed += 1);
            next.adjust_rating(passer.id, kind.success_delta, &cfg.ratings);
            let context = BallContext {
                potential_assist: Some(passer.id),
                must_shoot: true,
                ..BallContext::open_play()
            };
            let zone = state.ball.zone.advance(kind.advance);
            next.give_ball(side, recipient.id, zone.depth, context);
            ctx.log(&mut next, kind.success_event, Some(passer), Some(recipient));
        }
        None => {
            next.adjust_rating(passer.id, kind.fail_delta, &cfg.ratings);
            next.adjust_rating(defender.id, cfg.ratings.interception, &cfg.ratings);
            turnover(&mut next, &defender);
            ctx.log(&mut next, kind.fail_event, Some(passer), Some(&defender));
        }
    }
    next
}
