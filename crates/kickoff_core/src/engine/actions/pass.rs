//! PASS resolver.

use rand::Rng;

use super::{turnover, ResolveCtx};
use crate::engine::events::EventType;
use crate::engine::match_state::{BallContext, ContextKind, MatchState};
use crate::engine::probability::{player_contest, Skill};
use crate::engine::selection::{direct_opponent, resolve_recipient, PassIntent};
use crate::models::Player;

/// Penalty on the pass base for a ball played long.
const LONG_BALL_SHIFT: f32 = -0.05;

/// Short or long, from the passing team's pass style. Keepers always go short
/// here; a keeper's long ball is the scorer policy's call.
fn choose_intent(state: &MatchState, passer: &Player, ctx: &mut ResolveCtx) -> PassIntent {
    if passer.is_goalkeeper() {
        return PassIntent::Short;
    }
    let bias = state.team(state.side_of(passer)).tactics.long_pass_bias();
    let long_chance = (0.2 + 0.4 * bias).clamp(0.0, 1.0) as f64;
    if ctx.rng.gen_bool(long_chance) {
        PassIntent::Long
    } else {
        PassIntent::Short
    }
}

pub fn resolve_pass(state: &MatchState, passer: &Player, ctx: &mut ResolveCtx) -> MatchState {
    let mut next = state.clone();
    let cfg = ctx.config;
    let side = state.side_of(passer);

    let intent = choose_intent(state, passer, ctx);
    let defender = direct_opponent(state, passer, state.ball.context.beaten, ctx.rng);
    let mut shift = state.team(side).tactics.pass_success_shift();
    if intent == PassIntent::Long {
        shift += LONG_BALL_SHIFT;
    }
    let roll = player_contest(
        ctx.rng,
        &cfg.resolvers.pass,
        &cfg.modifiers,
        passer,
        Skill::Pass,
        &defender,
        Skill::Tackle,
        shift,
    );
    next.record(passer.id, |s| s.passes += 1);

    if !roll.success() {
        next.adjust_rating(passer.id, cfg.ratings.pass_fail, &cfg.ratings);
        next.adjust_rating(defender.id, cfg.ratings.interception, &cfg.ratings);
        turnover(&mut next, &defender);
        ctx.log(&mut next, EventType::PassIntercepted, Some(passer), Some(&defender));
        return next;
    }

    let recipient_id = resolve_recipient(ctx.recipients, state, passer, intent, ctx.rng);
    next.record(passer.id, |s| s.passes_completed += 1);
    next.adjust_rating(passer.id, cfg.ratings.pass_success, &cfg.ratings);

    let recipient = match state.player(recipient_id) {
        Some(r) if r.id != passer.id => r,
        // nobody to pass to: the passer keeps it
        _ => {
            next.ball.context.kind = ContextKind::OpenPlay;
            ctx.log(&mut next, EventType::Pass, Some(passer), None);
            return next;
        }
    };

    let jump = recipient.group.line_index() - passer.group.line_index();
    let zone = if jump > 0 {
        if jump > 1 || intent == PassIntent::Long {
            state.ball.zone.advance(2)
        } else {
            state.ball.zone.next()
        }
    } else if jump < 0 {
        state.ball.zone.previous()
    } else {
        state.ball.zone
    };
    if jump > 0 {
        next.adjust_rating(passer.id, cfg.ratings.progressive_pass, &cfg.ratings);
    }

    let context = BallContext { potential_assist: Some(passer.id), ..BallContext::open_play() };
    next.give_ball(side, recipient.id, zone.depth, context);
    ctx.log(&mut next, EventType::Pass, Some(passer), Some(recipient));
    next
}
