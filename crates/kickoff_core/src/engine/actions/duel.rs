//! DUEL resolver: a 1v1 for the ball against a pressing defender.

use rand::Rng;

use super::{resolve_foul, turnover, ResolveCtx};
use crate::engine::events::EventType;
use crate::engine::match_state::{ContextKind, MatchState};
use crate::engine::probability::{player_contest, Skill};
use crate::engine::selection::duel_opponent;
use crate::models::Player;

pub fn resolve_duel(state: &MatchState, attacker: &Player, ctx: &mut ResolveCtx) -> MatchState {
    let cfg = ctx.config;
    let r = &cfg.ratings;
    let defender = duel_opponent(state, attacker, state.ball.context.beaten, ctx.rng);
    let roll = player_contest(
        ctx.rng,
        &cfg.resolvers.duel,
        &cfg.modifiers,
        attacker,
        Skill::Dribble,
        &defender,
        Skill::Tackle,
        0.0,
    );
    // the loser may give away a foul instead of simply losing the duel
    let foul = ctx.rng.gen_bool(cfg.resolvers.duel_foul);

    let mut next = state.clone();
    next.record(defender.id, |s| s.tackles += 1);

    if roll.success() {
        if foul {
            return resolve_foul(&next, &defender, attacker, ctx);
        }
        next.adjust_rating(attacker.id, r.duel_win, r);
        next.adjust_rating(defender.id, r.duel_loss, r);
        next.ball.context.kind = ContextKind::OpenPlay;
        next.ball.context.beaten = Some(defender.id).filter(|_| !defender.is_placeholder());
        ctx.log(&mut next, EventType::DuelWon, Some(attacker), Some(&defender));
        return next;
    }

    if foul {
        return resolve_foul(&next, attacker, &defender, ctx);
    }
    next.record(defender.id, |s| s.tackles_succeeded += 1);
    next.adjust_rating(attacker.id, r.duel_loss, r);
    next.adjust_rating(defender.id, r.duel_win, r);
    turnover(&mut next, &defender);
    ctx.log(&mut next, EventType::DuelLost, Some(attacker), Some(&defender));
    next
}
