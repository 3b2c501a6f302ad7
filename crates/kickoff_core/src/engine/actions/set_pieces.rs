//! Dead-ball restarts: kickoff and free kick.

use super::{resolve_pass, resolve_shot, ResolveCtx, ShotKind};
use crate::engine::events::EventType;
use crate::engine::match_state::{BallContext, MatchState};
use crate::engine::selection::{resolve_recipient, PassIntent};
use crate::engine::zone::Depth;
use crate::models::Player;

/// Kickoff: the taker rolls it to a teammate and open play begins in midfield.
pub fn resolve_kickoff(state: &MatchState, taker: &Player, ctx: &mut ResolveCtx) -> MatchState {
    let side = state.side_of(taker);
    let mut next = state.clone();
    ctx.log(&mut next, EventType::KickOff, Some(taker), None);

    let receiver = resolve_recipient(ctx.recipients, state, taker, PassIntent::Short, ctx.rng);
    next.record(taker.id, |s| {
        s.passes += 1;
        s.passes_completed += 1;
    });
    next.give_ball(side, receiver, Depth::Midfield, BallContext::open_play());
    next
}

/// Free kick in the attacking third is a shot at goal; anywhere else it is
/// played short like a pass.
pub fn resolve_free_kick(state: &MatchState, taker: &Player, ctx: &mut ResolveCtx) -> MatchState {
    let side = state.side_of(taker);
    let zone = state.ball.context.foul_zone.unwrap_or(state.ball.zone).seen_by(side);

    let mut next = state.clone();
    ctx.log(&mut next, EventType::FreeKick, Some(taker), None);
    if zone.is_final_third() {
        resolve_shot(&next, taker, ShotKind::FreeKick, ctx)
    } else {
        resolve_pass(&next, taker, ctx)
    }
}
