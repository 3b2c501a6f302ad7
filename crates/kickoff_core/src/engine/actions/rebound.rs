//! REBOUND resolver: a loose ball after a save, contested in the box.

use super::{hand_over, resolve_shot, ResolveCtx, ShotKind};
use crate::engine::events::EventType;
use crate::engine::match_state::{BallContext, MatchState};
use crate::engine::probability::{player_contest, Skill};
use crate::engine::selection::{rebound_attacker, rebound_defender};
use crate::engine::zone::Depth;

/// The attacking side is `state.ball.possession`; nobody carries the ball.
pub fn resolve_rebound(state: &MatchState, ctx: &mut ResolveCtx) -> MatchState {
    let cfg = ctx.config;
    let side = state.ball.possession;
    let attacker = rebound_attacker(state, side, ctx.rng);
    let defender = rebound_defender(state, side.opponent(), ctx.rng);
    let roll = player_contest(
        ctx.rng,
        &cfg.resolvers.rebound_contest,
        &cfg.modifiers,
        &attacker,
        Skill::Shoot,
        &defender,
        Skill::Tackle,
        0.0,
    );

    let mut next = state.clone();
    if roll.success() && !attacker.is_placeholder() {
        next.give_ball(side, attacker.id, Depth::Attack, BallContext::open_play());
        ctx.log(&mut next, EventType::Rebound, Some(&attacker), Some(&defender));
        return resolve_shot(&next, &attacker, ShotKind::Rebound, ctx);
    }

    next.adjust_rating(defender.id, cfg.ratings.interception, &cfg.ratings);
    hand_over(&mut next, side.opponent(), &defender, Depth::Defense, BallContext::open_play());
    ctx.log(&mut next, EventType::ReboundCleared, Some(&attacker), Some(&defender));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::commentary::CommentaryBook;
    use crate::engine::config::EngineConfig;
    use crate::engine::match_state::ContextKind;
    use crate::engine::selection::WeightedRecipientPicker;
    use crate::engine::test_fixtures::*;
    use crate::models::{PositionGroup, TeamSide};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn loose_state() -> MatchState {
        let mut state = open_play_state(TeamSide::Home, HOME_ST, Depth::Attack);
        state.loose_ball(TeamSide::Home, Depth::Attack);
        state
    }

    fn run(state: &MatchState, config: &EngineConfig) -> MatchState {
        let policy = WeightedRecipientPicker::from_config(&config.recipients);
        let book = CommentaryBook::default();
        let mut rng = StdRng::seed_from_u64(17);
        let mut ctx = ResolveCtx::new(&mut rng, config, &policy, &book);
        resolve_rebound(state, &mut ctx)
    }

    #[test]
    fn test_cleared_rebound_goes_to_defenders_own_third() {
        let mut config = EngineConfig::test();
        config.resolvers.rebound_contest.base = -1.0;
        let next = run(&loose_state(), &config);

        assert_eq!(next.ball.possession, TeamSide::Away);
        assert_eq!(next.ball.zone.depth, Depth::Defense);
        assert_eq!(next.carrier().unwrap().group, PositionGroup::Defense);
        assert_eq!(next.ball.context.kind, ContextKind::OpenPlay);
        assert_eq!(next.log.last().unwrap().event_type, EventType::ReboundCleared);
    }

    #[test]
    fn test_won_rebound_becomes_a_shot() {
        let mut config = EngineConfig::test();
        config.resolvers.rebound_contest.base = 2.0;
        let next = run(&loose_state(), &config);

        assert_eq!(next.log[0].event_type, EventType::Rebound);
        let shooter = next.log[0].player.unwrap();
        assert_eq!(next.player_stats(shooter).unwrap().shots, 1);
        assert!(next.is_consistent());
    }
}
