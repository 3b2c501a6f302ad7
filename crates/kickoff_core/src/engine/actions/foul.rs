//! FOUL resolver: always ends in a free kick for the fouled team.

use super::{hand_over, ResolveCtx};
use crate::engine::events::EventType;
use crate::engine::match_state::{BallContext, MatchState};
use crate::models::Player;

/// `fouler` brings down `fouled`. The free kick is taken where the foul
/// happened, seen from the fouled team's end.
pub fn resolve_foul(
    state: &MatchState,
    fouler: &Player,
    fouled: &Player,
    ctx: &mut ResolveCtx,
) -> MatchState {
    let cfg = ctx.config;
    let mut next = state.clone();

    next.record(fouler.id, |s| s.fouls_committed += 1);
    next.adjust_rating(fouler.id, cfg.ratings.foul_committed, &cfg.ratings);
    next.adjust_rating(fouled.id, cfg.ratings.foul_drawn, &cfg.ratings);

    let side = state.side_of(fouled);
    let zone = state.ball.zone.seen_by(side);
    hand_over(&mut next, side, fouled, zone.depth, BallContext::free_kick(zone));
    ctx.log(&mut next, EventType::Foul, Some(fouler), Some(fouled));
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
    use crate::engine::zone::{Depth, Zone};
    use crate::models::TeamSide;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_free_kick_awarded_at_foul_zone() {
        let config = EngineConfig::test();
        let policy = WeightedRecipientPicker::from_config(&config.recipients);
        let book = CommentaryBook::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = ResolveCtx::new(&mut rng, &config, &policy, &book);

        // home striker in the final third, fouled by an away centre-back
        let state = open_play_state(TeamSide::Home, HOME_ST, Depth::Attack);
        let fouler = state.player(AWAY_CB).unwrap();
        let fouled = state.player(HOME_ST).unwrap();
        let next = resolve_foul(&state, fouler, fouled, &mut ctx);

        assert_eq!(next.ball.context.kind, ContextKind::FreeKick);
        assert_eq!(next.ball.context.foul_zone, Some(Zone::new(TeamSide::Home, Depth::Attack)));
        assert_eq!(next.ball.carrier, Some(HOME_ST));
        let r = &config.ratings;
        assert_eq!(next.rating(AWAY_CB).unwrap().0, r.baseline + r.foul_committed);
        assert_eq!(next.rating(HOME_ST).unwrap().0, r.baseline + r.foul_drawn);
        assert_eq!(next.player_stats(AWAY_CB).unwrap().fouls_committed, 1);
    }

    #[test]
    fn test_defender_fouled_gets_mirrored_zone() {
        let config = EngineConfig::test();
        let policy = WeightedRecipientPicker::from_config(&config.recipients);
        let book = CommentaryBook::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = ResolveCtx::new(&mut rng, &config, &policy, &book);

        let state = open_play_state(TeamSide::Home, HOME_ST, Depth::Attack);
        let next = resolve_foul(
            &state,
            state.player(HOME_ST).unwrap(),
            state.player(AWAY_CB).unwrap(),
            &mut ctx,
        );
        assert_eq!(next.ball.possession, TeamSide::Away);
        assert_eq!(next.ball.zone, Zone::new(TeamSide::Away, Depth::Defense));
        assert!(next.is_consistent());
    }
}
