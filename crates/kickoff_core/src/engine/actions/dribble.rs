//! DRIBBLE resolver.

use rand::Rng;

use super::{resolve_foul, turnover, ResolveCtx};
use crate::engine::events::EventType;
use crate::engine::match_state::{ContextKind, MatchState};
use crate::engine::probability::{player_contest, Skill};
use crate::engine::selection::direct_opponent;
use crate::models::Player;

pub fn resolve_dribble(state: &MatchState, dribbler: &Player, ctx: &mut ResolveCtx) -> MatchState {
    let cfg = ctx.config;
    let defender = direct_opponent(state, dribbler, state.ball.context.beaten, ctx.rng);
    let roll = player_contest(
        ctx.rng,
        &cfg.resolvers.dribble,
        &cfg.modifiers,
        dribbler,
        Skill::Dribble,
        &defender,
        Skill::Tackle,
        0.0,
    );

    let mut next = state.clone();
    next.record(dribbler.id, |s| s.dribbles += 1);
    next.record(defender.id, |s| s.tackles += 1);

    if roll.success() {
        next.record(dribbler.id, |s| s.dribbles_succeeded += 1);
        next.adjust_rating(dribbler.id, cfg.ratings.dribble_win, &cfg.ratings);

        // same carrier, one band further on, the beaten man left behind
        next.ball.zone = state.ball.zone.next();
        next.ball.context.kind = ContextKind::OpenPlay;
        next.ball.context.beaten = Some(defender.id).filter(|_| !defender.is_placeholder());
        next.ball.context.aerial = false;
        ctx.log(&mut next, EventType::Dribble, Some(dribbler), Some(&defender));
        return next;
    }

    if ctx.rng.gen_bool(cfg.resolvers.foul_on_dribble_fail) {
        return resolve_foul(&next, &defender, dribbler, ctx);
    }

    next.adjust_rating(dribbler.id, cfg.ratings.dribble_loss, &cfg.ratings);
    next.adjust_rating(defender.id, cfg.ratings.duel_win, &cfg.ratings);
    next.record(defender.id, |s| s.tackles_succeeded += 1);
    turnover(&mut next, &defender);
    ctx.log(&mut next, EventType::DribbleLost, Some(dribbler), Some(&defender));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::commentary::CommentaryBook;
    use crate::engine::config::EngineConfig;
    use crate::engine::selection::WeightedRecipientPicker;
    use crate::engine::test_fixtures::*;
    use crate::engine::zone::Depth;
    use crate::models::TeamSide;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(state: &MatchState, config: &EngineConfig, id: u32) -> MatchState {
        let policy = WeightedRecipientPicker::from_config(&config.recipients);
        let book = CommentaryBook::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut ctx = ResolveCtx::new(&mut rng, config, &policy, &book);
        resolve_dribble(state, state.player(id).unwrap(), &mut ctx)
    }

    #[test]
    fn test_success_advances_and_marks_beaten() {
        let mut config = EngineConfig::test();
        config.resolvers.dribble.base = 1.0;
        let state = open_play_state(TeamSide::Home, HOME_ST, Depth::Midfield);
        let next = run(&state, &config, HOME_ST);

        assert_eq!(next.ball.carrier, Some(HOME_ST));
        assert_eq!(next.ball.zone.depth, Depth::Attack);
        let beaten = next.ball.context.beaten.unwrap();
        assert_eq!(next.player(beaten).unwrap().team_id, AWAY_TEAM_ID);
        assert_eq!(next.log.last().unwrap().event_type, EventType::Dribble);
        assert_eq!(next.player_stats(HOME_ST).unwrap().dribbles_succeeded, 1);
    }

    #[test]
    fn test_success_clamps_at_final_third() {
        let mut config = EngineConfig::test();
        config.resolvers.dribble.base = 1.0;
        let state = open_play_state(TeamSide::Home, HOME_ST, Depth::Attack);
        let next = run(&state, &config, HOME_ST);
        assert_eq!(next.ball.zone.depth, Depth::Attack);
    }

    #[test]
    fn test_failure_turns_over_or_fouls() {
        let mut config = EngineConfig::test();
        config.resolvers.dribble.base = 0.0;
        config.resolvers.foul_on_dribble_fail = 0.0;
        let state = open_play_state(TeamSide::Home, HOME_ST, Depth::Attack);
        let next = run(&state, &config, HOME_ST);
        assert_eq!(next.ball.possession, TeamSide::Away);
        assert_eq!(next.log.last().unwrap().event_type, EventType::DribbleLost);

        config.resolvers.foul_on_dribble_fail = 1.0;
        let fouled = run(&state, &config, HOME_ST);
        assert_eq!(fouled.ball.possession, TeamSide::Home);
        assert_eq!(fouled.log.last().unwrap().event_type, EventType::Foul);
        assert!(fouled.is_consistent());
    }
}
