//! Action Selector
//!
//! The phase of play on the ball decides the route. Kickoff, free kick and
//! rebound go straight to their resolver; open play builds a weighted menu
//! from the actor's position group and draws one action from it.

use rand::seq::SliceRandom;
use tracing::debug;

use super::actions::{
    resolve_cross, resolve_dribble, resolve_duel, resolve_free_kick, resolve_header,
    resolve_kickoff, resolve_killer_pass, resolve_pass, resolve_rebound, resolve_shot,
    resolve_through_ball, ActionKind, ResolveCtx, ShotKind,
};
use super::config::{ActionWeights, GroupWeights};
use super::match_state::{ContextKind, MatchState};
use super::selection::kickoff_taker;
use super::weights::weighted_index;
use super::zone::Depth;
use crate::models::{Player, PositionGroup};

/// Weighted open-play menu for `actor`.
pub fn open_play_menu(state: &MatchState, actor: &Player, weights: &ActionWeights) -> Vec<(ActionKind, f32)> {
    let ctx = &state.ball.context;
    let zone = state.ball.zone;
    let side = state.side_of(actor);

    let group: &GroupWeights = match actor.group {
        // keepers only ever pass
        PositionGroup::Goalkeeper => return vec![(ActionKind::Pass, 1.0)],
        PositionGroup::Defense => &weights.defense,
        PositionGroup::Midfield => &weights.midfield,
        PositionGroup::Attack => &weights.attack,
    };

    let priority = ctx.must_shoot || zone.is_final_third();

    let mut cross = if zone.is_final_third() { group.cross_final_third } else { group.cross };
    if state.team(side).tactics.wing_focus && actor.group != PositionGroup::Defense {
        cross += weights.wing_focus_cross_bonus;
    }

    let shoot = if priority { group.shoot_priority } else { group.shoot };
    // a ball arriving in the air is attacked with the head
    let finish = if ctx.aerial { ActionKind::Header } else { ActionKind::Shoot };

    let mut killer = 0.0;
    if ctx.beaten.is_some() && zone.depth != Depth::Defense {
        killer = group.killer_pass;
        if actor.position.is_wide() && killer > 0.0 {
            killer += weights.wide_killer_bonus;
        }
    }

    let mut duel = group.duel;
    if state.team(side.opponent()).tactics.high_press {
        duel += weights.press_duel_weight;
    }

    vec![
        (ActionKind::Pass, if priority { group.pass_priority } else { group.pass }),
        (ActionKind::Dribble, group.dribble),
        (ActionKind::ThroughBall, group.through_ball),
        (ActionKind::Cross, cross),
        (finish, shoot),
        (ActionKind::KillerPass, killer),
        (ActionKind::Duel, duel),
    ]
}

/// Draw one action from the menu; an empty menu falls back to a pass.
pub fn choose_action(state: &MatchState, actor: &Player, ctx: &mut ResolveCtx) -> ActionKind {
    let menu = open_play_menu(state, actor, &ctx.config.actions);
    let weights: Vec<f32> = menu.iter().map(|(_, w)| *w).collect();
    weighted_index(ctx.rng, &weights).map(|i| menu[i].0).unwrap_or(ActionKind::Pass)
}

/// Route one tick's action. Invokes exactly one top-level resolver.
pub fn step(state: &MatchState, ctx: &mut ResolveCtx) -> MatchState {
    let side = state.ball.possession;
    match state.ball.context.kind {
        ContextKind::Rebound => {
            debug!(minute = state.minute, "rebound");
            resolve_rebound(state, ctx)
        }
        ContextKind::Kickoff => {
            let Some(taker) = state.carrier().or_else(|| kickoff_taker(state, side)) else {
                return state.clone();
            };
            debug!(minute = state.minute, taker = taker.id, "kickoff");
            resolve_kickoff(state, taker, ctx)
        }
        ContextKind::FreeKick => {
            let Some(taker) = state.carrier() else {
                return state.clone();
            };
            debug!(minute = state.minute, taker = taker.id, "free kick");
            resolve_free_kick(state, taker, ctx)
        }
        ContextKind::OpenPlay => {
            let actor = match state.carrier() {
                Some(p) => p,
                None => {
                    let squad: Vec<&Player> = state.team_players(side).collect();
                    match squad.choose(ctx.rng) {
                        Some(p) => *p,
                        None => return state.clone(),
                    }
                }
            };
            let action = choose_action(state, actor, ctx);
            debug!(minute = state.minute, actor = actor.id, %action, "open play");
            dispatch(state, actor, action, ctx)
        }
    }
}

fn dispatch(state: &MatchState, actor: &Player, action: ActionKind, ctx: &mut ResolveCtx) -> MatchState {
    match action {
        ActionKind::Pass => resolve_pass(state, actor, ctx),
        ActionKind::Dribble => resolve_dribble(state, actor, ctx),
        ActionKind::ThroughBall => resolve_through_ball(state, actor, ctx),
        ActionKind::Cross => resolve_cross(state, actor, ctx),
        ActionKind::Shoot => resolve_shot(state, actor, ShotKind::Open, ctx),
        ActionKind::Header => resolve_header(state, actor, ctx),
        ActionKind::KillerPass => resolve_killer_pass(state, actor, ctx),
        ActionKind::Duel => resolve_duel(state, actor, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::commentary::CommentaryBook;
    use crate::engine::config::EngineConfig;
    use crate::engine::match_state::BallContext;
    use crate::engine::selection::WeightedRecipientPicker;
    use crate::engine::test_fixtures::*;
    use crate::models::TeamSide;
    use crate::tactics::TeamTactics;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn weight_of(menu: &[(ActionKind, f32)], kind: ActionKind) -> f32 {
        menu.iter().filter(|(k, _)| *k == kind).map(|(_, w)| *w).sum()
    }

    #[test]
    fn test_keeper_is_pass_only() {
        let state = open_play_state(TeamSide::Home, HOME_GK, Depth::Defense);
        let menu = open_play_menu(&state, state.player(HOME_GK).unwrap(), &ActionWeights::default());
        assert_eq!(menu, vec![(ActionKind::Pass, 1.0)]);
    }

    #[test]
    fn test_final_third_raises_shot_priority() {
        let weights = ActionWeights::default();
        let mid = open_play_state(TeamSide::Home, HOME_ST, Depth::Midfield);
        let att = open_play_state(TeamSide::Home, HOME_ST, Depth::Attack);
        let st = mid.player(HOME_ST).unwrap();

        let m = open_play_menu(&mid, st, &weights);
        let a = open_play_menu(&att, st, &weights);
        assert_eq!(weight_of(&m, ActionKind::Shoot), 3.0);
        assert_eq!(weight_of(&a, ActionKind::Shoot), 6.0);
        assert_eq!(weight_of(&a, ActionKind::Pass), 3.0);
        assert_eq!(weight_of(&a, ActionKind::Cross), 1.0);
    }

    #[test]
    fn test_defenders_never_shoot_or_cross() {
        let state = open_play_state(TeamSide::Home, HOME_CB, Depth::Defense);
        let menu = open_play_menu(&state, state.player(HOME_CB).unwrap(), &ActionWeights::default());
        assert_eq!(weight_of(&menu, ActionKind::Shoot), 0.0);
        assert_eq!(weight_of(&menu, ActionKind::Cross), 0.0);
        assert_eq!(weight_of(&menu, ActionKind::Pass), 7.0);
    }

    #[test]
    fn test_aerial_ball_offers_header() {
        let mut state = kickoff_state();
        let ctx = BallContext { must_shoot: true, aerial: true, ..BallContext::open_play() };
        state.give_ball(TeamSide::Home, HOME_ST, Depth::Attack, ctx);
        let menu = open_play_menu(&state, state.player(HOME_ST).unwrap(), &ActionWeights::default());
        assert_eq!(weight_of(&menu, ActionKind::Header), 6.0);
        assert_eq!(weight_of(&menu, ActionKind::Shoot), 0.0);
    }

    #[test]
    fn test_killer_pass_only_after_beating_a_man() {
        let weights = ActionWeights::default();
        let mut state = open_play_state(TeamSide::Home, HOME_LM, Depth::Midfield);
        let lm = state.player(HOME_LM).unwrap().clone();
        assert_eq!(weight_of(&open_play_menu(&state, &lm, &weights), ActionKind::KillerPass), 0.0);

        state.ball.context.beaten = Some(AWAY_CM);
        let w = weight_of(&open_play_menu(&state, &lm, &weights), ActionKind::KillerPass);
        assert_eq!(w, weights.midfield.killer_pass + weights.wide_killer_bonus);
    }

    #[test]
    fn test_high_press_adds_duel() {
        let mut state = open_play_state(TeamSide::Home, HOME_CM, Depth::Midfield);
        let cm = state.player(HOME_CM).unwrap().clone();
        assert_eq!(weight_of(&open_play_menu(&state, &cm, &ActionWeights::default()), ActionKind::Duel), 0.0);

        let pressing = (*state.away).clone().with_tactics(TeamTactics { high_press: true, ..TeamTactics::default() });
        state.away = Arc::new(pressing);
        assert_eq!(weight_of(&open_play_menu(&state, &cm, &ActionWeights::default()), ActionKind::Duel), 2.0);
    }

    #[test]
    fn test_step_routes_by_context() {
        let config = EngineConfig::test();
        let policy = WeightedRecipientPicker::from_config(&config.recipients);
        let book = CommentaryBook::default();
        let mut rng = StdRng::seed_from_u64(31);
        let mut ctx = ResolveCtx::new(&mut rng, &config, &policy, &book);

        let state = kickoff_state();
        let next = step(&state, &mut ctx);
        assert_eq!(next.log[0].event_type, crate::engine::events::EventType::KickOff);

        let mut loose = open_play_state(TeamSide::Home, HOME_ST, Depth::Attack);
        loose.loose_ball(TeamSide::Home, Depth::Attack);
        let next = step(&loose, &mut ctx);
        let first = next.log[0].event_type;
        assert!(matches!(
            first,
            crate::engine::events::EventType::Rebound | crate::engine::events::EventType::ReboundCleared
        ));
    }
}
