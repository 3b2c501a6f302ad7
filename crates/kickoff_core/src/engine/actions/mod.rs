//! Action resolvers
//!
//! One pure transformation per action kind: `(state, actor) -> new state`.
//! A resolver clones its input, rolls the outcome, moves the ball, updates
//! counters and ratings, and appends its log entries, all in the same call.

mod cross_through;
mod dribble;
mod duel;
mod foul;
mod pass;
mod rebound;
mod set_pieces;
mod shoot;

pub use cross_through::{resolve_cross, resolve_killer_pass, resolve_through_ball};
pub use dribble::resolve_dribble;
pub use duel::resolve_duel;
pub use foul::resolve_foul;
pub use pass::resolve_pass;
pub use rebound::resolve_rebound;
pub use set_pieces::{resolve_free_kick, resolve_kickoff};
pub use shoot::{resolve_header, resolve_shot, ShotKind};

use rand::RngCore;
use std::fmt;

use super::commentary::{CommentaryBook, CommentaryVars};
use super::config::EngineConfig;
use super::events::{EventType, MatchEvent};
use super::match_state::{BallContext, MatchState};
use super::selection::{kickoff_taker, RecipientPolicy};
use super::zone::Depth;
use crate::models::{Player, TeamSide};

/// Actions the open-play menu can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Pass,
    Dribble,
    ThroughBall,
    Cross,
    Shoot,
    Header,
    KillerPass,
    Duel,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Pass => "PASS",
            ActionKind::Dribble => "DRIBBLE",
            ActionKind::ThroughBall => "THROUGH_BALL",
            ActionKind::Cross => "CROSS",
            ActionKind::Shoot => "SHOOT",
            ActionKind::Header => "HEADER",
            ActionKind::KillerPass => "KILLER_PASS",
            ActionKind::Duel => "DUEL",
        };
        f.write_str(name)
    }
}

/// Everything a resolver needs besides the state itself.
pub struct ResolveCtx<'a> {
    pub rng: &'a mut dyn RngCore,
    pub config: &'a EngineConfig,
    pub recipients: &'a dyn RecipientPolicy,
    pub commentary: &'a CommentaryBook,
}

impl<'a> ResolveCtx<'a> {
    pub fn new(
        rng: &'a mut dyn RngCore,
        config: &'a EngineConfig,
        recipients: &'a dyn RecipientPolicy,
        commentary: &'a CommentaryBook,
    ) -> Self {
        Self { rng, config, recipients, commentary }
    }

    /// Render and append one log entry at the state's current minute.
    ///
    /// A placeholder secondary keeps its name in the text but gets no id.
    pub fn log(
        &mut self,
        state: &mut MatchState,
        event_type: EventType,
        player: Option<&Player>,
        secondary: Option<&Player>,
    ) {
        let side = player.map(|p| state.side_of(p));
        let vars = CommentaryVars {
            minute: state.minute,
            player: player.map(Player::display_name),
            secondary: secondary.map(Player::display_name),
            team: side.map(|s| state.team(s).name.clone()),
        };
        let text = self.commentary.render(event_type, &vars, &mut *self.rng);
        state.log.push(MatchEvent {
            minute: state.minute,
            event_type,
            category: event_type.category(),
            text,
            side,
            player: player.filter(|p| !p.is_placeholder()).map(|p| p.id),
            secondary: secondary.filter(|p| !p.is_placeholder()).map(|p| p.id),
        });
    }
}

/// `winner` of `side` takes the ball in `depth`.
///
/// A placeholder cannot carry the ball, so the first real player of `side`
/// takes it instead; with nobody on that side the ball stays where it was.
pub(crate) fn hand_over(
    next: &mut MatchState,
    side: TeamSide,
    winner: &Player,
    depth: Depth,
    context: BallContext,
) {
    let id = if winner.is_placeholder() {
        next.team_players(side).next().map(|p| p.id)
    } else {
        Some(winner.id)
    };
    if let Some(id) = id {
        next.give_ball(side, id, depth, context);
    }
}

/// Ball lost to `defender`: possession flips and the zone is mirrored.
pub(crate) fn turnover(next: &mut MatchState, defender: &Player) {
    let side = next.ball.possession.opponent();
    let depth = next.ball.zone.mirror().depth;
    hand_over(next, side, defender, depth, BallContext::open_play());
}

/// Kickoff to `side`, or to the other team if `side` has nobody to take it.
pub(crate) fn set_kickoff(next: &mut MatchState, side: TeamSide) {
    let taker = kickoff_taker(next, side)
        .map(|p| (side, p.id))
        .or_else(|| kickoff_taker(next, side.opponent()).map(|p| (side.opponent(), p.id)));
    if let Some((side, id)) = taker {
        next.give_ball(side, id, Depth::Midfield, BallContext::kickoff());
    }
}
