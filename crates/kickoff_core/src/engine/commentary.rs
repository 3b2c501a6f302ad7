//! Commentary templates
//!
//! One pool of template strings per event type. Rendering picks a template
//! uniformly and fills `{player}`, `{opponent}`, `{recipient}`, `{minute}`
//! and `{team}`. Missing names fall back to generic wording so rendering
//! can never fail.

use once_cell::sync::Lazy;
use rand::{Rng, RngCore};
use std::collections::HashMap;

use super::events::EventType;

const FALLBACK_PLAYER: &str = "A player";
const FALLBACK_OPPONENT: &str = "an opponent";
const FALLBACK_TEAM: &str = "the team";
const FALLBACK_TEMPLATE: &str = "{minute}' {player} is involved.";

static DEFAULT_TEMPLATES: Lazy<HashMap<EventType, Vec<&'static str>>> = Lazy::new(|| {
    use EventType::*;
    let mut m = HashMap::new();
    m.insert(KickOff, vec![
        "{minute}' {team} get us underway through {player}.",
        "{minute}' {player} rolls it forward for the kickoff.",
    ]);
    m.insert(Pass, vec![
        "{minute}' {player} finds {recipient}.",
        "{minute}' Neat ball from {player} into {recipient}.",
        "{minute}' {player} plays it to {recipient}.",
    ]);
    m.insert(PassIntercepted, vec![
        "{minute}' {opponent} reads {player}'s pass and steps in.",
        "{minute}' {player} gives it away, {opponent} intercepts.",
    ]);
    m.insert(Dribble, vec![
        "{minute}' {player} skips past {opponent}!",
        "{minute}' {player} drives at {opponent} and leaves them for dead.",
    ]);
    m.insert(DribbleLost, vec![
        "{minute}' {opponent} stands firm and takes it off {player}.",
        "{minute}' {player} tries to go past {opponent} but loses it.",
    ]);
    m.insert(ShotOffTarget, vec![
        "{minute}' {player} shoots... wide.",
        "{minute}' {player} lets fly but it sails over the bar.",
    ]);
    m.insert(ShotSaved, vec![
        "{minute}' {opponent} saves from {player}!",
        "{minute}' Good stop by {opponent} to deny {player}.",
    ]);
    m.insert(Goal, vec![
        "{minute}' GOAL! {player} scores for {team}!",
        "{minute}' GOAL! {player} beats {opponent} and it's in!",
    ]);
    m.insert(EmptyNetGoal, vec![
        "{minute}' GOAL! {player} rolls it into an empty net for {team}.",
        "{minute}' GOAL! Nobody in goal and {player} makes no mistake.",
    ]);
    m.insert(HeaderGoal, vec![
        "{minute}' GOAL! {player} rises and heads it past {opponent}!",
        "{minute}' GOAL! A towering header from {player}!",
    ]);
    m.insert(FreeKickGoal, vec![
        "{minute}' GOAL! {player} curls the free kick past {opponent}!",
        "{minute}' GOAL! What a set piece from {player}!",
    ]);
    m.insert(GoalKick, vec![
        "{minute}' Goal kick, {player} restarts for {team}.",
    ]);
    m.insert(Cross, vec![
        "{minute}' {player} whips it in and {recipient} is there!",
        "{minute}' Inviting cross from {player} towards {recipient}.",
    ]);
    m.insert(CrossFailed, vec![
        "{minute}' {player}'s cross is cut out by {opponent}.",
        "{minute}' {player} crosses, {opponent} clears.",
    ]);
    m.insert(ThroughBall, vec![
        "{minute}' {player} splits the defence for {recipient}!",
        "{minute}' Lovely through ball from {player} to {recipient}.",
    ]);
    m.insert(ThroughBallFailed, vec![
        "{minute}' {player} tries to thread it through, {opponent} cuts it out.",
    ]);
    m.insert(KillerPass, vec![
        "{minute}' Killer pass! {player} puts {recipient} clean through!",
        "{minute}' {player} unlocks everything with a ball to {recipient}.",
    ]);
    m.insert(KillerPassFailed, vec![
        "{minute}' {player} goes for the killer ball but {opponent} is alert.",
    ]);
    m.insert(DuelWon, vec![
        "{minute}' {player} wins the battle with {opponent}.",
        "{minute}' {player} muscles {opponent} off the ball.",
    ]);
    m.insert(DuelLost, vec![
        "{minute}' {opponent} gets the better of {player}.",
    ]);
    m.insert(Foul, vec![
        "{minute}' Foul by {player} on {opponent}.",
        "{minute}' {player} clips {opponent}, the referee blows.",
    ]);
    m.insert(FreeKick, vec![
        "{minute}' {player} stands over the free kick for {team}.",
        "{minute}' Free kick to {team}, {player} to take.",
    ]);
    m.insert(Rebound, vec![
        "{minute}' {player} reacts first to the loose ball!",
        "{minute}' {player} beats {opponent} to the rebound!",
    ]);
    m.insert(ReboundCleared, vec![
        "{minute}' {opponent} hacks the loose ball away from {player}.",
        "{minute}' Scramble in the box, {opponent} clears.",
    ]);
    m.insert(FullTime, vec![
        "{minute}' Full time.",
        "{minute}' The referee blows for full time.",
    ]);
    m
});

/// Names substituted into a template. `None` uses the fallback wording.
#[derive(Debug, Clone, Default)]
pub struct CommentaryVars {
    pub minute: u8,
    pub player: Option<String>,
    pub secondary: Option<String>,
    pub team: Option<String>,
}

/// Template pools keyed by event type.
#[derive(Debug, Clone)]
pub struct CommentaryBook {
    pools: HashMap<EventType, Vec<String>>,
}

impl Default for CommentaryBook {
    fn default() -> Self {
        let pools = DEFAULT_TEMPLATES
            .iter()
            .map(|(k, v)| (*k, v.iter().map(|s| s.to_string()).collect()))
            .collect();
        Self { pools }
    }
}

impl CommentaryBook {
    pub fn empty() -> Self {
        Self { pools: HashMap::new() }
    }

    /// Replace the pool for one event type.
    pub fn with_pool(mut self, event_type: EventType, templates: Vec<String>) -> Self {
        self.pools.insert(event_type, templates);
        self
    }

    pub fn pool(&self, event_type: EventType) -> &[String] {
        self.pools.get(&event_type).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn render(&self, event_type: EventType, vars: &CommentaryVars, rng: &mut dyn RngCore) -> String {
        let pool = self.pool(event_type);
        let template = if pool.is_empty() {
            FALLBACK_TEMPLATE
        } else {
            pool[rng.gen_range(0..pool.len())].as_str()
        };
        fill(template, vars)
    }
}

fn fill(template: &str, vars: &CommentaryVars) -> String {
    let player = vars.player.as_deref().unwrap_or(FALLBACK_PLAYER);
    let secondary = vars.secondary.as_deref().unwrap_or(FALLBACK_OPPONENT);
    let team = vars.team.as_deref().unwrap_or(FALLBACK_TEAM);
    template
        .replace("{minute}", &vars.minute.to_string())
        .replace("{player}", player)
        .replace("{opponent}", secondary)
        .replace("{recipient}", secondary)
        .replace("{team}", team)
}
