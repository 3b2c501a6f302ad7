//! Probability engine for action resolution
//!
//! Every contest in the engine is `base + (effA - effB) / K + noise`.
//! The nominal `base` is the skill-equal success rate; each resolver then
//! compares the sampled value against its own threshold.
//!
//! All functions take the generator explicitly so a match replays exactly
//! under a fixed seed.

use rand::{Rng, RngCore};
use tracing::trace;

use super::config::{ContestParams, PositionModifiers};
use crate::models::Player;

/// Scale used by `sample()` when a call site does not tune its own.
pub const DEFAULT_SCALE: f32 = 100.0;

/// Sample with the default scale constant.
pub fn sample(
    rng: &mut dyn RngCore,
    base: f32,
    rating_a: f32,
    rating_b: f32,
    mod_a: f32,
    mod_b: f32,
    spread: f32,
) -> f32 {
    sample_scaled(rng, base, rating_a, rating_b, mod_a, mod_b, spread, DEFAULT_SCALE)
}

/// `base + (a*modA - b*modB) / scale + U(-spread, spread)`
///
/// A zero spread draws nothing from the generator.
pub fn sample_scaled(
    rng: &mut dyn RngCore,
    base: f32,
    rating_a: f32,
    rating_b: f32,
    mod_a: f32,
    mod_b: f32,
    spread: f32,
    scale: f32,
) -> f32 {
    let eff_a = rating_a * mod_a;
    let eff_b = rating_b * mod_b;
    let diff = (eff_a - eff_b) / scale.max(f32::EPSILON);
    let noise = if spread > 0.0 { rng.gen_range(-spread..=spread) } else { 0.0 };
    base + diff + noise
}

/// Outcome of one contest roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contest {
    pub value: f32,
    pub threshold: f32,
}

impl Contest {
    pub fn success(&self) -> bool {
        self.value > self.threshold
    }
}

/// Roll a configured contest. `shift` moves the base (tactics, zone).
pub fn contest(
    rng: &mut dyn RngCore,
    params: &ContestParams,
    rating_a: f32,
    mod_a: f32,
    rating_b: f32,
    mod_b: f32,
    shift: f32,
) -> Contest {
    let value = sample_scaled(
        rng,
        params.base + shift,
        rating_a,
        rating_b,
        mod_a,
        mod_b,
        params.spread,
        params.scale,
    );
    trace!(value, threshold = params.threshold, "contest sampled");
    Contest { value, threshold: params.threshold }
}

/// Skills a resolver can ask a player for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    Pass,
    Dribble,
    Shoot,
    Tackle,
    Save,
    Cross,
    Header,
}

/// Position multiplier for `skill` (the `mod` argument of `sample`).
pub fn skill_modifier(modifiers: &PositionModifiers, player: &Player, skill: Skill) -> f32 {
    let m = modifiers.for_group(player.group);
    match skill {
        Skill::Pass => m.pass,
        Skill::Dribble => m.dribble,
        Skill::Shoot => m.shoot,
        Skill::Tackle => m.tackle,
        Skill::Save => m.save,
        Skill::Cross => {
            if player.position.is_wide() {
                m.cross + modifiers.wide_cross_bonus
            } else {
                m.cross
            }
        }
        Skill::Header => m.header,
    }
}

/// Roll a contest between two players on their respective skills.
pub fn player_contest(
    rng: &mut dyn RngCore,
    params: &ContestParams,
    modifiers: &PositionModifiers,
    attacker: &Player,
    attack_skill: Skill,
    defender: &Player,
    defend_skill: Skill,
    shift: f32,
) -> Contest {
    contest(
        rng,
        params,
        attacker.strength as f32,
        skill_modifier(modifiers, attacker, attack_skill),
        defender.strength as f32,
        skill_modifier(modifiers, defender, defend_skill),
        shift,
    )
}
