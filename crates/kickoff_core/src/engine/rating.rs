//! Rating & stats tracker
//!
//! Resolvers call these on the state they are building, in the same call
//! that decides the outcome. Nothing updates counters out of band.

use std::collections::BTreeMap;

use super::config::{RatingConfig, RatingDelta};
use super::match_state::{MatchState, PlayerStats, Rating};
use crate::models::{Player, PlayerId};

pub fn initial_ratings(players: &[Player], cfg: &RatingConfig) -> BTreeMap<PlayerId, Rating> {
    players.iter().map(|p| (p.id, Rating(cfg.baseline))).collect()
}

pub fn initial_stats(players: &[Player]) -> BTreeMap<PlayerId, PlayerStats> {
    players.iter().map(|p| (p.id, PlayerStats::default())).collect()
}

/// Apply `delta` to `current`, clamped into the configured bounds.
pub fn apply_delta(current: Rating, delta: RatingDelta, cfg: &RatingConfig) -> Rating {
    Rating(cfg.clamp(current.0 as i32 + delta as i32))
}

/// One decay step toward baseline; never overshoots it.
pub fn decay_toward_baseline(current: Rating, cfg: &RatingConfig) -> Rating {
    let step = cfg.decay_per_tick as i32;
    let current = current.0 as i32;
    let diff = current - cfg.baseline as i32;
    let next = if diff > 0 { current - diff.min(step) } else { current + (-diff).min(step) };
    Rating(cfg.clamp(next))
}

impl MatchState {
    /// Placeholders and unknown ids are ignored.
    pub(crate) fn adjust_rating(&mut self, id: PlayerId, delta: RatingDelta, cfg: &RatingConfig) {
        if let Some(r) = self.ratings.get_mut(&id) {
            *r = apply_delta(*r, delta, cfg);
        }
    }

    pub(crate) fn record(&mut self, id: PlayerId, update: impl FnOnce(&mut PlayerStats)) {
        if let Some(s) = self.stats.get_mut(&id) {
            update(s);
        }
    }

    pub(crate) fn decay_ratings(&mut self, cfg: &RatingConfig) {
        if cfg.decay_per_tick == 0 {
            return;
        }
        for r in self.ratings.values_mut() {
            *r = decay_toward_baseline(*r, cfg);
        }
    }
}
