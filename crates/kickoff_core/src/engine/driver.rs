//! Match Driver (tick loop)
//!
//! Owns the authoritative `MatchState` and the per-match generator. Each
//! tick advances the clock by the configured step, routes one action
//! through the selector and stores the resulting state. The match ends
//! when the clock reaches the configured length: one FullTime entry is
//! appended, the log is normalized and the state stops changing.
//!
//! ```rust,ignore
//! let mut engine = MatchEngine::new(&setup, 42, EngineConfig::default())?;
//! while !engine.is_finished() {
//!     let state = engine.tick(); // live playback
//! }
//! let result = engine.result();
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

use super::actions::{set_kickoff, ResolveCtx};
use super::commentary::CommentaryBook;
use super::config::{EngineConfig, KickoffRule};
use super::events::{normalize_log, EventType};
use super::match_state::{BallContext, BallState, MatchState};
use super::rating::{initial_ratings, initial_stats};
use super::result::MatchResult;
use super::selection::{policy_for, RecipientPolicy};
use super::selector;
use super::zone::{Depth, Zone};
use crate::error::Result;
use crate::models::{MatchSetup, TeamSide};

/// Minute 0, kickoff context, everyone on the baseline rating.
pub(crate) fn initial_state(setup: &MatchSetup, config: &EngineConfig, kicking_off: TeamSide) -> MatchState {
    let players = setup.starters();
    let mut state = MatchState {
        minute: 0,
        match_length: config.clock.match_length,
        home: Arc::new(setup.home.clone()),
        away: Arc::new(setup.away.clone()),
        ratings: initial_ratings(&players, &config.ratings),
        stats: initial_stats(&players),
        players: Arc::new(players),
        ball: BallState {
            possession: kicking_off,
            carrier: None,
            zone: Zone::new(kicking_off, Depth::Midfield),
            context: BallContext::kickoff(),
        },
        score_home: 0,
        score_away: 0,
        log: Vec::new(),
        competitive: setup.competitive,
        finished: false,
    };
    set_kickoff(&mut state, kicking_off);
    state
}

/// One tick as a pure function of the previous state.
pub fn advance(state: &MatchState, ctx: &mut ResolveCtx) -> MatchState {
    if state.finished {
        return state.clone();
    }
    let clock = &ctx.config.clock;
    let mut clocked = state.clone();
    clocked.minute = state.minute.saturating_add(clock.minute_step).min(clock.match_length);

    let mut next = selector::step(&clocked, ctx);
    next.decay_ratings(&ctx.config.ratings);
    debug_assert!(next.is_consistent(), "inconsistent ball state at minute {}", next.minute);

    if next.minute >= next.match_length {
        finish(&mut next, ctx);
    }
    next
}

fn finish(state: &mut MatchState, ctx: &mut ResolveCtx) {
    ctx.log(state, EventType::FullTime, None, None);
    normalize_log(&mut state.log, state.match_length);
    state.finished = true;
}

/// A single match: state, generator, policy and commentary.
pub struct MatchEngine {
    config: EngineConfig,
    commentary: CommentaryBook,
    policy: Box<dyn RecipientPolicy>,
    rng: ChaCha8Rng,
    seed: u64,
    state: MatchState,
}

impl MatchEngine {
    /// Validate inputs and set up minute 0. Fails before any tick runs.
    pub fn new(setup: &MatchSetup, seed: u64, config: EngineConfig) -> Result<Self> {
        setup.validate()?;
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let kicking_off = match config.clock.kickoff {
            KickoffRule::Home => TeamSide::Home,
            KickoffRule::Random => {
                if rng.gen_bool(0.5) {
                    TeamSide::Home
                } else {
                    TeamSide::Away
                }
            }
        };
        let state = initial_state(setup, &config, kicking_off);
        let policy = policy_for(&config.recipients);
        info!(
            seed,
            home = %setup.home.name,
            away = %setup.away.name,
            ?kicking_off,
            policy = policy.name(),
            "match initialised"
        );

        Ok(Self { config, commentary: CommentaryBook::default(), policy, rng, seed, state })
    }

    pub fn with_commentary(mut self, commentary: CommentaryBook) -> Self {
        self.commentary = commentary;
        self
    }

    /// Swap in a custom recipient policy.
    pub fn with_policy(mut self, policy: Box<dyn RecipientPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// Advance one tick and return the new state. A no-op once finished.
    pub fn tick(&mut self) -> &MatchState {
        if self.state.finished {
            return &self.state;
        }
        let mut ctx = ResolveCtx::new(&mut self.rng, &self.config, self.policy.as_ref(), &self.commentary);
        let next = advance(&self.state, &mut ctx);
        self.state = next;

        debug!(
            minute = self.state.minute,
            context = ?self.state.ball.context.kind,
            possession = ?self.state.ball.possession,
            "tick"
        );
        if self.state.finished {
            info!(
                seed = self.seed,
                home = self.state.score_home,
                away = self.state.score_away,
                events = self.state.log.len(),
                "full time"
            );
        }
        &self.state
    }

    /// Run to completion.
    pub fn run(mut self) -> MatchResult {
        while !self.state.finished {
            self.tick();
        }
        self.result()
    }

    pub fn result(&self) -> MatchResult {
        MatchResult::from_state(&self.state, self.seed)
    }
}

/// Validate, run one match to completion.
pub fn simulate(setup: &MatchSetup, seed: u64, config: EngineConfig) -> Result<MatchResult> {
    Ok(MatchEngine::new(setup, seed, config)?.run())
}

/// `count` independent matches in parallel, match `i` seeded `base_seed + i`.
///
/// Results come back in index order regardless of scheduling.
pub fn simulate_batch(
    setup: &MatchSetup,
    base_seed: u64,
    count: usize,
    config: &EngineConfig,
) -> Result<Vec<MatchResult>> {
    setup.validate()?;
    config.validate()?;
    (0..count)
        .into_par_iter()
        .map(|i| simulate(setup, base_seed.wrapping_add(i as u64), config.clone()))
        .collect()
}
