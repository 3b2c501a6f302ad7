//! Match engine: zone model, probability rolls, selection, resolvers and the
//! tick driver.

pub mod actions;
pub mod commentary;
pub mod config;
pub mod driver;
pub mod events;
pub mod match_state;
pub mod probability;
pub mod rating;
pub mod result;
pub mod selection;
pub mod selector;
pub mod weights;
pub mod zone; // 6-zone pitch, possession-relative depth

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use actions::{ActionKind, ResolveCtx};
pub use commentary::CommentaryBook;
pub use config::EngineConfig;
pub use driver::{advance, simulate, simulate_batch, MatchEngine};
pub use events::{EventCategory, EventType, MatchEvent};
pub use match_state::{BallContext, BallState, ContextKind, MatchState, PlayerStats, Rating};
pub use result::{MatchResult, TeamTotals};
pub use selection::{PassIntent, RecipientPolicy, SoftmaxRecipientScorer, WeightedRecipientPicker};
pub use zone::{Depth, Zone};
