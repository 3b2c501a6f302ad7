pub mod player;
pub mod setup;
pub mod team;

pub use player::{Player, PlayerId, Position, PositionGroup, PLACEHOLDER_PLAYER_ID};
pub use setup::MatchSetup;
pub use team::{LineupSlot, Team, TeamSide, LINEUP_SIZE};
