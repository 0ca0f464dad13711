pub mod generation;
pub mod id;
pub mod species;
pub mod stats;
pub mod tier;
pub mod types;

pub use generation::Generation;
pub use id::to_id;
pub use species::{Nonstandard, Species};
pub use stats::{PartialStats, Stat, StatsTable};
pub use tier::{Tier, TierParseError};
pub use types::{HiddenPower, Type, TypeParseError};
