mod cache;
mod names;

pub mod client;
pub mod error;
pub mod fetch;
pub mod formats;
pub mod reconcile;
pub mod stats;
pub mod teams;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use fetch::{Fetcher, HttpFetcher};
pub use formats::{FormatFamilies, FormatFamily, fallback_chain, native_format};
pub use stats::{MovesetStatistics, UsageStatistics};
pub use teams::Team;
pub use types::{Alt, Analysis, AnalysisSet, Credits, Member, Moveset, PokemonSet};
