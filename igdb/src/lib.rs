//! Game-catalog shapes and canned queries for the IGDB Apicalypse endpoint.
//!
//! [`GamesQueryFactory`] produces the request bodies a game browser needs:
//! search, popular, recently released, coming soon, most anticipated, and
//! lookups by id. Release-date bounds come from a [`QueryTimestampProvider`],
//! whose windows are configured through [`QueryWindows`].

pub mod config;
pub mod entities;
pub mod queries;
pub mod timestamps;

pub use config::{ConfigError, QueryWindows};
pub use entities::{ApiGame, ApiImage};
pub use queries::GamesQueryFactory;
pub use timestamps::{
    Clock, FixedClock, QueryTimestampProvider, SystemClock, SystemQueryTimestampProvider,
};
