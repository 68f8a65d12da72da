//! Canned game queries.

use std::fmt::Display;
use std::sync::OnceLock;

use apicalypse_core::{ApicalypseQueryBuilder, FieldExt, Result, serialize};

use crate::entities::ApiGame;
use crate::entities::schema::{HYPE_COUNT, ID, RELEASE_DATE, TOTAL_RATING, USERS_RATING};
use crate::timestamps::QueryTimestampProvider;

/// Builds the request bodies of the games endpoint.
///
/// The [`ApiGame`] field list is serialized on first use and reused by every
/// later query.
///
/// ```
/// use apicalypse_igdb::{
///     FixedClock, GamesQueryFactory, QueryWindows, SystemQueryTimestampProvider,
/// };
///
/// let timestamps =
///     SystemQueryTimestampProvider::with_clock(QueryWindows::default(), FixedClock(1_000));
/// let factory = GamesQueryFactory::new(timestamps);
///
/// let query = factory.coming_soon(0, 20).unwrap();
/// assert!(query.ends_with(
///     "where first_release_date > 1000;offset 0;limit 20;sort first_release_date asc;"
/// ));
/// ```
#[derive(Debug)]
pub struct GamesQueryFactory<P> {
    timestamps: P,
    game_fields: OnceLock<String>,
}

impl<P: QueryTimestampProvider> GamesQueryFactory<P> {
    pub fn new(timestamps: P) -> Self {
        Self {
            timestamps,
            game_fields: OnceLock::new(),
        }
    }

    pub fn timestamps(&self) -> &P {
        &self.timestamps
    }

    /// `search "<term>";` over all games
    pub fn search(&self, term: &str, offset: u32, limit: u32) -> Result<String> {
        Ok(self
            .games()?
            .search(term)
            .offset(offset)
            .limit(limit)
            .build())
    }

    /// Rated games released inside the popular window, best first
    pub fn popular(&self, offset: u32, limit: u32) -> Result<String> {
        let min_release_date = self.timestamps.popular_games_min_release_date();

        Ok(self
            .games()?
            .r#where(|w| {
                w.is_not_null(USERS_RATING)
                    .and(RELEASE_DATE.is_larger_than(min_release_date))
            })
            .offset(offset)
            .limit(limit)
            .sort_desc(TOTAL_RATING)
            .build())
    }

    /// Games released inside the recent window, newest first
    pub fn recently_released(&self, offset: u32, limit: u32) -> Result<String> {
        let min_release_date = self.timestamps.recently_released_games_min_release_date();
        let max_release_date = self.timestamps.recently_released_games_max_release_date();

        Ok(self
            .games()?
            .r#where(|w| {
                w.is_larger_than(RELEASE_DATE, min_release_date)
                    .and(RELEASE_DATE.is_smaller_than(max_release_date))
            })
            .offset(offset)
            .limit(limit)
            .sort_desc(RELEASE_DATE)
            .build())
    }

    /// Unreleased games, soonest first
    pub fn coming_soon(&self, offset: u32, limit: u32) -> Result<String> {
        let min_release_date = self.timestamps.coming_soon_games_min_release_date();

        Ok(self
            .games()?
            .r#where(|w| w.is_larger_than(RELEASE_DATE, min_release_date))
            .offset(offset)
            .limit(limit)
            .sort_asc(RELEASE_DATE)
            .build())
    }

    /// Unreleased games with hype, most hyped first
    pub fn most_anticipated(&self, offset: u32, limit: u32) -> Result<String> {
        let min_release_date = self.timestamps.most_anticipated_games_min_release_date();

        Ok(self
            .games()?
            .r#where(|w| {
                w.is_larger_than(RELEASE_DATE, min_release_date)
                    .and(HYPE_COUNT.is_not_null())
            })
            .offset(offset)
            .limit(limit)
            .sort_desc(HYPE_COUNT)
            .build())
    }

    /// The games with the given ids
    pub fn by_ids<I>(&self, ids: I, offset: u32, limit: u32) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Ok(self
            .games()?
            .r#where(|w| w.contains_any_of(ID, ids))
            .offset(offset)
            .limit(limit)
            .build())
    }

    /// A builder with the game field list selected.
    fn games(&self) -> Result<ApicalypseQueryBuilder> {
        Ok(ApicalypseQueryBuilder::new().select(self.game_fields()?))
    }

    fn game_fields(&self) -> Result<&str> {
        if let Some(fields) = self.game_fields.get() {
            return Ok(fields);
        }

        // Failures are returned as is and retried on the next call.
        let fields = serialize::<ApiGame>()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(len = fields.len(), "igdb.game_fields");

        Ok(self.game_fields.get_or_init(|| fields))
    }
}
