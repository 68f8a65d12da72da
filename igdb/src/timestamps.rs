//! Release-date bounds, in Unix seconds, for the time-windowed queries.

use chrono::Utc;

use crate::config::QueryWindows;

/// Source of the release-date bounds used by [`GamesQueryFactory`](crate::GamesQueryFactory).
pub trait QueryTimestampProvider {
    /// Popular games must have been released after this moment.
    fn popular_games_min_release_date(&self) -> i64;

    /// Start of the recently released range.
    fn recently_released_games_min_release_date(&self) -> i64;

    /// End of the recently released range.
    fn recently_released_games_max_release_date(&self) -> i64;

    /// Coming soon games are released after this moment.
    fn coming_soon_games_min_release_date(&self) -> i64;

    /// Most anticipated games are released after this moment.
    fn most_anticipated_games_min_release_date(&self) -> i64;
}

/// Current time in Unix seconds.
pub trait Clock {
    fn unix_timestamp(&self) -> i64;
}

/// Wall clock, read through [`chrono::Utc`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock stopped at a given Unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}

/// Derives every bound from one clock reading and the configured windows.
///
/// ```
/// use apicalypse_igdb::{
///     FixedClock, QueryTimestampProvider, QueryWindows, SystemQueryTimestampProvider,
/// };
///
/// let provider =
///     SystemQueryTimestampProvider::with_clock(QueryWindows::default(), FixedClock(1_000_000));
/// assert_eq!(provider.coming_soon_games_min_release_date(), 1_000_000);
/// assert_eq!(provider.recently_released_games_min_release_date(), 1_000_000 - 7 * 86_400);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemQueryTimestampProvider<C = SystemClock> {
    windows: QueryWindows,
    clock: C,
}

impl SystemQueryTimestampProvider {
    pub fn new(windows: QueryWindows) -> Self {
        Self::with_clock(windows, SystemClock)
    }
}

impl<C: Clock> SystemQueryTimestampProvider<C> {
    pub fn with_clock(windows: QueryWindows, clock: C) -> Self {
        Self { windows, clock }
    }

    pub fn windows(&self) -> &QueryWindows {
        &self.windows
    }

    fn now(&self) -> i64 {
        self.clock.unix_timestamp()
    }
}

impl<C: Clock> QueryTimestampProvider for SystemQueryTimestampProvider<C> {
    fn popular_games_min_release_date(&self) -> i64 {
        self.now() - self.windows.popular().num_seconds()
    }

    fn recently_released_games_min_release_date(&self) -> i64 {
        self.recently_released_games_max_release_date() - self.windows.recent().num_seconds()
    }

    fn recently_released_games_max_release_date(&self) -> i64 {
        self.now()
    }

    fn coming_soon_games_min_release_date(&self) -> i64 {
        self.now()
    }

    fn most_anticipated_games_min_release_date(&self) -> i64 {
        self.now()
    }
}
