//! Release-date windows used by the canned queries.

use chrono::TimeDelta;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_POPULAR_WINDOW_DAYS: u32 = 90;
const DEFAULT_RECENT_WINDOW_DAYS: u32 = 7;

/// Errors raised while loading [`QueryWindows`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse query windows: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How far back the popular and recently released queries look.
///
/// ```
/// use apicalypse_igdb::QueryWindows;
///
/// let windows = QueryWindows::from_toml_str("popular_days = 30").unwrap();
/// assert_eq!(windows.popular_days, 30);
/// assert_eq!(windows.recent_days, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryWindows {
    /// Oldest release date, in days before now, still counted as popular
    pub popular_days: u32,
    /// Width, in days, of the recently released range ending now
    pub recent_days: u32,
}

impl Default for QueryWindows {
    fn default() -> Self {
        Self {
            popular_days: DEFAULT_POPULAR_WINDOW_DAYS,
            recent_days: DEFAULT_RECENT_WINDOW_DAYS,
        }
    }
}

impl QueryWindows {
    /// Parses windows from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn popular(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.popular_days))
    }

    pub fn recent(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.recent_days))
    }
}
