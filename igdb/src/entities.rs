//! Game-catalog entity shapes.
//!
//! Related entities (release dates, genres, platforms, ...) are fetched as id
//! arrays and declared as scalar collections. Only the cover image is expanded
//! inline.

use apicalypse_macros::Apicalypse;

/// Query names of [`ApiGame`] fields, for use in filters and sorts.
pub mod schema {
    pub const ID: &str = "id";
    pub const FOLLOWER_COUNT: &str = "follows";
    pub const HYPE_COUNT: &str = "hypes";
    pub const RELEASE_DATE: &str = "first_release_date";
    pub const CRITICS_RATING: &str = "aggregated_rating";
    pub const USERS_RATING: &str = "rating";
    pub const TOTAL_RATING: &str = "total_rating";
    pub const NAME: &str = "name";
    pub const SUMMARY: &str = "summary";
    pub const STORYLINE: &str = "storyline";
    pub const CATEGORY: &str = "category";
    pub const COVER: &str = "cover";
    pub const RELEASE_DATES: &str = "release_dates";
    pub const AGE_RATINGS: &str = "age_ratings";
    pub const VIDEOS: &str = "videos";
    pub const ARTWORKS: &str = "artworks";
    pub const SCREENSHOTS: &str = "screenshots";
    pub const GENRES: &str = "genres";
    pub const PLATFORMS: &str = "platforms";
    pub const PLAYER_PERSPECTIVES: &str = "player_perspectives";
    pub const THEMES: &str = "themes";
    pub const MODES: &str = "game_modes";
    pub const KEYWORDS: &str = "keywords";
    pub const INVOLVED_COMPANIES: &str = "involved_companies";
    pub const WEBSITES: &str = "websites";
    pub const SIMILAR_GAMES: &str = "similar_games";
}

/// Cover, artwork, or screenshot image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Apicalypse)]
#[apicalypse(name = "Image")]
pub struct ApiImage {
    #[apicalypse]
    pub id: u64,
    #[apicalypse]
    pub image_id: String,
    #[apicalypse]
    pub width: Option<u32>,
    #[apicalypse]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Apicalypse)]
#[apicalypse(name = "Game")]
pub struct ApiGame {
    #[apicalypse(name = "id")]
    pub id: u64,
    #[apicalypse(name = "follows")]
    pub follower_count: Option<u32>,
    #[apicalypse(name = "hypes")]
    pub hype_count: Option<u32>,
    #[apicalypse(name = "first_release_date")]
    pub release_date: Option<i64>,
    #[apicalypse(name = "aggregated_rating")]
    pub critics_rating: Option<f64>,
    #[apicalypse(name = "rating")]
    pub users_rating: Option<f64>,
    #[apicalypse(name = "total_rating")]
    pub total_rating: Option<f64>,
    #[apicalypse(name = "name")]
    pub name: String,
    #[apicalypse(name = "summary")]
    pub summary: Option<String>,
    #[apicalypse(name = "storyline")]
    pub storyline: Option<String>,
    #[apicalypse(name = "category")]
    pub category: u8,
    #[apicalypse(name = "cover", nested)]
    pub cover: Option<ApiImage>,
    #[apicalypse(name = "release_dates")]
    pub release_dates: Vec<u64>,
    #[apicalypse(name = "age_ratings")]
    pub age_ratings: Vec<u64>,
    #[apicalypse(name = "videos")]
    pub videos: Vec<u64>,
    #[apicalypse(name = "artworks")]
    pub artworks: Vec<u64>,
    #[apicalypse(name = "screenshots")]
    pub screenshots: Vec<u64>,
    #[apicalypse(name = "genres")]
    pub genres: Vec<u64>,
    #[apicalypse(name = "platforms")]
    pub platforms: Vec<u64>,
    #[apicalypse(name = "player_perspectives")]
    pub player_perspectives: Vec<u64>,
    #[apicalypse(name = "themes")]
    pub themes: Vec<u64>,
    #[apicalypse(name = "game_modes")]
    pub modes: Vec<u64>,
    #[apicalypse(name = "keywords")]
    pub keywords: Vec<u64>,
    #[apicalypse(name = "involved_companies")]
    pub involved_companies: Vec<u64>,
    #[apicalypse(name = "websites")]
    pub websites: Vec<u64>,
    #[apicalypse(name = "similar_games")]
    pub similar_games: Vec<u64>,
}
