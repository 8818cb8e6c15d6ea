use std::{fmt, str::FromStr};

use crate::{
    error::Result,
    management::KvStore,
    spotify::client::{ApiClient, RequestDescriptor, decode},
    types::{Artist, RecentlyPlayedResponse, TopItemsResponse, Track, UserProfile},
    utils,
};

/// Listening-history window accepted by the top-artists/top-tracks
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Short,
    #[default]
    Medium,
    Long,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" | "short_term" => Ok(TimeRange::Short),
            "medium" | "medium_term" => Ok(TimeRange::Medium),
            "long" | "long_term" => Ok(TimeRange::Long),
            other => Err(format!(
                "invalid time range '{other}', expected short, medium or long"
            )),
        }
    }
}

/// Retrieves the authenticated user's profile.
pub async fn get_profile<S: KvStore>(client: &ApiClient<S>) -> Result<UserProfile> {
    let body = client.request(RequestDescriptor::get("/me")).await?;
    decode(body)
}

/// Retrieves the user's top artists over the given window. The limit is
/// clamped into the provider's accepted 1..=50 range.
pub async fn get_top_artists<S: KvStore>(
    client: &ApiClient<S>,
    limit: u8,
    window: TimeRange,
) -> Result<Vec<Artist>> {
    let query = utils::query_string([
        ("limit", limit.clamp(1, 50).to_string()),
        ("time_range", window.to_string()),
    ]);
    let body = client
        .request(RequestDescriptor::get(format!("/me/top/artists?{query}")))
        .await?;
    let res: TopItemsResponse<Artist> = decode(body)?;
    Ok(res.items)
}

/// Retrieves the user's top tracks over the given window.
pub async fn get_top_tracks<S: KvStore>(
    client: &ApiClient<S>,
    limit: u8,
    window: TimeRange,
) -> Result<Vec<Track>> {
    let query = utils::query_string([
        ("limit", limit.clamp(1, 50).to_string()),
        ("time_range", window.to_string()),
    ]);
    let body = client
        .request(RequestDescriptor::get(format!("/me/top/tracks?{query}")))
        .await?;
    let res: TopItemsResponse<Track> = decode(body)?;
    Ok(res.items)
}

/// Retrieves the user's most recently played tracks.
pub async fn get_recently_played<S: KvStore>(
    client: &ApiClient<S>,
    limit: u8,
) -> Result<Vec<Track>> {
    let query = utils::query_string([("limit", limit.clamp(1, 50).to_string())]);
    let body = client
        .request(RequestDescriptor::get(format!(
            "/me/player/recently-played?{query}"
        )))
        .await?;
    let res: RecentlyPlayedResponse = decode(body)?;
    Ok(res.items.into_iter().map(|item| item.track).collect())
}
