use crate::{
    error::Result,
    management::KvStore,
    spotify::client::{ApiClient, RequestDescriptor, decode},
    types::{SearchResponse, Track},
    utils,
};

/// Searches the catalog for tracks. An empty query returns an empty result
/// without touching the network; the limit is clamped to 1..=50.
pub async fn search_tracks<S: KvStore>(
    client: &ApiClient<S>,
    query: &str,
    limit: u8,
) -> Result<Vec<Track>> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let qs = utils::query_string([
        ("q", query.to_string()),
        ("type", "track".to_string()),
        ("limit", limit.clamp(1, 50).to_string()),
    ]);
    let body = client
        .request(RequestDescriptor::get(format!("/search?{qs}")))
        .await?;
    let res: SearchResponse = decode(body)?;
    Ok(res.tracks.items)
}
