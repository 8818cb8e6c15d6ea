use crate::{
    error::{Error, Result},
    management::KvStore,
    mapping::AudioTargets,
    spotify::client::{ApiClient, RequestDescriptor, decode},
    types::{RecommendationsResponse, Track},
    utils,
};

/// The provider accepts at most five seed ids across tracks, artists and
/// genres combined.
pub const MAX_SEEDS: usize = 5;

const DEFAULT_LIMIT: u8 = 20;

/// Inputs for the recommendation endpoint: seed ids plus audio-feature
/// parameters. At least one seed of any kind is required.
#[derive(Debug, Clone, Default)]
pub struct RecommendationParams {
    pub seed_tracks: Vec<String>,
    pub seed_artists: Vec<String>,
    pub seed_genres: Vec<String>,
    /// Requested track count; 0 means the default of 20. Clamped to
    /// 1..=100 before the request.
    pub limit: u8,
    pub targets: AudioTargets,
}

/// Caps the combined seed count at [`MAX_SEEDS`], apportioning
/// preferentially to track seeds, then artist seeds, then genre seeds.
pub fn apportion_seeds(params: &RecommendationParams) -> (Vec<String>, Vec<String>, Vec<String>) {
    let tracks: Vec<String> = params.seed_tracks.iter().take(MAX_SEEDS).cloned().collect();
    let artists: Vec<String> = params
        .seed_artists
        .iter()
        .take(MAX_SEEDS - tracks.len())
        .cloned()
        .collect();
    let genres: Vec<String> = params
        .seed_genres
        .iter()
        .take(MAX_SEEDS - tracks.len() - artists.len())
        .cloned()
        .collect();
    (tracks, artists, genres)
}

/// Fetches recommendations anchored on the given seeds, forwarding every
/// set audio-feature parameter verbatim.
pub async fn get_recommendations<S: KvStore>(
    client: &ApiClient<S>,
    params: &RecommendationParams,
) -> Result<Vec<Track>> {
    if params.seed_tracks.is_empty()
        && params.seed_artists.is_empty()
        && params.seed_genres.is_empty()
    {
        return Err(Error::ValidationFailed(
            "at least one seed track, artist or genre is required".to_string(),
        ));
    }

    let (tracks, artists, genres) = apportion_seeds(params);

    let mut pairs: Vec<(&str, String)> = Vec::new();
    if !tracks.is_empty() {
        pairs.push(("seed_tracks", tracks.join(",")));
    }
    if !artists.is_empty() {
        pairs.push(("seed_artists", artists.join(",")));
    }
    if !genres.is_empty() {
        pairs.push(("seed_genres", genres.join(",")));
    }

    let limit = if params.limit == 0 {
        DEFAULT_LIMIT
    } else {
        params.limit.clamp(1, 100)
    };
    pairs.push(("limit", limit.to_string()));
    pairs.extend(params.targets.query_pairs());

    let query = utils::query_string(pairs);
    let body = client
        .request(RequestDescriptor::get(format!("/recommendations?{query}")))
        .await?;
    let res: RecommendationsResponse = decode(body)?;
    Ok(res.tracks)
}
