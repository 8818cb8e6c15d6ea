//! Playlist assembly.
//!
//! Turns a mood/intent pair into a concrete track list: resolve the
//! audio-feature targets, seed the recommendation endpoint from the user's
//! listening history (top tracks first, then top artists, genre fallback
//! when the history is empty), and optionally persist the result as a
//! playlist on the user's account.

use crate::{
    error::Result,
    management::KvStore,
    mapping::{self, MoodTargets},
    spotify::client::ApiClient,
    spotify::playlist::{self, AddTracksArgs, CreatePlaylistArgs},
    spotify::recommendations::{self, RecommendationParams},
    spotify::user::{self, TimeRange},
    types::{Playlist, Track},
};

const SEED_TRACKS: usize = 3;
const SEED_ARTISTS: usize = 2;

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub mood: String,
    pub intent: String,
    pub limit: u8,
}

#[derive(Debug, Clone)]
pub struct GeneratedPlaylist {
    pub name: String,
    pub description: String,
    pub resolved: MoodTargets,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone)]
pub struct CreatedPlaylist {
    pub playlist: Playlist,
    pub added: usize,
    pub snapshot_id: Option<String>,
}

/// Assembles a track list for the given mood and intent.
pub async fn generate<S: KvStore>(
    client: &ApiClient<S>,
    request: &GenerateRequest,
) -> Result<GeneratedPlaylist> {
    let resolved = mapping::targets(&request.mood, &request.intent);

    let mut params = RecommendationParams {
        limit: request.limit,
        targets: resolved.targets,
        ..Default::default()
    };

    let top_tracks = user::get_top_tracks(client, SEED_TRACKS as u8, TimeRange::Medium).await?;
    params.seed_tracks = top_tracks
        .iter()
        .take(SEED_TRACKS)
        .map(|t| t.id.clone())
        .collect();

    let top_artists = user::get_top_artists(client, SEED_ARTISTS as u8, TimeRange::Medium).await?;
    params.seed_artists = top_artists
        .iter()
        .take(SEED_ARTISTS)
        .map(|a| a.id.clone())
        .collect();

    if params.seed_tracks.is_empty() && params.seed_artists.is_empty() {
        params.seed_genres = mapping::genre_seeds(resolved.core_mood)
            .iter()
            .map(|g| g.to_string())
            .collect();
    }

    let tracks = recommendations::get_recommendations(client, &params).await?;

    let mood_label = request.mood.trim().to_lowercase();
    let intent_label = request.intent.trim().to_lowercase();
    let name = format!("MoodTunes — {} / {}", title_case(&mood_label), intent_label);
    let description = format!(
        "Generated playlist for mood=\"{mood_label}\" and intent=\"{intent_label}\"."
    );

    Ok(GeneratedPlaylist {
        name,
        description,
        resolved,
        tracks,
    })
}

/// Persists a generated playlist on the user's account: creates the
/// playlist (private unless requested otherwise, description noting who it
/// was created for) and adds the generated tracks.
pub async fn create_on_spotify<S: KvStore>(
    client: &ApiClient<S>,
    generated: &GeneratedPlaylist,
    name_override: Option<String>,
    public: bool,
) -> Result<CreatedPlaylist> {
    let profile = user::get_profile(client).await?;
    let created_for = profile
        .display_name
        .clone()
        .unwrap_or_else(|| profile.id.clone());

    let playlist = playlist::create_playlist(
        client,
        CreatePlaylistArgs {
            name: name_override.unwrap_or_else(|| generated.name.clone()),
            description: format!("{} Created for: {}", generated.description, created_for),
            public,
            user_id: Some(profile.id),
        },
    )
    .await?;

    let uris: Vec<String> = generated.tracks.iter().map(|t| t.uri.clone()).collect();
    let outcome = playlist::add_tracks(
        client,
        AddTracksArgs {
            playlist_id: playlist.id.clone(),
            uris,
            position: None,
        },
    )
    .await?;

    Ok(CreatedPlaylist {
        playlist,
        added: outcome.added,
        snapshot_id: outcome.snapshot_id,
    })
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
