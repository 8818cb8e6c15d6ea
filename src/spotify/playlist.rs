use serde_json::json;

use crate::{
    error::{Error, Result},
    management::KvStore,
    spotify::client::{ApiClient, RequestDescriptor, decode},
    spotify::user,
    types::{AddTracksOutcome, Playlist},
};

/// The provider accepts at most 100 track URIs per add-tracks call.
pub const ADD_TRACKS_BATCH: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct CreatePlaylistArgs {
    pub name: String,
    pub description: String,
    pub public: bool,
    /// Owning user; resolved via the profile endpoint when not supplied.
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AddTracksArgs {
    pub playlist_id: String,
    pub uris: Vec<String>,
    pub position: Option<u32>,
}

/// Creates a playlist for the given (or current) user. Requires a
/// non-empty name.
pub async fn create_playlist<S: KvStore>(
    client: &ApiClient<S>,
    args: CreatePlaylistArgs,
) -> Result<Playlist> {
    if args.name.trim().is_empty() {
        return Err(Error::ValidationFailed("playlist name is required".to_string()));
    }

    let user_id = match args.user_id {
        Some(id) => id,
        None => user::get_profile(client).await?.id,
    };

    let body = json!({
        "name": args.name,
        "description": args.description,
        "public": args.public,
    });
    let value = client
        .request(RequestDescriptor::post(
            format!("/users/{user_id}/playlists"),
            body,
        ))
        .await?;
    decode(value)
}

/// Adds tracks to a playlist in batches of [`ADD_TRACKS_BATCH`] URIs,
/// accumulating the added count and keeping the last batch's snapshot id.
///
/// An empty URI list is a no-op success: no request is made, since the
/// provider rejects an empty-body call.
pub async fn add_tracks<S: KvStore>(
    client: &ApiClient<S>,
    args: AddTracksArgs,
) -> Result<AddTracksOutcome> {
    if args.playlist_id.trim().is_empty() {
        return Err(Error::ValidationFailed("playlist id is required".to_string()));
    }
    if args.uris.is_empty() {
        return Ok(AddTracksOutcome::default());
    }

    let mut outcome = AddTracksOutcome::default();

    for chunk in args.uris.chunks(ADD_TRACKS_BATCH) {
        let uris: Vec<&String> = chunk.iter().filter(|uri| !uri.is_empty()).collect();
        if uris.is_empty() {
            continue;
        }

        let mut body = json!({ "uris": uris });
        if let Some(position) = args.position {
            // Later batches are inserted behind the ones already placed.
            body["position"] = json!(position as usize + outcome.added);
        }

        let value = client
            .request(RequestDescriptor::post(
                format!("/playlists/{}/tracks", args.playlist_id),
                body,
            ))
            .await?;

        outcome.added += uris.len();
        if let Some(snapshot_id) = value.get("snapshot_id").and_then(|v| v.as_str()) {
            outcome.snapshot_id = Some(snapshot_id.to_string());
        }
    }

    Ok(outcome)
}
