use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use moodtunes::error::Error;
use moodtunes::management::{CredentialStore, MemoryStore};
use moodtunes::mapping::AudioTargets;
use moodtunes::spotify::auth::{AuthConfig, AuthFlow, SessionState};
use moodtunes::spotify::client::ApiClient;
use moodtunes::spotify::playlist::{self, AddTracksArgs, CreatePlaylistArgs};
use moodtunes::spotify::recommendations::{self, RecommendationParams, apportion_seeds};
use moodtunes::spotify::search;
use moodtunes::spotify::user::{self, TimeRange};

async fn authed_client(server: &MockServer) -> ApiClient<MemoryStore> {
    let http = Client::new();
    let server_uri = server.uri();
    let config = AuthConfig {
        client_id: "test-client".to_string(),
        redirect_uri: "http://127.0.0.1:8080/callback".to_string(),
        scope: "user-top-read".to_string(),
        authorize_url: format!("{server_uri}/authorize"),
        token_url: format!("{server_uri}/api/token"),
    };
    let auth = AuthFlow::new(
        http.clone(),
        config,
        CredentialStore::new(MemoryStore::new()),
        SessionState::new(),
    );
    let client = ApiClient::new(http, server_uri, auth);
    client.credentials().save("AT1", 3600, None).await.unwrap();
    client
}

fn track_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Track {id}"),
        "uri": format!("spotify:track:{id}"),
        "artists": [{"id": "a1", "name": "Artist"}]
    })
}

#[tokio::test]
async fn test_add_tracks_with_empty_uris_is_a_no_op() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    let outcome = playlist::add_tracks(
        &client,
        AddTracksArgs {
            playlist_id: "pl1".to_string(),
            uris: Vec::new(),
            position: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(outcome.added, 0);
    assert_eq!(outcome.snapshot_id, None);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_tracks_requires_playlist_id() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    let err = playlist::add_tracks(
        &client,
        AddTracksArgs {
            playlist_id: "  ".to_string(),
            uris: vec!["spotify:track:t1".to_string()],
            position: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::ValidationFailed(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_tracks_batches_at_one_hundred() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "snapshot_id": "snap"
        })))
        .expect(3)
        .mount(&server)
        .await;

    let uris: Vec<String> = (0..250).map(|i| format!("spotify:track:t{i}")).collect();
    let outcome = playlist::add_tracks(
        &client,
        AddTracksArgs {
            playlist_id: "pl1".to_string(),
            uris,
            position: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(outcome.added, 250);
    assert_eq!(outcome.snapshot_id, Some("snap".to_string()));

    // 3 batches: 100 + 100 + 50
    let requests = server.received_requests().await.unwrap();
    let batch_sizes: Vec<usize> = requests
        .iter()
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            body["uris"].as_array().unwrap().len()
        })
        .collect();
    assert_eq!(batch_sizes, vec![100, 100, 50]);
}

#[tokio::test]
async fn test_create_playlist_requires_name() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    let err = playlist::create_playlist(
        &client,
        CreatePlaylistArgs {
            name: "".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::ValidationFailed(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_playlist_resolves_owner_via_profile() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user1",
            "display_name": "Listener"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/user1/playlists"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "pl1",
            "name": "Evening Mix",
            "public": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = playlist::create_playlist(
        &client,
        CreatePlaylistArgs {
            name: "Evening Mix".to_string(),
            description: "test".to_string(),
            public: false,
            user_id: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(created.id, "pl1");
}

#[tokio::test]
async fn test_recommendations_require_a_seed() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    let err = recommendations::get_recommendations(&client, &RecommendationParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ValidationFailed(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_seed_apportioning_prefers_tracks_then_artists_then_genres() {
    let params = RecommendationParams {
        seed_tracks: (1..=7).map(|i| format!("t{i}")).collect(),
        seed_artists: vec!["a1".to_string(), "a2".to_string()],
        seed_genres: vec!["pop".to_string()],
        ..Default::default()
    };
    let (tracks, artists, genres) = apportion_seeds(&params);
    assert_eq!(tracks, vec!["t1", "t2", "t3", "t4", "t5"]);
    assert!(artists.is_empty());
    assert!(genres.is_empty());

    let params = RecommendationParams {
        seed_tracks: vec!["t1".to_string(), "t2".to_string()],
        seed_artists: vec!["a1".to_string(), "a2".to_string()],
        seed_genres: vec!["pop".to_string(), "dance".to_string()],
        ..Default::default()
    };
    let (tracks, artists, genres) = apportion_seeds(&params);
    assert_eq!(tracks.len() + artists.len() + genres.len(), 5);
    assert_eq!(tracks, vec!["t1", "t2"]);
    assert_eq!(artists, vec!["a1", "a2"]);
    assert_eq!(genres, vec!["pop"]);
}

#[tokio::test]
async fn test_recommendations_cap_seeds_and_forward_targets() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .and(query_param("seed_tracks", "t1,t2,t3,t4,t5"))
        .and(query_param("limit", "20"))
        .and(query_param("target_energy", "0.9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json("r1"), track_json("r2")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = RecommendationParams {
        seed_tracks: (1..=7).map(|i| format!("t{i}")).collect(),
        seed_artists: vec!["a1".to_string()],
        targets: AudioTargets {
            target_energy: Some(0.9),
            ..Default::default()
        },
        ..Default::default()
    };

    let tracks = recommendations::get_recommendations(&client, &params)
        .await
        .unwrap();
    assert_eq!(tracks.len(), 2);

    // The artist seed was squeezed out entirely by the five track seeds
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap().contains("seed_artists"));
}

#[tokio::test]
async fn test_search_with_empty_query_skips_network() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    let tracks = search::search_tracks(&client, "   ", 20).await.unwrap();
    assert!(tracks.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_clamps_limit() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "night drive"))
        .and(query_param("type", "track"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": {"items": [track_json("s1")]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tracks = search::search_tracks(&client, "night drive", 200).await.unwrap();
    assert_eq!(tracks.len(), 1);
}

#[tokio::test]
async fn test_top_items_clamp_limit_and_pass_window() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/me/top/tracks"))
        .and(query_param("limit", "1"))
        .and(query_param("time_range", "long_term"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [track_json("t1")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/top/artists"))
        .and(query_param("limit", "50"))
        .and(query_param("time_range", "medium_term"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "a1", "name": "Artist", "genres": ["pop"]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // 0 clamps up to 1, 200 clamps down to 50
    let tracks = user::get_top_tracks(&client, 0, TimeRange::Long).await.unwrap();
    assert_eq!(tracks.len(), 1);

    let artists = user::get_top_artists(&client, 200, TimeRange::Medium)
        .await
        .unwrap();
    assert_eq!(artists[0].name, "Artist");
}

#[tokio::test]
async fn test_recently_played_unwraps_play_history() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/me/player/recently-played"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"track": track_json("p1")},
                {"track": track_json("p2")}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tracks = user::get_recently_played(&client, 10).await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].id, "p1");
}
