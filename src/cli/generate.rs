use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Error, error,
    generator::{self, GenerateRequest},
    info,
    spotify::client::ApiClient,
    success,
    types::TrackTableRow,
};

#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub mood: String,
    pub intent: String,
    pub limit: u8,
    pub create: bool,
    pub name: Option<String>,
    pub public: bool,
}

/// Generates a mood playlist, prints the track list, and optionally
/// creates it on the user's Spotify account.
pub async fn generate(args: GenerateArgs) {
    let client = ApiClient::from_env();

    let pb = spinner("Generating recommendations...");

    let request = GenerateRequest {
        mood: args.mood,
        intent: args.intent,
        limit: args.limit,
    };

    let generated = match generator::generate(&client, &request).await {
        Ok(generated) => {
            pb.finish_and_clear();
            generated
        }
        Err(e) => {
            pb.finish_and_clear();
            fail(e);
        }
    };

    if generated.tracks.is_empty() {
        info!("No tracks found for this mood and intent.");
        return;
    }

    info!(
        "{} ({} tracks, mood bucket: {}, intent: {})",
        generated.name,
        generated.tracks.len(),
        generated.resolved.core_mood,
        generated.resolved.core_intent
    );

    let rows: Vec<TrackTableRow> = generated
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow::from_track(i + 1, track))
        .collect();
    println!("{}", Table::new(rows));

    if !args.create {
        return;
    }

    let pb = spinner("Creating playlist on Spotify...");
    match generator::create_on_spotify(&client, &generated, args.name, args.public).await {
        Ok(created) => {
            pb.finish_and_clear();
            success!(
                "Playlist \"{}\" created with {} tracks.",
                created.playlist.name,
                created.added
            );
            if let Some(url) = created
                .playlist
                .external_urls
                .as_ref()
                .and_then(|urls| urls.spotify.as_ref())
            {
                info!("Open in Spotify: {}", url);
            }
        }
        Err(e) => {
            pb.finish_and_clear();
            fail(e);
        }
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

fn fail(e: Error) -> ! {
    match e {
        Error::NotAuthenticated | Error::NoRefreshToken | Error::AuthenticationFailed => {
            error!("Not authenticated. Please run moodtunes auth first.\n Error: {}", e);
        }
        other => {
            error!("{}", other);
        }
    }
}
