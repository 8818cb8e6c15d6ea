use std::{sync::Arc, time::Duration};

use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    error, info,
    management::{CredentialStore, FileStore},
    server::start_api_server,
    spotify::auth::{AuthConfig, AuthFlow, AuthOutcome, SessionState},
    success, warning,
};

/// Runs the complete OAuth 2.0 PKCE login flow:
///
/// 1. Start the local callback server.
/// 2. Generate the verifier/challenge pair and build the authorization URL.
/// 3. Open the URL in the user's browser.
/// 4. Wait for the callback to finish the code exchange.
///
/// The exchanged tokens are persisted by the flow itself; this command only
/// reports the outcome.
pub async fn login() {
    let creds = CredentialStore::new(FileStore::new(FileStore::default_path()));
    let flow = AuthFlow::new(
        Client::new(),
        AuthConfig::from_env(),
        creds,
        SessionState::new(),
    );
    let outcome: AuthOutcome = Arc::new(Mutex::new(None));

    let server_flow = flow.clone();
    let server_outcome = Arc::clone(&outcome);
    tokio::spawn(async move {
        start_api_server(server_flow, server_outcome).await;
    });

    let auth_url = flow.begin_login().await;

    info!("Opening Spotify authorization page...");
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_outcome(&outcome).await {
        Some(true) => success!("Authentication successful!"),
        Some(false) => error!("Authentication failed."),
        None => error!("Authentication timed out."),
    }
}

/// Polls the shared outcome flag the callback handler sets, with a
/// 60-second timeout at a 1-second interval.
async fn wait_for_outcome(outcome: &AuthOutcome) -> Option<bool> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        if let Some(done) = *outcome.lock().await {
            return Some(done);
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Drops every stored credential, forcing a fresh login next time.
pub async fn logout() {
    let creds = CredentialStore::new(FileStore::new(FileStore::default_path()));
    if let Err(e) = creds.clear_all().await {
        error!("Failed to clear credentials: {}", e);
    }
    success!("Logged out.");
}
