use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{
    management::FileStore,
    spotify::auth::{AuthFlow, AuthOutcome},
    warning,
};

/// Terminal page of the login attempt. Delegates the redirect's query
/// parameters to the auth flow and records the outcome for the waiting
/// `auth` command.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(flow): Extension<AuthFlow<FileStore>>,
    Extension(outcome): Extension<AuthOutcome>,
) -> Html<&'static str> {
    match flow.handle_callback(&params).await {
        Ok(true) => {
            *outcome.lock().await = Some(true);
            Html("<h2>Login successful.</h2><p>You can close this browser window.</p>")
        }
        Ok(false) => Html("<h4>Missing authorization code.</h4>"),
        Err(e) => {
            warning!("Login failed: {}", e);
            *outcome.lock().await = Some(false);
            Html("<h4>Login failed. Check the terminal for details.</h4>")
        }
    }
}
