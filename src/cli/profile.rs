use crate::{error, info, spotify::client::ApiClient, spotify::user};

/// Displays the authenticated user's profile.
pub async fn profile() {
    let client = ApiClient::from_env();

    match user::get_profile(&client).await {
        Ok(profile) => {
            let name = profile.display_name.unwrap_or_else(|| profile.id.clone());
            info!("Logged in as: {} ({})", name, profile.id);
        }
        Err(e) => {
            error!(
                "Failed to load profile. Please run moodtunes auth\n Error: {}",
                e
            );
        }
    }
}
