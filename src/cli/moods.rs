use crate::{info, mapping};

/// Lists the mood and intent labels the generator accepts.
pub async fn moods() {
    info!("Moods: {}", mapping::UI_MOODS.join(", "));
    info!("Intents: {}", mapping::UI_INTENTS.join(", "));
}
