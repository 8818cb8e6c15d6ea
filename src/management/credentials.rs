use chrono::Utc;

use crate::error::Result;
use crate::management::KvStore;

pub const KEY_ACCESS_TOKEN: &str = "spotify_access_token";
pub const KEY_EXPIRES_AT: &str = "spotify_token_expires_at";
pub const KEY_REFRESH_TOKEN: &str = "spotify_refresh_token";
pub const KEY_SCOPE: &str = "spotify_token_scope";

/// Owns all persisted authentication state: the access token with its
/// absolute expiry instant, the refresh token, and the granted scope.
///
/// No other component mutates these keys directly. The store behind it is
/// pluggable: a JSON file in production, an in-memory map in tests.
#[derive(Debug, Clone)]
pub struct CredentialStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        CredentialStore { store }
    }

    /// Persists a fresh access token. The expiry is stored as an absolute
    /// unix-seconds instant computed from the provider's `expires_in` delta.
    pub async fn save(&self, token: &str, expires_in_secs: u64, scope: Option<&str>) -> Result<()> {
        let expires_at = Utc::now().timestamp() + expires_in_secs as i64;
        self.store.set(KEY_ACCESS_TOKEN, token).await?;
        self.store
            .set(KEY_EXPIRES_AT, &expires_at.to_string())
            .await?;
        if let Some(scope) = scope {
            self.store.set(KEY_SCOPE, scope).await?;
        }
        Ok(())
    }

    /// Returns the cached access token only if present and not expired.
    pub async fn read(&self) -> Result<Option<String>> {
        self.read_at(Utc::now().timestamp()).await
    }

    /// Expiry decision against an explicit `now`, so tests can simulate
    /// time. An expired access token is cleared on the spot rather than
    /// lingering as stale state; the refresh token survives so a refresh
    /// can still recover the session.
    pub async fn read_at(&self, now: i64) -> Result<Option<String>> {
        let token = self.store.get(KEY_ACCESS_TOKEN).await?;
        let expires_at = self.store.get(KEY_EXPIRES_AT).await?;

        let (Some(token), Some(expires_at)) = (token, expires_at) else {
            return Ok(None);
        };

        let expires_at: i64 = expires_at.parse().unwrap_or(0);
        if now >= expires_at {
            self.clear().await?;
            return Ok(None);
        }

        Ok(Some(token))
    }

    /// Removes the access token, its expiry, and the scope. The refresh
    /// token is untouched.
    pub async fn clear(&self) -> Result<()> {
        self.store.delete(KEY_ACCESS_TOKEN).await?;
        self.store.delete(KEY_EXPIRES_AT).await?;
        self.store.delete(KEY_SCOPE).await
    }

    pub async fn save_refresh(&self, token: &str) -> Result<()> {
        self.store.set(KEY_REFRESH_TOKEN, token).await
    }

    pub async fn read_refresh(&self) -> Result<Option<String>> {
        self.store.get(KEY_REFRESH_TOKEN).await
    }

    pub async fn clear_refresh(&self) -> Result<()> {
        self.store.delete(KEY_REFRESH_TOKEN).await
    }

    /// Wipes the entire credential record. Used on logout and when a
    /// refresh fails irrecoverably.
    pub async fn clear_all(&self) -> Result<()> {
        self.clear().await?;
        self.clear_refresh().await
    }

    pub async fn is_authenticated(&self) -> bool {
        matches!(self.read().await, Ok(Some(_)))
    }
}
