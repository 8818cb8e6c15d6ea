use std::{collections::HashMap, sync::Arc};

use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config,
    error::{Error, Result},
    management::{CredentialStore, KvStore},
    types::{PkceSession, TokenErrorBody, TokenResponse},
    utils,
};

/// Endpoints and client identity for the OAuth 2.0 PKCE flow. Constructed
/// explicitly so tests can point the flow at a mock server.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub authorize_url: String,
    pub token_url: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        AuthConfig {
            client_id: config::spotify_client_id(),
            redirect_uri: config::spotify_redirect_uri(),
            scope: config::spotify_scope(),
            authorize_url: config::spotify_apiauth_url(),
            token_url: config::spotify_apitoken_url(),
        }
    }
}

/// Process-scoped holder for the PKCE verifier, alive between login
/// initiation and the authorization callback. Clones share the same slot.
#[derive(Clone, Default)]
pub struct SessionState {
    inner: Arc<Mutex<Option<PkceSession>>>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    pub async fn store(&self, code_verifier: String) {
        let mut slot = self.inner.lock().await;
        *slot = Some(PkceSession { code_verifier });
    }

    /// Takes the session out, leaving the slot empty. The verifier is
    /// consumed exactly once; a second take returns `None`.
    pub async fn take(&self) -> Option<PkceSession> {
        self.inner.lock().await.take()
    }

    pub async fn clear(&self) {
        let mut slot = self.inner.lock().await;
        *slot = None;
    }

    pub async fn verifier(&self) -> Option<String> {
        self.inner
            .lock()
            .await
            .as_ref()
            .map(|s| s.code_verifier.clone())
    }
}

/// Shared completion flag the callback handler sets once the login attempt
/// finishes, polled by the `auth` command.
pub type AuthOutcome = Arc<Mutex<Option<bool>>>;

/// The OAuth 2.0 PKCE authorization flow plus the token refresh engine.
///
/// `begin_login` produces the authorization URL (storing the verifier in
/// session state), `handle_callback` completes the code exchange when the
/// provider redirects back, and `refresh` mints new access tokens from the
/// stored refresh token. All persisted state goes through the credential
/// store; the flow itself is stateless between calls apart from the
/// session-scoped verifier.
#[derive(Clone)]
pub struct AuthFlow<S: KvStore> {
    http: Client,
    config: AuthConfig,
    creds: CredentialStore<S>,
    session: SessionState,
}

impl<S: KvStore> AuthFlow<S> {
    pub fn new(
        http: Client,
        config: AuthConfig,
        creds: CredentialStore<S>,
        session: SessionState,
    ) -> Self {
        AuthFlow {
            http,
            config,
            creds,
            session,
        }
    }

    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.creds
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Starts a login attempt: generates the PKCE verifier/challenge pair,
    /// stores the verifier in session state, and returns the authorization
    /// URL the browser must visit. Navigation itself is the caller's job.
    pub async fn begin_login(&self) -> String {
        let code_verifier = utils::generate_code_verifier();
        let code_challenge = utils::generate_code_challenge(&code_verifier);

        self.session.store(code_verifier).await;

        let query = utils::query_string([
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("scope", self.config.scope.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge.as_str()),
        ]);

        format!("{}?{}", self.config.authorize_url, query)
    }

    /// Processes the query parameters of an authorization redirect.
    ///
    /// Returns `Ok(false)` when no `code` parameter is present (not a
    /// callback at all). Otherwise consumes the session verifier, performs
    /// the authorization-code exchange, and persists the resulting tokens.
    ///
    /// The verifier is taken out of session state synchronously before the
    /// exchange suspends, so a re-entrant callback can never observe a
    /// half-consumed session; both the success and failure paths of the
    /// exchange leave the session empty.
    pub async fn handle_callback(&self, params: &HashMap<String, String>) -> Result<bool> {
        if let Some(error) = params.get("error") {
            self.session.clear().await;
            return Err(Error::AuthorizationDenied(error.clone()));
        }

        let Some(code) = params.get("code") else {
            return Ok(false);
        };

        let Some(session) = self.session.take().await else {
            return Err(Error::MissingVerifier);
        };

        let token = self.exchange_code(code, &session.code_verifier).await?;

        self.creds
            .save(&token.access_token, token.expires_in, token.scope.as_deref())
            .await?;
        if let Some(refresh_token) = &token.refresh_token {
            self.creds.save_refresh(refresh_token).await?;
        }

        Ok(true)
    }

    /// Exchanges an authorization code for tokens (`grant_type=
    /// authorization_code`), proving possession of the verifier that
    /// produced the challenge sent at login start.
    async fn exchange_code(&self, code: &str, verifier: &str) -> Result<TokenResponse> {
        let res = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("client_id", self.config.client_id.as_str()),
                ("code_verifier", verifier),
            ])
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            return Err(Error::TokenExchangeFailed(provider_error(&text)));
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::TokenExchangeFailed(format!("invalid token response: {e}")))
    }

    /// Mints a new access token from the stored refresh token
    /// (`grant_type=refresh_token`).
    ///
    /// A non-success response is treated as terminal: every piece of
    /// credential state is cleared so the next operation forces a full
    /// re-login. On success the new access token (and expiry) is persisted;
    /// the refresh token is overwritten only when the provider returned a
    /// new one, since an omitted `refresh_token` means the prior one is
    /// still valid.
    ///
    /// Concurrent calls are not coordinated: each presents the same
    /// still-valid refresh token and each succeeds independently.
    pub async fn refresh(&self) -> Result<String> {
        let Some(refresh_token) = self.creds.read_refresh().await? else {
            return Err(Error::NoRefreshToken);
        };

        let res = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.as_str()),
                ("client_id", self.config.client_id.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            self.creds.clear_all().await?;
            return Err(Error::RefreshFailed(provider_error(&text)));
        }

        let token: TokenResponse = serde_json::from_str(&text)
            .map_err(|e| Error::RefreshFailed(format!("invalid token response: {e}")))?;

        self.creds
            .save(&token.access_token, token.expires_in, token.scope.as_deref())
            .await?;
        if let Some(new_refresh) = &token.refresh_token {
            self.creds.save_refresh(new_refresh).await?;
        }

        Ok(token.access_token)
    }

    /// Clears the session verifier and the entire credential record.
    pub async fn logout(&self) -> Result<()> {
        self.session.clear().await;
        self.creds.clear_all().await
    }
}

/// Extracts the most descriptive message from a token-endpoint error body,
/// falling back to the raw text when it is not the expected JSON shape.
fn provider_error(body: &str) -> String {
    match serde_json::from_str::<TokenErrorBody>(body) {
        Ok(err) => err
            .error_description
            .or(err.error)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}
