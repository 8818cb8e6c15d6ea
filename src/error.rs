use serde_json::Value;

/// Failure taxonomy for the authentication lifecycle and the Spotify Web API
/// client.
///
/// Validation failures are raised before any network call. Authentication
/// failures during a request trigger exactly one automatic recovery attempt
/// (refresh + retry); failure of that recovery surfaces as
/// [`Error::AuthenticationFailed`]. All other HTTP failures carry the status
/// code and the provider's structured error payload so the caller can decide
/// on retry or backoff. No error is retried more than once automatically.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The user or the provider declined consent during authorization.
    #[error("authorization denied: {0}")]
    AuthorizationDenied(String),

    /// The PKCE code verifier was not found when the callback arrived.
    #[error("code verifier not found, please start the login again")]
    MissingVerifier,

    /// The authorization-code exchange returned a non-success status.
    #[error("token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// The refresh grant returned a non-success status. All credential
    /// state has been cleared; a full re-login is required.
    #[error("token refresh failed: {0}")]
    RefreshFailed(String),

    /// No refresh token is stored, so a new access token cannot be minted.
    #[error("no refresh token available")]
    NoRefreshToken,

    /// No usable access token and refresh was impossible.
    #[error("not authenticated, please log in to Spotify")]
    NotAuthenticated,

    /// A request returned 401 and the single refresh-and-retry cycle did
    /// not recover it.
    #[error("authentication failed, please log in again")]
    AuthenticationFailed,

    /// Any other non-success HTTP status from the resource API.
    #[error("API request failed with status {status}: {payload}")]
    ApiRequestFailed { status: u16, payload: Value },

    /// Malformed or missing caller-supplied parameters.
    #[error("invalid request: {0}")]
    ValidationFailed(String),

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("credential storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
