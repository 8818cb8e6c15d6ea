use std::collections::HashMap;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config,
    error::{Error, Result},
    management::{CredentialStore, FileStore, KvStore},
    spotify::auth::{AuthConfig, AuthFlow, SessionState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Transient description of a single API call: endpoint path (with query,
/// without base URL), method, optional JSON body, extra headers.
#[derive(Debug, Clone, Default)]
pub struct RequestDescriptor {
    pub endpoint: String,
    pub method: Method,
    pub body: Option<Value>,
    pub headers: HashMap<String, String>,
}

impl RequestDescriptor {
    pub fn get(endpoint: impl Into<String>) -> Self {
        RequestDescriptor {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        RequestDescriptor {
            endpoint: endpoint.into(),
            method: Method::Post,
            body: Some(body),
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// The single choke point for all calls to the Spotify Web API.
///
/// Every request goes through the same lifecycle: obtain an access token
/// (from the credential cache, or by refreshing), execute the call with a
/// bearer header, and normalize the outcome. A 401 triggers exactly one
/// refresh-and-retry cycle; a persistently invalid session surfaces as
/// [`Error::AuthenticationFailed`] rather than looping. Non-authentication
/// failures (rate limiting, 5xx) are surfaced verbatim with status and
/// payload, and never retried here; backoff policy belongs to the caller.
#[derive(Clone)]
pub struct ApiClient<S: KvStore> {
    http: Client,
    base_url: String,
    auth: AuthFlow<S>,
}

impl<S: KvStore> ApiClient<S> {
    pub fn new(http: Client, base_url: impl Into<String>, auth: AuthFlow<S>) -> Self {
        ApiClient {
            http,
            base_url: base_url.into(),
            auth,
        }
    }

    pub fn auth(&self) -> &AuthFlow<S> {
        &self.auth
    }

    pub fn credentials(&self) -> &CredentialStore<S> {
        self.auth.credentials()
    }

    /// Executes a request descriptor and returns the leniently parsed
    /// response body.
    ///
    /// Token acquisition: the cached access token if still valid, else one
    /// refresh attempt; if neither yields a token the call fails with
    /// [`Error::NotAuthenticated`] before any request is sent.
    pub async fn request(&self, req: RequestDescriptor) -> Result<Value> {
        let token = match self.credentials().read().await? {
            Some(token) => token,
            None => self
                .auth
                .refresh()
                .await
                .map_err(|_| Error::NotAuthenticated)?,
        };

        let response = self.execute(&req, &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            // One refresh, one retry. No third attempt.
            let new_token = self
                .auth
                .refresh()
                .await
                .map_err(|_| Error::AuthenticationFailed)?;

            let retry = self.execute(&req, &new_token).await?;
            let status = retry.status();
            let body = read_body(retry).await?;

            if !status.is_success() {
                return Err(Error::AuthenticationFailed);
            }
            return Ok(body);
        }

        let status = response.status();
        let body = read_body(response).await?;

        if !status.is_success() {
            return Err(Error::ApiRequestFailed {
                status: status.as_u16(),
                payload: body,
            });
        }

        Ok(body)
    }

    async fn execute(&self, req: &RequestDescriptor, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, req.endpoint);
        let mut builder = self.http.request(req.method.as_reqwest(), &url);

        let mut has_content_type = false;
        for (name, value) in &req.headers {
            if name.eq_ignore_ascii_case("content-type") {
                has_content_type = true;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &req.body {
            if !has_content_type {
                builder = builder.header("Content-Type", "application/json");
            }
            // An already-string body is sent as-is, anything else as JSON text.
            let text = match body {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            builder = builder.body(text);
        }

        Ok(builder.bearer_auth(token).send().await?)
    }
}

impl ApiClient<FileStore> {
    /// Production wiring: file-backed credentials, endpoints from the
    /// environment, one shared HTTP client.
    pub fn from_env() -> Self {
        let http = Client::new();
        let creds = CredentialStore::new(FileStore::new(FileStore::default_path()));
        let auth = AuthFlow::new(
            http.clone(),
            AuthConfig::from_env(),
            creds,
            SessionState::new(),
        );
        ApiClient::new(http, config::spotify_apiurl(), auth)
    }
}

/// Reads a response body as text and parses it leniently: empty bodies
/// (some endpoints legitimately return none) become `Null`, text that is
/// not valid JSON is returned raw instead of raising.
async fn read_body(response: Response) -> Result<Value> {
    let text = response.text().await?;
    if text.is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

/// Deserializes a successful API body into the typed struct a façade
/// method promises.
pub(crate) fn decode<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|e| Error::UnexpectedResponse(e.to_string()))
}
