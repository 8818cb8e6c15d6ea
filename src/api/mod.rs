//! # API Module
//!
//! HTTP endpoints for the local callback server that completes the OAuth
//! 2.0 PKCE flow.
//!
//! - [`callback`] - receives the authorization redirect from Spotify and
//!   hands its query parameters to the auth flow for the code exchange.
//! - [`health`] - health check endpoint returning status and version.
//!
//! Built on [Axum](https://docs.rs/axum); each endpoint is an async
//! handler wired into the router in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
