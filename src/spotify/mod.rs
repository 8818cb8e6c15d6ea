//! # Spotify Integration Module
//!
//! The complete integration layer between MoodTunes and the Spotify Web
//! API: OAuth 2.0 PKCE authentication, token lifecycle management, the
//! resilient HTTP client, and typed wrappers over the endpoints the
//! playlist generator needs.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Generator)
//!          ↓
//! Endpoint Façade
//!     ├── User data (profile, top items, recently played)
//!     ├── Search
//!     ├── Recommendations (seed apportioning)
//!     └── Playlists (create, batched track adds)
//!          ↓
//! Resilient API Client (token attach, 401 refresh-retry, normalization)
//!          ↓
//! Auth Flow (PKCE exchange, refresh engine) ── Credential Store
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Token lifecycle
//!
//! Every API call obtains its bearer token from the credential store; an
//! expired or missing token triggers a refresh, and a 401 response triggers
//! exactly one refresh-and-retry cycle. A failed refresh clears all
//! credential state so the user is cleanly forced back through the PKCE
//! flow rather than looping against a dead session. Concurrent requests may
//! each refresh independently; the provider honors the still-valid refresh
//! token for each, so no coordination lock is needed.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - code exchange and refresh grants
//! - `GET /me` - profile of the authenticated user
//! - `GET /me/top/artists`, `GET /me/top/tracks` - listening history
//! - `GET /me/player/recently-played` - recent plays
//! - `GET /search` - track search
//! - `GET /recommendations` - seeded, feature-targeted recommendations
//! - `POST /users/{id}/playlists` - playlist creation
//! - `POST /playlists/{id}/tracks` - batched track adds

pub mod auth;
pub mod client;
pub mod playlist;
pub mod recommendations;
pub mod search;
pub mod user;
