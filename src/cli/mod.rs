//! # CLI Module
//!
//! User-facing command implementations. Each command wires the file-backed
//! credential store and environment configuration into the Spotify layer,
//! handles user interaction and progress feedback, and renders errors with
//! the colored status macros. Core modules below this layer never print or
//! exit.
//!
//! - [`login`] / [`logout`] - OAuth 2.0 PKCE authentication lifecycle
//! - [`generate`] - mood-driven playlist generation and creation
//! - [`profile`] - display the authenticated user
//! - [`moods`] - list the accepted mood and intent labels

mod auth;
mod generate;
mod moods;
mod profile;

pub use auth::login;
pub use auth::logout;
pub use generate::GenerateArgs;
pub use generate::generate;
pub use moods::moods;
pub use profile::profile;
