//! MoodTunes CLI Library
//!
//! Generates mood-driven Spotify playlists from the command line. A selected
//! mood and intent are mapped to target audio-feature parameters, combined
//! with the user's listening history through Spotify's recommendation API,
//! and the resulting track list can be persisted as a playlist.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Failure taxonomy for auth and API operations
//! - `generator` - Playlist assembly from targets and listening history
//! - `management` - Credential persistence and the key-value store
//! - `mapping` - Mood/intent normalization and audio-feature targets
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client: PKCE auth, token refresh, façade
//! - `types` - Data structures and type definitions
//! - `utils` - PKCE and query-string helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod management;
pub mod mapping;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the
/// program with exit code 1. Only for unrecoverable CLI-level failures.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
