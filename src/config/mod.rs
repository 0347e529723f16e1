//! Configuration system
//!
//! Holds the run-wide settings built once at startup from CLI arguments
//! and the credential environment variables.

pub mod builder;

pub use builder::ConfigBuilder;

use std::time::Duration;

/// Default pinboard API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.pinboard.in/v1";

/// Ceiling for establishing the connection, TLS handshake included
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(60);

/// Immutable configuration passed to every command handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pinboard username
    pub username: String,
    /// Pinboard API token
    pub token: String,
    /// Print the response body verbatim instead of formatted output
    pub raw_json: bool,
    /// Prefix post lines with the bookmark timestamp
    pub show_date: bool,
    /// API base URL without trailing slash
    pub base_url: String,
    /// Connect/handshake timeout
    pub handshake_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: String::new(),
            token: String::new(),
            raw_json: false,
            show_date: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
        }
    }
}

impl Config {
    /// Whether both credential halves are present
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.token.is_empty()
    }
}
