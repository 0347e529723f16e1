//! Configuration builder
//!
//! Merges CLI arguments into the immutable run configuration.

use crate::cli::args::Cli;
use crate::config::Config;

/// Builder for the run configuration
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Take every global setting from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_username(cli.username.clone())
            .with_token(cli.token.clone())
            .with_raw_json(Some(cli.json))
            .with_show_date(Some(cli.show_date))
    }

    /// Override with CLI/env username
    pub fn with_username(mut self, username: Option<String>) -> Self {
        if let Some(u) = username {
            self.config.username = u;
        }
        self
    }

    /// Override with CLI/env API token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let Some(t) = token {
            self.config.token = t;
        }
        self
    }

    /// Override with CLI --json flag
    pub fn with_raw_json(mut self, raw_json: Option<bool>) -> Self {
        if let Some(r) = raw_json {
            self.config.raw_json = r;
        }
        self
    }

    /// Override with CLI --show-date flag
    pub fn with_show_date(mut self, show_date: Option<bool>) -> Self {
        if let Some(s) = show_date {
            self.config.show_date = s;
        }
        self
    }

    /// Point requests at a different API base
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        if !self.config.has_credentials() {
            log::warn!("Pinboard username or API token is empty; the API will reject the request");
        }
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert!(!config.raw_json);
        assert!(!config.show_date);
        assert!(config.username.is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_username(Some("alice".to_string()))
            .with_token(Some("ABC123".to_string()))
            .with_raw_json(Some(true))
            .with_show_date(Some(true))
            .with_base_url("http://localhost:8080/v1/")
            .build();

        assert_eq!(config.username, "alice");
        assert_eq!(config.token, "ABC123");
        assert!(config.raw_json);
        assert!(config.show_date);
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_builder_none_keeps_value() {
        let config = ConfigBuilder::new()
            .with_username(Some("alice".to_string()))
            .with_username(None)
            .build();
        assert_eq!(config.username, "alice");
    }

    #[test]
    fn test_builder_from_cli() {
        let cli = Cli::try_parse_from([
            "pinboardin",
            "--username",
            "bob",
            "--token",
            "XYZ",
            "--show-date",
            "recent",
        ])
        .unwrap();
        let config = ConfigBuilder::from_cli(&cli).build();
        assert_eq!(config.username, "bob");
        assert_eq!(config.token, "XYZ");
        assert!(config.show_date);
        assert!(!config.raw_json);
    }
}
