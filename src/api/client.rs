//! Pinboard API client
//!
//! `HttpTransport` performs the request with a blocking reqwest client;
//! `PinboardClient` adds URL building and status checks on top of any
//! `Transport`.

use crate::api::traits::{RawResponse, Transport};
use crate::api::endpoint::{Query, UrlArgs};
use crate::config::Config;
use crate::error::ApiError;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// Blocking reqwest transport
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client whose connect phase (TLS handshake included) is
    /// bounded by `handshake_timeout`. Reading the body has no deadline.
    pub fn new(handshake_timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(handshake_timeout)
            .timeout(None)
            .user_agent(concat!("pinboardin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::Unreachable(e.without_url().to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            // Body of a failed request is never used; don't wait for it
            return Ok(RawResponse::new(status.as_u16(), Vec::new()));
        }

        let body = response
            .bytes()
            .map_err(|e| ApiError::Body(e.without_url().to_string()))?;

        Ok(RawResponse::new(status.as_u16(), body.to_vec()))
    }
}

/// Authenticated access to pinboard resources
pub struct PinboardClient<'c, T: Transport> {
    transport: T,
    config: &'c Config,
}

impl<'c, T: Transport> PinboardClient<'c, T> {
    pub fn new(transport: T, config: &'c Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Fetch one resource and return the body of a 200 response
    pub fn fetch(&self, resource: &str, query: &Query) -> Result<Vec<u8>, ApiError> {
        let args = UrlArgs {
            base_url: &self.config.base_url,
            resource,
            params: query.encode(),
            username: &self.config.username,
            token: &self.config.token,
        };
        log::debug!("GET {}", args.redacted());

        let response = self.transport.get(&args.build_url())?;
        log::debug!(
            "{} answered {} ({} bytes)",
            resource,
            response.status,
            response.body.len()
        );

        if response.status == StatusCode::OK.as_u16() {
            Ok(response.body)
        } else if response.status == StatusCode::TOO_MANY_REQUESTS.as_u16() {
            Err(ApiError::RateLimited)
        } else {
            Err(ApiError::UnexpectedStatus {
                status: response.status,
            })
        }
    }
}
