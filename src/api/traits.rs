//! Trait definitions for HTTP access
//!
//! Abstracts the single GET the client performs so handlers can be tested
//! against a mock instead of the live API.

use crate::error::ApiError;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for issuing one GET request
///
/// Implementations only report transport failures; status interpretation
/// is left to the caller. The body is only read for a 200 response and is
/// empty otherwise.
pub trait Transport {
    /// Perform a GET and return the status and, on 200, the full body
    fn get(&self, url: &str) -> Result<RawResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        (**self).get(url)
    }
}
