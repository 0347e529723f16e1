//! Pinboard API access layer
//!
//! Provides URL construction, a transport trait for testability and the
//! reqwest-backed client.

pub mod client;
pub mod endpoint;
pub mod traits;

pub use client::{HttpTransport, PinboardClient};
pub use endpoint::{Query, UrlArgs};
pub use traits::{RawResponse, Transport};
