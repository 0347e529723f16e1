//! pinboardin - command line client library for the pinboard.in API
//!
//! Turns parsed subcommands into authenticated GET requests against the
//! pinboard v1 API and renders the decoded responses as text.
//!
//! # Modules
//!
//! - [`api`]: URL building, transport trait and HTTP client
//! - [`cli`]: Command-line interface definitions and output formatting
//! - [`commands`]: Command handlers
//! - [`config`]: Run configuration
//! - [`domain`]: API response records
//! - [`error`]: Error types

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::Config;
pub use error::{ApiError, AppError, Result};
