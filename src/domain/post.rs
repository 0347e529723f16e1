//! Bookmark domain types
//!
//! Provides the Post record and the two envelopes it arrives in.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Format used by `--show-date`, e.g. `Jan  2 15:04:05`
pub const STAMP_FORMAT: &str = "%b %e %H:%M:%S";

/// A single bookmark
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    /// Bookmarked URL
    #[serde(default)]
    pub href: String,
    /// Title
    #[serde(default)]
    pub description: String,
    /// Extended description
    #[serde(default)]
    pub extended: String,
    /// Change-detection signature
    #[serde(default)]
    pub meta: String,
    /// MD5 of the URL
    #[serde(default)]
    pub hash: String,
    /// When the bookmark was added
    pub time: DateTime<FixedOffset>,
    /// "yes" or "no"
    #[serde(default)]
    pub shared: String,
    /// "yes" or "no"
    #[serde(default)]
    pub toread: String,
    /// Space separated tags
    #[serde(default)]
    pub tags: String,
}

impl Post {
    /// Timestamp rendered in the short stamp format
    pub fn stamp(&self) -> String {
        self.time.format(STAMP_FORMAT).to_string()
    }
}

/// Envelope returned by `posts/recent` and `posts/get`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostsResponse {
    pub date: DateTime<FixedOffset>,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// `posts/all` returns a bare array with no envelope
pub type AllResponse = Vec<Post>;
