//! Request URL construction
//!
//! `Query` collects parameters and form-encodes them; `UrlArgs` glues the
//! encoded query onto a resource path with the auth token and `format=json`.

use std::collections::BTreeMap;
use url::form_urlencoded;

/// Query parameters for one request, encoded in key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<&'static str, String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter unconditionally
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.params.insert(key, value.into());
        self
    }

    /// Set a parameter only when a non-empty value is present
    pub fn set_opt(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.params.insert(key, v.to_string());
        }
        self
    }

    /// Set a fixed value only when the flag is on
    pub fn set_flag(&mut self, key: &'static str, flag: bool, value: &str) -> &mut Self {
        if flag {
            self.params.insert(key, value.to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `application/x-www-form-urlencoded` rendering
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

/// Everything needed to address one API call
#[derive(Debug, Clone)]
pub struct UrlArgs<'a> {
    pub base_url: &'a str,
    pub resource: &'a str,
    pub params: String,
    pub username: &'a str,
    pub token: &'a str,
}

impl UrlArgs<'_> {
    /// `{base}/{resource}?auth_token={user}:{token}&format=json&{params}`
    pub fn build_url(&self) -> String {
        format!(
            "{}/{}?auth_token={}:{}&format=json&{}",
            self.base_url, self.resource, self.username, self.token, self.params
        )
    }

    /// Same URL with the token masked, for logs
    pub fn redacted(&self) -> String {
        format!(
            "{}/{}?auth_token={}:***&format=json&{}",
            self.base_url, self.resource, self.username, self.params
        )
    }
}
