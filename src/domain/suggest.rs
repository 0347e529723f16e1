//! Tag suggestion types
//!
//! `posts/suggest` answers with a two-element array: the first element
//! carries `popular`, the second `recommended`. The mapping is by position.

use serde::Deserialize;

/// First element of the suggest array
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Popular {
    #[serde(default)]
    pub popular: Vec<String>,
}

/// Second element of the suggest array
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Recommended {
    #[serde(default)]
    pub recommended: Vec<String>,
}

/// Positional suggest response: index 0 is popular, index 1 is recommended
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestResponse(pub Popular, pub Recommended);

impl SuggestResponse {
    pub fn popular(&self) -> &[String] {
        &self.0.popular
    }

    pub fn recommended(&self) -> &[String] {
        &self.1.recommended
    }
}
