//! Short status response returned by write operations

use serde::Deserialize;

/// Body of `posts/add` and `posts/delete`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortResponse {
    pub result_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_short_response() {
        let resp: ShortResponse = serde_json::from_str(r#"{"result_code":"done"}"#).unwrap();
        assert_eq!(resp.result_code, "done");
    }

    #[test]
    fn test_missing_result_code_is_error() {
        assert!(serde_json::from_str::<ShortResponse>("{}").is_err());
    }
}
