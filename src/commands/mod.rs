//! Command handlers
//!
//! Each command handler builds its query, fetches one resource, decodes
//! the body and renders it. `dispatch` routes a parsed subcommand to
//! exactly one handler.

pub mod add;
pub mod all;
pub mod delete;
pub mod get;
pub mod recent;
pub mod suggest;

pub use add::run_add;
pub use all::run_all;
pub use delete::run_delete;
pub use get::run_get;
pub use recent::run_recent;
pub use suggest::run_suggest;

use crate::api::{PinboardClient, Query, Transport};
use crate::cli::args::Commands;
use crate::cli::output::print_raw;
use crate::error::Result;

use serde::de::DeserializeOwned;
use std::io::Write;

/// Run the handler for `command`
pub fn dispatch<T: Transport, W: Write>(
    command: &Commands,
    client: &PinboardClient<'_, T>,
    out: &mut W,
) -> Result<()> {
    log::debug!("Running {} command", command.name());

    match command {
        Commands::Recent(args) => run_recent(args, client, out),
        Commands::All(args) => run_all(args, client, out),
        Commands::Add(args) => run_add(args, client, out),
        Commands::Delete(args) => run_delete(args, client, out),
        Commands::Get(args) => run_get(args, client, out),
        Commands::Suggest(args) => run_suggest(args, client, out),
    }
}

/// Fetch `resource` and decode it as `R`.
///
/// In raw JSON mode the body is written to `out` untouched and `None` is
/// returned, so the caller skips decoding and formatting.
pub(crate) fn fetch_decoded<R, T, W>(
    client: &PinboardClient<'_, T>,
    resource: &str,
    query: &Query,
    out: &mut W,
) -> Result<Option<R>>
where
    R: DeserializeOwned,
    T: Transport,
    W: Write,
{
    let body = client.fetch(resource, query)?;

    if client.config().raw_json {
        print_raw(out, &body)?;
        return Ok(None);
    }

    Ok(Some(serde_json::from_slice(&body)?))
}


#[cfg(test)]
mod tests {
    use super::test_support::{config, POSTS_FIXTURE};
    use super::*;
    use crate::cli::args::{AddArgs, AllArgs, DeleteArgs, GetArgs, RecentArgs, SuggestArgs};
    use crate::error::{ApiError, AppError};
    use crate::mock::MockTransport;
    use rstest::rstest;

    fn parse_url(s: &str) -> url::Url {
        url::Url::parse(s).unwrap()
    }

    fn add_args() -> AddArgs {
        AddArgs {
            url: parse_url("https://a.example/"),
            title: "A".to_string(),
            description: None,
            tags: None,
            no_replace: false,
            private: false,
            unread: false,
        }
    }

    #[rstest]
    #[case(Commands::Recent(RecentArgs::default()), "posts/recent")]
    #[case(Commands::All(AllArgs::default()), "posts/all")]
    #[case(Commands::Add(add_args()), "posts/add")]
    #[case(Commands::Get(GetArgs::default()), "posts/get")]
    #[case(Commands::Delete(DeleteArgs { url: parse_url("https://a.example/") }), "posts/delete")]
    #[case(Commands::Suggest(SuggestArgs { url: parse_url("https://a.example/") }), "posts/suggest")]
    fn test_dispatch_hits_one_resource(#[case] command: Commands, #[case] resource: &str) {
        let config = config(true, false);
        let mock = MockTransport::ok("{}");
        let client = PinboardClient::new(&mock, &config);
        let mut out = Vec::new();

        dispatch(&command, &client, &mut out).unwrap();

        let request = mock.only_request();
        assert!(request.starts_with(&format!("https://pinboard.test/v1/{}?", resource)));
    }

    #[rstest]
    #[case(Commands::Recent(RecentArgs::default()))]
    #[case(Commands::All(AllArgs::default()))]
    #[case(Commands::Add(add_args()))]
    #[case(Commands::Get(GetArgs::default()))]
    #[case(Commands::Delete(DeleteArgs { url: parse_url("https://a.example/") }))]
    #[case(Commands::Suggest(SuggestArgs { url: parse_url("https://a.example/") }))]
    fn test_raw_json_bypasses_decoding(#[case] command: Commands) {
        let config = config(true, true);
        let mock = MockTransport::ok("this is not json");
        let client = PinboardClient::new(&mock, &config);
        let mut out = Vec::new();

        dispatch(&command, &client, &mut out).unwrap();

        assert_eq!(out, b"this is not json\n");
    }

    #[test]
    fn test_rate_limit_produces_no_output() {
        let config = config(false, false);
        let mock = MockTransport::with_status(429, POSTS_FIXTURE);
        let client = PinboardClient::new(&mock, &config);
        let mut out = Vec::new();

        let err = dispatch(&Commands::Recent(RecentArgs::default()), &client, &mut out).unwrap_err();

        assert!(matches!(err, AppError::Api(ApiError::RateLimited)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_rate_limit_wins_over_raw_json() {
        let config = config(true, false);
        let mock = MockTransport::with_status(429, "slow down");
        let client = PinboardClient::new(&mock, &config);
        let mut out = Vec::new();

        let err = dispatch(&Commands::Recent(RecentArgs::default()), &client, &mut out).unwrap_err();

        assert!(matches!(err, AppError::Api(ApiError::RateLimited)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_json_is_decode_error_without_output() {
        let config = config(false, false);
        let mock = MockTransport::ok(r#"{"date": "2016-06-11T19:48:02Z", "posts": [ "#);
        let client = PinboardClient::new(&mock, &config);
        let mut out = Vec::new();

        let err = dispatch(&Commands::Recent(RecentArgs::default()), &client, &mut out).unwrap_err();

        assert!(matches!(err, AppError::Decode(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_transport_failure_propagates() {
        let config = config(false, false);
        let mock = MockTransport::unreachable("dns error");
        let client = PinboardClient::new(&mock, &config);
        let mut out = Vec::new();

        let err = dispatch(&Commands::Recent(RecentArgs::default()), &client, &mut out).unwrap_err();

        assert!(matches!(err, AppError::Api(ApiError::Unreachable(_))));
        assert!(out.is_empty());
    }
}
