//! Suggest command implementation
//!
//! Shows popular and recommended tags for a URL.

use crate::api::{PinboardClient, Query, Transport};
use crate::cli::args::SuggestArgs;
use crate::cli::output::print_output;
use crate::commands::fetch_decoded;
use crate::domain::SuggestResponse;
use crate::error::Result;

use std::io::Write;

pub const RESOURCE: &str = "posts/suggest";

/// Execute the suggest command
pub fn run_suggest<T: Transport, W: Write>(
    args: &SuggestArgs,
    client: &PinboardClient<'_, T>,
    out: &mut W,
) -> Result<()> {
    let mut query = Query::new();
    query.set("url", args.url.as_str());

    if let Some(suggestions) =
        fetch_decoded::<SuggestResponse, _, _>(client, RESOURCE, &query, out)?
    {
        print_output(out, &suggestions)?;
    }

    Ok(())
}
