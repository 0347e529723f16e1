//! All command implementation
//!
//! Lists every bookmark, optionally windowed by offset, count, tag or date.

use crate::api::{PinboardClient, Query, Transport};
use crate::cli::args::AllArgs;
use crate::cli::output::{print_output, PostLines};
use crate::commands::fetch_decoded;
use crate::domain::AllResponse;
use crate::error::Result;

use std::io::Write;

pub const RESOURCE: &str = "posts/all";

/// Map all flags to query parameters
pub fn build_query(args: &AllArgs) -> Query {
    let mut query = Query::new();
    query
        .set_opt("start", args.start.as_deref())
        .set_opt("results", args.results.as_deref())
        .set_opt("tag", args.tag.as_deref())
        .set_opt("fromdt", args.from_date.as_deref())
        .set_opt("todt", args.till_date.as_deref());
    query
}

/// Execute the all command
pub fn run_all<T: Transport, W: Write>(
    args: &AllArgs,
    client: &PinboardClient<'_, T>,
    out: &mut W,
) -> Result<()> {
    let query = build_query(args);

    if let Some(posts) = fetch_decoded::<AllResponse, _, _>(client, RESOURCE, &query, out)? {
        print_output(out, &PostLines::new(&posts, client.config().show_date))?;
    }

    Ok(())
}
