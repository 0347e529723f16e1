//! Get command implementation
//!
//! Shows bookmarks from a single day, or for a single URL.

use crate::api::{PinboardClient, Query, Transport};
use crate::cli::args::GetArgs;
use crate::cli::output::{print_output, PostLines};
use crate::commands::fetch_decoded;
use crate::domain::PostsResponse;
use crate::error::Result;

use std::io::Write;

pub const RESOURCE: &str = "posts/get";

/// Map get flags to query parameters
pub fn build_query(args: &GetArgs) -> Query {
    let mut query = Query::new();
    query
        .set_opt("tag", args.tag.as_deref())
        .set_opt("dt", args.date.as_deref())
        .set_opt("url", args.url.as_deref());
    query
}

/// Execute the get command
pub fn run_get<T: Transport, W: Write>(
    args: &GetArgs,
    client: &PinboardClient<'_, T>,
    out: &mut W,
) -> Result<()> {
    let query = build_query(args);

    if let Some(content) = fetch_decoded::<PostsResponse, _, _>(client, RESOURCE, &query, out)? {
        print_output(out, &PostLines::new(&content.posts, client.config().show_date))?;
    }

    Ok(())
}
