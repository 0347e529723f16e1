//! Recent command implementation
//!
//! Lists the most recently added bookmarks.

use crate::api::{PinboardClient, Query, Transport};
use crate::cli::args::RecentArgs;
use crate::cli::output::{print_output, PostLines};
use crate::commands::fetch_decoded;
use crate::domain::PostsResponse;
use crate::error::Result;

use std::io::Write;

pub const RESOURCE: &str = "posts/recent";

/// Map recent flags to query parameters
pub fn build_query(args: &RecentArgs) -> Query {
    let mut query = Query::new();
    query
        .set_opt("tag", args.tag.as_deref())
        .set_opt("count", args.count.as_deref());
    query
}

/// Execute the recent command
pub fn run_recent<T: Transport, W: Write>(
    args: &RecentArgs,
    client: &PinboardClient<'_, T>,
    out: &mut W,
) -> Result<()> {
    let query = build_query(args);

    if let Some(content) = fetch_decoded::<PostsResponse, _, _>(client, RESOURCE, &query, out)? {
        print_output(out, &PostLines::new(&content.posts, client.config().show_date))?;
    }

    Ok(())
}
