//! Add command implementation
//!
//! Saves a new bookmark.

use crate::api::{PinboardClient, Query, Transport};
use crate::cli::args::AddArgs;
use crate::cli::output::print_output;
use crate::commands::fetch_decoded;
use crate::domain::ShortResponse;
use crate::error::Result;

use std::io::Write;

pub const RESOURCE: &str = "posts/add";

/// Map add flags to query parameters.
///
/// The API calls the title `description` and the description `extended`.
pub fn build_query(args: &AddArgs) -> Query {
    let mut query = Query::new();
    query
        .set("url", args.url.as_str())
        .set("description", args.title.as_str())
        .set_opt("extended", args.description.as_deref())
        .set_opt("tags", args.tags.as_deref())
        .set_flag("replace", args.no_replace, "no")
        .set_flag("shared", args.private, "no")
        .set_flag("toread", args.unread, "yes");
    query
}

/// Execute the add command
pub fn run_add<T: Transport, W: Write>(
    args: &AddArgs,
    client: &PinboardClient<'_, T>,
    out: &mut W,
) -> Result<()> {
    let query = build_query(args);

    if let Some(response) = fetch_decoded::<ShortResponse, _, _>(client, RESOURCE, &query, out)? {
        print_output(out, &response)?;
    }

    Ok(())
}
