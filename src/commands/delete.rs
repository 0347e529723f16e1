//! Delete command implementation

use crate::api::{PinboardClient, Query, Transport};
use crate::cli::args::DeleteArgs;
use crate::cli::output::print_output;
use crate::commands::fetch_decoded;
use crate::domain::ShortResponse;
use crate::error::Result;

use std::io::Write;

pub const RESOURCE: &str = "posts/delete";

/// Execute the delete command
pub fn run_delete<T: Transport, W: Write>(
    args: &DeleteArgs,
    client: &PinboardClient<'_, T>,
    out: &mut W,
) -> Result<()> {
    let mut query = Query::new();
    query.set("url", args.url.as_str());

    if let Some(response) = fetch_decoded::<ShortResponse, _, _>(client, RESOURCE, &query, out)? {
        print_output(out, &response)?;
    }

    Ok(())
}
