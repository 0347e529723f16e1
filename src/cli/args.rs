//! CLI argument definitions using clap derive
//!
//! Defines the global flags and the six API subcommands.

use clap::{Args, Parser, Subcommand};
use url::Url;

/// A command line client for pinboard.in bookmarks service
#[derive(Parser, Debug)]
#[command(name = "pinboardin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pinboard username
    #[arg(
        long,
        global = true,
        env = "PINBOARD_USERNAME",
        value_name = "PINBOARD-USERNAME",
        hide_env_values = true
    )]
    pub username: Option<String>,

    /// Pinboard API token
    #[arg(
        long,
        global = true,
        env = "PINBOARD_API_TOKEN",
        value_name = "PINBOARD-API-TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Print the JSON response as it is
    #[arg(long, global = true)]
    pub json: bool,

    /// Show date when bookmark was added
    #[arg(long, global = true)]
    pub show_date: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show URLs added lately
    Recent(RecentArgs),

    /// Show all URLs
    All(AllArgs),

    /// Add new URL
    Add(AddArgs),

    /// Delete URL
    Delete(DeleteArgs),

    /// Show one/more URLs from single day
    Get(GetArgs),

    /// Show suggested tags for given URL
    Suggest(SuggestArgs),
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Recent(_) => "recent",
            Commands::All(_) => "all",
            Commands::Add(_) => "add",
            Commands::Delete(_) => "delete",
            Commands::Get(_) => "get",
            Commands::Suggest(_) => "suggest",
        }
    }
}

/// Arguments for the recent command
#[derive(Args, Debug, Default)]
pub struct RecentArgs {
    /// Number of showed URLs (default 15)
    #[arg(long)]
    pub count: Option<String>,

    /// Filter recent URLs by tags (up to 3, comma separated)
    #[arg(long)]
    pub tag: Option<String>,
}

/// Arguments for the all command
#[derive(Args, Debug, Default)]
pub struct AllArgs {
    /// Offset value (default is 0)
    #[arg(long)]
    pub start: Option<String>,

    /// Number of results to be printed (default is all)
    #[arg(long)]
    pub results: Option<String>,

    /// Filter URLs by tags (up to 3, comma separated)
    #[arg(long)]
    pub tag: Option<String>,

    /// Only bookmarks since given date. UTC format (ie. 2010-12-11T19:48:02Z)
    #[arg(long)]
    pub from_date: Option<String>,

    /// Only bookmarks till given date. Same format as --from-date
    #[arg(long)]
    pub till_date: Option<String>,
}

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// URL to add
    #[arg(long)]
    pub url: Url,

    /// Title of the URL
    #[arg(long)]
    pub title: String,

    /// Extended description of the URL
    #[arg(long)]
    pub description: Option<String>,

    /// Up to 100 tags (comma separated)
    #[arg(long)]
    pub tags: Option<String>,

    /// Don't replace existing URL
    #[arg(long)]
    pub no_replace: bool,

    /// Make URL private (default is public)
    #[arg(long)]
    pub private: bool,

    /// Make the URL unread
    #[arg(long)]
    pub unread: bool,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// URL to delete
    #[arg(long)]
    pub url: Url,
}

/// Arguments for the get command
#[derive(Args, Debug, Default)]
pub struct GetArgs {
    /// Return bookmark for given URL
    #[arg(long)]
    pub url: Option<String>,

    /// Return bookmarks only for given tag(s)
    #[arg(long)]
    pub tag: Option<String>,

    /// Return bookmarks for given day (ie 2016-06-11)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the suggest command
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// URL to offer suggested tags for
    #[arg(long)]
    pub url: Url,
}
