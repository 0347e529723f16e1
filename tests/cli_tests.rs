//! Command-line parsing and configuration tests
//!
//! Exercises the public CLI surface without touching the network.

use clap::Parser;
use pinboardin::cli::args::{Cli, Commands};
use pinboardin::commands::{add, all, get, recent};
use pinboardin::config::ConfigBuilder;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["pinboardin"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_credentials_from_flags() {
    let cli = parse(&["--username", "alice", "--token", "T0K3N", "recent"]);
    let config = ConfigBuilder::from_cli(&cli).build();
    assert_eq!(config.username, "alice");
    assert_eq!(config.token, "T0K3N");
}

#[test]
fn test_recent_flags_map_to_query() {
    let cli = parse(&["recent", "--count", "3", "--tag", "rust"]);
    let Commands::Recent(args) = cli.command else {
        panic!("Expected Recent command");
    };
    assert_eq!(recent::build_query(&args).encode(), "count=3&tag=rust");
}

#[test]
fn test_all_flags_map_to_query() {
    let cli = parse(&["all", "--start", "5", "--results", "10", "--tag", "web"]);
    let Commands::All(args) = cli.command else {
        panic!("Expected All command");
    };
    assert_eq!(
        all::build_query(&args).encode(),
        "results=10&start=5&tag=web"
    );
}

#[test]
fn test_add_flags_map_to_query() {
    let cli = parse(&[
        "add",
        "--url",
        "https://example.com/",
        "--title",
        "Example",
        "--no-replace",
    ]);
    let Commands::Add(args) = cli.command else {
        panic!("Expected Add command");
    };
    let query = add::build_query(&args);
    assert_eq!(query.get("url"), Some("https://example.com/"));
    assert_eq!(query.get("description"), Some("Example"));
    assert_eq!(query.get("replace"), Some("no"));
    assert_eq!(query.get("shared"), None);
    assert_eq!(query.get("toread"), None);
}

#[test]
fn test_get_without_flags_has_empty_query() {
    let cli = parse(&["get"]);
    let Commands::Get(args) = cli.command else {
        panic!("Expected Get command");
    };
    assert!(get::build_query(&args).is_empty());
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["pinboardin", "update"]).is_err());
}

#[test]
fn test_missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["pinboardin", "--json"]).is_err());
}
