//! pinboardin - command line client for pinboard.in bookmarks
//!
//! Each invocation performs exactly one API request and prints the result.

use clap::Parser;
use pinboardin::api::{HttpTransport, PinboardClient};
use pinboardin::cli::args::Cli;
use pinboardin::commands::dispatch;
use pinboardin::config::{Config, ConfigBuilder};
use pinboardin::error::{ApiError, AppError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still wins over --verbose
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let config = ConfigBuilder::from_cli(&cli).build();

    if let Err(e) = run(&cli, &config) {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let transport = HttpTransport::new(config.handshake_timeout)?;
    let client = PinboardClient::new(transport, config);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    dispatch(&cli.command, &client, &mut handle)
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Api(ApiError::Unreachable(_)) => {
            eprintln!();
            eprintln!("Hint: Check your network connection and that api.pinboard.in is reachable.");
        }
        AppError::Api(ApiError::RateLimited) => {
            eprintln!();
            eprintln!("Hint: Wait a few minutes and re-run the command.");
        }
        AppError::Api(ApiError::UnexpectedStatus { status: 401 }) => {
            eprintln!();
            eprintln!("Hint: Check --username/--token or PINBOARD_USERNAME/PINBOARD_API_TOKEN.");
        }
        _ => {}
    }
}
