//! mksecret - Print a freshly generated SECRET_KEY setting line.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mksecret::cli::{execute, output, Cli};

fn main() {
    let _cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for the settings line
    let filter =
        EnvFilter::try_from_env("MKSECRET_LOG").unwrap_or_else(|_| EnvFilter::new("mksecret=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(&mut std::io::stdout().lock()) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
