//! f77parse CLI entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

use f77parse::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    // Structured logging to stderr. `--trace` turns on per-token parser tracing; otherwise RUST_LOG decides,
    // defaulting to info.
    let filter = if cli.trace {
        EnvFilter::new("info,f77_syntax=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    cli::run(cli);
}
