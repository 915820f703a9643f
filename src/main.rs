//! CLI entry point for the proxilock console client.

mod app;
mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();
    init_tracing();
    std::process::exit(app::run(args));
}

/// Route diagnostics to stderr so they never interleave with page output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
