use anyhow::Result;
use clap::Parser;
use gwt_runner::Runner;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var, warnings by default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Runner::parse().execute()
}
