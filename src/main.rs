//! archreview - Rule-driven architecture document review CLI
//!
//! Reviews solution architectures, design docs, and standards against
//! configurable review rules, producing a severity-weighted quality score
//! and actionable comments.

use anyhow::Result;
use archreview::cli;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
