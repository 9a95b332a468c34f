//! Command-line entry point for one batch run.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sift_batch::{run_batch, BatchOptions};

#[derive(Parser, Debug)]
#[command(name = "interval-worker", about = "Extract anomalous intervals from a batch of prediction series")]
struct Cli {
    /// Source tree holding one directory per object.
    #[arg(short, long, env = "SIFT_SOURCE")]
    source: PathBuf,

    /// Destination tree for roll series and interval descriptors.
    #[arg(short, long, env = "SIFT_DESTINATION")]
    destination: PathBuf,

    /// YAML tuning file.
    #[arg(short, long, env = "SIFT_CONFIG")]
    config: PathBuf,

    /// Progress artifact path; removed when the run ends.
    #[arg(long, default_value = "complete.log")]
    progress_file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let summary = run_batch(&BatchOptions {
        source: cli.source,
        destination: cli.destination,
        config: cli.config,
        progress_file: cli.progress_file,
    })?;

    info!(
        objects = summary.objects,
        groups = summary.groups,
        intervals = summary.intervals,
        "batch complete"
    );
    Ok(())
}
