use anyhow::Result;
use clap::Parser;
use prefix_search::{run, Args};
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let started = Instant::now();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    tracing::debug!(?args, "starting");

    let report = run(&args, started)?;
    tracing::info!(queries = report.result.len(), init_time_ms = report.init_time_ms, "done");
    Ok(())
}
