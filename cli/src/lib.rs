use anyhow::{bail, Context, Result};
use clap::Parser;
use search_core::dataset::{read_queries, read_records};
use search_core::{build_index, write_report, QueryService, SearchReport};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug, Clone)]
#[command(name = "prefix-search")]
#[command(about = "Index one column of a CSV file and answer prefix queries against it", long_about = None)]
pub struct Args {
    /// CSV data file; the first column must hold the row number
    #[arg(long)]
    pub data: PathBuf,
    /// 1-based number of the column to index
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub indexed_column_id: u32,
    /// File with one prefix query per line
    #[arg(long)]
    pub input_file: PathBuf,
    /// Where to write the JSON results
    #[arg(long)]
    pub output_file: PathBuf,
}

/// Index the data file, run every query and write the report.
///
/// `started` is the instant the run began; the report's total time is measured from it.
pub fn run(args: &Args, started: Instant) -> Result<SearchReport> {
    if !args.data.exists() {
        bail!("data file not found: {}", args.data.display());
    }
    if !args.input_file.exists() {
        bail!("query file not found: {}", args.input_file.display());
    }

    let column = (args.indexed_column_id - 1) as usize;
    let records = read_records(&args.data, column)
        .with_context(|| format!("reading data file {}", args.data.display()))?;
    let tree = build_index(records).context("building the index")?;
    tracing::info!("index built, ready to search");

    let queries = read_queries(&args.input_file)
        .with_context(|| format!("reading query file {}", args.input_file.display()))?;
    let batch = QueryService::new(&tree).search(&queries).context("running queries")?;
    if batch.skipped > 0 {
        tracing::warn!(skipped = batch.skipped, "some queries were blank");
    }

    let report = SearchReport::new(started.elapsed(), batch.results);
    write_report(&args.output_file, &report)
        .with_context(|| format!("writing results to {}", args.output_file.display()))?;
    tracing::info!(output = %args.output_file.display(), "search results saved");
    Ok(report)
}
