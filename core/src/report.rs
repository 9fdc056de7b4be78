use crate::error::Result;
use crate::query::SearchResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// The document handed to the serializer at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// Total time spent indexing and querying.
    pub init_time_ms: u64,
    pub result: Vec<SearchResult>,
}

impl SearchReport {
    pub fn new(elapsed: Duration, result: Vec<SearchResult>) -> Self {
        let init_time_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        Self { init_time_ms, result }
    }
}

pub fn write_report<P: AsRef<Path>>(path: P, report: &SearchReport) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, report)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
