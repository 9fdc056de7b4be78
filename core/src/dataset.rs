//! Readers for the two input files: the CSV data file and the query list.

use crate::error::{Result, SearchError};
use crate::pipeline::IndexedRecord;
use crate::trie::RowId;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

lazy_static! {
    static ref SURROUNDING_QUOTES: Regex = Regex::new(r#"^"|"$"#).expect("valid regex");
}

/// Read `(row number, column value)` pairs from a comma-separated file.
///
/// `column` is 0-based; column 0 indexes the row number itself as text. Blank
/// lines, rows with too few fields (trailing empty fields do not count) and
/// rows whose first field is not a 32-bit integer are skipped with a warning.
pub fn read_records<P: AsRef<Path>>(path: P, column: usize) -> Result<Vec<IndexedRecord>> {
    let path = path.as_ref();
    let f = File::open(path)?;
    let records = parse_records(BufReader::new(f), column)?;
    tracing::info!(path = %path.display(), num_records = records.len(), "data file parsed");
    Ok(records)
}

pub fn parse_records<R: BufRead>(reader: R, column: usize) -> Result<Vec<IndexedRecord>> {
    let mut records = Vec::new();
    let mut lines = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        lines += 1;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            tracing::warn!(line_no, "skipping blank line");
            continue;
        }

        let mut fields: Vec<&str> = line.split(',').collect();
        while fields.last() == Some(&"") {
            fields.pop();
        }
        if fields.len() <= column {
            tracing::warn!(line_no, %line, "skipping row with too few columns");
            continue;
        }

        let row: i32 = match fields[0].trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(line_no, %line, "skipping row without a numeric row number");
                continue;
            }
        };
        let row = RowId::try_from(row)
            .map_err(|_| SearchError::invalid_argument("row", format!("row number {row} on line {line_no} is negative")))?;

        let value = SURROUNDING_QUOTES.replace_all(fields[column].trim(), "").to_lowercase();
        if value.trim().is_empty() {
            return Err(SearchError::invalid_argument("search_field", format!("empty value in row {row}")));
        }
        tracing::debug!(row, value = %value, "parsed row");
        records.push(IndexedRecord::new(row, value));
    }

    if lines == 0 {
        return Err(SearchError::invalid_argument("data", "data file is empty"));
    }
    Ok(records)
}

/// Read the query file, one query per line, dropping blank lines.
pub fn read_queries<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let mut buf = String::new();
    File::open(path.as_ref())?.read_to_string(&mut buf)?;
    Ok(parse_queries(&buf))
}

pub fn parse_queries(text: &str) -> Vec<String> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            if line.trim().is_empty() {
                tracing::warn!(line_no = idx + 1, "skipping blank query line");
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}
