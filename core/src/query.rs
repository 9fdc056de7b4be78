use crate::error::{Result, SearchError};
use crate::normalize::{is_blank, normalize};
use crate::trie::{PrefixTree, RowId};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Outcome of one prefix lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The query after normalization.
    pub search: String,
    /// Matching rows in insertion order.
    pub result: Vec<RowId>,
    /// Lookup latency in milliseconds.
    pub time: f64,
}

#[derive(Debug, Default)]
pub struct QueryBatch {
    pub results: Vec<SearchResult>,
    /// Blank queries that were dropped.
    pub skipped: usize,
}

/// Runs prefix lookups against a built, read-only tree.
pub struct QueryService<'a> {
    tree: &'a PrefixTree,
}

impl<'a> QueryService<'a> {
    pub fn new(tree: &'a PrefixTree) -> Self {
        Self { tree }
    }

    /// Look up every query in order, one result per non-blank query.
    ///
    /// Repeated queries are looked up again each time.
    pub fn search<I, S>(&self, queries: I) -> Result<QueryBatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut batch = QueryBatch::default();
        let mut seen = 0usize;
        for (line, query) in queries.into_iter().enumerate() {
            seen += 1;
            let query = query.as_ref();
            if is_blank(query) {
                tracing::warn!(line = line + 1, "skipping blank query");
                batch.skipped += 1;
                continue;
            }
            batch.results.push(self.search_one(query)?);
        }
        if seen == 0 {
            return Err(SearchError::EmptyQuerySet);
        }
        Ok(batch)
    }

    fn search_one(&self, query: &str) -> Result<SearchResult> {
        let normalized = normalize(query);
        let start = Instant::now();
        let rows = self.tree.search(&normalized)?;
        let elapsed = start.elapsed();

        let time = elapsed.as_secs_f64() * 1_000.0;
        tracing::info!(search = %normalized, result = ?rows, time_ms = time, "prefix lookup");
        Ok(SearchResult { search: normalized, result: rows.to_vec(), time })
    }
}
