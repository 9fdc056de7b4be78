use crate::error::{Result, SearchError};
use crate::trie::{PrefixTree, RowId};

/// One row pulled from the tabular source: its row number and the raw value of the indexed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub row: RowId,
    pub search_field: String,
}

impl IndexedRecord {
    pub fn new(row: RowId, search_field: impl Into<String>) -> Self {
        Self { row, search_field: search_field.into() }
    }
}

/// Build a prefix tree from `records`, inserting them in the order given.
///
/// Fails with [`SearchError::EmptyIndex`] when `records` yields nothing.
pub fn build_index<I>(records: I) -> Result<PrefixTree>
where
    I: IntoIterator<Item = IndexedRecord>,
{
    let mut tree = PrefixTree::new();
    let mut num_records = 0usize;
    for record in records {
        tracing::debug!(row = record.row, value = %record.search_field, "adding to index");
        tree.insert(&record.search_field, record.row)?;
        num_records += 1;
    }
    if num_records == 0 {
        return Err(SearchError::EmptyIndex);
    }
    tracing::info!(num_records, num_nodes = tree.node_count(), "index built");
    Ok(tree)
}
