//! In-memory prefix index over one column of a delimited data file.

pub mod dataset;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod query;
pub mod report;
pub mod trie;

pub use error::{Result, SearchError};
pub use normalize::normalize;
pub use pipeline::{build_index, IndexedRecord};
pub use query::{QueryBatch, QueryService, SearchResult};
pub use report::{write_report, SearchReport};
pub use trie::{PrefixTree, RowId};
