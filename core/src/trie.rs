use crate::error::{Result, SearchError};
use crate::normalize::{is_blank, normalize};
use std::collections::HashMap;

pub type RowId = u32;
pub type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, NodeId>,
    /// Every row whose key passes through this node, in insertion order.
    rows: Vec<RowId>,
}

impl TrieNode {
    fn add_row(&mut self, row: RowId) {
        // rows usually arrive in ascending order; only an out-of-order row needs the scan
        if self.rows.last().map_or(true, |&last| last < row) || !self.rows.contains(&row) {
            self.rows.push(row);
        }
    }
}

/// Prefix tree mapping normalized keys to the rows they came from.
///
/// A row id is stored on every node along its key's path, not only on the
/// terminal node, so a lookup is a single walk of `prefix.len()` steps with
/// no subtree traversal. Nodes live in one arena and reference their children
/// by index. One step is one `char` (Unicode scalar value).
#[derive(Debug)]
pub struct PrefixTree {
    nodes: Vec<TrieNode>,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self { nodes: vec![TrieNode::default()] }
    }
}

impl PrefixTree {
    pub fn new() -> Self { Self::default() }

    /// Index `word` under `row`. Inserting the same pair twice is a no-op.
    pub fn insert(&mut self, word: &str, row: RowId) -> Result<()> {
        if is_blank(word) {
            return Err(SearchError::invalid_argument("word", "must not be empty or blank"));
        }
        let key = normalize(word);
        tracing::debug!(key = %key, row, "inserting key");

        let mut current = ROOT;
        for c in key.chars() {
            let existing = self.nodes[current as usize].children.get(&c).copied();
            let next = match existing {
                Some(id) => id,
                None => {
                    let id = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current as usize].children.insert(c, id);
                    id
                }
            };
            self.nodes[next as usize].add_row(row);
            current = next;
        }
        tracing::trace!(key = %key, rows = ?self.nodes[current as usize].rows, "key inserted");
        Ok(())
    }

    /// All rows whose key starts with `prefix`, in the order they were inserted.
    ///
    /// An unknown prefix yields an empty slice, not an error.
    pub fn search(&self, prefix: &str) -> Result<&[RowId]> {
        if is_blank(prefix) {
            return Err(SearchError::invalid_argument("prefix", "must not be empty or blank"));
        }
        let key = normalize(prefix);

        let mut current = &self.nodes[ROOT as usize];
        for c in key.chars() {
            match current.children.get(&c) {
                Some(&id) => current = &self.nodes[id as usize],
                None => {
                    tracing::debug!(prefix = %key, missing = %c, "prefix not present");
                    return Ok(&[]);
                }
            }
        }
        tracing::debug!(prefix = %key, hits = current.rows.len(), "prefix found");
        Ok(&current.rows)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes[ROOT as usize].children.is_empty() }
}
