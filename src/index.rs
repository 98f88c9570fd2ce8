//! The inverted index: term → posting-set mapping plus AND-query resolution.

use crate::analyze::Analyzer;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Mapping from term to the set of document ids containing that term.
///
/// Invariants:
/// - a term is a key iff at least one document contains it and it is not a
///   stop word; posting sets are never empty
/// - postings carry existence only (no positions, no frequencies)
///
/// Sorted containers keep every observable enumeration (artifact bytes, CLI
/// output) in ascending order, but the programmatic contract is set
/// membership only.
///
/// Serializes as the flat `{"term": [id, ...]}` object that is the
/// persisted artifact schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    postings: BTreeMap<String, BTreeSet<u32>>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over a loaded corpus.
    ///
    /// Repeated occurrences of a term within one document contribute once.
    /// The result depends only on the id → text mapping, not on the order
    /// the documents arrived in.
    pub fn build(analyzer: &Analyzer, documents: &BTreeMap<u32, String>) -> Self {
        let mut postings: BTreeMap<String, BTreeSet<u32>> = BTreeMap::new();
        for (&doc_id, text) in documents {
            for term in analyzer.terms(text) {
                postings.entry(term.to_string()).or_default().insert(doc_id);
            }
        }
        debug!(docs = documents.len(), terms = postings.len(), "built index");
        Self { postings }
    }

    /// Document ids containing every query term (logical AND).
    ///
    /// An empty query matches nothing. If any term is absent from the index
    /// the result is empty and processing stops there; intersecting further
    /// could only stay empty.
    pub fn query(&self, terms: &[String]) -> BTreeSet<u32> {
        let Some((first, rest)) = terms.split_first() else {
            return BTreeSet::new();
        };
        let Some(mut result) = self.postings.get(first).cloned() else {
            return BTreeSet::new();
        };
        for term in rest {
            let Some(ids) = self.postings.get(term) else {
                return BTreeSet::new();
            };
            result.retain(|id| ids.contains(id));
            if result.is_empty() {
                break;
            }
        }
        result
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index has no terms.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Iterate all indexed terms, ascending.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.postings.keys().map(String::as_str)
    }

    /// Posting set for a term, if indexed.
    pub fn postings(&self, term: &str) -> Option<&BTreeSet<u32>> {
        self.postings.get(term)
    }
}
