//! Forward and reverse adjacency construction.
//!
//! Edges are scanned once, left to right. Each successor (or predecessor)
//! list is an ordered set: an id is appended the first time it is seen and
//! ignored afterwards, so duplicate edges collapse while first-occurrence
//! order survives.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::types::Edge;

/// Adjacency mapping: node id -> ordered, duplicate-free neighbor ids.
pub type AdjacencyMap = BTreeMap<String, Vec<String>>;

/// Forward (successor) and reverse (predecessor) adjacency.
///
/// A node id is a key of `forward` iff it has at least one outgoing edge,
/// and a key of `reverse` iff it has at least one incoming edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyLists {
    /// `from -> [to, ...]`
    pub forward: AdjacencyMap,
    /// `to -> [from, ...]`
    pub reverse: AdjacencyMap,
}

impl AdjacencyLists {
    /// Direct successors of `id` (empty if it has no outgoing edges).
    pub fn successors(&self, id: &str) -> &[String] {
        self.forward.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Direct predecessors of `id` (empty if it has no incoming edges).
    pub fn predecessors(&self, id: &str) -> &[String] {
        self.reverse.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct successors.
    pub fn out_degree(&self, id: &str) -> usize {
        self.successors(id).len()
    }

    /// Number of distinct predecessors.
    pub fn in_degree(&self, id: &str) -> usize {
        self.predecessors(id).len()
    }

    /// Whether `id` has no incoming edges.
    pub fn is_root(&self, id: &str) -> bool {
        !self.reverse.contains_key(id)
    }

    /// Whether `id` has no outgoing edges.
    pub fn is_leaf(&self, id: &str) -> bool {
        !self.forward.contains_key(id)
    }
}

/// Build forward and reverse adjacency from an edge collection.
///
/// Operates on edges alone: endpoints need not exist in any node list.
/// Self-loops are recorded under the same id as key and value.
pub fn build_adjacency_lists(edges: &[Edge]) -> AdjacencyLists {
    let mut lists = AdjacencyLists::default();
    let mut seen: HashSet<(&str, &str)> = HashSet::with_capacity(edges.len());

    for edge in edges {
        if !seen.insert((edge.from.as_str(), edge.to.as_str())) {
            continue;
        }
        lists
            .forward
            .entry(edge.from.clone())
            .or_default()
            .push(edge.to.clone());
        lists
            .reverse
            .entry(edge.to.clone())
            .or_default()
            .push(edge.from.clone());
    }

    tracing::debug!(
        edges = edges.len(),
        distinct_pairs = seen.len(),
        "built adjacency lists"
    );

    lists
}
