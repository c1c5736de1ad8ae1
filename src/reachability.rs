//! Ancestor / descendant reachability.
//!
//! ## Visitation Order
//!
//! Traversal uses an explicit LIFO stack. Neighbors are pushed in adjacency
//! order and the visited check happens when an id is popped, not when it is
//! pushed. For a node with neighbors `[X, Y]`, `Y` (and everything below it)
//! is reported before `X`:
//!
//! ```text
//!     A          reach(forward, A) = [C, D, B]
//!    / \
//!   B   C
//!    \ /
//!     D
//! ```
//!
//! Downstream output order depends on this exact sequence.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::adjacency::{build_adjacency_lists, AdjacencyMap};
use crate::error::Result;
use crate::types::{validate, Edge, Node};

/// Ancestors and descendants of a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReachabilitySet {
    /// The start node.
    pub id: String,
    /// Nodes that reach `id` through reverse traversal.
    pub ancestors: Vec<String>,
    /// Nodes reachable from `id` through forward traversal.
    pub descendants: Vec<String>,
    /// `ancestors ++ descendants`, without cross-deduplication.
    pub reachable_nodes: Vec<String>,
}

impl ReachabilitySet {
    /// Assemble a set from both traversal halves.
    pub fn new(id: impl Into<String>, ancestors: Vec<String>, descendants: Vec<String>) -> Self {
        let reachable_nodes = ancestors.iter().chain(descendants.iter()).cloned().collect();
        Self {
            id: id.into(),
            ancestors,
            descendants,
            reachable_nodes,
        }
    }
}

/// Nodes reachable from `start` through `adjacency`, in LIFO depth-first order.
///
/// `start` is marked visited up front and never appears in its own result,
/// even when a cycle leads back to it. An id with no entry yields an empty
/// result.
pub fn reach(adjacency: &AdjacencyMap, start: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(start);

    let mut stack: Vec<&str> = adjacency
        .get(start)
        .map(|next| next.iter().map(String::as_str).collect())
        .unwrap_or_default();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        result.push(current.to_string());

        if let Some(next) = adjacency.get(current) {
            stack.extend(next.iter().map(String::as_str));
        }
    }

    result
}

/// Ancestors and descendants for every node, in input node order.
pub fn ancestor_descendant(nodes: &[Node], edges: &[Edge]) -> Result<Vec<ReachabilitySet>> {
    validate(nodes, edges)?;
    let lists = build_adjacency_lists(edges);

    let sets: Vec<ReachabilitySet> = nodes
        .iter()
        .map(|node| {
            ReachabilitySet::new(
                node.id.clone(),
                reach(&lists.reverse, &node.id),
                reach(&lists.forward, &node.id),
            )
        })
        .collect();

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "computed reachability");

    Ok(sets)
}
