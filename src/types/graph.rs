//! Graph container, integrity validation and document loading.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::{Edge, Node};
use crate::adjacency::{build_adjacency_lists, AdjacencyLists};
use crate::aggregate::{aggregate_by_type, TypeAggregate};
use crate::canonical::canonical_hash_hex;
use crate::error::{GraphError, Result};
use crate::overview::{overview_statistics, OverviewStatistics};
use crate::propagation::{top_down_aggregation, AggregatedNode};
use crate::reachability::{ancestor_descendant, ReachabilitySet};

/// Lookup from node id to node, built by [`validate`].
///
/// Existence of a `NodeIndex` proves that node ids are unique and that
/// every edge endpoint resolves.
#[derive(Debug, Clone)]
pub struct NodeIndex<'a> {
    by_id: HashMap<&'a str, &'a Node>,
}

impl<'a> NodeIndex<'a> {
    /// Index nodes by id, rejecting duplicates.
    pub fn new(nodes: &'a [Node]) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if by_id.insert(node.id.as_str(), node).is_some() {
                tracing::warn!(node = %node, "duplicate node id in input");
                return Err(GraphError::DuplicateNodeId(node.id.clone()));
            }
        }
        Ok(Self { by_id })
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&'a Node> {
        self.by_id.get(id).copied()
    }

    /// Type label of a node known to exist.
    ///
    /// Returns an empty label for ids that were not indexed; callers only
    /// pass ids that [`validate`] has already resolved.
    pub fn type_of(&self, id: &str) -> &'a str {
        self.get(id).map(|n| n.node_type.as_str()).unwrap_or_default()
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Check node identity and edge endpoints before any traversal.
///
/// Duplicate ids are reported first, then the first edge (in input order)
/// whose `from` or `to` is unknown.
pub fn validate<'a>(nodes: &'a [Node], edges: &[Edge]) -> Result<NodeIndex<'a>> {
    let index = NodeIndex::new(nodes)?;

    for (edge_index, edge) in edges.iter().enumerate() {
        for endpoint in [&edge.from, &edge.to] {
            if index.get(endpoint).is_none() {
                tracing::warn!(id = %endpoint, edge_index, "edge references unknown node");
                return Err(GraphError::DanglingReference {
                    id: endpoint.clone(),
                    edge_index,
                });
            }
        }
    }

    tracing::debug!(nodes = index.len(), edges = edges.len(), "validated graph");
    Ok(index)
}

/// Fingerprint of ordered node ids/types and ordered edge pairs.
///
/// Input order participates in the hash because it determines traversal
/// and grouping order in every report.
pub fn fingerprint(nodes: &[Node], edges: &[Edge]) -> Result<String> {
    let nodes: Vec<(&str, &str)> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.node_type.as_str()))
        .collect();
    let edges: Vec<(&str, &str)> = edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    canonical_hash_hex(&(nodes, edges))
}

/// An ordered collection of nodes and edges analysed as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in input order.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Edges in input order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph from nodes and edges.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Decode a `{"nodes": [...], "edges": [...]}` document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and decode a graph document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Validate identity and endpoint integrity.
    pub fn validate(&self) -> Result<NodeIndex<'_>> {
        validate(&self.nodes, &self.edges)
    }

    /// Fingerprint of the ordered node and edge content.
    pub fn fingerprint(&self) -> Result<String> {
        fingerprint(&self.nodes, &self.edges)
    }

    /// Forward and reverse adjacency for this graph's edges.
    pub fn adjacency(&self) -> AdjacencyLists {
        build_adjacency_lists(&self.edges)
    }

    /// Ancestors and descendants of every node.
    pub fn reachability(&self) -> Result<Vec<ReachabilitySet>> {
        ancestor_descendant(&self.nodes, &self.edges)
    }

    /// Top-down value propagation.
    pub fn propagate(&self) -> Result<Vec<AggregatedNode>> {
        top_down_aggregation(&self.nodes, &self.edges)
    }

    /// Type counts and transition probabilities.
    pub fn type_aggregate(&self) -> Result<TypeAggregate> {
        aggregate_by_type(&self.nodes, &self.edges)
    }

    /// Overview statistics.
    pub fn overview(&self) -> Result<OverviewStatistics> {
        overview_statistics(&self.nodes, &self.edges)
    }
}
