//! Overview statistics layered on type aggregation.
//!
//! ## Placeholder Metrics
//!
//! `branching_factor` and `max_depth` are coarse placeholders, not real
//! fan-out or longest-path measures:
//!
//! | Metric | Empty case | Otherwise |
//! |--------|-----------|-----------|
//! | `average_degree` | `0.0` when no nodes | `2 * edges / nodes` |
//! | `branching_factor` | `0.0` when no edges | `1.0` |
//! | `max_depth` | `0` when no nodes | `1` |
//!
//! Consumers depend on these exact values; changing them is a contract change.

use serde::{Deserialize, Serialize};

use crate::adjacency::build_adjacency_lists;
use crate::aggregate::{aggregate_by_type, TypeAggregate};
use crate::error::Result;
use crate::types::{fingerprint, Edge, Node};

/// Read-only structural summary of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStatistics {
    /// Number of input nodes.
    pub node_count: usize,
    /// Number of input edges (duplicates included).
    pub edge_count: usize,
    /// Sorted types that label at least one edge endpoint.
    pub node_types: Vec<String>,
    /// Length of `node_types`.
    pub unique_node_types_count: usize,
    /// Types never entered by a transition.
    pub source_node_types: Vec<String>,
    /// Types never left by a transition.
    pub target_node_types: Vec<String>,
    /// Undirected-style degree approximation.
    pub average_degree: f64,
    /// Placeholder: `1.0` whenever edges exist.
    pub branching_factor: f64,
    /// Placeholder: `1` whenever nodes exist.
    pub max_depth: usize,
    /// Nodes without incoming edges.
    pub root_node_count: usize,
    /// Nodes without outgoing edges.
    pub leaf_node_count: usize,
    /// Fingerprint of the analysed input.
    pub graph_fingerprint: String,
    /// Underlying type aggregation.
    pub type_aggregate: TypeAggregate,
}

/// Compute overview statistics for a graph.
pub fn overview_statistics(nodes: &[Node], edges: &[Edge]) -> Result<OverviewStatistics> {
    let type_aggregate = aggregate_by_type(nodes, edges)?;
    let lists = build_adjacency_lists(edges);

    let node_count = nodes.len();
    let edge_count = edges.len();

    let node_types = type_aggregate.node_types();
    let from_types = type_aggregate.from_types();
    let to_types = type_aggregate.to_types();

    let source_node_types: Vec<String> = node_types
        .iter()
        .filter(|t| !to_types.contains(t.as_str()))
        .cloned()
        .collect();
    let target_node_types: Vec<String> = node_types
        .iter()
        .filter(|t| !from_types.contains(t.as_str()))
        .cloned()
        .collect();

    let average_degree = if node_count == 0 {
        0.0
    } else {
        (2.0 * edge_count as f64) / node_count as f64
    };
    let branching_factor = if edge_count == 0 { 0.0 } else { 1.0 };
    let max_depth = if node_count == 0 { 0 } else { 1 };

    let root_node_count = nodes.iter().filter(|n| lists.is_root(&n.id)).count();
    let leaf_node_count = nodes.iter().filter(|n| lists.is_leaf(&n.id)).count();

    let graph_fingerprint = fingerprint(nodes, edges)?;

    tracing::debug!(
        node_count,
        edge_count,
        types = node_types.len(),
        fingerprint = %graph_fingerprint,
        "computed overview statistics"
    );

    Ok(OverviewStatistics {
        node_count,
        edge_count,
        unique_node_types_count: node_types.len(),
        node_types,
        source_node_types,
        target_node_types,
        average_degree,
        branching_factor,
        max_depth,
        root_node_count,
        leaf_node_count,
        graph_fingerprint,
        type_aggregate,
    })
}
