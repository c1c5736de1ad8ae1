//! Type-level aggregation.
//!
//! Groups nodes and edges by node type label, producing per-type counts and
//! a row-normalized type transition table.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::types::{validate, Edge, Node};

/// Number of nodes carrying a type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    /// Node type label.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Nodes with this label.
    pub node_count: usize,
}

/// Edges between two node types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeTransition {
    /// Type of the source node.
    pub from_type: String,
    /// Type of the target node.
    pub to_type: String,
    /// Number of edges with this type pair.
    pub transition_count: usize,
    /// `transition_count` over all edges leaving `from_type`.
    pub transition_probability: f64,
}

/// Per-type counts and type transitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeAggregate {
    /// Sorted by type; only types labelling at least one edge endpoint.
    pub aggregate_nodes: Vec<TypeCount>,
    /// Sorted by `(from_type, to_type)`.
    pub aggregate_edges: Vec<TypeTransition>,
}

impl TypeAggregate {
    /// Type labels in `aggregate_nodes` order.
    pub fn node_types(&self) -> Vec<String> {
        self.aggregate_nodes
            .iter()
            .map(|t| t.node_type.clone())
            .collect()
    }

    /// Types that appear as the source of some transition.
    pub fn from_types(&self) -> BTreeSet<&str> {
        self.aggregate_edges
            .iter()
            .map(|t| t.from_type.as_str())
            .collect()
    }

    /// Types that appear as the target of some transition.
    pub fn to_types(&self) -> BTreeSet<&str> {
        self.aggregate_edges
            .iter()
            .map(|t| t.to_type.as_str())
            .collect()
    }

    /// Transitions leaving `from_type`.
    pub fn transitions_from<'a>(&'a self, from_type: &'a str) -> impl Iterator<Item = &'a TypeTransition> {
        self.aggregate_edges
            .iter()
            .filter(move |t| t.from_type == from_type)
    }
}

/// Count nodes per type and edge transitions per type pair.
///
/// Every node is counted, but a type is reported only if it labels the
/// `from` or `to` endpoint of some edge. Graphs without edges therefore
/// report no types.
pub fn aggregate_by_type(nodes: &[Node], edges: &[Edge]) -> Result<TypeAggregate> {
    let index = validate(nodes, edges)?;

    let mut active: BTreeSet<&str> = BTreeSet::new();
    let mut transitions: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for edge in edges {
        let from_type = index.type_of(&edge.from);
        let to_type = index.type_of(&edge.to);
        active.insert(from_type);
        active.insert(to_type);
        *transitions.entry((from_type, to_type)).or_default() += 1;
    }

    let mut node_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for node in nodes {
        *node_counts.entry(node.node_type.as_str()).or_default() += 1;
    }

    let aggregate_nodes: Vec<TypeCount> = node_counts
        .into_iter()
        .filter(|(node_type, _)| active.contains(node_type))
        .map(|(node_type, node_count)| TypeCount {
            node_type: node_type.to_string(),
            node_count,
        })
        .collect();

    let mut outgoing: BTreeMap<&str, usize> = BTreeMap::new();
    for (&(from_type, _), count) in &transitions {
        *outgoing.entry(from_type).or_default() += count;
    }

    let aggregate_edges: Vec<TypeTransition> = transitions
        .iter()
        .map(|(&(from_type, to_type), &count)| {
            let total = outgoing.get(from_type).copied().unwrap_or(count);
            TypeTransition {
                from_type: from_type.to_string(),
                to_type: to_type.to_string(),
                transition_count: count,
                transition_probability: count as f64 / total as f64,
            }
        })
        .collect();

    tracing::debug!(
        types = aggregate_nodes.len(),
        transitions = aggregate_edges.len(),
        "aggregated graph by type"
    );

    Ok(TypeAggregate {
        aggregate_nodes,
        aggregate_edges,
    })
}
