//! Top-down value propagation over a DAG.
//!
//! ## Algorithm
//!
//! 1. Build forward and reverse adjacency
//! 2. Seed a ready queue with roots (nodes without incoming edges), in input order
//! 3. Pop a ready node and compute
//!    `aggregated(n) = value(n) + Σ_{p ∈ preds(n)} aggregated(p) / out_degree(p)`
//! 4. Decrement the pending-predecessor count of each successor; successors
//!    reaching zero become ready
//! 5. Any node never made ready sits on or below a cycle: fail with `NotADag`
//!
//! Each node's value depends only on its direct predecessors, so any
//! topological order yields the same numbers. Output is always reported in
//! input node order.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

use crate::adjacency::build_adjacency_lists;
use crate::error::{GraphError, Result};
use crate::reachability::reach;
use crate::types::{validate, Edge, Node};

/// Propagated value for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedNode {
    /// Node id.
    pub id: String,
    /// Own value plus the shares inherited from every direct predecessor.
    pub aggregated_value: f64,
    /// `[id] ++ ancestors(id)` in reachability order.
    pub contributing_nodes: Vec<String>,
}

/// Propagate node values from roots down to descendants.
///
/// Cycles (self-loops included) are rejected with [`GraphError::NotADag`]
/// rather than resolved.
pub fn top_down_aggregation(nodes: &[Node], edges: &[Edge]) -> Result<Vec<AggregatedNode>> {
    let index = validate(nodes, edges)?;
    if index.is_empty() {
        return Ok(Vec::new());
    }
    let lists = build_adjacency_lists(edges);

    let mut pending: HashMap<&str, usize> = nodes
        .iter()
        .map(|n| (n.id.as_str(), lists.in_degree(&n.id)))
        .collect();
    let mut ready: VecDeque<&str> = nodes
        .iter()
        .filter(|n| lists.is_root(&n.id))
        .map(|n| n.id.as_str())
        .collect();
    let mut aggregated: HashMap<&str, f64> = HashMap::with_capacity(nodes.len());

    while let Some(id) = ready.pop_front() {
        let own = index.get(id).map(Node::own_value).unwrap_or(0.0);
        let inherited: f64 = lists
            .predecessors(id)
            .iter()
            .map(|p| {
                let parent_value = aggregated.get(p.as_str()).copied().unwrap_or(0.0);
                parent_value / lists.out_degree(p) as f64
            })
            .sum();
        aggregated.insert(id, own + inherited);

        for child in lists.successors(id) {
            if let Some(count) = pending.get_mut(child.as_str()) {
                *count -= 1;
                if *count == 0 {
                    ready.push_back(child.as_str());
                }
            }
        }
    }

    if aggregated.len() < nodes.len() {
        let unresolved: Vec<String> = nodes
            .iter()
            .filter(|n| !aggregated.contains_key(n.id.as_str()))
            .map(|n| n.id.clone())
            .collect();
        tracing::warn!(
            unresolved = unresolved.len(),
            self_loops = edges.iter().filter(|e| e.is_self_loop()).count(),
            "propagation found a dependency cycle"
        );
        return Err(GraphError::NotADag { unresolved });
    }

    let result: Vec<AggregatedNode> = nodes
        .iter()
        .map(|node| {
            let mut contributing_nodes = vec![node.id.clone()];
            contributing_nodes.extend(reach(&lists.reverse, &node.id));
            AggregatedNode {
                id: node.id.clone(),
                aggregated_value: aggregated.get(node.id.as_str()).copied().unwrap_or(0.0),
                contributing_nodes,
            }
        })
        .collect();

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "propagated values top-down");

    Ok(result)
}
