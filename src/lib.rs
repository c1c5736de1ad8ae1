//! # graph-analytics
//!
//! Deterministic analytics for typed directed graphs.
//!
//! Nodes carry an id, a type label and an optional value; edges are directed
//! and may repeat or loop. The crate answers four questions:
//!
//! 1. Who connects to whom? ([`build_adjacency_lists`])
//! 2. Which nodes reach, or are reached from, each node? ([`ancestor_descendant`])
//! 3. How does a value flow from ancestors down to descendants? ([`top_down_aggregation`])
//! 4. What do counts and transitions look like per node type? ([`overview_statistics`])
//!
//! ## Architecture
//!
//! ```text
//! Nodes + Edges → AdjacencyLists → Reachability → Propagation
//!                       ↓                ↘
//!                 TypeAggregate   →   OverviewStatistics
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Input order of nodes and edges drives every output order
//! - Adjacency lists keep first-occurrence order, without duplicates
//! - Reachability follows a fixed LIFO stack walk
//! - Type tables are sorted by type label

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod error;
pub mod canonical;
pub mod adjacency;
pub mod reachability;
pub mod propagation;
pub mod aggregate;
pub mod overview;

// Re-exports
pub use types::{Node, Edge, Graph, NodeIndex, validate};
pub use error::{GraphError, Result};
pub use adjacency::{build_adjacency_lists, AdjacencyLists, AdjacencyMap};
pub use reachability::{reach, ancestor_descendant, ReachabilitySet};
pub use propagation::{top_down_aggregation, AggregatedNode};
pub use aggregate::{aggregate_by_type, TypeAggregate, TypeCount, TypeTransition};
pub use overview::{overview_statistics, OverviewStatistics};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};

/// Schema version for all report types.
/// Increment on breaking changes to any serialized result.
pub const GRAPH_ANALYTICS_SCHEMA_VERSION: &str = "1.0.0";
