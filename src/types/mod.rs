//! Core types for graph analytics.

pub mod node;
pub mod edge;
pub mod graph;

pub use node::Node;
pub use edge::Edge;
pub use graph::{Graph, NodeIndex, validate, fingerprint};
