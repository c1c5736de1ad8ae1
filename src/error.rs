//! Error type shared by every graph-level operation.

/// Error type for graph analytics operations.
///
/// Integrity failures are never corrected internally: each one surfaces
/// as its own variant so callers can tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// An edge names a node id that is absent from the node collection.
    #[error("Dangling reference: edge #{edge_index} names unknown node {id}")]
    DanglingReference {
        /// The unresolved node id.
        id: String,
        /// Position of the offending edge in the input.
        edge_index: usize,
    },
    /// No topological order exists because of a dependency cycle.
    ///
    /// Lists cycle members and every node downstream of them.
    #[error("Not a DAG: unresolved nodes {}", .unresolved.join(", "))]
    NotADag {
        /// Nodes whose predecessors could never be resolved, in input order.
        unresolved: Vec<String>,
    },
    /// The same node id appears more than once.
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),
    /// Reading a graph document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A graph document could not be decoded, or a value could not be encoded.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GraphError {
    /// Whether this error reports bad graph data rather than a loading failure.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            Self::DanglingReference { .. } | Self::NotADag { .. } | Self::DuplicateNodeId(_)
        )
    }
}

/// Result alias for graph analytics operations.
pub type Result<T> = std::result::Result<T, GraphError>;
