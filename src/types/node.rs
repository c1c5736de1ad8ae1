//! Node types for the analytics graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in a typed directed graph.
///
/// `id` is the sole identity key. `node_type` is a free-form label used for
/// grouping; `value` feeds top-down propagation. `weight` is carried through
/// for forward compatibility and is not read by any algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within a graph.
    pub id: String,
    /// Classification label.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Scalar used by propagation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Reserved attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Node {
    /// Create a node with no value or weight.
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            value: None,
            weight: None,
        }
    }

    /// Set the propagation value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Own contribution to propagation (`0.0` when no value is set).
    pub fn own_value(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.id, self.node_type)
    }
}
