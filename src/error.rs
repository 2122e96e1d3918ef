/*!
# Errors

All fallible operations in this crate fail immediately and synchronously at
the point of the offending call. Sentinel returns
([`NO_WEIGHT`](crate::edge::NO_WEIGHT) for "no edge", `None` for "no path")
are normal outcomes, not errors, and never surface here.
*/

use thiserror::Error;

use crate::{
    edge::Weight,
    node::{Node, NumNodes},
};

/// The error taxonomy of the crate
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A node index outside `0..n` was passed to a checked storage or
    /// traversal operation
    #[error("node {node} out of range for a graph with {num_nodes} nodes")]
    InvalidVertex { node: Node, num_nodes: NumNodes },

    /// A negative weight was passed to an edge insertion
    #[error("negative edge weight {0}")]
    InvalidWeight(Weight),

    /// An element index outside `0..n` was passed to a union-find operation
    #[error("element {index} out of range for a union-find over {num_elements} elements")]
    InvalidIndex { index: usize, num_elements: usize },

    /// A report operation was called on a table (or trace) that was not
    /// populated by the traversal it derives from
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;
