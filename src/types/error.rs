//! Error types for the graph-traversal library.

use thiserror::Error;

use super::node::Node;

/// All errors that can occur in the graph-traversal library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A value handed to edge insertion is not a valid node identity.
    #[error("Nodes must be hashable types (int, str or tuple), got {0}")]
    InvalidNodeType(&'static str),

    /// Self-loop not allowed.
    #[error("Self loops are not allowed (node {0})")]
    SelfLoop(Node),

    /// Node token is not present in the graph.
    #[error("Node '{0}' not found in graph")]
    NodeNotFound(String),

    /// Node token is empty after trimming.
    #[error("Node cannot be empty")]
    EmptyNode,

    /// Malformed `FROM-TO` edge token.
    #[error("Invalid edge spec '{0}', expected FROM-TO")]
    InvalidEdgeSpec(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
