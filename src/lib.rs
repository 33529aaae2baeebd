//! graph-traversal — in-memory undirected graph with traversal and analysis.
//!
//! Nodes are integers, strings or tuples of those. Edges are kept in
//! insertion-ordered adjacency lists, which fixes the visiting order of BFS,
//! DFS and the tie-break between equally short paths.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs, dfs, dfs_with, EdgeDirection, Graph, GraphBuilder, GraphStats, TraversalState,
};
pub use types::{GraphError, GraphResult, Node, Value, DEFAULT_SEPARATOR, SAMPLE_EDGES};
