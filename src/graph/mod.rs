//! In-memory graph operations — the core data structure and its algorithms.

pub mod adjacency;
pub mod analysis;
pub mod builder;
pub mod traversal;

pub use adjacency::{EdgeDirection, Graph};
pub use analysis::GraphStats;
pub use builder::GraphBuilder;
pub use traversal::{bfs, dfs, dfs_with, TraversalState};
