//! All data types for the graph-traversal library.

pub mod error;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use node::{Node, Value};

/// Separator used when rendering a traversal order.
pub const DEFAULT_SEPARATOR: &str = " -> ";

/// Arrow placed before each neighbor in the structure view.
pub const EDGE_ARROW: &str = "--->";

/// Edges of the built-in sample graph, in insertion order.
pub const SAMPLE_EDGES: [(&str, &str); 7] = [
    ("A", "B"),
    ("A", "C"),
    ("B", "D"),
    ("B", "E"),
    ("C", "F"),
    ("E", "F"),
    ("F", "G"),
];
