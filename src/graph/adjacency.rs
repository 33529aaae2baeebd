//! Core graph structure — insertion-ordered adjacency lists.

use std::collections::HashMap;
use std::fmt;

use crate::types::{GraphError, GraphResult, Node, Value};

/// How an edge is inserted into the adjacency lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDirection {
    /// Append each endpoint to the other's neighbor list.
    #[default]
    Both,
    /// Append `to` to `from`'s neighbor list only.
    OneWay,
}

/// An undirected graph stored as adjacency lists.
///
/// Both the node keys and every neighbor list keep insertion order, which
/// fixes the visiting order of all traversals. A neighbor list never holds
/// duplicates and a node is never its own neighbor.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node -> neighbors, in the order the edges were added.
    adjacency: HashMap<Node, Vec<Node>>,
    /// Nodes in insertion order.
    order: Vec<Node>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from bidirectional edges, in order.
    pub fn from_edges<I, A, B>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<Value>,
        B: Into<Value>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Add a node with no neighbors. No-op if it already exists.
    pub fn add_node(&mut self, node: impl Into<Node>) {
        let node = node.into();
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
            self.adjacency.insert(node, Vec::new());
        }
    }

    /// Add a bidirectional edge, creating missing endpoints.
    pub fn add_edge(&mut self, from: impl Into<Value>, to: impl Into<Value>) -> GraphResult<()> {
        self.insert_edge(from, to, EdgeDirection::Both)
    }

    /// Add an edge in the given direction, creating missing endpoints.
    ///
    /// Re-adding an existing edge is a no-op.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidNodeType`] if either value is not a valid node
    /// identity, then [`GraphError::SelfLoop`] if both endpoints are equal.
    pub fn insert_edge(
        &mut self,
        from: impl Into<Value>,
        to: impl Into<Value>,
        direction: EdgeDirection,
    ) -> GraphResult<()> {
        let from = Node::try_from(from.into())?;
        let to = Node::try_from(to.into())?;
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }

        self.add_node(from.clone());
        self.add_node(to.clone());

        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            if !neighbors.contains(&to) {
                neighbors.push(to.clone());
            }
        }
        if direction == EdgeDirection::Both {
            if let Some(neighbors) = self.adjacency.get_mut(&to) {
                if !neighbors.contains(&from) {
                    neighbors.push(from.clone());
                }
            }
        }

        log::trace!("Edge {} -> {} ({:?})", from, to, direction);
        Ok(())
    }

    /// Remove a node and every edge that touches it. No-op if absent.
    pub fn remove_node(&mut self, node: &Node) {
        if self.adjacency.remove(node).is_none() {
            return;
        }
        let mut purged = 0;
        for neighbors in self.adjacency.values_mut() {
            let before = neighbors.len();
            neighbors.retain(|n| n != node);
            purged += before - neighbors.len();
        }
        self.order.retain(|n| n != node);
        log::debug!("Removed node {} ({} back-references purged)", node, purged);
    }

    /// Neighbors of a node, or an empty slice if it is absent.
    pub fn get_neighbors(&self, node: &Node) -> &[Node] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the node exists.
    pub fn contains(&self, node: &Node) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter()
    }

    /// Number of distinct nodes.
    pub fn size(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of edges, counting each neighbor entry as half an edge.
    ///
    /// Exact only when every edge was inserted bidirectionally.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// `2·E / (n·(n-1))`, or `0.0` for graphs with fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.size();
        if n <= 1 {
            return 0.0;
        }
        (2 * self.edge_count()) as f64 / (n * (n - 1)) as f64
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.order.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: [", node)?;
            for (j, neighbor) in self.get_neighbors(node).iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", neighbor)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
