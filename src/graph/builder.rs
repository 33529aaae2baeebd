//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Node, Value};

use super::{EdgeDirection, Graph};

enum Step {
    Node(Node),
    Edge(Value, Value, EdgeDirection),
}

/// Fluent builder for constructing a [`Graph`].
///
/// Steps are replayed in order by [`GraphBuilder::build`], which reports the
/// first invalid edge.
#[derive(Default)]
pub struct GraphBuilder {
    steps: Vec<Step>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an isolated node.
    pub fn node(&mut self, node: impl Into<Node>) -> &mut Self {
        self.steps.push(Step::Node(node.into()));
        self
    }

    /// Add a bidirectional edge.
    pub fn edge(&mut self, from: impl Into<Value>, to: impl Into<Value>) -> &mut Self {
        self.steps
            .push(Step::Edge(from.into(), to.into(), EdgeDirection::Both));
        self
    }

    /// Add an edge from `from` to `to` only.
    pub fn one_way(&mut self, from: impl Into<Value>, to: impl Into<Value>) -> &mut Self {
        self.steps
            .push(Step::Edge(from.into(), to.into(), EdgeDirection::OneWay));
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for step in &self.steps {
            match step {
                Step::Node(node) => graph.add_node(node.clone()),
                Step::Edge(from, to, direction) => {
                    graph.insert_edge(from.clone(), to.clone(), *direction)?
                }
            }
        }
        Ok(graph)
    }
}
