//! Text rendering of traversal orders and graph structure.

use crate::graph::Graph;
use crate::types::{Node, EDGE_ARROW};

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// ANSI coloring, or plain text when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never emits escape codes.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    pub fn node(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    pub fn arrow(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(RED, text)
    }
}

/// Join a traversal order with `separator`.
pub fn render_order(order: &[Node], separator: &str) -> String {
    order
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Structure view: a header line, then every node (sorted) followed by its
/// sorted neighbors.
pub fn render_structure(graph: &Graph, palette: Palette) -> String {
    if graph.is_empty() {
        return "Empty Graph".to_string();
    }

    let mut lines = vec![palette.header(&format!(
        "Graph Structure ({} nodes, {} edges):",
        graph.size(),
        graph.edge_count()
    ))];

    let mut nodes: Vec<&Node> = graph.nodes().collect();
    nodes.sort();
    for node in nodes {
        let mut neighbors: Vec<&Node> = graph.get_neighbors(node).iter().collect();
        neighbors.sort();
        let mut line = palette.node(&node.to_string());
        for neighbor in neighbors {
            line.push(' ');
            line.push_str(&palette.arrow(EDGE_ARROW));
            line.push(' ');
            line.push_str(&neighbor.to_string());
        }
        lines.push(line);
    }
    lines.join("\n")
}
