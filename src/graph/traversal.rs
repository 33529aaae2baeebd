//! Graph traversal algorithms (BFS, DFS).

use std::collections::{HashSet, VecDeque};

use crate::types::Node;

use super::Graph;

/// Visited set plus visiting order, shared across repeated DFS calls.
///
/// Passing the same state to [`dfs_with`] for several start nodes walks
/// each component once and appends every component to one order.
#[derive(Debug, Clone, Default)]
pub struct TraversalState {
    visited: HashSet<Node>,
    order: Vec<Node>,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the node has been visited.
    pub fn is_visited(&self, node: &Node) -> bool {
        self.visited.contains(node)
    }

    /// Nodes in the order they were visited.
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Consume the state, returning the visiting order.
    pub fn into_order(self) -> Vec<Node> {
        self.order
    }

    fn visit(&mut self, node: &Node) -> bool {
        if self.visited.insert(node.clone()) {
            self.order.push(node.clone());
            true
        } else {
            false
        }
    }
}

/// Breadth-first traversal from `start`, returning the visiting order.
///
/// Nodes are marked visited when enqueued, so each is queued at most once.
/// A start node absent from the graph yields `[start]`.
pub fn bfs(graph: &Graph, start: &Node) -> Vec<Node> {
    let mut visited: HashSet<&Node> = HashSet::new();
    let mut order: Vec<Node> = Vec::new();
    let mut queue: VecDeque<&Node> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        for neighbor in graph.get_neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    log::trace!("BFS from {} visited {} nodes", start, order.len());
    order
}

/// Depth-first pre-order traversal from `start`.
///
/// A start node absent from the graph yields `[start]`.
pub fn dfs(graph: &Graph, start: &Node) -> Vec<Node> {
    let mut state = TraversalState::new();
    dfs_with(graph, start, &mut state);
    state.into_order()
}

/// Depth-first pre-order traversal from `start`, accumulating into `state`.
///
/// Nodes already visited in `state` are not entered again, so a start node
/// visited by an earlier call adds nothing.
pub fn dfs_with(graph: &Graph, start: &Node, state: &mut TraversalState) {
    if !state.visit(start) {
        return;
    }
    // Each frame is a node plus the index of its next neighbor to try.
    let mut stack: Vec<(&Node, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        frame.1 += 1;
        match graph.get_neighbors(current).get(cursor) {
            Some(neighbor) => {
                if state.visit(neighbor) {
                    stack.push((neighbor, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}
