//! Structural analysis: shortest paths, connectivity and cycle detection.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::types::Node;

use super::traversal::{bfs, dfs_with, TraversalState};
use super::Graph;

/// Summary of a graph's size and shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub density: f64,
    pub connected: bool,
    pub cyclic: bool,
}

impl Graph {
    /// Unweighted shortest path from `start` to `end`, both included.
    ///
    /// Returns an empty path if either endpoint is absent or `end` cannot be
    /// reached. Among equally short paths the one through earlier-inserted
    /// edges wins.
    pub fn shortest_path(&self, start: &Node, end: &Node) -> Vec<Node> {
        if !self.contains(start) || !self.contains(end) {
            return Vec::new();
        }

        // node -> the node it was first discovered from
        let mut parents: HashMap<&Node, &Node> = HashMap::new();
        let mut visited: HashSet<&Node> = HashSet::new();
        let mut queue: VecDeque<&Node> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                let mut path = vec![current.clone()];
                let mut cursor = current;
                while let Some(&parent) = parents.get(cursor) {
                    path.push(parent.clone());
                    cursor = parent;
                }
                path.reverse();
                return path;
            }
            for neighbor in self.get_neighbors(current) {
                if visited.insert(neighbor) {
                    parents.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        log::debug!("No path from {} to {}", start, end);
        Vec::new()
    }

    /// Whether `end` is reachable from `start`.
    pub fn has_path(&self, start: &Node, end: &Node) -> bool {
        bfs(self, start).contains(end)
    }

    /// Whether every node is reachable from the first inserted node.
    ///
    /// The empty graph is connected.
    pub fn is_connected(&self) -> bool {
        match self.nodes().next() {
            Some(first) => bfs(self, first).len() == self.size(),
            None => true,
        }
    }

    /// Whether any component contains a cycle.
    ///
    /// A visited neighbor other than the node we just came from is a
    /// back-edge. The edge back to the parent does not count, so a single
    /// bidirectional edge is not a cycle.
    pub fn is_cyclic(&self) -> bool {
        let mut visited: HashSet<&Node> = HashSet::new();

        for root in self.nodes() {
            if visited.contains(root) {
                continue;
            }
            visited.insert(root);
            // (node, parent, next neighbor index)
            let mut stack: Vec<(&Node, Option<&Node>, usize)> = vec![(root, None, 0)];

            while let Some(frame) = stack.last_mut() {
                let (current, parent, cursor) = *frame;
                frame.2 += 1;
                let Some(neighbor) = self.get_neighbors(current).get(cursor) else {
                    stack.pop();
                    continue;
                };
                if visited.insert(neighbor) {
                    stack.push((neighbor, Some(current), 0));
                } else if parent != Some(neighbor) {
                    log::debug!("Cycle closed by edge {} -> {}", current, neighbor);
                    return true;
                }
            }
        }
        false
    }

    /// Connected components, each in DFS pre-order, in first-node order.
    pub fn connected_components(&self) -> Vec<Vec<Node>> {
        let mut state = TraversalState::new();
        let mut components = Vec::new();

        for node in self.nodes() {
            if state.is_visited(node) {
                continue;
            }
            let offset = state.order().len();
            dfs_with(self, node, &mut state);
            components.push(state.order()[offset..].to_vec());
        }
        components
    }

    /// Snapshot of size, density, connectivity and cyclicity.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.size(),
            edges: self.edge_count(),
            density: self.density(),
            connected: self.is_connected(),
            cyclic: self.is_cyclic(),
        }
    }
}
