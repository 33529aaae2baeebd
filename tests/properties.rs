//! Property-based tests for graph invariants.
//!
//! Uses proptest to validate:
//! - Bidirectional edges are symmetric and idempotent
//! - Self-loops are always rejected
//! - Node removal leaves no dangling neighbors
//! - BFS and DFS visit the same set of nodes
//! - Shortest paths are valid walks no longer than any BFS layer allows

use std::collections::HashSet;

use graph_traversal::graph::{bfs, dfs, Graph};
use graph_traversal::types::{GraphError, Node};
use proptest::prelude::*;

fn edge_list() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..12, 0i64..12), 0..40)
}

fn build(edges: &[(i64, i64)]) -> Graph {
    let mut graph = Graph::new();
    for &(a, b) in edges {
        if a != b {
            graph.add_edge(a, b).unwrap();
        }
    }
    graph
}

proptest! {
    /// Property: every bidirectional edge appears in both neighbor lists
    #[test]
    fn prop_edges_symmetric(edges in edge_list()) {
        let graph = build(&edges);
        for &(a, b) in edges.iter().filter(|(a, b)| a != b) {
            prop_assert!(graph.get_neighbors(&Node::Int(a)).contains(&Node::Int(b)));
            prop_assert!(graph.get_neighbors(&Node::Int(b)).contains(&Node::Int(a)));
        }
        // Symmetric graphs have an even number of neighbor entries.
        let entries: usize = graph.nodes().map(|n| graph.get_neighbors(n).len()).sum();
        prop_assert_eq!(entries, graph.edge_count() * 2);
    }

    /// Property: inserting every edge twice changes nothing
    #[test]
    fn prop_add_edge_idempotent(edges in edge_list()) {
        let once = build(&edges);
        let doubled: Vec<(i64, i64)> = edges.iter().chain(edges.iter()).copied().collect();
        let twice = build(&doubled);
        prop_assert_eq!(once.size(), twice.size());
        for node in once.nodes() {
            prop_assert_eq!(once.get_neighbors(node), twice.get_neighbors(node));
        }
    }

    /// Property: self-loops are rejected for any node value
    #[test]
    fn prop_self_loop_rejected(value in any::<i64>(), text in "[a-zA-Z0-9]{1,8}") {
        let mut graph = Graph::new();
        prop_assert!(matches!(graph.add_edge(value, value), Err(GraphError::SelfLoop(_))));
        prop_assert!(matches!(
            graph.add_edge(text.as_str(), text.as_str()),
            Err(GraphError::SelfLoop(_))
        ));
        prop_assert!(graph.is_empty());
    }

    /// Property: a removed node is gone from every neighbor list
    #[test]
    fn prop_remove_purges(edges in edge_list(), victim in 0i64..12) {
        let mut graph = build(&edges);
        let victim = Node::Int(victim);
        graph.remove_node(&victim);
        prop_assert!(!graph.contains(&victim));
        for node in graph.nodes() {
            prop_assert!(!graph.get_neighbors(node).contains(&victim));
            for neighbor in graph.get_neighbors(node) {
                prop_assert!(graph.contains(neighbor));
            }
        }
    }

    /// Property: BFS and DFS reach the same nodes, each exactly once
    #[test]
    fn prop_bfs_dfs_same_reach(edges in edge_list(), start in 0i64..12) {
        let graph = build(&edges);
        let start = Node::Int(start);
        let by_bfs = bfs(&graph, &start);
        let by_dfs = dfs(&graph, &start);
        prop_assert_eq!(by_bfs.first(), Some(&start));
        prop_assert_eq!(by_dfs.first(), Some(&start));

        let bfs_set: HashSet<&Node> = by_bfs.iter().collect();
        let dfs_set: HashSet<&Node> = by_dfs.iter().collect();
        prop_assert_eq!(bfs_set.len(), by_bfs.len());
        prop_assert_eq!(dfs_set.len(), by_dfs.len());
        prop_assert_eq!(bfs_set, dfs_set);
    }

    /// Property: shortest paths are walks along edges and agree with has_path
    #[test]
    fn prop_shortest_path_valid(edges in edge_list(), a in 0i64..12, b in 0i64..12) {
        let graph = build(&edges);
        let (a, b) = (Node::Int(a), Node::Int(b));
        let path = graph.shortest_path(&a, &b);
        let present = graph.contains(&a) && graph.contains(&b);

        if path.is_empty() {
            prop_assert!(!present || !graph.has_path(&a, &b));
        } else {
            prop_assert!(graph.has_path(&a, &b));
            prop_assert_eq!(path.first(), Some(&a));
            prop_assert_eq!(path.last(), Some(&b));
            for pair in path.windows(2) {
                prop_assert!(graph.get_neighbors(&pair[0]).contains(&pair[1]));
            }
            let distinct: HashSet<&Node> = path.iter().collect();
            prop_assert_eq!(distinct.len(), path.len());
        }
    }

    /// Property: a graph with no more edges than a spanning forest allows is acyclic
    #[test]
    fn prop_forest_acyclic(parents in prop::collection::vec(any::<prop::sample::Index>(), 1..30)) {
        // Node i + 1 hangs under some earlier node: always a tree.
        let mut graph = Graph::new();
        graph.add_node(0);
        for (i, parent) in parents.iter().enumerate() {
            let child = i as i64 + 1;
            let parent = parent.index(i + 1) as i64;
            graph.add_edge(child, parent).unwrap();
        }
        prop_assert!(!graph.is_cyclic());
        prop_assert!(graph.is_connected());
        prop_assert_eq!(graph.edge_count(), graph.size() - 1);
    }
}
