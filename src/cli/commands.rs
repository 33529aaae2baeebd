//! CLI command implementations.

use crate::cli::render::{render_order, render_structure, Palette};
use crate::graph::{bfs, dfs, EdgeDirection, Graph};
use crate::types::{GraphError, GraphResult, Node, DEFAULT_SEPARATOR, SAMPLE_EDGES};

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub palette: Palette,
}

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// Run the traversal from `start`.
    pub fn run(&self, graph: &Graph, start: &Node) -> Vec<Node> {
        match self {
            Self::Bfs => bfs(graph, start),
            Self::Dfs => dfs(graph, start),
        }
    }
}

/// Parse a `FROM-TO` edge token into its two node tokens.
pub fn parse_edge_spec(spec: &str) -> GraphResult<(Node, Node)> {
    let (from, to) = spec
        .split_once('-')
        .ok_or_else(|| GraphError::InvalidEdgeSpec(spec.to_string()))?;
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(GraphError::InvalidEdgeSpec(spec.to_string()));
    }
    Ok((Node::from_token(from), Node::from_token(to)))
}

/// The seven-node sample graph.
pub fn sample_graph() -> GraphResult<Graph> {
    Graph::from_edges(SAMPLE_EDGES)
}

/// Build a graph from edge tokens, or the sample graph if none are given.
pub fn build_graph(edges: &[String], one_way: &[String]) -> GraphResult<Graph> {
    if edges.is_empty() && one_way.is_empty() {
        log::debug!("No edges given, using the sample graph");
        return sample_graph();
    }
    let mut graph = Graph::new();
    for spec in edges {
        let (from, to) = parse_edge_spec(spec)?;
        graph.insert_edge(from, to, EdgeDirection::Both)?;
    }
    for spec in one_way {
        let (from, to) = parse_edge_spec(spec)?;
        graph.insert_edge(from, to, EdgeDirection::OneWay)?;
    }
    Ok(graph)
}

/// Resolve a user-supplied token to a node present in the graph.
pub fn validate_node(token: &str, graph: &Graph) -> GraphResult<Node> {
    let token = token.trim();
    if token.is_empty() {
        return Err(GraphError::EmptyNode);
    }
    let node = Node::from_token(token);
    if graph.contains(&node) {
        Ok(node)
    } else {
        Err(GraphError::NodeNotFound(token.to_string()))
    }
}

/// Run a traversal and print the visiting order.
pub fn cmd_traverse(
    graph: &Graph,
    algorithm: Algorithm,
    start: &str,
    output: Output,
) -> GraphResult<()> {
    let start = validate_node(start, graph)?;
    let order = algorithm.run(graph, &start);

    if output.json {
        let value = serde_json::json!({
            "algorithm": algorithm.name(),
            "start": start,
            "order": order,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_default()
        );
    } else {
        println!(
            "{}",
            output
                .palette
                .header(&format!("{} Traversal Order:", algorithm.name()))
        );
        println!(
            "{}",
            output
                .palette
                .node(&render_order(&order, DEFAULT_SEPARATOR))
        );
    }
    Ok(())
}

/// Print the shortest path between two nodes.
pub fn cmd_path(graph: &Graph, start: &str, end: &str, output: Output) -> GraphResult<()> {
    let start = validate_node(start, graph)?;
    let end = validate_node(end, graph)?;
    let path = graph.shortest_path(&start, &end);

    if output.json {
        let value = serde_json::json!({
            "start": start,
            "end": end,
            "found": !path.is_empty(),
            "path": path,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_default()
        );
    } else if path.is_empty() {
        println!("No path from {} to {}", start, end);
    } else {
        println!(
            "{}",
            output
                .palette
                .header(&format!("Shortest path ({} hops):", path.len() - 1))
        );
        println!(
            "{}",
            output
                .palette
                .node(&render_order(&path, DEFAULT_SEPARATOR))
        );
    }
    Ok(())
}

/// Print the sorted structure view.
pub fn cmd_show(graph: &Graph, output: Output) -> GraphResult<()> {
    if output.json {
        let mut nodes: Vec<&Node> = graph.nodes().collect();
        nodes.sort();
        let adjacency: Vec<serde_json::Value> = nodes
            .into_iter()
            .map(|node| {
                serde_json::json!({
                    "node": node,
                    "neighbors": graph.get_neighbors(node),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&adjacency).unwrap_or_default()
        );
    } else {
        println!("{}", render_structure(graph, output.palette));
    }
    Ok(())
}

/// Print size, density, connectivity and cyclicity.
pub fn cmd_stats(graph: &Graph, output: Output) -> GraphResult<()> {
    let stats = graph.stats();
    if output.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("Nodes: {}", stats.nodes);
        println!("Edges: {}", stats.edges);
        println!("Density: {:.3}", stats.density);
        println!("Connected: {}", if stats.connected { "yes" } else { "no" });
        println!("Cyclic: {}", if stats.cyclic { "yes" } else { "no" });
        let components = graph.connected_components();
        if components.len() > 1 {
            println!("Components: {}", components.len());
            for component in &components {
                println!("  {}", render_order(component, ", "));
            }
        }
    }
    Ok(())
}
