//! CLI entry point for the `gtrav` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use graph_traversal::cli::commands::{self, Algorithm, Output};
use graph_traversal::cli::{menu, Palette};
use graph_traversal::GraphError;

#[derive(Parser)]
#[command(
    name = "gtrav",
    about = "gtrav — BFS, DFS and shortest paths over a small undirected graph"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Bidirectional edge FROM-TO (repeatable). Without edges the sample graph is used.
    #[arg(long = "edge", value_name = "FROM-TO")]
    edges: Vec<String>,

    /// One-directional edge FROM-TO (repeatable)
    #[arg(long = "one-way", value_name = "FROM-TO")]
    one_way: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Breadth-first traversal order from a node
    Bfs {
        /// Starting node
        start: String,
    },
    /// Depth-first traversal order from a node
    Dfs {
        /// Starting node
        start: String,
    },
    /// Shortest path between two nodes
    Path {
        /// Starting node
        start: String,
        /// Destination node
        end: String,
    },
    /// Display the graph structure
    Show,
    /// Size, density, connectivity and cycles
    Stats,
    /// Interactive menu
    Menu,
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG overrides the warn default; --verbose overrides both.
    let mut logger = env_logger::Builder::new();
    logger.filter_level(log::LevelFilter::Warn);
    logger.parse_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let output = Output {
        json: cli.format == "json",
        palette: Palette::new(!cli.no_color),
    };

    let graph = match commands::build_graph(&cli.edges, &cli.one_way) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{}", output.palette.error(&format!("Error: {}", e)));
            process::exit(3);
        }
    };

    let result = match cli.command {
        Commands::Bfs { start } => commands::cmd_traverse(&graph, Algorithm::Bfs, &start, output),
        Commands::Dfs { start } => commands::cmd_traverse(&graph, Algorithm::Dfs, &start, output),
        Commands::Path { start, end } => commands::cmd_path(&graph, &start, &end, output),
        Commands::Show => commands::cmd_show(&graph, output),
        Commands::Stats => commands::cmd_stats(&graph, output),
        Commands::Menu => {
            if let Err(e) = menu::run(&graph, output.palette) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output.palette.error(&format!("Error: {}", e)));
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidNodeType(_)
            | GraphError::SelfLoop(_)
            | GraphError::InvalidEdgeSpec(_) => 3,
            GraphError::NodeNotFound(_) | GraphError::EmptyNode => 4,
        };
        process::exit(code);
    }
}
