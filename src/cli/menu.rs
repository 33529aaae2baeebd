//! Interactive numbered menu: pick a traversal and a starting node.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::commands::{validate_node, Algorithm};
use crate::cli::render::{render_order, render_structure, Palette};
use crate::graph::Graph;
use crate::types::DEFAULT_SEPARATOR;

/// A parsed menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Traverse(Algorithm),
    Show,
    Exit,
}

impl MenuChoice {
    /// Parse the user's menu selection.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Traverse(Algorithm::Bfs)),
            "2" => Some(Self::Traverse(Algorithm::Dfs)),
            "3" => Some(Self::Show),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu(palette: Palette) {
    println!();
    println!("{}", palette.header("=== Graph Traversal Algorithm ===="));
    println!();
    println!("{}", palette.node("Available Operations:"));
    println!("1 - Breadth-First Search (BFS)");
    println!("2 - Depth-First Search (DFS)");
    println!("3 - View Graph Structure");
    println!("4 - Exit");
}

/// Run the menu loop until the user exits or closes input.
pub fn run(graph: &Graph, palette: Palette) -> Result<(), Box<dyn std::error::Error>> {
    let mut rl = DefaultEditor::new()?;

    loop {
        print_menu(palette);
        let line = match rl.readline("\nEnter your choice (1-4): ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let algorithm = match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => break,
            Some(MenuChoice::Show) => {
                println!();
                println!("{}", render_structure(graph, palette));
                continue;
            }
            Some(MenuChoice::Traverse(algorithm)) => algorithm,
            None => {
                println!("{}", palette.error("Invalid option! Please try again."));
                continue;
            }
        };

        let token = match rl.readline("\nEnter starting node: ") {
            Ok(token) => token,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let start = match validate_node(&token, graph) {
            Ok(node) => node,
            Err(e) => {
                println!("{}", palette.error(&format!("Error: {e}!")));
                continue;
            }
        };

        let order = algorithm.run(graph, &start);
        println!();
        println!(
            "{}",
            palette.header(&format!("{} Traversal Order:", algorithm.name()))
        );
        println!("{}", palette.node(&render_order(&order, DEFAULT_SEPARATOR)));
    }

    println!("\n{}", palette.node("Goodbye!"));
    Ok(())
}
