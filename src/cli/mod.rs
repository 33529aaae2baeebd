//! Command-line presentation layer for the `gtrav` binary.

pub mod commands;
pub mod menu;
pub mod render;

pub use commands::{build_graph, sample_graph, validate_node, Algorithm, Output};
pub use render::{render_order, render_structure, Palette};
