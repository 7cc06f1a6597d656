//! Graph command handler: print every location and its routes.

use std::io;

use anyhow::Result;

use crate::commands::network::{load_network, NetworkOptions};
use crate::output::{write_graph, OutputFormat};

/// Handle the graph subcommand.
pub fn handle_graph_command(options: &NetworkOptions, format: OutputFormat) -> Result<()> {
    let graph = load_network(options)?;
    let stdout = io::stdout();
    write_graph(&mut stdout.lock(), &graph, format)
}
