//! Route command handler for computing the shortest path between two airports.

use std::io;

use anyhow::{bail, Result};

use airnav_lib::{Error as LibError, LocationGraph, Route};

use crate::commands::network::{load_network, NetworkOptions};
use crate::output::{write_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting airport code.
    pub from: String,
    /// Destination airport code.
    pub to: String,
}

/// Handle the route subcommand.
pub fn handle_route_command(
    options: &NetworkOptions,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let graph = load_network(options)?;
    let route = plan(&graph, args)?;
    let stdout = io::stdout();
    write_route(&mut stdout.lock(), &graph, &route, format)
}

/// Validate both codes and run the query. Unknown codes are reported with
/// suggestions; a disconnected pair is an error at this level.
pub fn plan(graph: &LocationGraph, args: &RouteCommandArgs) -> Result<Route> {
    for code in [&args.from, &args.to] {
        if !graph.contains(code) {
            return Err(LibError::UnknownLocation {
                code: code.clone(),
                suggestions: graph.suggest_codes(code),
            }
            .into());
        }
    }

    match graph.shortest_route(&args.from, &args.to) {
        Some(route) => Ok(route),
        None => bail!("no route found between {} and {}", args.from, args.to),
    }
}
