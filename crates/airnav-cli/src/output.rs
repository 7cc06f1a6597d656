//! Output formatting for graph listings and routes.

use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use airnav_lib::{render_graph, render_route, GraphListing, LocationGraph, Route, RouteSummary};

/// Output formats supported by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Write the full graph listing.
pub fn write_graph<W: Write>(out: &mut W, graph: &LocationGraph, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", render_graph(graph))?,
        OutputFormat::Json => write_json(out, &GraphListing::from_graph(graph))?,
    }
    Ok(())
}

/// Write a computed route.
pub fn write_route<W: Write>(
    out: &mut W,
    graph: &LocationGraph,
    route: &Route,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let summary = RouteSummary::from_route(graph, route);
            writeln!(out, "Route: {}", render_route(route))?;
            for stop in &summary.stops {
                let name = stop.name.as_deref().unwrap_or("<unknown>");
                match stop.leg_km {
                    Some(leg) => writeln!(out, "- {} ({}) +{} km", stop.code, name, leg)?,
                    None => writeln!(out, "- {} ({})", stop.code, name)?,
                }
            }
        }
        OutputFormat::Json => write_json(out, &RouteSummary::from_route(graph, route))?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
