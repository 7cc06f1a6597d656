//! Text and JSON-friendly views of graphs and routes.

use std::fmt;

use serde::Serialize;

use crate::distance::Weight;
use crate::graph::LocationGraph;
use crate::path::Route;

/// Serializable listing of every location and its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphListing {
    pub locations: Vec<LocationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationEntry {
    pub code: String,
    pub name: String,
    pub neighbours: Vec<NeighbourEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighbourEntry {
    pub code: String,
    pub distance_km: Weight,
}

impl GraphListing {
    pub fn from_graph(graph: &LocationGraph) -> Self {
        let locations = graph
            .locations()
            .into_iter()
            .map(|location| LocationEntry {
                code: location.code.clone(),
                name: location.name.clone(),
                neighbours: graph
                    .neighbours(&location.code)
                    .into_iter()
                    .map(|(code, distance_km)| NeighbourEntry {
                        code: code.to_string(),
                        distance_km,
                    })
                    .collect(),
            })
            .collect();
        Self { locations }
    }
}

/// Serializable route with per-leg distances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub distance_km: u64,
    pub stops: Vec<RouteStop>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStop {
    pub code: String,
    pub name: Option<String>,
    /// Distance from the previous stop; absent for the first stop.
    pub leg_km: Option<Weight>,
}

impl RouteSummary {
    pub fn from_route(graph: &LocationGraph, route: &Route) -> Self {
        let stops = route
            .stops
            .iter()
            .enumerate()
            .map(|(idx, code)| RouteStop {
                code: code.clone(),
                name: graph.location(code).map(|location| location.name.clone()),
                leg_km: idx
                    .checked_sub(1)
                    .and_then(|prev| graph.weight_between(&route.stops[prev], code)),
            })
            .collect();

        Self {
            start: route.start().unwrap_or_default().to_string(),
            goal: route.goal().unwrap_or_default().to_string(),
            hops: route.hop_count(),
            distance_km: route.distance_km,
            stops,
        }
    }
}

/// Render one line per location, ordered by code.
///
/// ```text
/// ATL (Atlanta) -> CLT (364 km), MCO (646 km)
/// HNL (Honolulu) ->
/// ```
pub fn render_graph(graph: &LocationGraph) -> String {
    let mut out = String::new();
    for location in graph.locations() {
        out.push_str(&format!("{} ({}) ->", location.code, location.name));
        let neighbours = graph
            .neighbours(&location.code)
            .into_iter()
            .map(|(code, weight)| format!("{code} ({weight} km)"))
            .collect::<Vec<_>>();
        if !neighbours.is_empty() {
            out.push(' ');
            out.push_str(&neighbours.join(", "));
        }
        out.push('\n');
    }
    out
}

/// Render a route as `ORD -> ATL -> MCO (1593 km)`.
pub fn render_route(route: &Route) -> String {
    format!("{} ({} km)", route.stops.join(" -> "), route.distance_km)
}

impl fmt::Display for LocationGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_graph(self))
    }
}
