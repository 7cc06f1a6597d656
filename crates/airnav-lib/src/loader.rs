//! Line-oriented loaders for airport and route definitions.
//!
//! Airports are read from lines shaped `Name, City, Country, IATA_Code` and
//! routes from lines shaped `Source_IATA, Destination_IATA`. Blank lines are
//! skipped; any other line with the wrong number of fields is rejected with
//! its line number.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::info;

use crate::directory::LocationDirectory;
use crate::distance::LongitudeMode;
use crate::error::{Error, Result};
use crate::graph::LocationGraph;

const AIRPORT_FIELDS: usize = 4;
const ROUTE_FIELDS: usize = 2;

/// One airport definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportRecord {
    pub name: String,
    pub city: String,
    pub country: String,
    pub code: String,
}

/// One undirected route between two airport codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    pub source: String,
    pub destination: String,
}

pub fn load_airports(path: &Path) -> Result<Vec<AirportRecord>> {
    let file = fs::File::open(path)?;
    parse_airports(file, &path.display().to_string())
}

pub fn load_routes(path: &Path) -> Result<Vec<RouteRecord>> {
    let file = fs::File::open(path)?;
    parse_routes(file, &path.display().to_string())
}

pub fn read_airports<R: Read>(reader: R) -> Result<Vec<AirportRecord>> {
    parse_airports(reader, "airports")
}

pub fn read_routes<R: Read>(reader: R) -> Result<Vec<RouteRecord>> {
    parse_routes(reader, "routes")
}

/// Build a graph from loaded records.
///
/// Every airport is added as `(code, city)` before any route, then each
/// route goes through [`LocationGraph::add_path`]. The first failing route
/// aborts the build.
pub fn build_location_graph<D>(
    airports: &[AirportRecord],
    routes: &[RouteRecord],
    directory: &D,
    longitude_mode: LongitudeMode,
) -> Result<LocationGraph>
where
    D: LocationDirectory + ?Sized,
{
    let mut graph = LocationGraph::with_longitude_mode(longitude_mode);
    for airport in airports {
        graph.add_location(airport.code.as_str(), airport.city.as_str());
    }
    for route in routes {
        graph.add_path(&route.source, &route.destination, directory)?;
    }

    info!(
        locations = graph.len(),
        edges = graph.edge_count(),
        mode = ?longitude_mode,
        "built location graph"
    );
    Ok(graph)
}

fn parse_airports<R: Read>(reader: R, origin: &str) -> Result<Vec<AirportRecord>> {
    parse_records(reader, origin, AIRPORT_FIELDS, |record| AirportRecord {
        name: record[0].to_string(),
        city: record[1].to_string(),
        country: record[2].to_string(),
        code: record[3].to_string(),
    })
}

fn parse_routes<R: Read>(reader: R, origin: &str) -> Result<Vec<RouteRecord>> {
    parse_records(reader, origin, ROUTE_FIELDS, |record| RouteRecord {
        source: record[0].to_string(),
        destination: record[1].to_string(),
    })
}

fn parse_records<R, T, F>(reader: R, origin: &str, expected: usize, build: F) -> Result<Vec<T>>
where
    R: Read,
    F: Fn(&StringRecord) -> T,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut parsed = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if record.len() != expected {
            return Err(Error::MalformedRecord {
                origin: origin.to_string(),
                line,
                message: format!("expected {expected} fields, found {}", record.len()),
            });
        }
        if let Some(column) = record.iter().position(str::is_empty) {
            return Err(Error::MalformedRecord {
                origin: origin.to_string(),
                line,
                message: format!("field {} is empty", column + 1),
            });
        }

        parsed.push(build(&record));
    }

    info!(records = parsed.len(), origin, "parsed records");
    Ok(parsed)
}
