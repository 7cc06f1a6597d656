//! Airnav library entry points.
//!
//! This crate models a network of airports connected by great-circle routes
//! and answers shortest-path queries over it. It also exposes the helpers that
//! feed the graph: text-file loaders, location directories (static tables or a
//! remote geocoder), and renderers. Higher-level consumers such as the CLI
//! should only depend on the functions exported here.
//!

#![deny(warnings)]

pub mod dataset;
pub mod directory;
pub mod distance;
pub mod error;
pub mod geocoder;
pub mod graph;
pub mod loader;
pub mod output;
pub mod path;

pub use dataset::{resolve_dataset, DatasetPaths};
pub use directory::{CachingDirectory, LocationDirectory, StaticDirectory};
pub use distance::{great_circle_distance, Coordinates, LongitudeMode, Weight, EARTH_RADIUS_KM};
pub use error::{Error, Result};
pub use geocoder::{GeocoderConfig, OpenCageGeocoder};
pub use graph::{Location, LocationGraph};
pub use loader::{
    build_location_graph, load_airports, load_routes, read_airports, read_routes, AirportRecord,
    RouteRecord,
};
pub use output::{render_graph, render_route, GraphListing, RouteSummary};
pub use path::{find_route_dijkstra, route_distance, Route};
