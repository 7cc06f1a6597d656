//! Build the location graph from the configured data files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use airnav_lib::{
    build_location_graph, load_airports, load_routes, resolve_dataset, CachingDirectory,
    GeocoderConfig, LocationDirectory, LocationGraph, LongitudeMode, OpenCageGeocoder,
    StaticDirectory,
};

/// Options shared by every command that needs a built graph.
#[derive(Debug, Clone, Default)]
pub struct NetworkOptions {
    /// Directory holding `airports.txt` and `routes.txt`.
    pub data_dir: Option<PathBuf>,
    /// Coordinates table used instead of the remote geocoder.
    pub coordinates: Option<PathBuf>,
    /// Discard longitude signs when deriving weights.
    pub absolute_longitude: bool,
}

impl NetworkOptions {
    pub fn longitude_mode(&self) -> LongitudeMode {
        if self.absolute_longitude {
            LongitudeMode::Absolute
        } else {
            LongitudeMode::Signed
        }
    }
}

/// Load airports and routes, then build the graph.
///
/// Coordinates come from an explicit `--coordinates` table, else from a
/// `coordinates.txt` next to the data files, else from the remote geocoder.
/// Lookups are cached for the duration of the build.
pub fn load_network(options: &NetworkOptions) -> Result<LocationGraph> {
    let paths = resolve_dataset(options.data_dir.as_deref())
        .context("failed to locate airports and routes files")?;

    let airports = load_airports(&paths.airports)
        .with_context(|| format!("failed to load airports from {}", paths.airports.display()))?;
    let routes = load_routes(&paths.routes)
        .with_context(|| format!("failed to load routes from {}", paths.routes.display()))?;

    let directory = select_directory(options.coordinates.clone().or(paths.coordinates))?;
    let directory = CachingDirectory::new(directory);

    let graph = build_location_graph(&airports, &routes, &directory, options.longitude_mode())
        .context("failed to build location graph")?;
    info!(resolved = directory.cached(), "location lookups completed");
    Ok(graph)
}

fn select_directory(coordinates: Option<PathBuf>) -> Result<Box<dyn LocationDirectory>> {
    if let Some(path) = coordinates {
        let table = StaticDirectory::from_path(&path)
            .with_context(|| format!("failed to load coordinates from {}", path.display()))?;
        info!(source = ?table.source(), entries = table.len(), "using coordinates table");
        return Ok(Box::new(table));
    }

    let config = GeocoderConfig::from_env().context("no coordinates table and no geocoder configured")?;
    let geocoder = OpenCageGeocoder::new(config)?;
    info!(endpoint = %geocoder.config().endpoint, "using remote geocoder");
    Ok(Box::new(geocoder))
}
