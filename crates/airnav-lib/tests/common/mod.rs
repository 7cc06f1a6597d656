//! Shared fixtures for integration tests.
//!
//! The fixture network mirrors a handful of US airports. Coordinates come
//! from `docs/fixtures/coordinates.txt` so no test needs the remote geocoder.

use std::cell::RefCell;
use std::path::PathBuf;

use airnav_lib::{
    build_location_graph, load_airports, load_routes, Coordinates, Error, LocationDirectory,
    LocationGraph, LongitudeMode, Result, StaticDirectory,
};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Coordinates table for the fixture cities.
pub fn fixture_directory() -> StaticDirectory {
    StaticDirectory::from_path(&fixtures_dir().join("coordinates.txt"))
        .expect("fixture coordinates load")
}

/// Graph built from the fixture airports and routes.
#[allow(dead_code)]
pub fn fixture_graph() -> LocationGraph {
    let airports = load_airports(&fixtures_dir().join("airports.txt")).expect("airports load");
    let routes = load_routes(&fixtures_dir().join("routes.txt")).expect("routes load");
    build_location_graph(
        &airports,
        &routes,
        &fixture_directory(),
        LongitudeMode::Signed,
    )
    .expect("fixture graph builds")
}

/// Directory that records every name it is asked for and can be told to fail.
#[allow(dead_code)]
pub struct RecordingDirectory {
    inner: StaticDirectory,
    pub requests: RefCell<Vec<String>>,
    failing: Option<String>,
}

#[allow(dead_code)]
impl RecordingDirectory {
    pub fn new(inner: StaticDirectory) -> Self {
        Self {
            inner,
            requests: RefCell::new(Vec::new()),
            failing: None,
        }
    }

    /// Make lookups of `name` fail as if the upstream service were down.
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing = Some(name.to_string());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl LocationDirectory for RecordingDirectory {
    fn resolve(&self, name: &str) -> Result<Coordinates> {
        self.requests.borrow_mut().push(name.to_string());
        if self.failing.as_deref() == Some(name) {
            return Err(Error::Lookup {
                name: name.to_string(),
                reason: "upstream unavailable".to_string(),
            });
        }
        self.inner.resolve(name)
    }
}
