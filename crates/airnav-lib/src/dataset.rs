use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Filename of the airport definitions inside a data directory.
pub const AIRPORTS_FILENAME: &str = "airports.txt";
/// Filename of the route definitions inside a data directory.
pub const ROUTES_FILENAME: &str = "routes.txt";
/// Optional pre-resolved coordinates table inside a data directory.
pub const COORDINATES_FILENAME: &str = "coordinates.txt";

const DATA_DIR_ENV: &str = "AIRNAV_DATA_DIR";

/// Paths to the files that make up a location network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub airports: PathBuf,
    pub routes: PathBuf,
    /// Coordinates table, when one sits next to the other files.
    pub coordinates: Option<PathBuf>,
}

impl DatasetPaths {
    /// Locate the dataset files inside `dir`.
    pub fn in_dir(dir: &Path) -> Result<Self> {
        let airports = require_file(dir.join(AIRPORTS_FILENAME))?;
        let routes = require_file(dir.join(ROUTES_FILENAME))?;
        let coordinates = Some(dir.join(COORDINATES_FILENAME)).filter(|path| path.is_file());

        Ok(Self {
            airports,
            routes,
            coordinates,
        })
    }
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "airnav", "airnav").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Find the dataset files.
///
/// The directory is taken from `target` when given, otherwise from the
/// `AIRNAV_DATA_DIR` environment variable, otherwise from the platform data
/// directory.
pub fn resolve_dataset(target: Option<&Path>) -> Result<DatasetPaths> {
    let dir = match target {
        Some(explicit) => explicit.to_path_buf(),
        None => match env::var_os(DATA_DIR_ENV) {
            Some(env_path) => PathBuf::from(env_path),
            None => default_data_dir()?,
        },
    };

    debug!(dir = %dir.display(), "resolving dataset");
    DatasetPaths::in_dir(&dir)
}

fn require_file(path: PathBuf) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::DatasetNotFound { path })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn finds_required_and_optional_files() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(AIRPORTS_FILENAME), "").unwrap();
        fs::write(dir.path().join(ROUTES_FILENAME), "").unwrap();

        let paths = resolve_dataset(Some(dir.path())).expect("dataset resolves");
        assert_eq!(paths.airports, dir.path().join(AIRPORTS_FILENAME));
        assert!(paths.coordinates.is_none());

        fs::write(dir.path().join(COORDINATES_FILENAME), "").unwrap();
        let paths = resolve_dataset(Some(dir.path())).expect("dataset resolves");
        assert_eq!(
            paths.coordinates,
            Some(dir.path().join(COORDINATES_FILENAME))
        );
    }

    #[test]
    fn missing_routes_file_is_reported() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(AIRPORTS_FILENAME), "").unwrap();

        let err = resolve_dataset(Some(dir.path())).unwrap_err();
        match err {
            Error::DatasetNotFound { path } => assert!(path.ends_with(ROUTES_FILENAME)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
