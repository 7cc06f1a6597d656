//! Location directories translate a display name into coordinates.
//!
//! The graph never assumes a directory is cheap or deterministic; every
//! [`LocationGraph::add_path`](crate::graph::LocationGraph::add_path) call asks
//! for both endpoints again. Callers that load many routes should wrap their
//! directory in a [`CachingDirectory`].

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::distance::Coordinates;
use crate::error::{Error, Result};

/// Resolve a location display name into coordinates.
pub trait LocationDirectory {
    /// Look up `name`, failing with [`Error::Lookup`] when it cannot be resolved.
    fn resolve(&self, name: &str) -> Result<Coordinates>;
}

impl<D: LocationDirectory + ?Sized> LocationDirectory for Box<D> {
    fn resolve(&self, name: &str) -> Result<Coordinates> {
        (**self).resolve(name)
    }
}

/// Pre-resolved, in-memory lookup table.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    entries: HashMap<String, Coordinates>,
    source: Option<PathBuf>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, coordinates: Coordinates) {
        self.entries.insert(name.into(), coordinates);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File the table was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Load a coordinates file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut directory = Self::read_from(file, &path.display().to_string())?;
        directory.source = Some(path.to_path_buf());
        Ok(directory)
    }

    /// Load a coordinates table from a reader.
    ///
    /// Each line reads `latitude, longitude, Name`. Everything after the second
    /// comma is the name, kept verbatim apart from surrounding whitespace, so
    /// `Greensboro,North Carolina` and `Greensboro, North Carolina` stay distinct.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read_from(reader, "coordinates")
    }

    fn read_from<R: Read>(reader: R, origin: &str) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::None)
            .from_reader(reader);

        let mut directory = Self::new();
        for record in csv_reader.records() {
            let record = record?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let malformed = |message: String| Error::MalformedRecord {
                origin: origin.to_string(),
                line,
                message,
            };

            if record.len() < 3 {
                return Err(malformed(format!(
                    "expected 'latitude, longitude, name', found {} field(s)",
                    record.len()
                )));
            }

            let latitude = parse_degrees(record[0].trim(), "latitude").map_err(&malformed)?;
            let longitude = parse_degrees(record[1].trim(), "longitude").map_err(&malformed)?;
            let name = record.iter().skip(2).collect::<Vec<_>>().join(",");
            let name = name.trim();
            if name.is_empty() {
                return Err(malformed("location name is empty".to_string()));
            }

            directory.insert(name, Coordinates::new(latitude, longitude));
        }

        debug!(entries = directory.len(), origin, "loaded coordinates table");
        Ok(directory)
    }
}

impl FromIterator<(String, Coordinates)> for StaticDirectory {
    fn from_iter<I: IntoIterator<Item = (String, Coordinates)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            source: None,
        }
    }
}

impl LocationDirectory for StaticDirectory {
    fn resolve(&self, name: &str) -> Result<Coordinates> {
        self.entries.get(name).copied().ok_or_else(|| Error::Lookup {
            name: name.to_string(),
            reason: "not present in coordinates table".to_string(),
        })
    }
}

fn parse_degrees(raw: &str, field: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("{field} '{raw}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("{field} '{raw}' is not finite"));
    }
    Ok(value)
}

/// Memoizes successful lookups of an inner directory.
///
/// Failures are not cached, so a transient upstream error is retried on the
/// next request for the same name.
#[derive(Debug)]
pub struct CachingDirectory<D> {
    inner: D,
    cache: Mutex<HashMap<String, Coordinates>>,
}

impl<D: LocationDirectory> CachingDirectory<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct names resolved so far.
    pub fn cached(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: LocationDirectory> LocationDirectory for CachingDirectory<D> {
    fn resolve(&self, name: &str) -> Result<Coordinates> {
        if let Some(hit) = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .copied()
        {
            return Ok(hit);
        }

        let resolved = self.inner.resolve(name)?;
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(name.to_string(), resolved);
        Ok(resolved)
    }
}
