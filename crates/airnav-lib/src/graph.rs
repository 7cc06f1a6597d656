use std::collections::{BTreeMap, HashMap};

use strsim::jaro_winkler;
use tracing::debug;

use crate::directory::LocationDirectory;
use crate::distance::{weight_from_km, LongitudeMode, Weight};
use crate::error::{Error, Result};
use crate::path::{find_route_dijkstra, Route};

/// Minimum Jaro-Winkler similarity for a code to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;
const MAX_SUGGESTIONS: usize = 3;

/// Named location (node) in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Unique identifier, typically an IATA airport code.
    pub code: String,
    /// Display name handed to the [`LocationDirectory`] when deriving weights.
    pub name: String,
}

/// Undirected graph of locations with integer kilometre weights.
///
/// Locations live in an arena and edges refer to them by index, so nodes
/// never hold references to each other. Each edge is stored once per endpoint
/// and both entries always carry the same weight.
///
/// Construction (`add_location`, `add_path`, `connect`) needs exclusive
/// access; queries take `&self`, so a finished graph can be shared across
/// threads and queried concurrently.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
    adjacency: Vec<BTreeMap<usize, Weight>>,
    longitude_mode: LongitudeMode,
}

impl LocationGraph {
    /// Empty graph using signed longitudes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph using the given longitude handling for weight derivation.
    pub fn with_longitude_mode(longitude_mode: LongitudeMode) -> Self {
        Self {
            longitude_mode,
            ..Self::default()
        }
    }

    pub fn longitude_mode(&self) -> LongitudeMode {
        self.longitude_mode
    }

    /// Insert a location, or replace the name of an existing one.
    ///
    /// Re-adding a code clears every edge touching it, on both endpoints.
    pub fn add_location(&mut self, code: impl Into<String>, name: impl Into<String>) {
        let code = code.into();
        let name = name.into();

        if let Some(&slot) = self.index.get(&code) {
            let former = std::mem::take(&mut self.adjacency[slot]);
            for neighbour in former.keys() {
                self.adjacency[*neighbour].remove(&slot);
            }
            debug!(
                code = %code,
                dropped_edges = former.len(),
                "replaced existing location"
            );
            self.locations[slot].name = name;
            return;
        }

        let slot = self.locations.len();
        self.index.insert(code.clone(), slot);
        self.locations.push(Location { code, name });
        self.adjacency.push(BTreeMap::new());
    }

    /// Connect two known locations, deriving the weight from the directory.
    ///
    /// Both display names are resolved on every call. The weight is the
    /// great-circle distance truncated to whole kilometres. On any failure the
    /// graph is left untouched. Repeating a pair replaces its weight rather
    /// than adding a parallel edge.
    pub fn add_path<D>(&mut self, from: &str, to: &str, directory: &D) -> Result<Weight>
    where
        D: LocationDirectory + ?Sized,
    {
        let from_slot = self.require(from)?;
        let to_slot = self.require(to)?;

        let mode = self.longitude_mode;
        let origin = mode.normalize(directory.resolve(&self.locations[from_slot].name)?);
        let destination = mode.normalize(directory.resolve(&self.locations[to_slot].name)?);
        let weight = weight_from_km(origin.distance_km(&destination));

        self.insert_edge(from_slot, to_slot, weight);
        debug!(from, to, weight, "added path");
        Ok(weight)
    }

    /// Connect two known locations with a caller-supplied weight.
    pub fn connect(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        let from_slot = self.require(from)?;
        let to_slot = self.require(to)?;
        self.insert_edge(from_slot, to_slot, weight);
        Ok(())
    }

    /// Minimum-weight sequence of codes from `start` to `end`, inclusive.
    ///
    /// Returns `None` when either code is unknown or no route connects them.
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<Vec<String>> {
        self.shortest_route(start, end).map(|route| route.stops)
    }

    /// Like [`shortest_path`](Self::shortest_path) but keeps the total distance.
    pub fn shortest_route(&self, start: &str, end: &str) -> Option<Route> {
        find_route_dijkstra(self, start, end)
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(BTreeMap::len).sum();
        let loops = self
            .adjacency
            .iter()
            .enumerate()
            .filter(|(slot, edges)| edges.contains_key(slot))
            .count();
        (entries + loops) / 2
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn location(&self, code: &str) -> Option<&Location> {
        self.index.get(code).map(|&slot| &self.locations[slot])
    }

    /// All locations ordered by code.
    pub fn locations(&self) -> Vec<&Location> {
        let mut locations: Vec<&Location> = self.locations.iter().collect();
        locations.sort_by(|a, b| a.code.cmp(&b.code));
        locations
    }

    /// Neighbours of `code` with their edge weights, ordered by neighbour code.
    pub fn neighbours(&self, code: &str) -> Vec<(&str, Weight)> {
        let Some(&slot) = self.index.get(code) else {
            return Vec::new();
        };
        let mut neighbours: Vec<(&str, Weight)> = self
            .edges(slot)
            .map(|(target, weight)| (self.locations[target].code.as_str(), weight))
            .collect();
        neighbours.sort_by(|a, b| a.0.cmp(b.0));
        neighbours
    }

    /// Weight of the edge between two codes, if they are directly connected.
    pub fn weight_between(&self, a: &str, b: &str) -> Option<Weight> {
        let a = *self.index.get(a)?;
        let b = *self.index.get(b)?;
        self.adjacency[a].get(&b).copied()
    }

    /// Known codes that look like `code`, best match first.
    pub fn suggest_codes(&self, code: &str) -> Vec<String> {
        let needle = code.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .map(|location| {
                let score = jaro_winkler(&needle, &location.code.to_ascii_uppercase());
                (score, location.code.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, code)| code.to_string())
            .collect()
    }

    pub(crate) fn slot(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.locations.len()
    }

    pub(crate) fn code(&self, slot: usize) -> &str {
        &self.locations[slot].code
    }

    pub(crate) fn edges(&self, slot: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.adjacency[slot]
            .iter()
            .map(|(&target, &weight)| (target, weight))
    }

    fn insert_edge(&mut self, a: usize, b: usize, weight: Weight) {
        self.adjacency[a].insert(b, weight);
        self.adjacency[b].insert(a, weight);
    }

    fn require(&self, code: &str) -> Result<usize> {
        self.slot(code).ok_or_else(|| Error::UnknownLocation {
            code: code.to_string(),
            suggestions: self.suggest_codes(code),
        })
    }
}
