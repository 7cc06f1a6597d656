use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::graph::LocationGraph;

/// Shortest route between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Location codes from start to goal, inclusive.
    pub stops: Vec<String>,
    /// Sum of edge weights along the route, in kilometres.
    pub distance_km: u64,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    pub fn goal(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }
}

/// Run Dijkstra's algorithm between two location codes.
///
/// Returns `None` when either code is unknown or the goal cannot be reached.
/// A query from a location to itself yields a single-stop route of length
/// zero, even for isolated locations. When several routes share the minimum
/// distance, any one of them may be returned.
pub fn find_route_dijkstra(graph: &LocationGraph, start: &str, goal: &str) -> Option<Route> {
    let start = graph.slot(start)?;
    let goal = graph.slot(goal)?;

    let count = graph.slot_count();
    let mut distances: Vec<Option<u64>> = vec![None; count];
    let mut parents: Vec<Option<usize>> = vec![None; count];
    let mut finalized = vec![false; count];
    let mut queue = BinaryHeap::new();

    distances[start] = Some(0);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        // Stale entries left behind by later relaxations.
        if finalized[entry.node] {
            continue;
        }
        finalized[entry.node] = true;

        if entry.node == goal {
            break;
        }

        for (next, weight) in graph.edges(entry.node) {
            let next_cost = entry.cost + u64::from(weight);
            let improves = match distances[next] {
                Some(known) => next_cost < known,
                None => true,
            };
            if improves {
                distances[next] = Some(next_cost);
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    if !finalized[goal] {
        return None;
    }

    let stops = reconstruct_path(&parents, start, goal)
        .into_iter()
        .map(|slot| graph.code(slot).to_string())
        .collect();

    Some(Route {
        stops,
        distance_km: distances[goal].unwrap_or_default(),
    })
}

/// Total weight along a sequence of codes, or `None` if any hop is not an edge.
pub fn route_distance(graph: &LocationGraph, stops: &[String]) -> Option<u64> {
    if let [only] = stops {
        return graph.contains(only).then_some(0);
    }

    stops.windows(2).try_fold(0u64, |total, hop| {
        graph
            .weight_between(&hop[0], &hop[1])
            .map(|weight| total + u64::from(weight))
    })
}

fn reconstruct_path(parents: &[Option<usize>], start: usize, goal: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: u64,
}

impl QueueEntry {
    fn new(node: usize, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
