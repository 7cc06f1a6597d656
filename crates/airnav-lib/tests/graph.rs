mod common;

use airnav_lib::{Coordinates, Error, LocationGraph, LongitudeMode, StaticDirectory};

use common::{fixture_directory, fixture_graph, RecordingDirectory};

fn five_airports() -> LocationGraph {
    let mut graph = LocationGraph::new();
    graph.add_location("ATL", "Atlanta");
    graph.add_location("MCO", "Orlando");
    graph.add_location("LGA", "New York");
    graph.add_location("CLT", "Charlotte");
    graph.add_location("ORD", "Chicago");
    graph
}

#[test]
fn add_path_stores_symmetric_weights() {
    let mut graph = five_airports();
    let weight = graph
        .add_path("ORD", "ATL", &fixture_directory())
        .expect("path added");

    assert!((900..1000).contains(&weight), "got {weight}");
    assert_eq!(graph.weight_between("ORD", "ATL"), Some(weight));
    assert_eq!(graph.weight_between("ATL", "ORD"), Some(weight));
    assert_eq!(graph.neighbours("ORD"), vec![("ATL", weight)]);
    assert_eq!(graph.neighbours("ATL"), vec![("ORD", weight)]);
}

#[test]
fn add_path_resolves_both_names_every_call() {
    let mut graph = five_airports();
    let directory = RecordingDirectory::new(fixture_directory());

    graph.add_path("ATL", "MCO", &directory).expect("first");
    graph.add_path("ATL", "MCO", &directory).expect("second");

    assert_eq!(
        *directory.requests.borrow(),
        vec!["Atlanta", "Orlando", "Atlanta", "Orlando"]
    );
}

#[test]
fn repeated_add_path_is_idempotent() {
    let mut graph = five_airports();
    let directory = fixture_directory();

    let first = graph.add_path("ATL", "MCO", &directory).expect("first");
    let second = graph.add_path("MCO", "ATL", &directory).expect("reverse");
    let third = graph.add_path("ATL", "MCO", &directory).expect("repeat");

    assert_eq!(first, second);
    assert_eq!(first, third);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbours("ATL").len(), 1);
    assert_eq!(graph.neighbours("MCO").len(), 1);
}

#[test]
fn connect_overwrites_existing_weight() {
    let mut graph = five_airports();
    graph.connect("ATL", "MCO", 700).unwrap();
    graph.connect("MCO", "ATL", 650).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight_between("ATL", "MCO"), Some(650));
    assert_eq!(graph.weight_between("MCO", "ATL"), Some(650));
}

#[test]
fn unknown_location_leaves_graph_untouched() {
    let mut graph = five_airports();
    let directory = RecordingDirectory::new(fixture_directory());

    let err = graph.add_path("ATL", "JFK", &directory).unwrap_err();

    assert!(matches!(err, Error::UnknownLocation { ref code, .. } if code == "JFK"));
    assert_eq!(directory.request_count(), 0, "no lookups before validation");
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn lookup_failure_adds_neither_direction() {
    let mut graph = five_airports();
    let directory = RecordingDirectory::new(fixture_directory()).failing_on("Orlando");

    let err = graph.add_path("ATL", "MCO", &directory).unwrap_err();

    assert!(matches!(err, Error::Lookup { ref name, .. } if name == "Orlando"));
    assert!(graph.neighbours("ATL").is_empty());
    assert!(graph.neighbours("MCO").is_empty());
}

#[test]
fn unresolvable_name_is_a_lookup_error() {
    let mut graph = LocationGraph::new();
    graph.add_location("XXX", "Atlantis");
    graph.add_location("ATL", "Atlanta");

    let err = graph
        .add_path("XXX", "ATL", &fixture_directory())
        .unwrap_err();
    assert!(matches!(err, Error::Lookup { .. }));
    assert!(err.to_string().contains("Atlantis"));
}

#[test]
fn readding_location_resets_its_edges() {
    let mut graph = fixture_graph();
    assert!(!graph.neighbours("ATL").is_empty());

    graph.add_location("ATL", "Atlanta, Georgia");

    assert_eq!(graph.location("ATL").unwrap().name, "Atlanta, Georgia");
    assert!(graph.neighbours("ATL").is_empty());
    for (code, _) in graph.neighbours("ORD") {
        assert_ne!(code, "ATL");
    }
    assert_eq!(graph.shortest_path("ORD", "MCO"), None);
}

#[test]
fn every_fixture_edge_is_symmetric() {
    let graph = fixture_graph();
    for location in graph.locations() {
        for (neighbour, weight) in graph.neighbours(&location.code) {
            assert_eq!(
                graph.weight_between(neighbour, &location.code),
                Some(weight),
                "{} <-> {}",
                location.code,
                neighbour
            );
        }
    }
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.len(), 7);
}

#[test]
fn absolute_longitude_mode_discards_hemisphere() {
    let directory: StaticDirectory = [
        ("London".to_string(), Coordinates::new(51.5072, -0.1276)),
        ("Paris".to_string(), Coordinates::new(48.8566, 2.3522)),
        ("West".to_string(), Coordinates::new(10.0, -45.0)),
        ("East".to_string(), Coordinates::new(10.0, 45.0)),
    ]
    .into_iter()
    .collect();

    let build = |mode| {
        let mut graph = LocationGraph::with_longitude_mode(mode);
        graph.add_location("W", "West");
        graph.add_location("E", "East");
        graph.add_path("W", "E", &directory).expect("path added")
    };

    assert!(build(LongitudeMode::Signed) > 9000);
    assert_eq!(build(LongitudeMode::Absolute), 0);

    let mut graph = LocationGraph::new();
    assert_eq!(graph.longitude_mode(), LongitudeMode::Signed);
    graph.add_location("LHR", "London");
    graph.add_location("CDG", "Paris");
    let weight = graph.add_path("LHR", "CDG", &directory).expect("path added");
    assert!((330..360).contains(&weight), "got {weight}");
}
