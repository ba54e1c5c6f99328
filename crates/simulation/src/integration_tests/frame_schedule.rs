//! Frame-level behavior: startup, tick cadence and spawner timing.

use crate::config::{
    CANVAS_MAX_X, CANVAS_MAX_Y, CANVAS_MIN_X, CANVAS_MIN_Y, INITIAL_STATION_COUNT,
    PASSENGER_SPAWN_INTERVAL, STATION_SPAWN_INTERVAL,
};
use crate::line_editor::LineEditor;
use crate::sim_rng::SimRng;
use crate::test_harness::TestNetwork;
use crate::transit::{StationId, TransitWorld};

#[test]
fn test_plugin_registers_resources() {
    let net = TestNetwork::new();
    net.assert_resource_exists::<TransitWorld>();
    net.assert_resource_exists::<LineEditor>();
    net.assert_resource_exists::<SimRng>();
}

#[test]
fn test_skip_world_init_starts_empty() {
    let net = TestNetwork::new();
    assert!(net.network().stations.is_empty());
    assert_eq!(net.network().tick, 1);
}

#[test]
fn test_startup_places_initial_stations() {
    let net = TestNetwork::with_initial_stations();
    let stations = &net.network().stations;
    assert_eq!(stations.len(), INITIAL_STATION_COUNT);
    assert!(stations.contains_key(&StationId::from("S1")));
    assert!(stations.contains_key(&StationId::from("S2")));
    for s in stations.values() {
        assert!(s.x >= CANVAS_MIN_X as f32 && s.x <= CANVAS_MAX_X as f32);
        assert!(s.y >= CANVAS_MIN_Y as f32 && s.y <= CANVAS_MAX_Y as f32);
    }
}

#[test]
fn test_one_tick_per_frame() {
    let mut net = TestNetwork::new();
    net.tick(25);
    assert_eq!(net.network().tick, 26);
}

#[test]
fn test_passengers_spawn_on_schedule() {
    let mut net = TestNetwork::with_initial_stations();
    net.tick(PASSENGER_SPAWN_INTERVAL as u32 - 2);
    assert!(net.network().passengers.is_empty());
    net.tick(1);
    assert_eq!(net.network().passengers.len(), 1);

    let waiting: u32 = net.network().stations.values().map(|s| s.waiting).sum();
    assert_eq!(waiting, 1);
}

#[test]
fn test_station_spawns_on_schedule() {
    let mut net = TestNetwork::new();
    net.tick(STATION_SPAWN_INTERVAL as u32 - 2);
    assert!(net.network().stations.is_empty());
    net.tick(1);
    assert_eq!(net.network().stations.len(), 1);
    // A single station cannot host a passenger.
    assert!(net.network().passengers.is_empty());
}

#[test]
fn test_lines_survive_ticks() {
    let mut net = TestNetwork::new()
        .with_station("A", 100.0, 100.0)
        .with_station("B", 200.0, 100.0);
    net.drag(&[(100.0, 100.0), (200.0, 100.0)]).unwrap();
    net.tick(STATION_SPAWN_INTERVAL as u32);

    assert_eq!(net.line_stations("L1"), vec!["A", "B"]);
    assert!(net.network().stations.len() > 2);
}
