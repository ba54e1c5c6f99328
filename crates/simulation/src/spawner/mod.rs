//! Time-driven growth: new stations and passengers appear on fixed tick moduli.

mod tests;

use bevy::prelude::*;
use rand::seq::index::sample;
use rand::Rng;

use crate::config::{
    CANVAS_MAX_X, CANVAS_MAX_Y, CANVAS_MIN_X, CANVAS_MIN_Y, PASSENGER_SPAWN_INTERVAL,
    STATION_SPAWN_INTERVAL,
};
use crate::sim_rng::SimRng;
use crate::transit::{Passenger, PassengerId, Station, StationId, StationKind, TransitWorld};

/// Place a new station at a random point inside the canvas bounds.
pub fn spawn_station(world: &mut TransitWorld, rng: &mut impl Rng) -> StationId {
    let id = world.next_station_id();
    let x = rng.gen_range(CANVAS_MIN_X..=CANVAS_MAX_X) as f32;
    let y = rng.gen_range(CANVAS_MIN_Y..=CANVAS_MAX_Y) as f32;

    let mut station = Station::new(id.clone(), x, y);
    station.kind = random_kind(rng);
    world.insert_station(station);
    id
}

/// Mostly residential, with the occasional commercial or industrial stop.
fn random_kind(rng: &mut impl Rng) -> StationKind {
    match rng.gen_range(0..10) {
        0..=6 => StationKind::Residential,
        7..=8 => StationKind::Commercial,
        _ => StationKind::Industrial,
    }
}

/// Create a passenger between two distinct random stations.
///
/// Returns `None` (and changes nothing) when fewer than two stations exist.
pub fn spawn_passenger(world: &mut TransitWorld, rng: &mut impl Rng) -> Option<PassengerId> {
    if world.stations.len() < 2 {
        return None;
    }
    let picked = sample(rng, world.stations.len(), 2);
    let origin = world.stations.get_index(picked.index(0))?.0.clone();
    let dest = world.stations.get_index(picked.index(1))?.0.clone();

    let id = world.next_passenger_id();
    world
        .passengers
        .insert(id.clone(), Passenger::new(id.clone(), origin.clone(), dest));
    if let Some(station) = world.stations.get_mut(&origin) {
        station.waiting += 1;
    }
    Some(id)
}

/// What one call to `advance_tick` added to the world.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TickSpawns {
    pub station: Option<StationId>,
    pub passenger: Option<PassengerId>,
}

/// Advance the world clock by one tick and run any spawns that fall due.
///
/// The station spawn runs before the passenger spawn, so a tick that is a
/// multiple of both moduli can already route a passenger to the new station.
pub fn advance_tick(world: &mut TransitWorld, rng: &mut impl Rng) -> TickSpawns {
    world.tick += 1;
    let mut spawns = TickSpawns::default();
    if world.tick % STATION_SPAWN_INTERVAL == 0 {
        spawns.station = Some(spawn_station(world, rng));
    }
    if world.tick % PASSENGER_SPAWN_INTERVAL == 0 {
        spawns.passenger = spawn_passenger(world, rng);
    }
    spawns
}

/// One tick per frame, after all input for the frame has been applied.
pub fn tick_transit_world(mut world: ResMut<TransitWorld>, mut rng: ResMut<SimRng>) {
    let spawns = advance_tick(&mut world, &mut rng.0);
    if let Some(id) = spawns.station {
        debug!("Spawned station {} at tick {}", id, world.tick);
    }
    if let Some(id) = spawns.passenger {
        debug!("Spawned passenger {} at tick {}", id, world.tick);
    }
}
