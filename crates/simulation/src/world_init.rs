use bevy::prelude::*;

use crate::config::INITIAL_STATION_COUNT;
use crate::sim_rng::SimRng;
use crate::spawner::spawn_station;
use crate::transit::TransitWorld;

/// Marker resource that, when present, causes `init_world` to leave the
/// network empty. Used by the test harness to build worlds by hand.
#[derive(Resource)]
pub struct SkipWorldInit;

/// Seed the session with a couple of stations so there is something to connect.
pub fn init_world(
    mut world: ResMut<TransitWorld>,
    mut rng: ResMut<SimRng>,
    skip: Option<Res<SkipWorldInit>>,
) {
    if skip.is_some() {
        return;
    }
    for _ in 0..INITIAL_STATION_COUNT {
        let id = spawn_station(&mut world, &mut rng.0);
        info!("Initial station {} placed", id);
    }
}
