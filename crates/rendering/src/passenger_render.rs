use std::collections::HashSet;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use simulation::transit::{PassengerId, TransitWorld};

use crate::constants::PASSENGER_JITTER;
use crate::station_render::{StationAssets, PASSENGER_Z};

/// Links a dot entity to the waiting passenger it draws.
#[derive(Component, Debug)]
pub struct PassengerDot {
    pub id: PassengerId,
}

/// Offset of a passenger's dot from its station center, in whole scene
/// units within `±PASSENGER_JITTER` on each axis. Seeded from the id so the
/// dot stays put from frame to frame.
pub fn passenger_jitter(id: &PassengerId) -> Vec2 {
    let seed = id
        .as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
        });
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Vec2::new(
        rng.gen_range(-PASSENGER_JITTER..=PASSENGER_JITTER) as f32,
        rng.gen_range(-PASSENGER_JITTER..=PASSENGER_JITTER) as f32,
    )
}

/// Keep one dot per waiting passenger near its origin station. Dots of
/// passengers that boarded or vanished are removed.
pub fn sync_passenger_dots(
    mut commands: Commands,
    network: Res<TransitWorld>,
    assets: Res<StationAssets>,
    mut dots: Query<(Entity, &PassengerDot, &mut Transform)>,
) {
    let mut drawn = HashSet::new();

    for (entity, dot, mut transform) in &mut dots {
        let origin = network
            .passengers
            .get(&dot.id)
            .filter(|p| p.onboard.is_none())
            .and_then(|p| network.station_pos(&p.origin));
        let Some(origin) = origin else {
            commands.entity(entity).despawn();
            continue;
        };
        transform.translation = (origin + passenger_jitter(&dot.id)).extend(PASSENGER_Z);
        drawn.insert(dot.id.clone());
    }

    for passenger in network.waiting_passengers() {
        if drawn.contains(&passenger.id) {
            continue;
        }
        let Some(origin) = network.station_pos(&passenger.origin) else {
            continue;
        };
        commands.spawn((
            PassengerDot {
                id: passenger.id.clone(),
            },
            Mesh2d(assets.passenger_mesh.clone()),
            MeshMaterial2d(assets.passenger_material.clone()),
            Transform::from_translation(
                (origin + passenger_jitter(&passenger.id)).extend(PASSENGER_Z),
            ),
        ));
    }
}
