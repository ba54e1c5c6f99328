use std::collections::HashSet;

use bevy::prelude::*;

use simulation::config::STATION_DRAW_RADIUS;
use simulation::line_editor::LineEditor;
use simulation::transit::{StationId, TransitWorld};

use crate::constants::{
    CONNECTED_STATION_COLOR, HOVER_COLOR, HOVER_RING_RADIUS, PASSENGER_COLOR,
    PASSENGER_DOT_RADIUS, STATION_COLOR,
};
use crate::OutlineGizmos;

/// Stations sit above lines, passengers above stations.
pub const STATION_Z: f32 = 1.0;
pub const PASSENGER_Z: f32 = 2.0;

/// Shared meshes and materials for station discs and passenger dots.
#[derive(Resource, Clone, Default)]
pub struct StationAssets {
    pub station_mesh: Handle<Mesh>,
    pub idle_material: Handle<ColorMaterial>,
    pub connected_material: Handle<ColorMaterial>,
    pub passenger_mesh: Handle<Mesh>,
    pub passenger_material: Handle<ColorMaterial>,
}

pub fn setup_station_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(StationAssets {
        station_mesh: meshes.add(Circle::new(STATION_DRAW_RADIUS)),
        idle_material: materials.add(STATION_COLOR),
        connected_material: materials.add(CONNECTED_STATION_COLOR),
        passenger_mesh: meshes.add(Circle::new(PASSENGER_DOT_RADIUS)),
        passenger_material: materials.add(PASSENGER_COLOR),
    });
}

/// Links a disc entity to the station it draws.
#[derive(Component, Debug)]
pub struct StationSprite {
    pub id: StationId,
}

/// Keep one disc per station: spawn new ones, follow position and connected
/// state, drop discs whose station is gone.
pub fn sync_station_sprites(
    mut commands: Commands,
    network: Res<TransitWorld>,
    assets: Res<StationAssets>,
    mut sprites: Query<(
        Entity,
        &StationSprite,
        &mut Transform,
        &mut MeshMaterial2d<ColorMaterial>,
    )>,
) {
    let mut drawn = HashSet::new();

    for (entity, sprite, mut transform, mut material) in &mut sprites {
        let Some(station) = network.station(&sprite.id) else {
            commands.entity(entity).despawn();
            continue;
        };
        transform.translation = station.pos().extend(STATION_Z);
        let wanted = station_material(&assets, station.connected);
        if material.0 != wanted {
            material.0 = wanted;
        }
        drawn.insert(sprite.id.clone());
    }

    for station in network.stations.values() {
        if drawn.contains(&station.id) {
            continue;
        }
        commands.spawn((
            StationSprite {
                id: station.id.clone(),
            },
            Mesh2d(assets.station_mesh.clone()),
            MeshMaterial2d(station_material(&assets, station.connected)),
            Transform::from_translation(station.pos().extend(STATION_Z)),
        ));
    }
}

fn station_material(assets: &StationAssets, connected: bool) -> Handle<ColorMaterial> {
    if connected {
        assets.connected_material.clone()
    } else {
        assets.idle_material.clone()
    }
}

/// White ring around selected, hovered and gesture-involved stations.
pub fn draw_station_rings(
    network: Res<TransitWorld>,
    editor: Res<LineEditor>,
    mut outlines: Gizmos<OutlineGizmos>,
) {
    for station in network.stations.values() {
        if editor.is_station_highlighted(&network, &station.id) {
            outlines.circle_2d(
                Isometry2d::from_translation(station.pos()),
                HOVER_RING_RADIUS,
                HOVER_COLOR,
            );
        }
    }
}
