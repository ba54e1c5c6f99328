use bevy::prelude::*;

pub mod camera;
pub mod constants;
pub mod frame_geometry;
pub mod handle_render;
pub mod input;
pub mod network_render;
pub mod passenger_render;
pub mod preview_render;
pub mod station_render;

use constants::{BACKGROUND_COLOR, LINE_WIDTH, OUTLINE_WIDTH};
use frame_geometry::FrameGeometry;
use input::{CursorWorldPos, StatusMessage};
use simulation::line_editor::LineEditor;
use simulation::transit::TransitWorld;
use simulation::NetworkSet;

/// Thin strokes: highlight rings and hover outlines.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct OutlineGizmos;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorWorldPos>()
            .init_resource::<StatusMessage>()
            .init_resource::<FrameGeometry>()
            .insert_resource(ClearColor(BACKGROUND_COLOR))
            .init_gizmo_group::<OutlineGizmos>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    configure_gizmos,
                    station_render::setup_station_assets,
                )
                    .after(simulation::world_init::init_world),
            )
            .add_systems(
                Update,
                (
                    input::handle_pointer_input,
                    input::handle_quit_shortcut,
                    input::tick_status_message,
                )
                    .in_set(NetworkSet::Input),
            )
            .add_systems(
                Update,
                (
                    (frame_geometry::rebuild_frame_geometry, prune_selection),
                    (
                        network_render::draw_lines,
                        handle_render::draw_handles,
                        preview_render::draw_preview,
                        station_render::sync_station_sprites,
                        station_render::draw_station_rings,
                        passenger_render::sync_passenger_dots,
                    ),
                )
                    .chain()
                    .in_set(NetworkSet::Draw),
            );
    }
}

fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = LINE_WIDTH;
    let (config, _) = config_store.config_mut::<OutlineGizmos>();
    config.line_width = OUTLINE_WIDTH;
}

/// Drop a selection that no longer points at a station.
fn prune_selection(network: Res<TransitWorld>, mut editor: ResMut<LineEditor>) {
    editor.prune_selection(&network);
}
