use bevy::prelude::*;

use crate::constants::CANVAS_CENTER;

/// Fixed orthographic view centered on the spawn canvas. Scene coordinates
/// are world coordinates, so one scene unit is one logical pixel.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(CANVAS_CENTER.x, CANVAS_CENTER.y, 0.0),
    ));
}

/// Convert a logical window position to scene coordinates.
pub fn window_to_scene(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    window_pos: Vec2,
) -> Option<Vec2> {
    camera
        .viewport_to_world_2d(camera_transform, window_pos)
        .ok()
}
