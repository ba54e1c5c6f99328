use bevy::prelude::*;

use simulation::line_editor::{LineEditor, Preview};
use simulation::transit::TransitWorld;

use crate::constants::line_color;
use crate::input::CursorWorldPos;

/// Preview to draw this frame. Hidden while the pointer is outside the
/// window, where the live segment would trail to a stale position.
pub fn visible_preview(
    network: &TransitWorld,
    editor: &LineEditor,
    cursor: &CursorWorldPos,
) -> Option<Preview> {
    if !cursor.valid {
        return None;
    }
    editor
        .preview(network)
        .filter(|preview| preview.points.len() >= 2)
}

/// Draw the in-progress gesture as a polyline ending at the pointer.
pub fn draw_preview(
    network: Res<TransitWorld>,
    editor: Res<LineEditor>,
    cursor: Res<CursorWorldPos>,
    mut gizmos: Gizmos,
) {
    if let Some(preview) = visible_preview(&network, &editor, &cursor) {
        gizmos.linestrip_2d(preview.points, line_color(preview.color));
    }
}
