use bevy::prelude::*;

use simulation::line_editor::LineEditor;
use simulation::line_handles::Handle;

use crate::constants::{
    line_color, HOVER_COLOR, SEGMENT_HANDLE_HOVER_GROWTH, SEGMENT_HANDLE_RADIUS,
};
use crate::frame_geometry::FrameGeometry;
use crate::OutlineGizmos;

/// Draw end flags and segment dots. The handle under the pointer is drawn
/// white; the handle being dragged is not drawn at all.
pub fn draw_handles(
    geometry: Res<FrameGeometry>,
    editor: Res<LineEditor>,
    mut gizmos: Gizmos,
    mut outlines: Gizmos<OutlineGizmos>,
) {
    let hovered = editor.hovered_handle(&geometry.handles);

    for handle in &geometry.handles {
        if editor.suppresses(handle) {
            continue;
        }
        let is_hovered = hovered.is_some_and(|h| h.same_control(handle));

        match handle {
            Handle::End(end) => {
                let color = if is_hovered {
                    HOVER_COLOR
                } else {
                    line_color(end.color)
                };
                gizmos.line_2d(end.stem_inner, end.stem_outer, color);
                gizmos.line_2d(end.cap_start, end.cap_end, color);
            }
            Handle::Segment(segment) => {
                // Half the radius at full stroke width fills the dot.
                gizmos.circle_2d(
                    Isometry2d::from_translation(segment.position),
                    SEGMENT_HANDLE_RADIUS * 0.5,
                    line_color(segment.color),
                );
                if is_hovered {
                    outlines.circle_2d(
                        Isometry2d::from_translation(segment.position),
                        SEGMENT_HANDLE_RADIUS + SEGMENT_HANDLE_HOVER_GROWTH,
                        HOVER_COLOR,
                    );
                }
            }
        }
    }
}
