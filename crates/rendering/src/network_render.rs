use bevy::prelude::*;

use simulation::edge_usage::{lane_normal, offset_segment, EdgeKey, EdgeUsage};
use simulation::line_editor::LineEditor;
use simulation::transit::{Line, TransitWorld};

use crate::constants::{line_color, INSERTION_LIGHTEN_FACTOR};
use crate::frame_geometry::FrameGeometry;

/// Drawn segments of a line, each shifted into the line's lane on that edge.
/// Edges touching a missing station are skipped.
pub fn lane_segments(world: &TransitWorld, usage: &EdgeUsage, line: &Line) -> Vec<(Vec2, Vec2)> {
    line.stations
        .windows(2)
        .filter_map(|pair| {
            let start = world.station_pos(&pair[0])?;
            let end = world.station_pos(&pair[1])?;
            let key = EdgeKey::new(&pair[0], &pair[1]);
            let offset = usage.lane_offset_for(&key, &line.id);
            Some(offset_segment(start, end, lane_normal(&key, world), offset))
        })
        .collect()
}

/// Draw every line as offset polyline segments. The line a station is being
/// spliced into is drawn lightened.
pub fn draw_lines(
    network: Res<TransitWorld>,
    geometry: Res<FrameGeometry>,
    editor: Res<LineEditor>,
    mut gizmos: Gizmos,
) {
    let inserting = editor.insertion_line();

    for line in network.lines.values() {
        let color = if inserting == Some(&line.id) {
            line.color.lighten(INSERTION_LIGHTEN_FACTOR)
        } else {
            line.color
        };
        let color = line_color(color);
        for (start, end) in lane_segments(&network, &geometry.usage, line) {
            gizmos.line_2d(start, end, color);
        }
    }
}
