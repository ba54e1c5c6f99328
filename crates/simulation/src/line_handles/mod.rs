//! Per-frame interactive handles for every line.
//!
//! Each line with at least two resolvable stations yields a start-end flag,
//! an end-end flag, and one midpoint handle per edge. Handles are rebuilt
//! from the `TransitWorld` each frame and never stored.


use bevy::math::Vec2;

use crate::config::{
    END_HANDLE_CAP_HALF_WIDTH, END_HANDLE_HIT_RADIUS, END_HANDLE_STEM_LENGTH,
    SEGMENT_HANDLE_HIT_RADIUS, STATION_DRAW_RADIUS,
};
use crate::edge_usage::{lane_normal, EdgeKey, EdgeUsage};
use crate::transit::{Line, LineColor, LineId, StationId, TransitWorld};

/// Which terminus of a line an end handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    Start,
    End,
}

impl LineEnd {
    pub fn is_start(self) -> bool {
        matches!(self, LineEnd::Start)
    }
}

/// Flag-shaped control at a line terminus: a stem pointing away from the
/// line, capped by a perpendicular bar.
#[derive(Debug, Clone, PartialEq)]
pub struct EndHandle {
    pub line_id: LineId,
    pub color: LineColor,
    /// Terminal station the handle is attached to.
    pub station_id: StationId,
    pub end: LineEnd,
    /// Hit-test anchor; equal to `stem_outer`.
    pub position: Vec2,
    pub stem_inner: Vec2,
    pub stem_outer: Vec2,
    pub cap_start: Vec2,
    pub cap_end: Vec2,
    pub hit_radius: f32,
}

/// Round control at the midpoint of edge `index` (between stations
/// `index` and `index + 1` of the line).
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentHandle {
    pub line_id: LineId,
    pub color: LineColor,
    pub index: usize,
    pub left: StationId,
    pub right: StationId,
    pub position: Vec2,
    pub hit_radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Handle {
    End(EndHandle),
    Segment(SegmentHandle),
}

impl Handle {
    pub fn line_id(&self) -> &LineId {
        match self {
            Handle::End(h) => &h.line_id,
            Handle::Segment(h) => &h.line_id,
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Handle::End(h) => h.position,
            Handle::Segment(h) => h.position,
        }
    }

    pub fn hit_radius(&self) -> f32 {
        match self {
            Handle::End(h) => h.hit_radius,
            Handle::Segment(h) => h.hit_radius,
        }
    }

    /// True when `other` is the same control on the same line, ignoring geometry.
    pub fn same_control(&self, other: &Handle) -> bool {
        match (self, other) {
            (Handle::End(a), Handle::End(b)) => a.line_id == b.line_id && a.end == b.end,
            (Handle::Segment(a), Handle::Segment(b)) => {
                a.line_id == b.line_id && a.index == b.index
            }
            _ => false,
        }
    }
}

/// Build the handle list for every line, in line iteration order.
///
/// Within a line the order is: start handle, end handle, then segment
/// handles by edge index. Hit-testing relies on this order.
pub fn build_line_handles(world: &TransitWorld, usage: &EdgeUsage) -> Vec<Handle> {
    let mut handles = Vec::new();
    for line in world.lines.values() {
        push_line_handles(&mut handles, world, usage, line);
    }
    handles
}

fn push_line_handles(
    handles: &mut Vec<Handle>,
    world: &TransitWorld,
    usage: &EdgeUsage,
    line: &Line,
) {
    // Stations missing from the world are skipped for the end handles only;
    // segment indices always refer to the line's real sequence.
    let resolved: Vec<(&StationId, Vec2)> = line
        .stations
        .iter()
        .filter_map(|id| world.station_pos(id).map(|pos| (id, pos)))
        .collect();
    if resolved.len() < 2 {
        return;
    }

    let n = resolved.len();
    let ends = [
        (LineEnd::Start, resolved[0], resolved[1]),
        (LineEnd::End, resolved[n - 1], resolved[n - 2]),
    ];
    for (end, (origin_id, origin), (neighbor_id, neighbor)) in ends {
        let key = EdgeKey::new(origin_id, neighbor_id);
        let shift = lane_normal(&key, world) * usage.lane_offset_for(&key, &line.id);
        if let Some(handle) = end_handle(line, origin_id, origin, neighbor, end, shift) {
            handles.push(Handle::End(handle));
        }
    }

    for (index, pair) in line.stations.windows(2).enumerate() {
        let (Some(left), Some(right)) = (world.station_pos(&pair[0]), world.station_pos(&pair[1]))
        else {
            continue;
        };
        let key = EdgeKey::new(&pair[0], &pair[1]);
        let shift = lane_normal(&key, world) * usage.lane_offset_for(&key, &line.id);
        handles.push(Handle::Segment(SegmentHandle {
            line_id: line.id.clone(),
            color: line.color,
            index,
            left: pair[0].clone(),
            right: pair[1].clone(),
            position: (left + right) * 0.5 + shift,
            hit_radius: SEGMENT_HANDLE_HIT_RADIUS,
        }));
    }
}

/// `None` when the terminus and its neighbour coincide.
fn end_handle(
    line: &Line,
    station_id: &StationId,
    origin: Vec2,
    neighbor: Vec2,
    end: LineEnd,
    lane_shift: Vec2,
) -> Option<EndHandle> {
    let dir = (origin - neighbor).try_normalize()?;
    let perp = Vec2::new(-dir.y, dir.x);

    let stem_inner = origin + dir * STATION_DRAW_RADIUS + lane_shift;
    let stem_outer = origin + dir * (STATION_DRAW_RADIUS + END_HANDLE_STEM_LENGTH) + lane_shift;

    Some(EndHandle {
        line_id: line.id.clone(),
        color: line.color,
        station_id: station_id.clone(),
        end,
        position: stem_outer,
        stem_inner,
        stem_outer,
        cap_start: stem_outer + perp * END_HANDLE_CAP_HALF_WIDTH,
        cap_end: stem_outer - perp * END_HANDLE_CAP_HALF_WIDTH,
        hit_radius: END_HANDLE_HIT_RADIUS,
    })
}
