//! Which lines share each station-to-station edge, and the lane each one gets.
//!
//! Recomputed from scratch every frame. The sibling list for an edge is
//! ordered by line insertion order, which makes lane assignment stable for a
//! given `TransitWorld`.


use bevy::math::Vec2;
use indexmap::IndexMap;

use crate::config::EDGE_OFFSET_DISTANCE;
use crate::transit::{LineId, StationId, TransitWorld};

/// Unordered station pair in canonical (sorted) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub low: StationId,
    pub high: StationId,
}

impl EdgeKey {
    pub fn new(a: &StationId, b: &StationId) -> Self {
        if a <= b {
            Self {
                low: a.clone(),
                high: b.clone(),
            }
        } else {
            Self {
                low: b.clone(),
                high: a.clone(),
            }
        }
    }
}

/// Edge -> ordered list of the lines traversing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeUsage {
    edges: IndexMap<EdgeKey, Vec<LineId>>,
}

impl EdgeUsage {
    pub fn siblings(&self, key: &EdgeKey) -> &[LineId] {
        self.edges.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Position of `line` among the lines sharing `key`; 0 when unshared or absent.
    pub fn lane_index(&self, key: &EdgeKey, line: &LineId) -> usize {
        self.siblings(key)
            .iter()
            .position(|l| l == line)
            .unwrap_or(0)
    }

    /// Signed perpendicular offset for `line` on the edge `key`.
    pub fn lane_offset_for(&self, key: &EdgeKey, line: &LineId) -> f32 {
        lane_offset(self.lane_index(key, line))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EdgeKey, &Vec<LineId>)> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Scan every line's consecutive station pairs and group lines by edge.
pub fn compute_edge_usage(world: &TransitWorld) -> EdgeUsage {
    let mut edges: IndexMap<EdgeKey, Vec<LineId>> = IndexMap::new();
    for (line_id, line) in &world.lines {
        for pair in line.stations.windows(2) {
            edges
                .entry(EdgeKey::new(&pair[0], &pair[1]))
                .or_default()
                .push(line_id.clone());
        }
    }
    EdgeUsage { edges }
}

/// Lane displacement for the `index`-th line on an edge.
///
/// Index 0 sits on the direct station-to-station line. Further lines fan
/// out two per step: odd indices to the positive side, even indices to the
/// negative side (1 -> +1u, 2 -> -1u, 3 -> +2u, 4 -> -2u).
pub fn lane_offset(index: usize) -> f32 {
    if index == 0 {
        return 0.0;
    }
    let steps = index.div_ceil(2) as f32;
    let sign = if index % 2 == 1 { 1.0 } else { -1.0 };
    sign * steps * EDGE_OFFSET_DISTANCE
}

/// Unit normal of the edge, measured in canonical direction (low -> high id).
///
/// Using the canonical direction rather than the line's travel direction
/// keeps lanes apart when two lines cross the same edge in opposite
/// directions. Zero when the two stations coincide.
pub fn lane_normal(key: &EdgeKey, world: &TransitWorld) -> Vec2 {
    let (Some(low), Some(high)) = (world.station_pos(&key.low), world.station_pos(&key.high))
    else {
        return Vec2::ZERO;
    };
    let dir = (high - low).normalize_or_zero();
    Vec2::new(-dir.y, dir.x)
}

/// Offset a segment sideways by `offset` along `normal`.
pub fn offset_segment(start: Vec2, end: Vec2, normal: Vec2, offset: f32) -> (Vec2, Vec2) {
    let shift = normal * offset;
    (start + shift, end + shift)
}
