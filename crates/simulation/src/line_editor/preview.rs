//! Per-frame derived outputs of the editor for the draw pass.

use bevy::math::Vec2;

use crate::config::STATION_SELECT_RADIUS;
use crate::hit_test::{handle_at, station_at};
use crate::line_handles::Handle;
use crate::transit::{LineColor, LineId, Station, StationId, TransitWorld};

use super::state::{DragMode, LineEditor};

/// Provisional polyline for the active gesture. The last (or, when pulling a
/// line's start, the first) point is the live pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub points: Vec<Vec2>,
    pub color: LineColor,
}

impl LineEditor {
    /// Station currently under the pointer.
    pub fn hovered_station<'w>(&self, world: &'w TransitWorld) -> Option<&'w Station> {
        station_at(world, self.cursor, STATION_SELECT_RADIUS)
    }

    /// Handle under the pointer; only reported while no drag is active.
    pub fn hovered_handle<'h>(&self, handles: &'h [Handle]) -> Option<&'h Handle> {
        if self.is_dragging() {
            return None;
        }
        handle_at(handles, self.cursor)
    }

    /// Whether `handle` is the control being dragged and must not be drawn.
    pub fn suppresses(&self, handle: &Handle) -> bool {
        match (&self.mode, handle) {
            (DragMode::ExtendingLine { line, end, .. }, Handle::End(h)) => {
                &h.line_id == line && h.end == *end
            }
            (DragMode::InsertingStation { line, segment, .. }, Handle::Segment(h)) => {
                &h.line_id == line && h.index == *segment
            }
            _ => false,
        }
    }

    /// Line being inserted into, drawn lightened while the drag lasts.
    pub fn insertion_line(&self) -> Option<&LineId> {
        match &self.mode {
            DragMode::InsertingStation { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Whether `station` gets a highlight ring this frame.
    pub fn is_station_highlighted(&self, world: &TransitWorld, station: &StationId) -> bool {
        if self.selected_station.as_ref() == Some(station) {
            return true;
        }
        if self.hovered_station(world).is_some_and(|s| &s.id == station) {
            return true;
        }
        match &self.mode {
            DragMode::Idle => false,
            DragMode::DrawingNewLine { stations } => stations.contains(station),
            DragMode::ExtendingLine { anchor, added, .. } => {
                anchor == station || added.contains(station)
            }
            DragMode::InsertingStation {
                left,
                right,
                target,
                ..
            } => left == station || right == station || target.as_ref() == Some(station),
        }
    }

    /// Preview geometry for the active drag, if any.
    pub fn preview(&self, world: &TransitWorld) -> Option<Preview> {
        match &self.mode {
            DragMode::Idle => None,
            DragMode::DrawingNewLine { stations } => {
                let mut points = station_points(world, stations);
                if points.is_empty() {
                    return None;
                }
                points.push(self.cursor);
                Some(Preview {
                    points,
                    color: self.next_color(),
                })
            }
            DragMode::ExtendingLine {
                line,
                end,
                anchor,
                added,
            } => {
                let line = world.line(line)?;
                world.station(anchor)?;
                let points = if end.is_start() {
                    let mut pts = vec![self.cursor];
                    pts.extend(station_points(world, added.iter().rev().chain([anchor])));
                    pts
                } else {
                    let mut pts = station_points(world, [anchor].into_iter().chain(added));
                    pts.push(self.cursor);
                    pts
                };
                Some(Preview {
                    points,
                    color: line.color,
                })
            }
            DragMode::InsertingStation {
                line,
                left,
                right,
                target,
                ..
            } => {
                let line = world.line(line)?;
                let left = world.station_pos(left)?;
                let right = world.station_pos(right)?;
                let middle = target
                    .as_ref()
                    .and_then(|id| world.station_pos(id))
                    .unwrap_or(self.cursor);
                Some(Preview {
                    points: vec![left, middle, right],
                    color: line.color,
                })
            }
        }
    }
}

fn station_points<'a>(
    world: &TransitWorld,
    ids: impl IntoIterator<Item = &'a StationId>,
) -> Vec<Vec2> {
    ids.into_iter()
        .filter_map(|id| world.station_pos(id))
        .collect()
}
