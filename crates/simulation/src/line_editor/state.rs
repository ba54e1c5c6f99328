//! `LineEditor` resource: the drag state machine and its commit step.

use bevy::prelude::*;

use crate::config::{LINE_COLORS, STATION_SELECT_RADIUS};
use crate::hit_test::{handle_at, station_at};
use crate::line_handles::{Handle, LineEnd};
use crate::topology::{create_line, extend_line, insert_stations, TopologyError};
use crate::transit::{LineColor, LineId, StationId, TransitWorld};

/// What a held primary-button gesture will commit on release.
///
/// Each drag kind carries only its own fields, so switching modes can never
/// leave stale ids from a previous gesture behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragMode {
    #[default]
    Idle,
    /// Stations touched so far, in first-touch order.
    DrawingNewLine { stations: Vec<StationId> },
    /// Pulling one end of `line` outward from `anchor`. `added` is in
    /// outward order (nearest the anchor first).
    ExtendingLine {
        line: LineId,
        end: LineEnd,
        anchor: StationId,
        added: Vec<StationId>,
    },
    /// Dragging the midpoint of edge `segment` (between `left` and `right`).
    InsertingStation {
        line: LineId,
        segment: usize,
        left: StationId,
        right: StationId,
        target: Option<StationId>,
    },
}

impl DragMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragMode::Idle)
    }
}

/// Result of a successful release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing to commit: idle, too few stations, no additions or no target.
    Nothing,
    Created { line: LineId, stations: usize },
    Extended { line: LineId, added: usize },
    Inserted { line: LineId, station: StationId },
}

/// Interactive editing session state. Owned by the editor, not the world.
#[derive(Resource, Debug, Clone, Default)]
pub struct LineEditor {
    pub mode: DragMode,
    /// Index into `LINE_COLORS` for the next created line.
    pub palette_index: usize,
    /// Station whose info panel is shown.
    pub selected_station: Option<StationId>,
    /// Last known pointer position in scene coordinates.
    pub cursor: Vec2,
}

impl LineEditor {
    pub fn is_dragging(&self) -> bool {
        !self.mode.is_idle()
    }

    /// Color the next successfully created line will get.
    pub fn next_color(&self) -> LineColor {
        LINE_COLORS[self.palette_index % LINE_COLORS.len()]
    }

    /// Primary button pressed at `pos`.
    ///
    /// Handles win over stations. A station under the pointer becomes the
    /// selection even if a handle is grabbed; pressing empty space clears it.
    pub fn press(&mut self, world: &TransitWorld, handles: &[Handle], pos: Vec2) {
        self.cursor = pos;
        let handle = handle_at(handles, pos);
        let station = station_at(world, pos, STATION_SELECT_RADIUS);

        if let Some(station) = station {
            self.selected_station = Some(station.id.clone());
        } else if handle.is_none() {
            self.selected_station = None;
        }

        self.mode = match (handle, station) {
            (Some(Handle::End(h)), _) => DragMode::ExtendingLine {
                line: h.line_id.clone(),
                end: h.end,
                anchor: h.station_id.clone(),
                added: Vec::new(),
            },
            (Some(Handle::Segment(h)), _) => DragMode::InsertingStation {
                line: h.line_id.clone(),
                segment: h.index,
                left: h.left.clone(),
                right: h.right.clone(),
                target: None,
            },
            (None, Some(station)) => DragMode::DrawingNewLine {
                stations: vec![station.id.clone()],
            },
            (None, None) => DragMode::Idle,
        };
    }

    /// Pointer moved to `pos`; grows or retargets the active drag.
    pub fn pointer_moved(&mut self, world: &TransitWorld, pos: Vec2) {
        self.cursor = pos;
        let hovered = station_at(world, pos, STATION_SELECT_RADIUS).map(|s| &s.id);

        match &mut self.mode {
            DragMode::Idle => {}
            DragMode::DrawingNewLine { stations } => {
                if let Some(id) = hovered {
                    if !stations.contains(id) {
                        stations.push(id.clone());
                    }
                }
            }
            DragMode::ExtendingLine {
                line,
                anchor,
                added,
                ..
            } => {
                let (Some(id), Some(line)) = (hovered, world.line(line)) else {
                    return;
                };
                if id != anchor && !line.contains(id) && !added.contains(id) {
                    added.push(id.clone());
                }
            }
            DragMode::InsertingStation {
                line,
                left,
                right,
                target,
                ..
            } => {
                *target = match (hovered, world.line(line)) {
                    (Some(id), Some(line))
                        if id != left && id != right && !line.contains(id) =>
                    {
                        Some(id.clone())
                    }
                    _ => None,
                };
            }
        }
    }

    /// Primary button released: commit the gesture, then return to idle.
    ///
    /// The drag state is cleared whether the commit succeeds or is rejected.
    pub fn release(&mut self, world: &mut TransitWorld) -> Result<CommitOutcome, TopologyError> {
        match std::mem::take(&mut self.mode) {
            DragMode::Idle => Ok(CommitOutcome::Nothing),
            DragMode::DrawingNewLine { stations } => {
                if stations.len() < 2 {
                    return Ok(CommitOutcome::Nothing);
                }
                let line = create_line(world, &stations, self.next_color())?;
                self.palette_index = (self.palette_index + 1) % LINE_COLORS.len();
                Ok(CommitOutcome::Created {
                    line: line.id.clone(),
                    stations: line.stations.len(),
                })
            }
            DragMode::ExtendingLine {
                line, end, added, ..
            } => {
                if added.is_empty() {
                    return Ok(CommitOutcome::Nothing);
                }
                // `added` is already outward from the anchor, which is the
                // order extend_line expects for both ends.
                extend_line(world, &line, &added, end.is_start())?;
                Ok(CommitOutcome::Extended {
                    line,
                    added: added.len(),
                })
            }
            DragMode::InsertingStation {
                line,
                segment,
                target,
                ..
            } => {
                let Some(station) = target else {
                    return Ok(CommitOutcome::Nothing);
                };
                insert_stations(world, &line, std::slice::from_ref(&station), segment)?;
                Ok(CommitOutcome::Inserted { line, station })
            }
        }
    }

    /// Abandon the current gesture without committing anything.
    pub fn cancel_gesture(&mut self) {
        self.mode = DragMode::Idle;
    }

    /// Secondary button: cancel the gesture and drop the selection.
    pub fn secondary_press(&mut self) {
        self.cancel_gesture();
        self.selected_station = None;
    }

    /// Forget the selection if the station no longer exists.
    pub fn prune_selection(&mut self, world: &TransitWorld) {
        if let Some(id) = &self.selected_station {
            if world.station(id).is_none() {
                self.selected_station = None;
            }
        }
    }
}
