//! Structural edits to the line network.
//!
//! `create_line`, `extend_line` and `insert_stations` are validate-then-commit:
//! every constraint is checked against the current `TransitWorld` before any
//! field is written, so a rejected request leaves the world untouched.

mod errors;

pub use errors::TopologyError;

use std::collections::HashSet;

use crate::transit::{Line, LineColor, LineId, StationId, TransitWorld};

/// Create a new line through `station_ids`, in the given order.
///
/// The line gets the next sequential id and every member station is marked
/// connected.
pub fn create_line<'w>(
    world: &'w mut TransitWorld,
    station_ids: &[StationId],
    color: LineColor,
) -> Result<&'w Line, TopologyError> {
    if station_ids.len() < 2 {
        return Err(TopologyError::TooFewStations {
            count: station_ids.len(),
        });
    }
    if let Some(dup) = first_duplicate(station_ids) {
        return Err(TopologyError::DuplicateStation(dup.clone()));
    }
    if let Some(unknown) = station_ids
        .iter()
        .find(|id| !world.stations.contains_key(*id))
    {
        return Err(TopologyError::UnknownStation(unknown.clone()));
    }

    let line_id = world.next_line_id();
    world.lines.insert(
        line_id.clone(),
        Line::new(line_id.clone(), color, station_ids.to_vec()),
    );
    mark_connected(world, station_ids);

    Ok(&world.lines[&line_id])
}

/// Add stations to one end of an existing line.
///
/// `station_ids` is given in outward order, starting next to the current
/// terminus. With `at_start` the additions are prepended reversed, so the
/// first id ends up adjacent to the old first station; otherwise they are
/// appended as given. An empty request is a no-op.
pub fn extend_line<'w>(
    world: &'w mut TransitWorld,
    line_id: &LineId,
    station_ids: &[StationId],
    at_start: bool,
) -> Result<&'w Line, TopologyError> {
    let Some(line) = world.lines.get(line_id) else {
        return Err(TopologyError::UnknownLine(line_id.clone()));
    };
    if station_ids.is_empty() {
        return Ok(&world.lines[line_id]);
    }
    validate_additions(world, line, station_ids)?;

    if let Some(line) = world.lines.get_mut(line_id) {
        if at_start {
            let mut stations: Vec<StationId> = station_ids.iter().rev().cloned().collect();
            stations.append(&mut line.stations);
            line.stations = stations;
        } else {
            line.stations.extend_from_slice(station_ids);
        }
    }
    mark_connected(world, station_ids);

    Ok(&world.lines[line_id])
}

/// Splice stations into a line directly after position `after_index`.
///
/// `after_index` must name an existing edge (`0 <= after_index < len - 1`),
/// so insertion never happens past a terminus. The new stations keep their
/// given order. An empty request is a no-op.
pub fn insert_stations<'w>(
    world: &'w mut TransitWorld,
    line_id: &LineId,
    station_ids: &[StationId],
    after_index: usize,
) -> Result<&'w Line, TopologyError> {
    let Some(line) = world.lines.get(line_id) else {
        return Err(TopologyError::UnknownLine(line_id.clone()));
    };
    if station_ids.is_empty() {
        return Ok(&world.lines[line_id]);
    }

    let len = line.stations.len();
    if len < 2 {
        return Err(TopologyError::LineTooShort {
            line: line_id.clone(),
            len,
        });
    }
    if after_index >= len - 1 {
        return Err(TopologyError::InsertIndexOutOfRange {
            index: after_index,
            len,
        });
    }
    validate_additions(world, line, station_ids)?;

    if let Some(line) = world.lines.get_mut(line_id) {
        let tail = line.stations.split_off(after_index + 1);
        line.stations.extend_from_slice(station_ids);
        line.stations.extend(tail);
    }
    mark_connected(world, station_ids);

    Ok(&world.lines[line_id])
}

/// Shared checks for stations joining an existing line.
fn validate_additions(
    world: &TransitWorld,
    line: &Line,
    station_ids: &[StationId],
) -> Result<(), TopologyError> {
    if let Some(dup) = first_duplicate(station_ids) {
        return Err(TopologyError::DuplicateStation(dup.clone()));
    }
    for id in station_ids {
        if !world.stations.contains_key(id) {
            return Err(TopologyError::UnknownStation(id.clone()));
        }
        if line.contains(id) {
            return Err(TopologyError::StationAlreadyOnLine {
                line: line.id.clone(),
                station: id.clone(),
            });
        }
    }
    Ok(())
}

fn first_duplicate(ids: &[StationId]) -> Option<&StationId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().find(|id| !seen.insert(*id))
}

fn mark_connected(world: &mut TransitWorld, station_ids: &[StationId]) {
    for id in station_ids {
        if let Some(station) = world.stations.get_mut(id) {
            station.connected = true;
        }
    }
}
