use std::fmt;

use crate::transit::{LineId, StationId};

/// Reasons a structural edit to the network is rejected.
///
/// Every mutator validates fully before touching the world, so receiving
/// one of these guarantees the `TransitWorld` is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// A new line needs at least two stations.
    TooFewStations { count: usize },
    /// The same station appears more than once in a single request.
    DuplicateStation(StationId),
    /// A referenced station does not exist.
    UnknownStation(StationId),
    /// The target line does not exist.
    UnknownLine(LineId),
    /// A station being added is already part of the line.
    StationAlreadyOnLine { line: LineId, station: StationId },
    /// The line is too short to have an interior edge to insert into.
    LineTooShort { line: LineId, len: usize },
    /// `after_index` does not name an existing edge of the line.
    InsertIndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyError::TooFewStations { count } => {
                write!(f, "Line requires at least two stations (got {count})")
            }
            TopologyError::DuplicateStation(id) => {
                write!(f, "Station {id} appears more than once")
            }
            TopologyError::UnknownStation(id) => write!(f, "Unknown station id: {id}"),
            TopologyError::UnknownLine(id) => write!(f, "Unknown line id: {id}"),
            TopologyError::StationAlreadyOnLine { line, station } => {
                write!(f, "Station {station} already exists on line {line}")
            }
            TopologyError::LineTooShort { line, len } => write!(
                f,
                "Line {line} has {len} station(s); at least two are needed to insert between"
            ),
            TopologyError::InsertIndexOutOfRange { index, len } => write!(
                f,
                "Insertion index {index} out of range for a line of {len} stations"
            ),
        }
    }
}

impl std::error::Error for TopologyError {}
