//! Tunables for the transit network, the spawner and the interactive handles.

use crate::transit::LineColor;

// ---------------------------------------------------------------------------
// Canvas / spawner
// ---------------------------------------------------------------------------

/// Scene-space bounds that spawned stations are placed within (inclusive).
pub const CANVAS_MIN_X: i32 = 50;
pub const CANVAS_MAX_X: i32 = 600;
pub const CANVAS_MIN_Y: i32 = 50;
pub const CANVAS_MAX_Y: i32 = 400;

/// A new station appears every this many ticks.
pub const STATION_SPAWN_INTERVAL: u64 = 420;

/// A new passenger appears every this many ticks.
pub const PASSENGER_SPAWN_INTERVAL: u64 = 60;

/// Stations placed by `init_world` before the first frame.
pub const INITIAL_STATION_COUNT: usize = 2;

pub const DEFAULT_STATION_CAPACITY: u32 = 30;
pub const DEFAULT_LINE_CAPACITY: u32 = 20;
pub const DEFAULT_LINE_SPEED: f32 = 1.0;

// ---------------------------------------------------------------------------
// Station and handle geometry (scene units)
// ---------------------------------------------------------------------------

/// Radius a station is drawn with; end-handle stems start at this distance.
pub const STATION_DRAW_RADIUS: f32 = 12.0;

/// Pointer distance within which a station counts as hit.
pub const STATION_SELECT_RADIUS: f32 = 20.0;

pub const END_HANDLE_STEM_LENGTH: f32 = 18.0;
pub const END_HANDLE_CAP_HALF_WIDTH: f32 = 10.0;
pub const END_HANDLE_HIT_RADIUS: f32 = 14.0;

pub const SEGMENT_HANDLE_HIT_RADIUS: f32 = 12.0;

/// Perpendicular spacing between parallel lanes on a shared edge.
pub const EDGE_OFFSET_DISTANCE: f32 = 8.0;

// ---------------------------------------------------------------------------
// Line palette
// ---------------------------------------------------------------------------

/// Colors handed out to new lines, in order. Wraps around.
pub const LINE_COLORS: [LineColor; 6] = [
    LineColor::new(239, 71, 111),
    LineColor::new(17, 138, 178),
    LineColor::new(6, 214, 160),
    LineColor::new(255, 209, 102),
    LineColor::new(17, 45, 78),
    LineColor::new(149, 125, 173),
];
