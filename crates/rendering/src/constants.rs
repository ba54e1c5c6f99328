//! Drawing tunables: stroke widths, ring radii and the fixed color scheme.

use bevy::prelude::*;

use simulation::transit::LineColor;

pub const LINE_WIDTH: f32 = 6.0;
/// Width of highlight rings and handle outlines.
pub const OUTLINE_WIDTH: f32 = 2.0;

pub const HOVER_RING_RADIUS: f32 = 18.0;
pub const SEGMENT_HANDLE_RADIUS: f32 = 6.0;
/// Extra radius of the outline drawn around a hovered segment handle.
pub const SEGMENT_HANDLE_HOVER_GROWTH: f32 = 2.0;

/// Passenger dots are scattered up to this far from their station center.
pub const PASSENGER_JITTER: i32 = 6;
pub const PASSENGER_DOT_RADIUS: f32 = 3.0;

/// Lightening applied to a line while a station is being spliced into it.
pub const INSERTION_LIGHTEN_FACTOR: f32 = 0.6;

/// Scene point the camera looks at: the middle of the spawn canvas.
pub const CANVAS_CENTER: Vec2 = Vec2::new(325.0, 225.0);

pub const BACKGROUND_COLOR: Color = Color::srgb(20.0 / 255.0, 20.0 / 255.0, 28.0 / 255.0);
pub const HOVER_COLOR: Color = Color::WHITE;
pub const STATION_COLOR: Color = Color::srgb(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0);
pub const CONNECTED_STATION_COLOR: Color = Color::BLACK;
pub const PASSENGER_COLOR: Color = Color::srgb(1.0, 200.0 / 255.0, 100.0 / 255.0);

pub fn line_color(color: LineColor) -> Color {
    Color::srgb_u8(color.r, color.g, color.b)
}
