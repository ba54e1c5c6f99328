//! Per-frame ordering for the network editor.
//!
//! ```text
//! Input  →  Simulate  →  Draw
//! ```
//!
//! * **Input** – Cursor conversion and pointer/keyboard handling. Every host
//!   event of the frame is applied here, so topology commits land before the
//!   tick.
//! * **Simulate** – `tick_transit_world`: one tick and any due spawns.
//! * **Draw** – Edge usage and handles are rebuilt from the current world and
//!   drawn. Nothing in this set writes the `TransitWorld`.

use bevy::prelude::*;

/// Ordered phases in the `Update` schedule, configured as a chain.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum NetworkSet {
    Input,
    Simulate,
    Draw,
}
