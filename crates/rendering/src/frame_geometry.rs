use bevy::prelude::*;

use simulation::edge_usage::{compute_edge_usage, EdgeUsage};
use simulation::line_handles::{build_line_handles, Handle};
use simulation::transit::TransitWorld;

/// Edge usage and line handles for the frame being drawn.
///
/// Rebuilt from the `TransitWorld` at the start of `NetworkSet::Draw`, after
/// input and the tick, so every draw system reads one consistent snapshot.
#[derive(Resource, Default, Debug)]
pub struct FrameGeometry {
    pub usage: EdgeUsage,
    pub handles: Vec<Handle>,
}

pub fn rebuild_frame_geometry(network: Res<TransitWorld>, mut geometry: ResMut<FrameGeometry>) {
    let usage = compute_edge_usage(&network);
    geometry.handles = build_line_handles(&network, &usage);
    geometry.usage = usage;
}
