use bevy::prelude::*;

pub mod config;
pub mod edge_usage;
pub mod line_editor;
pub mod line_handles;
pub mod network_sets;
pub mod sim_rng;
pub mod spawner;
pub mod topology;
pub mod transit;
pub mod world_init;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub use network_sets::NetworkSet;

/// Owns the network model, the editor session and the per-frame tick.
///
/// Rendering and UI crates add their systems to the `NetworkSet` phases
/// configured here.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<transit::TransitWorld>()
            .init_resource::<sim_rng::SimRng>()
            .init_resource::<line_editor::LineEditor>()
            .configure_sets(
                Update,
                (NetworkSet::Input, NetworkSet::Simulate, NetworkSet::Draw).chain(),
            )
            .add_systems(Startup, world_init::init_world)
            .add_systems(
                Update,
                spawner::tick_transit_world.in_set(NetworkSet::Simulate),
            );
    }
}
