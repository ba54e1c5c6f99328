//! # TestNetwork: headless harness for the network editor
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` without a window, so tests can
//! build a network, replay pointer gestures against the `LineEditor`, and run
//! frames through the real schedule.

use bevy::app::App;
use bevy::prelude::*;

use crate::config::LINE_COLORS;
use crate::edge_usage::compute_edge_usage;
use crate::line_editor::{CommitOutcome, LineEditor};
use crate::line_handles::{build_line_handles, Handle};
use crate::topology::{create_line, TopologyError};
use crate::transit::{LineId, Station, StationId, TransitWorld};
use crate::world_init::SkipWorldInit;
use crate::SimulationPlugin;

/// A headless Bevy App running `SimulationPlugin`.
pub struct TestNetwork {
    app: App,
}

impl Default for TestNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl TestNetwork {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// An empty network. One frame has already run (Startup plus the first
    /// tick), so `tick` starts at 1.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert the marker BEFORE SimulationPlugin so init_world skips.
        app.insert_resource(SkipWorldInit);
        app.add_plugins(SimulationPlugin);
        app.update();

        Self { app }
    }

    /// A network with the normal startup stations.
    pub fn with_initial_stations() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern, consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_station(mut self, id: &str, x: f32, y: f32) -> Self {
        self.network_mut()
            .insert_station(Station::new(StationId::from(id), x, y));
        self
    }

    /// Create a line directly through the mutators, bypassing the editor.
    /// Colors follow the palette by line count.
    pub fn with_line(mut self, stations: &[&str]) -> Self {
        let ids: Vec<StationId> = stations.iter().map(|s| StationId::from(*s)).collect();
        let network = self.network_mut();
        let color = LINE_COLORS[network.lines.len() % LINE_COLORS.len()];
        if let Err(err) = create_line(network, &ids, color) {
            panic!("with_line({stations:?}) rejected: {err}");
        }
        self
    }

    // -----------------------------------------------------------------------
    // Gestures
    // -----------------------------------------------------------------------

    /// Primary press at `(x, y)`, hit-testing against this frame's handles.
    pub fn press(&mut self, x: f32, y: f32) {
        let handles = self.handles();
        let world = self.app.world_mut();
        world.resource_scope(|world, mut editor: Mut<LineEditor>| {
            editor.press(world.resource::<TransitWorld>(), &handles, Vec2::new(x, y));
        });
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        let world = self.app.world_mut();
        world.resource_scope(|world, mut editor: Mut<LineEditor>| {
            editor.pointer_moved(world.resource::<TransitWorld>(), Vec2::new(x, y));
        });
    }

    pub fn release(&mut self) -> Result<CommitOutcome, TopologyError> {
        let world = self.app.world_mut();
        world.resource_scope(|world, mut editor: Mut<LineEditor>| {
            editor.release(&mut world.resource_mut::<TransitWorld>())
        })
    }

    /// Press at the first point, move through the rest, then release.
    pub fn drag(&mut self, path: &[(f32, f32)]) -> Result<CommitOutcome, TopologyError> {
        if let Some((&(x, y), rest)) = path.split_first() {
            self.press(x, y);
            for &(x, y) in rest {
                self.move_to(x, y);
            }
        }
        self.release()
    }

    pub fn secondary_press(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<LineEditor>()
            .secondary_press();
    }

    pub fn cancel(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<LineEditor>()
            .cancel_gesture();
    }

    // -----------------------------------------------------------------------
    // Frames
    // -----------------------------------------------------------------------

    /// Run `n` frames of the `Update` schedule.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn network(&self) -> &TransitWorld {
        self.app.world().resource::<TransitWorld>()
    }

    pub fn network_mut(&mut self) -> &mut TransitWorld {
        self.app
            .world_mut()
            .resource_mut::<TransitWorld>()
            .into_inner()
    }

    pub fn editor(&self) -> &LineEditor {
        self.app.world().resource::<LineEditor>()
    }

    /// Handles as the draw pass would see them this frame.
    pub fn handles(&self) -> Vec<Handle> {
        let network = self.network();
        build_line_handles(network, &compute_edge_usage(network))
    }

    /// Station ids of a line, as plain strings.
    pub fn line_stations(&self, line: &str) -> Vec<String> {
        self.network()
            .line(&LineId::from(line))
            .map(|l| l.stations.iter().map(|s| s.0.clone()).collect())
            .unwrap_or_default()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_resource_exists<T: Resource>(&self) {
        assert!(
            self.app.world().get_resource::<T>().is_some(),
            "Expected resource {} to exist",
            std::any::type_name::<T>()
        );
    }

    pub fn assert_idle(&self) {
        assert!(
            !self.editor().is_dragging(),
            "Expected idle editor, found {:?}",
            self.editor().mode
        );
    }
}
