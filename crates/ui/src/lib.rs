use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::NetworkSet;

pub mod station_panel;
pub mod status_bar;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_editor_theme)
            .add_systems(
                Update,
                (status_bar::status_bar_ui, station_panel::station_panel_ui)
                    .in_set(NetworkSet::Draw),
            );
    }
}
