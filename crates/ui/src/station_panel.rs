use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::line_editor::LineEditor;
use simulation::transit::{Station, TransitWorld};

/// Text shown for a selected station, one entry per row.
pub fn station_panel_lines(station: &Station) -> [String; 3] {
    [
        format!("Station {}", station.id),
        format!("Type: {}", station.kind.label()),
        format!("Passengers: {}/{}", station.waiting, station.capacity),
    ]
}

/// Bottom-left info panel for the selected station.
pub fn station_panel_ui(
    mut contexts: EguiContexts,
    network: Res<TransitWorld>,
    editor: Res<LineEditor>,
) {
    let Some(station) = editor
        .selected_station
        .as_ref()
        .and_then(|id| network.station(id))
    else {
        return;
    };
    let [title, kind, passengers] = station_panel_lines(station);

    egui::Window::new("Station Info")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.label(egui::RichText::new(title).strong());
            ui.label(kind);
            ui.label(passengers);
        });
}
