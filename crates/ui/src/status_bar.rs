use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::input::StatusMessage;
use simulation::transit::TransitWorld;

const HINT: &str = "Drag across stations to draw a line. Drag a flag to extend, a dot to insert.";

/// Top bar: network counts plus the current notice, errors in red.
pub fn status_bar_ui(
    mut contexts: EguiContexts,
    network: Res<TransitWorld>,
    status: Res<StatusMessage>,
) {
    egui::TopBottomPanel::top("status_bar")
        .exact_height(28.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;
                ui.label(format!("Stations: {}", network.stations.len()));
                ui.separator();
                ui.label(format!("Lines: {}", network.lines.len()));
                ui.separator();
                ui.label(format!(
                    "Waiting: {}",
                    network.waiting_passengers().count()
                ));
                ui.separator();

                if status.active() {
                    let color = if status.is_error {
                        egui::Color32::from_rgb(230, 80, 80)
                    } else {
                        egui::Color32::from_rgb(120, 210, 140)
                    };
                    ui.colored_label(color, status.text.as_str());
                } else {
                    ui.weak(HINT);
                }
            });
        });
}
