use bevy_egui::{egui, EguiContexts};

/// Dark translucent panels that sit over the map without hiding it.
pub fn apply_editor_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgba_unmultiplied(30, 30, 40, 230);
    let text = egui::Color32::from_rgb(230, 230, 235);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.window_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(70, 70, 90));
    style.visuals.override_text_color = Some(text);
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);

    ctx.set_style(style);
}
