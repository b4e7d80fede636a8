//! Theme configuration for egui.
//!
//! Dark theme sized for the small fixed game window.

use egui::{Color32, Stroke, Visuals};

/// Apply the dark theme to egui context.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let bg_color = Color32::from_rgb(30, 30, 46);
    let panel_color = Color32::from_rgb(36, 36, 54);
    let widget_color = Color32::from_rgb(45, 45, 68);
    let text_color = Color32::from_rgb(224, 224, 224);

    style.visuals = Visuals::dark();

    // Panel colors
    style.visuals.panel_fill = panel_color;
    style.visuals.window_fill = bg_color;

    // Widget colors
    style.visuals.widgets.inactive.bg_fill = widget_color;
    style.visuals.widgets.inactive.weak_bg_fill = widget_color;
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(60, 60, 90);
    style.visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(60, 60, 90);
    style.visuals.widgets.active.bg_fill = accent_color();
    style.visuals.widgets.active.weak_bg_fill = accent_color();

    // Text colors
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    // Rounding
    style.visuals.window_rounding = 8.0.into();
    style.visuals.widgets.inactive.rounding = 6.0.into();
    style.visuals.widgets.hovered.rounding = 6.0.into();
    style.visuals.widgets.active.rounding = 6.0.into();

    // Spacing
    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(4.0, 4.0);

    ctx.set_style(style);
}

/// Color of the click counter.
pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 181, 246)
}

/// Color of the welcome back message.
pub fn success_color() -> Color32 {
    Color32::from_rgb(129, 199, 132)
}

/// Color of the hover hint.
pub fn hint_color() -> Color32 {
    Color32::from_rgb(241, 250, 140)
}

/// Get the warning color.
pub fn warning_color() -> Color32 {
    Color32::from_rgb(255, 183, 77)
}
