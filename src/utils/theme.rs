// theme.rs - Dark theme for the game window
use eframe::egui::{
    self, Color32, Context, CornerRadius, FontFamily, FontId, Margin, Stroke, Visuals,
};

pub fn apply_game_theme(ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = Visuals::dark();

    style.visuals.window_fill = Color32::from_rgb(14, 14, 22);
    style.visuals.panel_fill = Color32::from_rgb(14, 14, 22);
    style.visuals.extreme_bg_color = Color32::from_rgb(8, 8, 12);

    style.visuals.window_corner_radius = CornerRadius::same(8);
    style.visuals.widgets.inactive.corner_radius = CornerRadius::same(4);
    style.visuals.widgets.hovered.corner_radius = CornerRadius::same(4);
    style.visuals.widgets.active.corner_radius = CornerRadius::same(4);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = Margin::same(8);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    style.override_font_id = Some(FontId::new(15.0, FontFamily::Proportional));

    ctx.set_style(style);
}

/// Frame for the bindings / status panel
pub fn hud_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(Color32::from_rgb(22, 22, 34))
        .corner_radius(CornerRadius::same(6))
        .stroke(Stroke::new(1.0, Color32::from_rgb(50, 50, 70)))
        .inner_margin(Margin::symmetric(14, 10))
}
