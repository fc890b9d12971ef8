use eframe::egui;

use crate::utils::SoundConfig;

/// What the overlay did this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SettingsOutcome {
    /// Volume moved; apply it to the backend now
    pub volume_changed: bool,
    /// Edit finished; write settings to disk
    pub commit: bool,
}

/// A slider edit is finished once the drag ends, or immediately when the
/// value changed without dragging (keyboard, click on the track).
pub fn should_commit(changed: bool, dragged: bool, drag_stopped: bool) -> bool {
    drag_stopped || (changed && !dragged)
}

/// Sound settings window
pub fn settings_overlay(
    ctx: &egui::Context,
    show_settings: &mut bool,
    config: &mut SoundConfig,
) -> SettingsOutcome {
    let mut outcome = SettingsOutcome::default();
    if !*show_settings {
        return outcome;
    }

    egui::Window::new("Settings")
        .open(show_settings)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 50.0))
        .resizable(false)
        .collapsible(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Sound");
            ui.separator();

            let response = ui.add(egui::Slider::new(&mut config.volume, 0.0..=1.0).text("Volume"));
            outcome.volume_changed = response.changed();
            outcome.commit = should_commit(response.changed(), response.dragged(), response.drag_stopped());

            ui.add_space(10.0);
            ui.label("Assets:");
            ui.monospace(config.effective_assets_dir().display().to_string());
        });

    outcome
}
