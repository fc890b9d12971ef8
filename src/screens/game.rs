use eframe::egui;

use crate::sfx::{key_presses, GameKey, Playback, RodioPlayback, SilentPlayback, SoundBank, SoundEffect};
use crate::ui_components::settings_menu::{self, SettingsOutcome};
use crate::utils::{apply_game_theme, hud_frame, NotificationManager, SoundConfig};

const BINDINGS: [(&str, GameKey); 3] = [
    ("← Left", GameKey::Left),
    ("→ Right", GameKey::Right),
    ("↑ Up", GameKey::Up),
];

pub struct GameApp {
    bank: SoundBank<Box<dyn Playback>>,
    config: SoundConfig,
    show_settings: bool,
    notifications: NotificationManager,
}

impl GameApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SoundConfig) -> Self {
        log::info!("Initializing GameApp...");
        apply_game_theme(&cc.egui_ctx);

        let mut notifications = NotificationManager::new();
        let backend: Box<dyn Playback> = match RodioPlayback::open(&config) {
            Ok((playback, clip_errors)) => {
                for err in &clip_errors {
                    notifications.report(err);
                }
                log::info!(
                    "[GameApp] Audio ready, {}/{} clips loaded",
                    SoundEffect::ALL.len() - clip_errors.len(),
                    SoundEffect::ALL.len()
                );
                Box::new(playback)
            }
            Err(err) => {
                log::error!("[GameApp] {}", err);
                notifications.report(&err);
                Box::new(SilentPlayback)
            }
        };

        Self {
            bank: SoundBank::new(backend),
            config,
            show_settings: false,
            notifications,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::F1)) {
            self.show_settings = !self.show_settings;
        }

        for key in ctx.input(key_presses) {
            self.bank.handle_key(key);
        }
    }

    fn apply_settings(&mut self, outcome: SettingsOutcome) {
        if outcome.volume_changed {
            self.bank.backend_mut().set_volume(self.config.volume);
        }
        if outcome.commit {
            if let Err(e) = self.config.save() {
                log::warn!("[GameApp] {}", e);
                self.notifications.warning(e.to_string());
            }
        }
    }

    fn render_hud(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Blockfall SFX");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙ Settings").clicked() {
                    self.show_settings = !self.show_settings;
                }
            });
        });
        ui.add_space(8.0);

        hud_frame().show(ui, |ui| {
            egui::Grid::new("bindings")
                .num_columns(3)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Key");
                    ui.strong("Sound");
                    ui.strong("Clip");
                    ui.end_row();

                    for (label, key) in BINDINGS {
                        ui.monospace(label);
                        match crate::sfx::effect_for_key(key) {
                            Some(effect) => {
                                ui.label(effect.label());
                                self.clip_status(ui, effect);
                            }
                            None => {
                                ui.label("-");
                                ui.label("");
                            }
                        }
                        ui.end_row();
                    }

                    ui.weak("(game logic)");
                    ui.label(SoundEffect::LineClear.label());
                    self.clip_status(ui, SoundEffect::LineClear);
                    ui.end_row();
                });
        });

        ui.add_space(12.0);
        let last = self
            .bank
            .last_played()
            .map_or_else(|| "nothing yet".to_string(), |e| e.to_string());
        ui.label(format!("Last sound: {}", last));
    }

    fn clip_status(&self, ui: &mut egui::Ui, effect: SoundEffect) {
        if self.bank.backend().is_loaded(effect) {
            ui.colored_label(egui::Color32::from_rgb(150, 255, 150), "✓ loaded");
        } else {
            ui.colored_label(egui::Color32::from_rgb(255, 150, 150), "✕ unavailable")
                .on_hover_text(self.config.path_for(effect).display().to_string());
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_hud(ui);
        });

        let outcome = settings_menu::settings_overlay(ctx, &mut self.show_settings, &mut self.config);
        self.apply_settings(outcome);

        if self.notifications.has_notifications() {
            self.notifications.render(ctx);
        }
    }
}
