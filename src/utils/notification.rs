//! On-screen notices for clip and device problems.
//!
//! Missing clips show as warnings that fade out; a missing output device is
//! an error that stays until dismissed.

use eframe::egui::{self, Color32, Rect, Vec2};
use std::time::{Duration, Instant};

use super::errors::SoundError;

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationKind {
    Info,
    Warning,
    /// Sticky, has a close button
    Error,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub duration: Duration,
    pub sticky: bool,
    pub dismissed: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        let duration = match kind {
            NotificationKind::Error => Duration::from_secs(10),
            NotificationKind::Warning => Duration::from_secs(6),
            NotificationKind::Info => Duration::from_secs(3),
        };
        let sticky = kind == NotificationKind::Error;

        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration,
            sticky,
            dismissed: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        !self.sticky && self.created_at.elapsed() > self.duration
    }

    /// Fade in over 0.15s, out over the last 0.4s
    pub fn opacity(&self) -> f32 {
        if self.sticky {
            return 1.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f32();
        let total = self.duration.as_secs_f32();
        if elapsed < 0.15 {
            elapsed / 0.15
        } else if elapsed > total - 0.4 {
            ((total - elapsed) / 0.4).max(0.0)
        } else {
            1.0
        }
    }
}

#[derive(Default)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    #[allow(dead_code)]
    pub fn info(&mut self, message: impl Into<String>) {
        self.show(Notification::new(message, NotificationKind::Info));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(Notification::new(message, NotificationKind::Warning));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(Notification::new(message, NotificationKind::Error));
    }

    /// Device failures are errors, clip failures warnings
    pub fn report(&mut self, err: &SoundError) {
        match err {
            SoundError::OutputUnavailable(_) => self.error(err.to_string()),
            _ => self.warning(err.to_string()),
        }
    }

    pub fn has_notifications(&self) -> bool {
        self.notifications.iter().any(|n| !n.is_expired() && !n.dismissed)
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.notifications.retain(|n| !n.is_expired() && !n.dismissed);
        if self.notifications.is_empty() {
            return;
        }

        let screen_rect = ctx.viewport_rect();
        let margin = 16.0;
        let spacing = 8.0;
        let width = 420.0;
        let height = 56.0;
        let mut y_offset = screen_rect.max.y - margin;

        egui::Area::new(egui::Id::new("notifications"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(0.0, 0.0))
            .show(ctx, |ui| {
                for notification in &mut self.notifications {
                    y_offset -= height;
                    let rect = Rect::from_min_size(
                        egui::pos2(screen_rect.max.x - width - margin, y_offset),
                        Vec2::new(width, height),
                    );
                    y_offset -= spacing;

                    let (icon, tint) = match notification.kind {
                        NotificationKind::Info => ("ℹ", Color32::from_rgb(150, 200, 255)),
                        NotificationKind::Warning => ("⚠", Color32::from_rgb(255, 220, 100)),
                        NotificationKind::Error => ("⚠", Color32::from_rgb(255, 150, 150)),
                    };

                    let alpha = (notification.opacity() * 235.0) as u8;
                    let fill = Color32::from_rgba_unmultiplied(30, 30, 44, alpha);
                    let stroke = ui.style().visuals.window_stroke();
                    ui.painter().rect_filled(rect, 8.0, fill);
                    ui.painter().rect_stroke(rect, 8.0, stroke, egui::StrokeKind::Outside);

                    let mut inner = ui.new_child(
                        egui::UiBuilder::new()
                            .max_rect(rect.shrink2(Vec2::new(12.0, 8.0)))
                            .layout(egui::Layout::left_to_right(egui::Align::Center)),
                    );
                    inner.label(
                        egui::RichText::new(format!("{} {}", icon, notification.message))
                            .size(14.0)
                            .color(tint),
                    );
                    if notification.sticky {
                        inner.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui_r| {
                            if ui_r.small_button("✕").clicked() {
                                notification.dismissed = true;
                            }
                        });
                    }
                }
            });

        ctx.request_repaint();
    }
}
