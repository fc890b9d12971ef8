//! Keyboard side of the sound dispatch.
//!
//! Only the arrow keys are meaningful here; left/right move the piece and up
//! rotates it. Everything else collapses into `GameKey::Other`.

use eframe::egui;

use super::effect::SoundEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Up,
    Other,
}

impl GameKey {
    pub fn from_egui(key: egui::Key) -> Self {
        match key {
            egui::Key::ArrowLeft => GameKey::Left,
            egui::Key::ArrowRight => GameKey::Right,
            egui::Key::ArrowUp => GameKey::Up,
            _ => GameKey::Other,
        }
    }

    /// Map a browser-style key name ("ArrowLeft", ...). Case-sensitive.
    #[allow(dead_code)]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => GameKey::Left,
            "ArrowRight" => GameKey::Right,
            "ArrowUp" => GameKey::Up,
            _ => GameKey::Other,
        }
    }
}

/// Which clip a key press should trigger, if any
pub fn effect_for_key(key: GameKey) -> Option<SoundEffect> {
    match key {
        GameKey::Left | GameKey::Right => Some(SoundEffect::Move),
        GameKey::Up => Some(SoundEffect::Rotate),
        GameKey::Other => None,
    }
}

/// Key presses from this frame, in arrival order.
/// Auto-repeat presses are kept; releases are dropped.
pub fn key_presses(input: &egui::InputState) -> Vec<GameKey> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key { key, pressed: true, .. } => Some(GameKey::from_egui(*key)),
            _ => None,
        })
        .collect()
}
