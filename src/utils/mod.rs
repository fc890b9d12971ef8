pub mod errors;
pub mod notification;
pub mod panic_handler;
pub mod settings;
pub mod theme;

pub use errors::SoundError;
pub use notification::NotificationManager;
pub use panic_handler::catch_panic_mut;
pub use settings::SoundConfig;
pub use theme::{apply_game_theme, hud_frame};
