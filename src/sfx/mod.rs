pub mod bank;
pub mod effect;
pub mod input;
pub mod playback;

pub use bank::SoundBank;
pub use effect::SoundEffect;
pub use input::{effect_for_key, key_presses, GameKey};
pub use playback::{Playback, RodioPlayback, SilentPlayback};
