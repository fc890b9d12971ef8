use super::effect::SoundEffect;
use super::input::{effect_for_key, GameKey};
use super::playback::Playback;

/// The three game sounds behind one playback backend.
///
/// `handle_key` is the keydown listener. `play_line_clear` has no key
/// binding; game logic calls it when rows are removed.
pub struct SoundBank<P: Playback> {
    backend: P,
    last_played: Option<SoundEffect>,
}

impl<P: Playback> SoundBank<P> {
    pub fn new(backend: P) -> Self {
        Self {
            backend,
            last_played: None,
        }
    }

    pub fn play(&mut self, effect: SoundEffect) {
        self.backend.play_from_start(effect);
        self.last_played = Some(effect);
    }

    pub fn play_move(&mut self) {
        self.play(SoundEffect::Move);
    }

    pub fn play_rotate(&mut self) {
        self.play(SoundEffect::Rotate);
    }

    pub fn play_line_clear(&mut self) {
        self.play(SoundEffect::LineClear);
    }

    /// Play whatever the key is bound to. Returns the requested effect.
    pub fn handle_key(&mut self, key: GameKey) -> Option<SoundEffect> {
        let effect = effect_for_key(key)?;
        log::trace!("[SoundBank] {:?} -> {}", key, effect);
        match effect {
            SoundEffect::Move => self.play_move(),
            SoundEffect::Rotate => self.play_rotate(),
            SoundEffect::LineClear => self.play_line_clear(),
        }
        Some(effect)
    }

    pub fn last_played(&self) -> Option<SoundEffect> {
        self.last_played
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut P {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sfx::playback::test_support::RecordingPlayback;

    fn bank() -> SoundBank<RecordingPlayback> {
        SoundBank::new(RecordingPlayback::default())
    }

    #[test]
    fn test_left_plays_move_once() {
        let mut bank = bank();
        assert_eq!(bank.handle_key(GameKey::Left), Some(SoundEffect::Move));
        assert_eq!(bank.backend().requests, vec![SoundEffect::Move]);
    }

    #[test]
    fn test_right_plays_move_once() {
        let mut bank = bank();
        assert_eq!(bank.handle_key(GameKey::Right), Some(SoundEffect::Move));
        assert_eq!(bank.backend().requests, vec![SoundEffect::Move]);
    }

    #[test]
    fn test_up_plays_rotate_once() {
        let mut bank = bank();
        assert_eq!(bank.handle_key(GameKey::Up), Some(SoundEffect::Rotate));
        assert_eq!(bank.backend().requests, vec![SoundEffect::Rotate]);
    }

    #[test]
    fn test_other_key_plays_nothing() {
        let mut bank = bank();
        assert_eq!(bank.handle_key(GameKey::Other), None);
        assert!(bank.backend().requests.is_empty());
        assert_eq!(bank.last_played(), None);
    }

    #[test]
    fn test_keys_never_trigger_line_clear() {
        let mut bank = bank();
        for key in [GameKey::Left, GameKey::Right, GameKey::Up, GameKey::Other] {
            bank.handle_key(key);
        }
        assert_eq!(bank.backend().count(SoundEffect::LineClear), 0);
        assert_eq!(bank.backend().requests.len(), 3);
    }

    #[test]
    fn test_repeated_presses_not_debounced() {
        let mut bank = bank();
        for _ in 0..5 {
            bank.handle_key(GameKey::Left);
        }
        assert_eq!(bank.backend().count(SoundEffect::Move), 5);
    }

    #[test]
    fn test_line_clear_only_from_direct_call() {
        let mut bank = bank();
        bank.play_line_clear();
        assert_eq!(bank.backend().requests, vec![SoundEffect::LineClear]);
        assert_eq!(bank.last_played(), Some(SoundEffect::LineClear));
    }

    #[test]
    fn test_last_played_tracks_latest() {
        let mut bank = bank();
        bank.handle_key(GameKey::Left);
        bank.handle_key(GameKey::Up);
        bank.handle_key(GameKey::Other);
        assert_eq!(bank.last_played(), Some(SoundEffect::Rotate));
    }
}
