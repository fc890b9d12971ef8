//! Playback backends.
//!
//! `RodioPlayback` is the real one: one output stream for the whole process
//! and one sink per effect (see `ClipSlots`), so pressing the same key again restarts that
//! clip while different clips overlap. `SilentPlayback` stands in when no
//! output device can be opened.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, trace, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use super::effect::SoundEffect;
use crate::utils::settings::{clamp_volume, SoundConfig};
use crate::utils::{catch_panic_mut, SoundError};

/// Something that can start a clip from its beginning.
/// Requests are fire-and-forget.
pub trait Playback {
    fn play_from_start(&mut self, effect: SoundEffect);

    fn set_volume(&mut self, volume: f32);

    /// Whether the clip's data is available to play
    fn is_loaded(&self, _effect: SoundEffect) -> bool {
        true
    }
}

impl Playback for Box<dyn Playback> {
    fn play_from_start(&mut self, effect: SoundEffect) {
        (**self).play_from_start(effect)
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume)
    }

    fn is_loaded(&self, effect: SoundEffect) -> bool {
        (**self).is_loaded(effect)
    }
}

/// A clip that is currently sounding
pub trait Voice {
    fn stop(&self);

    fn set_volume(&self, volume: f32);
}

impl Voice for Sink {
    fn stop(&self) {
        Sink::stop(self)
    }

    fn set_volume(&self, volume: f32) {
        Sink::set_volume(self, volume)
    }
}

struct ClipSlot<V> {
    path: PathBuf,
    bytes: Option<Arc<[u8]>>,
    voice: Option<V>,
}

/// Per-effect clip data and the voice of its latest playback.
/// Starting an effect stops that effect's previous voice only.
pub struct ClipSlots<V: Voice> {
    slots: HashMap<SoundEffect, ClipSlot<V>>,
}

impl<V: Voice> ClipSlots<V> {
    pub fn new() -> Self {
        Self { slots: HashMap::new() }
    }

    /// Read all three clips from the configured directory.
    /// Failures leave the slot unloaded and are returned.
    pub fn load(config: &SoundConfig) -> (Self, Vec<SoundError>) {
        let mut clips = Self::new();
        let mut errors = Vec::new();
        for effect in SoundEffect::ALL {
            let path = config.path_for(effect);
            let bytes = match load_clip(effect, &path) {
                Ok(bytes) => {
                    debug!("[Playback] Loaded {} ({} bytes) from {}", effect, bytes.len(), path.display());
                    Some(bytes)
                }
                Err(e) => {
                    warn!("[Playback] {}", e);
                    errors.push(e);
                    None
                }
            };
            clips.insert(effect, path, bytes);
        }
        (clips, errors)
    }

    pub fn insert(&mut self, effect: SoundEffect, path: PathBuf, bytes: Option<Arc<[u8]>>) {
        self.slots.insert(effect, ClipSlot { path, bytes, voice: None });
    }

    /// Start `effect` from the beginning with `start`, replacing and
    /// stopping its previous voice. Unloaded clips never reach `start`.
    /// Returns whether a new voice was started.
    pub fn play<F>(&mut self, effect: SoundEffect, start: F) -> bool
    where
        F: FnOnce(Arc<[u8]>) -> Result<V, SoundError>,
    {
        let slot = match self.slots.get_mut(&effect) {
            Some(slot) => slot,
            None => return false,
        };
        let bytes = match &slot.bytes {
            Some(bytes) => bytes.clone(),
            None => {
                trace!("[Playback] {} not loaded ({}), skipping", effect, slot.path.display());
                return false;
            }
        };

        match start(bytes) {
            Ok(voice) => {
                if let Some(previous) = slot.voice.replace(voice) {
                    previous.stop();
                }
                trace!("[Playback] Started {}", effect);
                true
            }
            Err(e) => {
                warn!("[Playback] {}", e);
                false
            }
        }
    }

    pub fn set_volume(&self, volume: f32) {
        for slot in self.slots.values() {
            if let Some(voice) = &slot.voice {
                voice.set_volume(volume);
            }
        }
    }

    pub fn is_loaded(&self, effect: SoundEffect) -> bool {
        self.slots.get(&effect).map_or(false, |slot| slot.bytes.is_some())
    }
}

pub struct RodioPlayback {
    // Must outlive every sink
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: ClipSlots<Sink>,
    volume: f32,
}

impl RodioPlayback {
    /// Open the default output device and load all three clips.
    /// Clips that fail to load are returned as errors next to the handle;
    /// only a missing output device fails the whole call.
    pub fn open(config: &SoundConfig) -> Result<(Self, Vec<SoundError>), SoundError> {
        let (stream, handle) = catch_panic_mut(OutputStream::try_default)
            .map_err(SoundError::OutputUnavailable)?
            .map_err(|e| SoundError::OutputUnavailable(e.to_string()))?;
        info!("[Playback] Output stream opened");

        let (clips, errors) = ClipSlots::load(config);
        Ok((
            Self {
                _stream: stream,
                handle,
                clips,
                volume: clamp_volume(config.volume),
            },
            errors,
        ))
    }
}

fn start_sink(
    handle: &OutputStreamHandle,
    effect: SoundEffect,
    volume: f32,
    bytes: Arc<[u8]>,
) -> Result<Sink, SoundError> {
    let source = Decoder::new(Cursor::new(bytes)).map_err(|e| SoundError::Decode {
        effect,
        reason: e.to_string(),
    })?;
    let sink = Sink::try_new(handle).map_err(|e| SoundError::OutputUnavailable(e.to_string()))?;
    sink.set_volume(volume);
    sink.append(source);
    Ok(sink)
}

impl Playback for RodioPlayback {
    fn play_from_start(&mut self, effect: SoundEffect) {
        let handle = &self.handle;
        let volume = self.volume;
        self.clips
            .play(effect, |bytes| start_sink(handle, effect, volume, bytes));
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        self.clips.set_volume(self.volume);
    }

    fn is_loaded(&self, effect: SoundEffect) -> bool {
        self.clips.is_loaded(effect)
    }
}

fn load_clip(effect: SoundEffect, path: &Path) -> Result<Arc<[u8]>, SoundError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Arc::from(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SoundError::ClipMissing {
            effect,
            path: path.to_path_buf(),
        }),
        Err(e) => Err(SoundError::ClipUnreadable {
            effect,
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

/// Used when the audio device is unavailable; logs requests and nothing else
#[derive(Debug, Default)]
pub struct SilentPlayback;

impl Playback for SilentPlayback {
    fn play_from_start(&mut self, effect: SoundEffect) {
        debug!("[Playback] No output device, {} not played", effect);
    }

    fn set_volume(&mut self, _volume: f32) {}

    fn is_loaded(&self, _effect: SoundEffect) -> bool {
        false
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_clip() {
        let path = PathBuf::from("definitely/not/here/move.mp3");
        let err = load_clip(SoundEffect::Move, &path).unwrap_err();
        assert_eq!(err, SoundError::ClipMissing { effect: SoundEffect::Move, path });
    }

    #[test]
    fn test_load_existing_clip_bytes() {
        let path = std::env::temp_dir().join(format!("blockfall-sfx-clip-{}.mp3", std::process::id()));
        std::fs::write(&path, b"ID3 fake").unwrap();
        let bytes = load_clip(SoundEffect::Rotate, &path).unwrap();
        assert_eq!(&bytes[..], b"ID3 fake");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_silent_playback_reports_unloaded() {
        let mut silent = SilentPlayback;
        silent.play_from_start(SoundEffect::Move);
        assert!(!silent.is_loaded(SoundEffect::Move));
    }

    #[test]
    fn test_boxed_backend_forwards() {
        let mut boxed: Box<dyn Playback> = Box::new(SilentPlayback);
        boxed.set_volume(0.5);
        assert!(!boxed.is_loaded(SoundEffect::Rotate));
    }

    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeVoice {
        stopped: Rc<Cell<bool>>,
        volume: Rc<Cell<f32>>,
    }

    impl Voice for FakeVoice {
        fn stop(&self) {
            self.stopped.set(true);
        }

        fn set_volume(&self, volume: f32) {
            self.volume.set(volume);
        }
    }

    struct Started {
        stopped: Rc<Cell<bool>>,
        volume: Rc<Cell<f32>>,
        bytes: Arc<[u8]>,
    }

    fn start_fake(log: &mut Vec<Started>) -> impl FnOnce(Arc<[u8]>) -> Result<FakeVoice, SoundError> + '_ {
        move |bytes| {
            let stopped = Rc::new(Cell::new(false));
            let volume = Rc::new(Cell::new(1.0));
            log.push(Started { stopped: stopped.clone(), volume: volume.clone(), bytes });
            Ok(FakeVoice { stopped, volume })
        }
    }

    fn slots() -> ClipSlots<FakeVoice> {
        let mut clips = ClipSlots::new();
        clips.insert(SoundEffect::Move, PathBuf::from("move.mp3"), Some(Arc::from(&b"move"[..])));
        clips.insert(SoundEffect::Rotate, PathBuf::from("rotate.mp3"), Some(Arc::from(&b"rotate"[..])));
        clips.insert(SoundEffect::LineClear, PathBuf::from("line-clear.mp3"), None);
        clips
    }

    #[test]
    fn test_replay_stops_previous_voice() {
        let mut clips = slots();
        let mut started = Vec::new();
        assert!(clips.play(SoundEffect::Move, start_fake(&mut started)));
        assert!(clips.play(SoundEffect::Move, start_fake(&mut started)));

        assert_eq!(started.len(), 2);
        assert!(started[0].stopped.get());
        assert!(!started[1].stopped.get());
        assert_eq!(&started[1].bytes[..], b"move");
    }

    #[test]
    fn test_unloaded_clip_never_starts() {
        let mut clips = slots();
        let mut started = Vec::new();
        assert!(!clips.play(SoundEffect::LineClear, start_fake(&mut started)));
        assert!(started.is_empty());
        assert!(!clips.is_loaded(SoundEffect::LineClear));
        assert!(clips.is_loaded(SoundEffect::Move));
    }

    #[test]
    fn test_effects_keep_separate_voices() {
        let mut clips = slots();
        let mut started = Vec::new();
        clips.play(SoundEffect::Move, start_fake(&mut started));
        clips.play(SoundEffect::Rotate, start_fake(&mut started));

        assert_eq!(started.len(), 2);
        assert!(!started[0].stopped.get());
        assert!(!started[1].stopped.get());
        assert_eq!(&started[1].bytes[..], b"rotate");
    }

    #[test]
    fn test_failed_start_keeps_previous_voice() {
        let mut clips = slots();
        let mut started = Vec::new();
        clips.play(SoundEffect::Move, start_fake(&mut started));
        let played = clips.play(SoundEffect::Move, |_| {
            Err(SoundError::Decode { effect: SoundEffect::Move, reason: "bad frame".into() })
        });
        assert!(!played);
        assert!(!started[0].stopped.get());
    }

    #[test]
    fn test_volume_reaches_live_voices() {
        let mut clips = slots();
        let mut started = Vec::new();
        clips.play(SoundEffect::Rotate, start_fake(&mut started));
        clips.set_volume(0.4);
        assert_eq!(started[0].volume.get(), 0.4);
    }

    #[test]
    fn test_load_reports_missing_clips() {
        let config = SoundConfig {
            assets_dir: PathBuf::from("definitely/not/here"),
            ..Default::default()
        };
        let (clips, errors) = ClipSlots::<FakeVoice>::load(&config);
        assert_eq!(errors.len(), 3);
        assert!(SoundEffect::ALL.iter().all(|e| !clips.is_loaded(*e)));
    }
}
