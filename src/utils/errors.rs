use std::fmt;
use std::path::PathBuf;

use crate::sfx::SoundEffect;

/// Everything that can go wrong between the config file and the speakers
#[derive(Debug, Clone, PartialEq)]
pub enum SoundError {
    /// No default output device, or the device refused to open a stream
    OutputUnavailable(String),
    ClipMissing { effect: SoundEffect, path: PathBuf },
    ClipUnreadable { effect: SoundEffect, path: PathBuf, reason: String },
    /// Bytes were loaded but rodio could not decode them
    Decode { effect: SoundEffect, reason: String },
    Config(String),
}

impl fmt::Display for SoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundError::OutputUnavailable(reason) => {
                write!(f, "Audio output unavailable: {}", reason)
            }
            SoundError::ClipMissing { effect, path } => {
                write!(f, "{} sound not found at {}", effect, path.display())
            }
            SoundError::ClipUnreadable { effect, path, reason } => {
                write!(f, "Failed to read {} sound at {}: {}", effect, path.display(), reason)
            }
            SoundError::Decode { effect, reason } => {
                write!(f, "Failed to decode {} sound: {}", effect, reason)
            }
            SoundError::Config(reason) => write!(f, "Settings error: {}", reason),
        }
    }
}

impl std::error::Error for SoundError {}

impl From<serde_json::Error> for SoundError {
    fn from(e: serde_json::Error) -> Self {
        SoundError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_clip_message_names_path() {
        let err = SoundError::ClipMissing {
            effect: SoundEffect::Rotate,
            path: PathBuf::from("assets/sounds/rotate.mp3"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Rotate"));
        assert!(msg.contains("rotate.mp3"));
    }

    #[test]
    fn test_json_error_converts_to_config() {
        let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(SoundError::from(e), SoundError::Config(_)));
    }
}
