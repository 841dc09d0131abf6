// client/src/sound.rs
// SoundManager for playing UI cues
#[cfg(feature = "audio")]
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
#[cfg(feature = "audio")]
use std::collections::HashMap;
#[cfg(feature = "audio")]
use std::path::PathBuf;

#[cfg(feature = "audio")]
use crate::prefs;

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum SoundType {
    /// Focus or selection movement over buttons / menu items.
    Hover,
    /// Form submit, modal confirm/cancel, clear-log.
    Click,
    /// Theme change, context-menu open.
    Dropdown,
    /// Local validation failure.
    Error,
}

#[cfg(feature = "audio")]
pub struct SoundManager {
    _stream: Option<OutputStream>,
    stream_handle: Option<OutputStreamHandle>,
    sounds: HashMap<SoundType, Vec<u8>>, // Store sound data in memory
}

#[cfg(feature = "audio")]
impl SoundManager {
    pub fn new() -> Self {
        // No audio device is not an error: the whole player is best-effort.
        let (stream, stream_handle) = match OutputStream::try_default() {
            Ok((stream, handle)) => (Some(stream), Some(handle)),
            Err(e) => {
                tracing::debug!("audio output unavailable: {}", e);
                (None, None)
            }
        };
        let base_path = env!("CARGO_MANIFEST_DIR");
        let mut sounds = HashMap::new();
        for (sound, file) in [
            (SoundType::Hover, "sounds/hover.mp3"),
            (SoundType::Click, "sounds/click.mp3"),
            (SoundType::Dropdown, "sounds/dropdown.mp3"),
            (SoundType::Error, "sounds/error.mp3"),
        ] {
            let path = PathBuf::from(base_path).join(file);
            sounds.insert(sound, std::fs::read(path).unwrap_or_default());
        }
        Self { _stream: stream, stream_handle, sounds }
    }

    /// Play a cue from the start. Any failure is logged and swallowed; a cue
    /// must never interrupt the action that triggered it.
    pub fn play(&self, sound: SoundType) {
        if prefs::is_initialized() && !prefs::global_prefs().sound_effects_enabled {
            return;
        }
        let Some(handle) = &self.stream_handle else { return };
        if let Some(data) = self.sounds.get(&sound) {
            if !data.is_empty() {
                let cursor = std::io::Cursor::new(data.clone());
                match Decoder::new(cursor) {
                    Ok(decoder) => {
                        if let Ok(sink) = Sink::try_new(handle) {
                            sink.append(decoder);
                            sink.detach(); // Play in background
                        }
                    }
                    Err(e) => tracing::debug!("sound decode failed for {:?}: {}", sound, e),
                }
            }
        }
    }
}

#[cfg(not(feature = "audio"))]
pub struct SoundManager;

#[cfg(not(feature = "audio"))]
impl SoundManager {
    pub fn new() -> Self {
        Self
    }

    pub fn play(&self, _sound: SoundType) {}
}
