use log::{info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::{FRIENDLY_FIRE_VOLUME, HIT_VOLUME, HOSTILE_FIRE_VOLUME, MUSIC_VOLUME, Settings};
use crate::game::SoundCue;

const FRIENDLY_FIRE_FILE: &str = "friendly_fire.mp3";
const HOSTILE_FIRE_FILE: &str = "enemy_fire.mp3";
const HIT_FILE: &str = "explosion.mp3";
const MUSIC_FILE: &str = "Space_Oddity.mp3";

type Sound = Buffered<Decoder<BufReader<File>>>;

/// Fire-and-forget sound effects plus the looping background track.
/// Anything that fails to load is skipped; playback never fails the game.
pub struct AudioManager {
    _stream: Option<OutputStream>,
    stream_handle: Option<OutputStreamHandle>,
    friendly_fire: Option<Sound>,
    hostile_fire: Option<Sound>,
    hit: Option<Sound>,
    /// Kept alive for as long as the music should play
    _music: Option<Sink>,
}

impl AudioManager {
    /// Opens the default output device and pre-loads every sound in `assets`
    pub fn new(assets: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let (stream, stream_handle) = OutputStream::try_default()?;

        let friendly_fire = load_sound(&assets.join(FRIENDLY_FIRE_FILE));
        let hostile_fire = load_sound(&assets.join(HOSTILE_FIRE_FILE));
        let hit = load_sound(&assets.join(HIT_FILE));
        let music = start_music(&stream_handle, &assets.join(MUSIC_FILE));

        info!("audio initialised from {}", assets.display());
        Ok(Self {
            _stream: Some(stream),
            stream_handle: Some(stream_handle),
            friendly_fire,
            hostile_fire,
            hit,
            _music: music,
        })
    }

    /// Manager that plays nothing
    pub fn silent() -> Self {
        Self {
            _stream: None,
            stream_handle: None,
            friendly_fire: None,
            hostile_fire: None,
            hit: None,
            _music: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        if settings.mute {
            return Self::silent();
        }
        Self::new(&settings.assets).unwrap_or_else(|err| {
            warn!("failed to initialise audio: {err}; continuing without sound");
            Self::silent()
        })
    }

    pub fn play(&self, cue: SoundCue) {
        let (sound, volume) = match cue {
            SoundCue::FriendlyFire => (&self.friendly_fire, FRIENDLY_FIRE_VOLUME),
            SoundCue::HostileFire => (&self.hostile_fire, HOSTILE_FIRE_VOLUME),
            SoundCue::Hit => (&self.hit, HIT_VOLUME),
        };
        if let (Some(sound), Some(handle)) = (sound, &self.stream_handle) {
            // Playback errors are not worth interrupting the game for
            if let Ok(sink) = Sink::try_new(handle) {
                sink.set_volume(volume);
                sink.append(sound.clone());
                sink.detach();
            }
        }
    }
}

fn load_sound(path: &Path) -> Option<Sound> {
    let decoded = File::open(path)
        .map_err(|err| err.to_string())
        .and_then(|file| Decoder::new(BufReader::new(file)).map_err(|err| err.to_string()));
    match decoded {
        Ok(source) => Some(source.buffered()),
        Err(err) => {
            warn!("skipping sound {}: {err}", path.display());
            None
        }
    }
}

fn start_music(handle: &OutputStreamHandle, path: &Path) -> Option<Sink> {
    let source = load_sound(path)?;
    match Sink::try_new(handle) {
        Ok(sink) => {
            sink.set_volume(MUSIC_VOLUME);
            sink.append(source.repeat_infinite());
            Some(sink)
        }
        Err(err) => {
            warn!("could not start background music: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_manager_ignores_cues() {
        let audio = AudioManager::silent();
        audio.play(SoundCue::FriendlyFire);
        audio.play(SoundCue::HostileFire);
        audio.play(SoundCue::Hit);
    }

    #[test]
    fn test_muted_settings_give_silent_manager() {
        let settings = Settings {
            mute: true,
            ..Settings::default()
        };
        let audio = AudioManager::from_settings(&settings);
        assert!(audio.stream_handle.is_none());
    }

    #[test]
    fn test_missing_sound_is_skipped() {
        assert!(load_sound(Path::new("no/such/dir/explosion.mp3")).is_none());
    }
}
