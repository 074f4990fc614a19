//! Audio playback behind a trait seam.
//!
//! The simulation only ever talks to `AudioOutput`, so state-machine tests
//! can swap in a recording stub; `MixerAudio` is the production SDL2_mixer
//! implementation.

use std::collections::HashMap;

use log::warn;
use sdl2::mixer::{Channel, Chunk, Music};

use crate::assets::{MusicId, SoundId};

/// Everything the simulation needs from the audio backend.
pub trait AudioOutput {
    /// Starts a music track; `loops` of -1 repeats forever.
    fn play_music(&mut self, id: MusicId, loops: i32);
    fn stop_music(&mut self);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
    fn music_playing(&self) -> bool;
    /// Fires a one-shot effect on any free channel.
    fn play_effect(&mut self, id: SoundId);
    /// Volume range is 0..=128 (`sdl2::mixer::MAX_VOLUME`).
    fn set_music_volume(&mut self, volume: i32);
    fn set_effects_volume(&mut self, volume: i32);
}

/// SDL2_mixer-backed audio. Tracks and chunks are loaded once, up front.
pub struct MixerAudio {
    music: HashMap<MusicId, Music<'static>>,
    chunks: HashMap<SoundId, Chunk>,
}

impl MixerAudio {
    pub fn new() -> Self {
        MixerAudio {
            music: HashMap::new(),
            chunks: HashMap::new(),
        }
    }

    /// Loads one music track; re-loading a present id is a success no-op.
    pub fn load_music(&mut self, id: MusicId) -> Result<(), String> {
        if self.music.contains_key(&id) {
            return Ok(());
        }
        let music = Music::from_file(id.path())
            .map_err(|e| format!("failed to load {}: {}", id.path(), e))?;
        self.music.insert(id, music);
        Ok(())
    }

    /// Loads one effect chunk; re-loading a present id is a success no-op.
    pub fn load_effect(&mut self, id: SoundId) -> Result<(), String> {
        if self.chunks.contains_key(&id) {
            return Ok(());
        }
        let chunk = Chunk::from_file(id.path())
            .map_err(|e| format!("failed to load {}: {}", id.path(), e))?;
        self.chunks.insert(id, chunk);
        Ok(())
    }
}

impl AudioOutput for MixerAudio {
    fn play_music(&mut self, id: MusicId, loops: i32) {
        match self.music.get(&id) {
            Some(music) => {
                if let Err(e) = music.play(loops) {
                    warn!("music {id:?} failed to start: {e}");
                }
            }
            None => warn!("music {id:?} was never loaded; staying silent"),
        }
    }

    fn stop_music(&mut self) {
        Music::halt();
    }

    fn pause_music(&mut self) {
        Music::pause();
    }

    fn resume_music(&mut self) {
        Music::resume();
    }

    fn music_playing(&self) -> bool {
        Music::is_playing()
    }

    fn play_effect(&mut self, id: SoundId) {
        match self.chunks.get(&id) {
            Some(chunk) => {
                if let Err(e) = Channel::all().play(chunk, 0) {
                    warn!("effect {id:?} failed to play: {e}");
                }
            }
            None => warn!("effect {id:?} was never loaded; staying silent"),
        }
    }

    fn set_music_volume(&mut self, volume: i32) {
        Music::set_volume(volume.clamp(0, sdl2::mixer::MAX_VOLUME));
    }

    fn set_effects_volume(&mut self, volume: i32) {
        Channel::all().set_volume(volume.clamp(0, sdl2::mixer::MAX_VOLUME));
    }
}
