//! Game configuration loaded from `assets/config/game.json`.
//!
//! Everything here is tuning data, not code: window size, the lane-center
//! table, vehicle handling numbers and mixer volumes. A missing or broken
//! config file falls back to the built-in defaults so the game still boots.

use log::warn;
use serde::{Deserialize, Serialize};

/// Vehicle handling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTuning {
    /// Forward acceleration in px/s^2 while not braking
    pub acceleration: f32,
    /// Deceleration in px/s^2 while the brake is held
    pub braking: f32,
    /// Per-second speed retention factor, applied as `drag.powf(dt)`
    pub drag: f32,
    pub min_speed: f32,
    /// Starting max speed; rises during a session up to the absolute cap
    pub max_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        PlayerTuning {
            acceleration: 140.0,
            braking: 420.0,
            drag: 0.9,
            min_speed: 0.0,
            max_speed: 900.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Vertical centers of the driving lanes, top to bottom.
    ///
    /// May be empty in a hand-edited config; the session reset substitutes
    /// three evenly divided lanes in that case instead of refusing to start.
    pub lane_centers: Vec<f32>,
    /// Fixed horizontal center of the player vehicle
    pub player_x: f32,
    pub player: PlayerTuning,
    /// Mixer volumes, 0..=128
    pub music_volume: i32,
    pub effects_volume: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 1280,
            window_height: 720,
            lane_centers: vec![300.0, 450.0, 600.0],
            player_x: 160.0,
            player: PlayerTuning::default(),
            music_volume: 96,
            effects_volume: 112,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config, falling back to defaults if the file is missing or
    /// unreadable. The fallback is logged, never fatal.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("could not load {path} ({e}); using built-in defaults");
                GameConfig::default()
            }
        }
    }

    /// Three evenly divided lanes across the window height, used when the
    /// configured lane table is empty.
    pub fn fallback_lanes(window_height: u32) -> Vec<f32> {
        let h = window_height as f32;
        (0..3).map(|i| h * (2.0 * i as f32 + 1.0) / 6.0).collect()
    }
}
