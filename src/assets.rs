//! Asset identifiers and the texture registry.
//!
//! All drawable and audible assets are keyed by closed enums resolved once
//! at load time. Nothing in the simulation looks assets up by string, so a
//! typo'd path can only fail at startup, never mid-session.

use std::collections::HashMap;

use sdl2::image::LoadTexture;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::collision::Collider;

/// Every texture the game can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    PlayerCar,
    Sedan,
    Van,
    Truck,
    Road,
    MenuBackdrop,
    HudPanel,
}

impl TextureId {
    pub const ALL: [TextureId; 7] = [
        TextureId::PlayerCar,
        TextureId::Sedan,
        TextureId::Van,
        TextureId::Truck,
        TextureId::Road,
        TextureId::MenuBackdrop,
        TextureId::HudPanel,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            TextureId::PlayerCar => "assets/sprites/player_car.png",
            TextureId::Sedan => "assets/sprites/sedan.png",
            TextureId::Van => "assets/sprites/van.png",
            TextureId::Truck => "assets/sprites/truck.png",
            TextureId::Road => "assets/backgrounds/road.png",
            TextureId::MenuBackdrop => "assets/backgrounds/menu.png",
            TextureId::HudPanel => "assets/ui/hud_panel.png",
        }
    }
}

/// Looping music tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicId {
    Menu,
    Gameplay,
}

impl MusicId {
    pub fn path(&self) -> &'static str {
        match self {
            MusicId::Menu => "assets/audio/menu_theme.ogg",
            MusicId::Gameplay => "assets/audio/driving_theme.ogg",
        }
    }
}

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Crash,
    Lose,
    Win,
    CountdownTick,
}

impl SoundId {
    pub const ALL: [SoundId; 4] = [
        SoundId::Crash,
        SoundId::Lose,
        SoundId::Win,
        SoundId::CountdownTick,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            SoundId::Crash => "assets/audio/crash.ogg",
            SoundId::Lose => "assets/audio/lose.ogg",
            SoundId::Win => "assets/audio/win.ogg",
            SoundId::CountdownTick => "assets/audio/tick.ogg",
        }
    }
}

/// Texture registry: loads each id once and serves draws and size queries.
pub struct TextureStore<'a> {
    creator: &'a TextureCreator<WindowContext>,
    textures: HashMap<TextureId, Texture<'a>>,
}

impl<'a> TextureStore<'a> {
    pub fn new(creator: &'a TextureCreator<WindowContext>) -> Self {
        TextureStore {
            creator,
            textures: HashMap::new(),
        }
    }

    /// Loads the texture behind `id`. Re-loading an already present id is a
    /// success no-op.
    pub fn load(&mut self, id: TextureId) -> Result<(), String> {
        if self.textures.contains_key(&id) {
            return Ok(());
        }
        let texture = self
            .creator
            .load_texture(id.path())
            .map_err(|e| format!("failed to load {}: {}", id.path(), e))?;
        self.textures.insert(id, texture);
        Ok(())
    }

    /// Pixel dimensions of a loaded texture, or `None` if it never loaded.
    pub fn size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.get(&id).map(|t| {
            let q = t.query();
            (q.width, q.height)
        })
    }

    /// Draws a loaded texture into the destination rectangle, optionally
    /// flipped horizontally. Unknown ids draw nothing.
    pub fn blit(
        &self,
        canvas: &mut Canvas<Window>,
        id: TextureId,
        dest: Collider,
        flip_horizontal: bool,
    ) -> Result<(), String> {
        let Some(texture) = self.textures.get(&id) else {
            return Ok(());
        };
        canvas
            .copy_ex(
                texture,
                None,
                dest.to_rect(),
                0.0,
                None,
                flip_horizontal,
                false,
            )
            .map_err(|e| e.to_string())
    }
}
