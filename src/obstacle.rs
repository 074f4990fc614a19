//! Oncoming obstacles and the per-frame scroll/collision resolver.
//!
//! Obstacles are stationary relative to the road; the player's forward speed
//! determines how fast the world scrolls them past, so each frame they shift
//! left by `player.speed * dt`.

use crate::assets::{SoundId, TextureId};
use crate::audio::AudioOutput;
use crate::collision::Collider;
use crate::player::Player;

/// Hit-boxes are scaled down to this fraction of the sprite bounds, so
/// near-miss sprite overlap at the edges does not register as a crash.
pub const HITBOX_SCALE: f32 = 0.7;

/// Visual variants an obstacle can spawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Sedan,
    Van,
    Truck,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Sedan, ObstacleKind::Van, ObstacleKind::Truck];

    pub fn texture(&self) -> TextureId {
        match self {
            ObstacleKind::Sedan => TextureId::Sedan,
            ObstacleKind::Van => TextureId::Van,
            ObstacleKind::Truck => TextureId::Truck,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub collider: Collider,
    pub kind: ObstacleKind,
    pub active: bool,
}

impl Obstacle {
    /// Places a new obstacle just past the right screen edge, vertically
    /// centered on `lane_y`.
    pub fn spawn(kind: ObstacleKind, screen_width: f32, lane_y: f32, w: f32, h: f32) -> Self {
        Obstacle {
            collider: Collider::new(screen_width, lane_y - h / 2.0, w, h),
            kind,
            active: true,
        }
    }
}

/// Advances and prunes the obstacle collection for one frame.
///
/// Walks the collection in insertion order. Per entry: shift left by the
/// scroll amount, then test collision, then cull if fully off-screen. The
/// collision test comes first, so an obstacle hit exactly as it leaves the
/// screen still costs the player the penalty. At most one collision is
/// processed per frame, however many boxes overlap.
pub fn advance_and_resolve(
    obstacles: &mut Vec<Obstacle>,
    player: &mut Player,
    dt: f32,
    now_ms: f64,
    audio: &mut dyn AudioOutput,
) {
    obstacles.retain(|o| o.active);

    let scroll = player.speed * dt;
    let player_box = player.collider().shrunk(HITBOX_SCALE);
    let mut collision_processed = false;

    let mut i = 0;
    while i < obstacles.len() {
        obstacles[i].collider.x -= scroll;

        if !collision_processed
            && player_box.intersects(&obstacles[i].collider.shrunk(HITBOX_SCALE))
        {
            audio.play_effect(SoundId::Crash);
            player.apply_speed_penalty(now_ms);
            collision_processed = true;
            obstacles.remove(i);
            continue;
        }

        if obstacles[i].collider.right() < 0.0 {
            obstacles.remove(i);
            continue;
        }

        i += 1;
    }
}
