//! Obstacle spawning and difficulty escalation.
//!
//! The spawner fires whenever the time since the last spawn crosses the
//! current spawn interval. The interval shortens and the player's speed
//! ceiling rises on fixed wall-clock cadences while a session runs.

use log::{debug, warn};
use rand::Rng;

use crate::obstacle::{Obstacle, ObstacleKind};
use crate::player::Player;

/// Most obstacles allowed on screen at once
pub const OBSTACLE_CAP: usize = 2;
/// Chance (percent) that one spawn event places two obstacles
pub const DOUBLE_SPAWN_CHANCE: u32 = 40;

pub const INITIAL_SPAWN_INTERVAL_MS: f64 = 2300.0;
pub const SPAWN_INTERVAL_STEP_MS: f64 = 180.0;
pub const MIN_SPAWN_INTERVAL_MS: f64 = 550.0;
/// How often the spawn interval tightens
pub const DIFFICULTY_RAMP_INTERVAL_MS: f64 = 6000.0;
/// How often the player's speed ceiling rises
pub const SPEED_RAMP_INTERVAL_MS: f64 = 1000.0;
pub const MAX_SPEED_STEP: f32 = 20.0;
pub const MAX_SPEED_CEILING: f32 = 2000.0;

/// An obstacle kind with its sprite dimensions, resolved once at load time.
#[derive(Debug, Clone, Copy)]
pub struct SpawnKind {
    pub kind: ObstacleKind,
    pub w: f32,
    pub h: f32,
}

pub struct Spawner {
    kinds: Vec<SpawnKind>,
    pub spawn_interval_ms: f64,
    last_spawn_ms: f64,
    last_interval_ramp_ms: f64,
    last_speed_ramp_ms: f64,
}

impl Spawner {
    /// `kinds` may legitimately be empty when obstacle sprites failed to
    /// load; the spawner then no-ops forever rather than crashing a session.
    pub fn new(kinds: Vec<SpawnKind>) -> Self {
        Spawner {
            kinds,
            spawn_interval_ms: INITIAL_SPAWN_INTERVAL_MS,
            last_spawn_ms: 0.0,
            last_interval_ramp_ms: 0.0,
            last_speed_ramp_ms: 0.0,
        }
    }

    /// Restores the initial interval and re-arms every ramp timer. Runs on
    /// session reset.
    pub fn reset(&mut self, now_ms: f64) {
        self.spawn_interval_ms = INITIAL_SPAWN_INTERVAL_MS;
        self.last_spawn_ms = now_ms;
        self.last_interval_ramp_ms = now_ms;
        self.last_speed_ramp_ms = now_ms;
    }

    /// Called once per frame while playing; spawns a batch when the interval
    /// has elapsed.
    pub fn maybe_spawn(
        &mut self,
        now_ms: f64,
        rng: &mut impl Rng,
        lanes: &[f32],
        obstacles: &mut Vec<Obstacle>,
        screen_width: f32,
    ) {
        if now_ms - self.last_spawn_ms < self.spawn_interval_ms {
            return;
        }
        self.last_spawn_ms = now_ms;
        self.spawn_batch(rng, lanes, obstacles, screen_width);
    }

    /// Places 0, 1 or 2 obstacles. Within one batch no two obstacles share
    /// a lane; the on-screen count never exceeds [`OBSTACLE_CAP`].
    fn spawn_batch(
        &self,
        rng: &mut impl Rng,
        lanes: &[f32],
        obstacles: &mut Vec<Obstacle>,
        screen_width: f32,
    ) {
        if self.kinds.is_empty() {
            warn!("no obstacle kinds configured; skipping spawn");
            return;
        }
        if lanes.is_empty() {
            warn!("no lanes configured; skipping spawn");
            return;
        }

        let active = obstacles.iter().filter(|o| o.active).count();
        if active >= OBSTACLE_CAP {
            return;
        }
        let capacity = OBSTACLE_CAP - active;

        let mut candidates: Vec<usize> = (0..lanes.len()).collect();
        let roll: u32 = rng.gen_range(1..=100);
        let intended = if candidates.len() >= 2 && roll <= DOUBLE_SPAWN_CHANCE {
            2
        } else {
            1
        };
        let count = intended.min(capacity).min(candidates.len());

        for _ in 0..count {
            // Without replacement, so a batch never doubles up a lane
            let lane = candidates.swap_remove(rng.gen_range(0..candidates.len()));
            let pick = self.kinds[rng.gen_range(0..self.kinds.len())];
            debug!("spawning {:?} in lane {lane}", pick.kind);
            obstacles.push(Obstacle::spawn(
                pick.kind,
                screen_width,
                lanes[lane],
                pick.w,
                pick.h,
            ));
        }
    }

    /// Advances both difficulty ramps to `now_ms`: the spawn interval
    /// tightens every [`DIFFICULTY_RAMP_INTERVAL_MS`] down to its floor, and
    /// the player's speed ceiling rises every [`SPEED_RAMP_INTERVAL_MS`].
    pub fn ramp_difficulty(&mut self, now_ms: f64, player: &mut Player) {
        while now_ms - self.last_interval_ramp_ms >= DIFFICULTY_RAMP_INTERVAL_MS {
            self.last_interval_ramp_ms += DIFFICULTY_RAMP_INTERVAL_MS;
            self.spawn_interval_ms =
                (self.spawn_interval_ms - SPAWN_INTERVAL_STEP_MS).max(MIN_SPAWN_INTERVAL_MS);
        }
        while now_ms - self.last_speed_ramp_ms >= SPEED_RAMP_INTERVAL_MS {
            self.last_speed_ramp_ms += SPEED_RAMP_INTERVAL_MS;
            player.raise_max_speed(MAX_SPEED_STEP, MAX_SPEED_CEILING);
        }
    }
}
