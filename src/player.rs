//! Player vehicle kinematics: longitudinal speed, lane gliding and the
//! post-collision slow penalty.

use crate::collision::Collider;
use crate::config::PlayerTuning;

/// Vertical glide rate between lane centers, px/s
pub const LANE_GLIDE_SPEED: f32 = 700.0;
/// Within this distance of the lane center the glide snaps exactly onto it
pub const LANE_SNAP_EPSILON: f32 = 0.5;
/// Speed the vehicle is pinned to while the collision penalty is active
pub const PENALTY_SPEED: f32 = 50.0;
/// How long a collision penalty lasts, in simulation milliseconds
pub const PENALTY_DURATION_MS: f64 = 2500.0;

// Below these speeds the vehicle stops dead instead of creeping
const STOP_THRESHOLD_BRAKING: f32 = 1.0;
const STOP_THRESHOLD_COASTING: f32 = 0.5;

pub struct Player {
    /// Fixed horizontal center; only y animates
    pub x: f32,
    pub y: f32,
    /// Current lane index, `0..lane_count`
    pub lane: usize,
    pub speed: f32,
    /// Session ceiling; only ever rises until the next reset
    pub max_speed: f32,
    pub width: f32,
    pub height: f32,
    tuning: PlayerTuning,
    slowed_until_ms: Option<f64>,
}

impl Player {
    pub fn new(x: f32, width: f32, height: f32, lanes: &[f32], tuning: PlayerTuning) -> Self {
        let lane = lanes.len() / 2;
        let y = lanes.get(lane).copied().unwrap_or(0.0);
        Player {
            x,
            y,
            lane,
            speed: 0.0,
            max_speed: tuning.max_speed,
            width,
            height,
            tuning,
            slowed_until_ms: None,
        }
    }

    /// Puts the vehicle back in the center lane at a standstill and restores
    /// the starting max-speed ceiling. Runs on every session reset.
    pub fn reset(&mut self, lanes: &[f32]) {
        self.lane = lanes.len() / 2;
        self.y = lanes.get(self.lane).copied().unwrap_or(self.y);
        self.speed = 0.0;
        self.max_speed = self.tuning.max_speed;
        self.slowed_until_ms = None;
    }

    /// Per-frame kinematics. `brake_held` comes from continuous key polling;
    /// lane changes arrive separately through [`steer_up`]/[`steer_down`].
    ///
    /// [`steer_up`]: Player::steer_up
    /// [`steer_down`]: Player::steer_down
    pub fn update(&mut self, dt: f32, now_ms: f64, brake_held: bool, lanes: &[f32]) {
        if let Some(until) = self.slowed_until_ms {
            if now_ms >= until {
                self.slowed_until_ms = None;
            }
        }

        if self.slowed_until_ms.is_some() {
            self.speed = PENALTY_SPEED;
        } else {
            if brake_held {
                self.speed -= self.tuning.braking * dt;
            } else {
                self.speed += self.tuning.acceleration * dt;
            }
            self.speed *= self.tuning.drag.powf(dt);
            self.speed = self.speed.clamp(self.tuning.min_speed, self.max_speed);

            let stop_threshold = if brake_held {
                STOP_THRESHOLD_BRAKING
            } else {
                STOP_THRESHOLD_COASTING
            };
            if self.speed < stop_threshold {
                self.speed = 0.0;
            }
        }

        self.glide_toward_lane(dt, lanes);
    }

    fn glide_toward_lane(&mut self, dt: f32, lanes: &[f32]) {
        let Some(&target) = lanes.get(self.lane) else {
            return;
        };
        let delta = target - self.y;
        if delta.abs() <= LANE_SNAP_EPSILON {
            self.y = target;
            return;
        }
        let step = LANE_GLIDE_SPEED * dt;
        if step >= delta.abs() {
            self.y = target;
        } else {
            self.y += step * delta.signum();
        }
    }

    /// Discrete lane change toward the top of the screen.
    pub fn steer_up(&mut self) {
        if self.lane > 0 {
            self.lane -= 1;
        }
    }

    /// Discrete lane change toward the bottom of the screen.
    pub fn steer_down(&mut self, lane_count: usize) {
        if self.lane + 1 < lane_count {
            self.lane += 1;
        }
    }

    /// Pins the speed to [`PENALTY_SPEED`] for [`PENALTY_DURATION_MS`].
    /// A second collision during an active penalty has no further effect.
    pub fn apply_speed_penalty(&mut self, now_ms: f64) {
        if self.slowed_until_ms.is_some() {
            return;
        }
        self.slowed_until_ms = Some(now_ms + PENALTY_DURATION_MS);
        self.speed = PENALTY_SPEED;
    }

    pub fn slowed(&self) -> bool {
        self.slowed_until_ms.is_some()
    }

    /// Raises the max-speed ceiling by `amount`, never past `ceiling` and
    /// never downward.
    pub fn raise_max_speed(&mut self, amount: f32, ceiling: f32) {
        self.max_speed = (self.max_speed + amount).min(ceiling).max(self.max_speed);
    }

    pub fn collider(&self) -> Collider {
        Collider::centered(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANES: [f32; 3] = [100.0, 200.0, 300.0];

    fn test_player() -> Player {
        Player::new(160.0, 96.0, 48.0, &LANES, PlayerTuning::default())
    }

    #[test]
    fn test_starts_in_center_lane() {
        let player = test_player();

        assert_eq!(player.lane, 1);
        assert_eq!(player.y, 200.0);
        assert_eq!(player.speed, 0.0);
    }

    #[test]
    fn test_steer_down_moves_one_lane_and_glides() {
        let mut player = test_player();
        player.steer_down(LANES.len());

        assert_eq!(player.lane, 2);
        // y has not jumped; it eases at the glide rate
        assert_eq!(player.y, 200.0);

        player.update(0.01, 0.0, false, &LANES);
        assert!((player.y - 207.0).abs() < 0.01);
    }

    #[test]
    fn test_glide_never_overshoots_and_snaps_exactly() {
        let mut player = test_player();
        player.steer_down(LANES.len());

        let mut now = 0.0;
        for _ in 0..200 {
            player.update(0.016, now, false, &LANES);
            now += 16.0;
            assert!(player.y <= 300.0);
        }
        assert_eq!(player.y, 300.0);
    }

    #[test]
    fn test_steering_clamped_at_extreme_lanes() {
        let mut player = test_player();
        player.steer_up();
        player.steer_up();
        assert_eq!(player.lane, 0);

        player.steer_down(LANES.len());
        player.steer_down(LANES.len());
        player.steer_down(LANES.len());
        assert_eq!(player.lane, 2);
    }

    #[test]
    fn test_acceleration_with_drag() {
        let mut player = test_player();
        player.update(1.0, 0.0, false, &LANES);

        // One second of acceleration (140), then one second of drag (0.9)
        let expected = 140.0 * 0.9;
        assert!((player.speed - expected).abs() < 0.001);
    }

    #[test]
    fn test_speed_never_exceeds_max() {
        let mut player = test_player();
        let mut now = 0.0;
        for _ in 0..100 {
            player.update(0.5, now, false, &LANES);
            now += 500.0;
        }
        assert!(player.speed <= player.max_speed);
        assert!(player.speed > 0.0);
    }

    #[test]
    fn test_braking_snaps_to_zero_near_standstill() {
        let mut player = test_player();
        player.speed = 2.0;
        player.update(0.004, 0.0, true, &LANES);

        assert_eq!(player.speed, 0.0);
    }

    #[test]
    fn test_penalty_pins_speed_and_expires() {
        let mut player = test_player();
        player.speed = 600.0;
        player.apply_speed_penalty(1000.0);

        assert!(player.slowed());
        assert_eq!(player.speed, PENALTY_SPEED);

        // Still pinned just before expiry
        player.update(0.016, 3400.0, false, &LANES);
        assert!(player.slowed());
        assert_eq!(player.speed, PENALTY_SPEED);

        // Expired: acceleration resumes
        player.update(0.016, 3500.0, false, &LANES);
        assert!(!player.slowed());
        assert!(player.speed > PENALTY_SPEED);
    }

    #[test]
    fn test_penalty_is_idempotent_while_active() {
        let mut player = test_player();
        player.apply_speed_penalty(0.0);
        // Re-collision mid-penalty must not extend the expiry
        player.apply_speed_penalty(2000.0);

        player.update(0.016, 2600.0, false, &LANES);
        assert!(!player.slowed());
    }

    #[test]
    fn test_raise_max_speed_caps_at_ceiling() {
        let mut player = test_player();
        let start = player.max_speed;

        player.raise_max_speed(20.0, 2000.0);
        assert_eq!(player.max_speed, start + 20.0);

        player.raise_max_speed(5000.0, 2000.0);
        assert_eq!(player.max_speed, 2000.0);

        // Ceiling below current never lowers the ceiling already reached
        player.raise_max_speed(20.0, 1000.0);
        assert_eq!(player.max_speed, 2000.0);
    }

    #[test]
    fn test_reset_restores_session_defaults() {
        let mut player = test_player();
        player.speed = 500.0;
        player.steer_up();
        player.raise_max_speed(500.0, 2000.0);
        player.apply_speed_penalty(0.0);

        player.reset(&LANES);

        assert_eq!(player.lane, 1);
        assert_eq!(player.speed, 0.0);
        assert_eq!(player.max_speed, PlayerTuning::default().max_speed);
        assert!(!player.slowed());
    }
}
