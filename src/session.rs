//! Session countdown and distance bookkeeping.

use crate::assets::SoundId;
use crate::audio::AudioOutput;

/// Countdown length of one session, in whole seconds
pub const SESSION_SECONDS: u32 = 60;
/// The countdown cue plays once per second value at or below this
pub const FINAL_COUNTDOWN_SECONDS: u32 = 10;
/// Distance (world units) that wins the session
pub const DISTANCE_GOAL: f64 = 40000.0;

/// Tracks the remaining seconds and accumulated distance of one session.
///
/// Seconds stay within `[0, SESSION_SECONDS]` and drop by exactly one per
/// elapsed simulated second; distance never goes negative.
pub struct SessionClock {
    pub seconds_remaining: u32,
    pub distance: f64,
    last_second_ms: f64,
    last_cue_second: Option<u32>,
}

impl SessionClock {
    pub fn new() -> Self {
        SessionClock {
            seconds_remaining: SESSION_SECONDS,
            distance: 0.0,
            last_second_ms: 0.0,
            last_cue_second: None,
        }
    }

    /// Full reset for a fresh session (StartScreen entry).
    pub fn reset(&mut self, now_ms: f64) {
        self.seconds_remaining = SESSION_SECONDS;
        self.distance = 0.0;
        self.last_second_ms = now_ms;
        self.last_cue_second = None;
    }

    /// Re-arms the per-second timer and cue marker without touching the
    /// countdown or distance. Runs when gameplay (re)starts, so time spent
    /// on other screens is not billed to the session.
    pub fn rearm(&mut self, now_ms: f64) {
        self.last_second_ms = now_ms;
        self.last_cue_second = None;
    }

    pub fn add_distance(&mut self, amount: f64) {
        self.distance += amount.max(0.0);
    }

    pub fn goal_reached(&self) -> bool {
        self.distance >= DISTANCE_GOAL
    }

    pub fn expired(&self) -> bool {
        self.seconds_remaining == 0
    }

    /// Advances the countdown to `now_ms`, one decrement per elapsed second,
    /// and fires the tick cue once per distinct second value in the final
    /// stretch.
    pub fn tick(&mut self, now_ms: f64, audio: &mut dyn AudioOutput) {
        while now_ms - self.last_second_ms >= 1000.0 && self.seconds_remaining > 0 {
            self.last_second_ms += 1000.0;
            self.seconds_remaining -= 1;
        }

        let s = self.seconds_remaining;
        if s > 0 && s <= FINAL_COUNTDOWN_SECONDS && self.last_cue_second != Some(s) {
            self.last_cue_second = Some(s);
            audio.play_effect(SoundId::CountdownTick);
        }
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}
