//! Game modes and the root simulation context.
//!
//! `Game` owns every piece of mutable session state (player, obstacles,
//! spawner, clock) and is the only place mode transitions happen. Audio and
//! rendering collaborators are passed in explicitly; nothing here is global.

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::assets::{MusicId, SoundId};
use crate::audio::AudioOutput;
use crate::config::GameConfig;
use crate::obstacle::{self, Obstacle};
use crate::player::Player;
use crate::session::SessionClock;
use crate::spawner::Spawner;

/// Hard cap on the delta time one frame may feed the simulation. A stalled
/// frame advances the world by at most this much.
pub const MAX_FRAME_DT: f32 = 0.05;
/// After losing, the gameplay scene stays up this long before the game-over
/// screen appears
pub const GAME_OVER_GRACE_MS: f64 = 1000.0;
/// Delay before the terminal screens offer the return-to-menu prompt
pub const RETURN_PROMPT_DELAY_MS: f64 = 2500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    MainMenu,
    About,
    StartScreen,
    Playing,
    GameOver,
    Win,
}

impl GameMode {
    /// Modes that carry live session state worth tearing down on the way
    /// back to the menu.
    fn in_session(&self) -> bool {
        matches!(
            self,
            GameMode::StartScreen | GameMode::Playing | GameMode::GameOver | GameMode::Win
        )
    }
}

/// Input relevant to one simulation frame. Steering flags are edge-triggered
/// (key-down without repeat); braking is level-triggered polling.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub steer_up: bool,
    pub steer_down: bool,
    pub brake_held: bool,
}

pub struct Game {
    pub mode: GameMode,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub clock: SessionClock,
    pub lanes: Vec<f32>,
    pub show_return_prompt: bool,
    pub running: bool,
    screen_width: f32,
    now_ms: f64,
    ended_at_ms: Option<f64>,
    prompt_at_ms: Option<f64>,
    rng: SmallRng,
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig, spawner: Spawner, player_w: f32, player_h: f32) -> Self {
        let lanes = Self::resolve_lanes(&config);
        let player = Player::new(
            config.player_x,
            player_w,
            player_h,
            &lanes,
            config.player.clone(),
        );
        Game {
            mode: GameMode::MainMenu,
            player,
            obstacles: Vec::new(),
            spawner,
            clock: SessionClock::new(),
            lanes,
            show_return_prompt: false,
            running: true,
            screen_width: config.window_width as f32,
            now_ms: 0.0,
            ended_at_ms: None,
            prompt_at_ms: None,
            rng: SmallRng::from_entropy(),
            config,
        }
    }

    fn resolve_lanes(config: &GameConfig) -> Vec<f32> {
        if config.lane_centers.is_empty() {
            warn!("lane table is empty; substituting three even lanes");
            GameConfig::fallback_lanes(config.window_height)
        } else {
            config.lane_centers.clone()
        }
    }

    #[allow(dead_code)] // exercised by the simulation tests
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// True once the game-over grace period has passed and the terminal
    /// screen should replace the frozen gameplay scene.
    pub fn game_over_screen_visible(&self) -> bool {
        match self.ended_at_ms {
            Some(t) => self.now_ms - t >= GAME_OVER_GRACE_MS,
            None => false,
        }
    }

    /// Switches modes and runs the entry action for the new mode. Calling
    /// with the current mode is a complete no-op: no side effects, no
    /// timestamp resets.
    pub fn set_mode(&mut self, new_mode: GameMode, audio: &mut dyn AudioOutput) {
        if new_mode == self.mode {
            return;
        }
        let prev = self.mode;
        self.mode = new_mode;
        self.show_return_prompt = false;
        info!("mode {prev:?} -> {new_mode:?}");

        match new_mode {
            GameMode::MainMenu => {
                if prev.in_session() {
                    audio.stop_music();
                    audio.play_music(MusicId::Menu, -1);
                    self.obstacles.clear();
                    self.clock.distance = 0.0;
                    self.player.reset(&self.lanes);
                }
            }
            GameMode::About => {
                if matches!(prev, GameMode::Playing | GameMode::StartScreen) {
                    audio.stop_music();
                }
                if !audio.music_playing() {
                    audio.play_music(MusicId::Menu, -1);
                }
            }
            GameMode::StartScreen => {
                audio.stop_music();
                self.lanes = Self::resolve_lanes(&self.config);
                self.clock.reset(self.now_ms);
                self.ended_at_ms = None;
                self.prompt_at_ms = None;
                self.obstacles.clear();
                self.spawner.reset(self.now_ms);
                self.player.reset(&self.lanes);
            }
            GameMode::Playing => {
                audio.stop_music();
                audio.play_music(MusicId::Gameplay, -1);
                self.clock.rearm(self.now_ms);
            }
            GameMode::GameOver => {
                audio.stop_music();
                audio.play_effect(SoundId::Lose);
                self.ended_at_ms = Some(self.now_ms);
                self.prompt_at_ms = Some(self.now_ms + RETURN_PROMPT_DELAY_MS);
            }
            GameMode::Win => {
                audio.stop_music();
                audio.play_effect(SoundId::Win);
                self.prompt_at_ms = Some(self.now_ms + RETURN_PROMPT_DELAY_MS);
            }
        }
    }

    /// Advances the simulation by one frame. The delta time is clamped to
    /// [`MAX_FRAME_DT`] before anything else sees it.
    pub fn update(&mut self, dt: f32, input: &FrameInput, audio: &mut dyn AudioOutput) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.now_ms += dt as f64 * 1000.0;

        match self.mode {
            GameMode::Playing => self.update_playing(dt, input, audio),
            GameMode::GameOver | GameMode::Win => {
                if let Some(at) = self.prompt_at_ms {
                    if self.now_ms >= at {
                        self.show_return_prompt = true;
                    }
                }
            }
            _ => {}
        }
    }

    fn update_playing(&mut self, dt: f32, input: &FrameInput, audio: &mut dyn AudioOutput) {
        if input.steer_up {
            self.player.steer_up();
        }
        if input.steer_down {
            self.player.steer_down(self.lanes.len());
        }
        self.player.update(dt, self.now_ms, input.brake_held, &self.lanes);

        self.clock.add_distance(self.player.speed as f64 * dt as f64);
        if self.clock.goal_reached() {
            self.set_mode(GameMode::Win, audio);
            return;
        }

        self.clock.tick(self.now_ms, audio);
        if self.clock.expired() {
            self.set_mode(GameMode::GameOver, audio);
            return;
        }

        self.spawner.ramp_difficulty(self.now_ms, &mut self.player);
        self.spawner.maybe_spawn(
            self.now_ms,
            &mut self.rng,
            &self.lanes,
            &mut self.obstacles,
            self.screen_width,
        );

        // Scroll/collision strictly after the kinematics update
        obstacle::advance_and_resolve(&mut self.obstacles, &mut self.player, dt, self.now_ms, audio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::test_support::{AudioCall, RecordingAudio};
    use crate::obstacle::ObstacleKind;
    use crate::session::{DISTANCE_GOAL, SESSION_SECONDS};
    use crate::spawner::{INITIAL_SPAWN_INTERVAL_MS, SpawnKind};

    fn test_spawner() -> Spawner {
        let kinds = ObstacleKind::ALL
            .iter()
            .map(|&kind| SpawnKind {
                kind,
                w: 96.0,
                h: 48.0,
            })
            .collect();
        Spawner::new(kinds)
    }

    fn test_game() -> Game {
        let config = GameConfig {
            lane_centers: vec![100.0, 200.0, 300.0],
            ..GameConfig::default()
        };
        Game::new(config, test_spawner(), 96.0, 48.0)
    }

    fn start_playing(game: &mut Game, audio: &mut RecordingAudio) {
        game.set_mode(GameMode::StartScreen, audio);
        game.set_mode(GameMode::Playing, audio);
    }

    /// Steps the simulation in 50 ms frames for `seconds` of simulated time.
    fn run_for(game: &mut Game, audio: &mut RecordingAudio, seconds: f64, input: FrameInput) {
        let frames = (seconds / 0.05).ceil() as usize;
        for _ in 0..frames {
            game.update(0.05, &input, audio);
        }
    }

    #[test]
    fn test_delta_time_is_clamped() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);
        let before = game.now_ms();

        // A multi-second stall still advances the world by at most 50 ms
        game.update(3.0, &FrameInput::default(), &mut audio);

        assert!((game.now_ms() - before - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_session_times_out_into_game_over() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);

        // Brake held: no distance accrues, so the countdown must run out
        let braking = FrameInput {
            brake_held: true,
            ..FrameInput::default()
        };
        run_for(&mut game, &mut audio, 61.0, braking);

        assert_eq!(game.mode, GameMode::GameOver);
        assert_eq!(game.clock.seconds_remaining, 0);
        assert_eq!(audio.effect_count(SoundId::Lose), 1);
    }

    #[test]
    fn test_distance_goal_wins_regardless_of_countdown() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);
        game.clock.add_distance(DISTANCE_GOAL - 1.0);

        run_for(&mut game, &mut audio, 5.0, FrameInput::default());

        assert_eq!(game.mode, GameMode::Win);
        assert!(game.clock.seconds_remaining > 0);
        assert_eq!(audio.effect_count(SoundId::Win), 1);
    }

    #[test]
    fn test_set_mode_with_current_mode_is_a_noop() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);
        run_for(&mut game, &mut audio, 2.0, FrameInput::default());

        let calls_before = audio.calls.len();
        let seconds_before = game.clock.seconds_remaining;
        let distance_before = game.clock.distance;

        game.set_mode(GameMode::Playing, &mut audio);

        assert_eq!(audio.calls.len(), calls_before);
        assert_eq!(game.clock.seconds_remaining, seconds_before);
        assert_eq!(game.clock.distance, distance_before);
    }

    #[test]
    fn test_start_screen_resets_the_whole_session() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);
        run_for(&mut game, &mut audio, 10.0, FrameInput::default());
        assert!(game.clock.distance > 0.0);
        assert!(game.clock.seconds_remaining < SESSION_SECONDS);

        game.set_mode(GameMode::StartScreen, &mut audio);

        assert_eq!(game.clock.seconds_remaining, SESSION_SECONDS);
        assert_eq!(game.clock.distance, 0.0);
        assert!(game.obstacles.is_empty());
        assert_eq!(game.spawner.spawn_interval_ms, INITIAL_SPAWN_INTERVAL_MS);
        assert_eq!(game.player.speed, 0.0);
        assert_eq!(game.player.lane, 1);
        assert!(!game.show_return_prompt);
    }

    #[test]
    fn test_empty_lane_table_falls_back_to_three_lanes() {
        let config = GameConfig {
            lane_centers: Vec::new(),
            ..GameConfig::default()
        };
        let mut game = Game::new(config, test_spawner(), 96.0, 48.0);
        let mut audio = RecordingAudio::default();

        game.set_mode(GameMode::StartScreen, &mut audio);

        assert_eq!(game.lanes.len(), 3);
        assert!(game.lanes[0] < game.lanes[1] && game.lanes[1] < game.lanes[2]);
    }

    #[test]
    fn test_menu_entry_from_session_tears_down_and_swaps_music() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);
        run_for(&mut game, &mut audio, 5.0, FrameInput::default());
        game.clock.add_distance(500.0);

        audio.calls.clear();
        game.set_mode(GameMode::MainMenu, &mut audio);

        assert_eq!(
            audio.calls,
            vec![
                AudioCall::StopMusic,
                AudioCall::PlayMusic(MusicId::Menu, -1)
            ]
        );
        assert!(game.obstacles.is_empty());
        assert_eq!(game.clock.distance, 0.0);
        assert_eq!(game.player.lane, 1);
    }

    #[test]
    fn test_playing_entry_starts_gameplay_music() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        game.set_mode(GameMode::StartScreen, &mut audio);

        audio.calls.clear();
        game.set_mode(GameMode::Playing, &mut audio);

        assert_eq!(
            audio.calls,
            vec![
                AudioCall::StopMusic,
                AudioCall::PlayMusic(MusicId::Gameplay, -1)
            ]
        );
    }

    #[test]
    fn test_about_from_menu_keeps_running_music() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        audio.play_music(MusicId::Menu, -1);
        audio.calls.clear();

        game.set_mode(GameMode::About, &mut audio);

        assert!(audio.calls.is_empty());
    }

    #[test]
    fn test_about_from_playing_swaps_to_menu_music() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);

        audio.calls.clear();
        game.set_mode(GameMode::About, &mut audio);

        assert_eq!(
            audio.calls,
            vec![
                AudioCall::StopMusic,
                AudioCall::PlayMusic(MusicId::Menu, -1)
            ]
        );
    }

    #[test]
    fn test_game_over_grace_and_prompt_delays() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);
        game.set_mode(GameMode::GameOver, &mut audio);

        assert!(!game.game_over_screen_visible());
        assert!(!game.show_return_prompt);

        run_for(&mut game, &mut audio, 1.1, FrameInput::default());
        assert!(game.game_over_screen_visible());
        assert!(!game.show_return_prompt);

        run_for(&mut game, &mut audio, 1.5, FrameInput::default());
        assert!(game.show_return_prompt);
    }

    #[test]
    fn test_win_prompt_appears_after_delay() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);
        game.set_mode(GameMode::Win, &mut audio);
        assert!(!game.show_return_prompt);

        run_for(&mut game, &mut audio, 2.6, FrameInput::default());

        assert!(game.show_return_prompt);
    }

    #[test]
    fn test_nothing_advances_outside_playing() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        game.set_mode(GameMode::StartScreen, &mut audio);

        run_for(&mut game, &mut audio, 5.0, FrameInput::default());

        assert_eq!(game.clock.seconds_remaining, SESSION_SECONDS);
        assert_eq!(game.clock.distance, 0.0);
        assert!(game.obstacles.is_empty());
        assert_eq!(game.player.speed, 0.0);
    }

    #[test]
    fn test_steering_input_changes_lanes_while_playing() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);
        assert_eq!(game.player.lane, 1);

        let steer = FrameInput {
            steer_down: true,
            ..FrameInput::default()
        };
        game.update(0.016, &steer, &mut audio);

        assert_eq!(game.player.lane, 2);
    }

    #[test]
    fn test_obstacles_spawn_during_play() {
        let mut game = test_game();
        let mut audio = RecordingAudio::default();
        start_playing(&mut game, &mut audio);

        run_for(&mut game, &mut audio, 10.0, FrameInput::default());

        // Spawner fired several times by now; the cap bounds what's alive
        assert!(!game.obstacles.is_empty());
        assert!(game.obstacles.len() <= crate::spawner::OBSTACLE_CAP);
    }
}
