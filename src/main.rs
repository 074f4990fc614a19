use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::{Duration, Instant};

use log::{info, warn};

mod assets;
mod audio;
mod collision;
mod config;
mod game;
mod gui;
mod hud;
mod obstacle;
mod player;
mod session;
mod spawner;
mod text;

use assets::{MusicId, SoundId, TextureId, TextureStore};
use audio::{AudioOutput, MixerAudio};
use collision::Collider;
use config::GameConfig;
use game::{FrameInput, Game, GameMode};
use gui::screens;
use gui::{MainMenu, MainMenuOption};
use hud::Hud;
use obstacle::ObstacleKind;
use spawner::{SpawnKind, Spawner};

const CONFIG_PATH: &str = "assets/config/game.json";

/// Routes one non-repeating key press to the handler for the active mode.
fn handle_key_down(
    game: &mut Game,
    menu: &mut MainMenu,
    input: &mut FrameInput,
    audio: &mut dyn AudioOutput,
    key: Keycode,
) {
    match game.mode {
        GameMode::MainMenu => match key {
            Keycode::Up | Keycode::W => menu.navigate_up(),
            Keycode::Down | Keycode::S => menu.navigate_down(),
            Keycode::Return | Keycode::Space => match menu.selected_option() {
                MainMenuOption::StartGame => game.set_mode(GameMode::StartScreen, audio),
                MainMenuOption::About => game.set_mode(GameMode::About, audio),
                MainMenuOption::Quit => game.running = false,
            },
            Keycode::Escape => game.running = false,
            _ => {}
        },
        GameMode::About => {
            if matches!(key, Keycode::Return | Keycode::Escape | Keycode::Backspace) {
                game.set_mode(GameMode::MainMenu, audio);
            }
        }
        GameMode::StartScreen => match key {
            Keycode::Return | Keycode::Space => game.set_mode(GameMode::Playing, audio),
            Keycode::Escape => game.set_mode(GameMode::MainMenu, audio),
            _ => {}
        },
        GameMode::Playing => match key {
            Keycode::Up | Keycode::W => input.steer_up = true,
            Keycode::Down | Keycode::S => input.steer_down = true,
            Keycode::Escape => game.set_mode(GameMode::MainMenu, audio),
            _ => {}
        },
        GameMode::GameOver | GameMode::Win => {
            if game.show_return_prompt
                && matches!(key, Keycode::Return | Keycode::Space | Keycode::Escape)
            {
                game.set_mode(GameMode::MainMenu, audio);
            }
        }
    }
}

/// Road, traffic and the player vehicle, in world positions.
fn draw_scene(
    canvas: &mut Canvas<Window>,
    textures: &TextureStore,
    game: &Game,
) -> Result<(), String> {
    let (w, h) = canvas.logical_size();
    // Flat asphalt shows through if the road texture never loaded
    canvas.set_draw_color(Color::RGB(52, 56, 62));
    canvas.clear();
    textures.blit(
        canvas,
        TextureId::Road,
        Collider::new(0.0, 0.0, w as f32, h as f32),
        false,
    )?;

    for obstacle in &game.obstacles {
        // Oncoming traffic faces the player
        textures.blit(canvas, obstacle.kind.texture(), obstacle.collider, true)?;
    }
    textures.blit(canvas, TextureId::PlayerCar, game.player.collider(), false)?;
    Ok(())
}

fn draw_menu_backdrop(canvas: &mut Canvas<Window>, textures: &TextureStore) -> Result<(), String> {
    let (w, h) = canvas.logical_size();
    canvas.set_draw_color(Color::RGB(14, 14, 20));
    canvas.clear();
    textures.blit(
        canvas,
        TextureId::MenuBackdrop,
        Collider::new(0.0, 0.0, w as f32, h as f32),
        false,
    )
}

fn render(
    canvas: &mut Canvas<Window>,
    textures: &TextureStore,
    game: &Game,
    menu: &MainMenu,
    hud: &mut Hud,
) -> Result<(), String> {
    match game.mode {
        GameMode::MainMenu => {
            draw_menu_backdrop(canvas, textures)?;
            menu.render(canvas)?;
        }
        GameMode::About => {
            draw_menu_backdrop(canvas, textures)?;
            screens::draw_about(canvas)?;
        }
        GameMode::StartScreen => {
            draw_scene(canvas, textures, game)?;
            screens::draw_start_screen(canvas)?;
        }
        GameMode::Playing => {
            draw_scene(canvas, textures, game)?;
            hud.render(canvas, textures, &game.clock, &game.player)?;
        }
        GameMode::GameOver => {
            draw_scene(canvas, textures, game)?;
            if game.game_over_screen_visible() {
                screens::draw_game_over(canvas, &game.clock, game.show_return_prompt)?;
            } else {
                // Grace period: the final moment stays on screen
                hud.render(canvas, textures, &game.clock, &game.player)?;
            }
        }
        GameMode::Win => {
            draw_scene(canvas, textures, game)?;
            screens::draw_win(canvas, &game.clock, game.show_return_prompt)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::init();
    info!("starting Road Rush");

    let config = GameConfig::load_or_default(CONFIG_PATH);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let _audio_subsystem = sdl_context.audio()?;
    sdl2::mixer::open_audio(
        sdl2::mixer::DEFAULT_FREQUENCY,
        sdl2::mixer::DEFAULT_FORMAT,
        sdl2::mixer::DEFAULT_CHANNELS,
        1024,
    )?;
    let _mixer_context = sdl2::mixer::init(sdl2::mixer::InitFlag::OGG)?;
    sdl2::mixer::allocate_channels(8);

    let window = video_subsystem
        .window("Road Rush", config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(config.window_width, config.window_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut textures = TextureStore::new(&texture_creator);
    for id in TextureId::ALL {
        if let Err(e) = textures.load(id) {
            // Obstacles and HUD degrade gracefully; the player sprite is
            // checked below because the game cannot run without it
            warn!("{e}");
        }
    }

    let (player_w, player_h) = textures
        .size(TextureId::PlayerCar)
        .ok_or("player sprite is required and failed to load")?;

    let spawn_kinds: Vec<SpawnKind> = ObstacleKind::ALL
        .iter()
        .filter_map(|&kind| {
            textures.size(kind.texture()).map(|(w, h)| SpawnKind {
                kind,
                w: w as f32,
                h: h as f32,
            })
        })
        .collect();
    if spawn_kinds.is_empty() {
        warn!("no obstacle sprites loaded; sessions will have empty roads");
    }

    let mut mixer = MixerAudio::new();
    for id in [MusicId::Menu, MusicId::Gameplay] {
        if let Err(e) = mixer.load_music(id) {
            warn!("{e}");
        }
    }
    for id in SoundId::ALL {
        if let Err(e) = mixer.load_effect(id) {
            warn!("{e}");
        }
    }
    mixer.set_music_volume(config.music_volume);
    mixer.set_effects_volume(config.effects_volume);
    mixer.play_music(MusicId::Menu, -1);

    let mut game = Game::new(
        config,
        Spawner::new(spawn_kinds),
        player_w as f32,
        player_h as f32,
    );
    let mut menu = MainMenu::new();
    let mut hud = Hud::new();

    let mut event_pump = sdl_context.event_pump()?;
    let mut last_frame = Instant::now();

    'running: loop {
        // Quit flag is observed once per iteration; a frame in flight
        // always finishes
        if !game.running {
            break 'running;
        }

        let mut input = FrameInput::default();
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => game.running = false,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => handle_key_down(&mut game, &mut menu, &mut input, &mut mixer, key),
                _ => {}
            }
        }
        input.brake_held = event_pump
            .keyboard_state()
            .is_scancode_pressed(Scancode::Space);

        let dt = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();
        game.update(dt, &input, &mut mixer);

        render(&mut canvas, &textures, &game, &menu, &mut hud)?;
        canvas.present();

        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    info!("shut down cleanly");
    Ok(())
}
