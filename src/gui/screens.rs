//! Full-screen mode screens: about, get-ready, game over and win.

use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::session::{DISTANCE_GOAL, SESSION_SECONDS, SessionClock};
use crate::text::draw_text_centered;

/// Distance of the shared return prompt from the bottom edge
const RETURN_PROMPT_BOTTOM_MARGIN: i32 = 110;
/// The about screen positions its prompt higher than the shared spot; this
/// override is intentional, matching the original layout.
const ABOUT_PROMPT_BOTTOM_MARGIN: i32 = 180;

const TITLE_COLOR: Color = Color::RGB(245, 210, 90);
const BODY_COLOR: Color = Color::RGB(200, 200, 210);
const PROMPT_COLOR: Color = Color::RGB(150, 160, 180);
const LOSE_COLOR: Color = Color::RGB(255, 70, 60);
const WIN_COLOR: Color = Color::RGB(110, 230, 120);

fn darken(canvas: &mut Canvas<Window>, alpha: u8) -> Result<(), String> {
    canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(0, 0, 0, alpha));
    canvas.fill_rect(None)?;
    canvas.set_blend_mode(sdl2::render::BlendMode::None);
    Ok(())
}

fn draw_return_prompt(canvas: &mut Canvas<Window>, bottom_margin: i32) -> Result<(), String> {
    let (w, h) = canvas.logical_size();
    draw_text_centered(
        canvas,
        "PRESS ENTER FOR MENU",
        (w / 2) as i32,
        h as i32 - bottom_margin,
        PROMPT_COLOR,
        2,
    )
}

pub fn draw_about(canvas: &mut Canvas<Window>) -> Result<(), String> {
    darken(canvas, 200)?;
    let (w, _) = canvas.logical_size();
    let cx = (w / 2) as i32;

    draw_text_centered(canvas, "ABOUT", cx, 90, TITLE_COLOR, 4)?;
    draw_text_centered(
        canvas,
        "OUTRUN THE CLOCK ON A THREE LANE HIGHWAY.",
        cx,
        190,
        BODY_COLOR,
        2,
    )?;
    draw_text_centered(
        canvas,
        "UP/DOWN CHANGES LANES, SPACE BRAKES.",
        cx,
        230,
        BODY_COLOR,
        2,
    )?;
    draw_text_centered(
        canvas,
        "HITTING TRAFFIC SLOWS YOU DOWN. REACH THE GOAL IN TIME.",
        cx,
        270,
        BODY_COLOR,
        2,
    )?;

    draw_return_prompt(canvas, ABOUT_PROMPT_BOTTOM_MARGIN)
}

pub fn draw_start_screen(canvas: &mut Canvas<Window>) -> Result<(), String> {
    darken(canvas, 140)?;
    let (w, h) = canvas.logical_size();
    let cx = (w / 2) as i32;
    let cy = (h / 2) as i32;

    draw_text_centered(canvas, "GET READY", cx, cy - 90, TITLE_COLOR, 5)?;
    draw_text_centered(
        canvas,
        &format!("{SESSION_SECONDS} SECONDS, {DISTANCE_GOAL:.0} ROAD UNITS"),
        cx,
        cy - 10,
        BODY_COLOR,
        2,
    )?;
    draw_text_centered(canvas, "PRESS ENTER TO DRIVE", cx, cy + 40, PROMPT_COLOR, 3)
}

pub fn draw_game_over(
    canvas: &mut Canvas<Window>,
    clock: &SessionClock,
    show_prompt: bool,
) -> Result<(), String> {
    darken(canvas, 215)?;
    let (w, h) = canvas.logical_size();
    let cx = (w / 2) as i32;
    let cy = (h / 2) as i32;

    draw_text_centered(canvas, "TIME'S UP", cx, cy - 90, LOSE_COLOR, 5)?;
    let progress = (clock.distance / DISTANCE_GOAL * 100.0).min(100.0);
    draw_text_centered(
        canvas,
        &format!("YOU COVERED {progress:.0}% OF THE ROAD"),
        cx,
        cy,
        BODY_COLOR,
        2,
    )?;

    if show_prompt {
        draw_return_prompt(canvas, RETURN_PROMPT_BOTTOM_MARGIN)?;
    }
    Ok(())
}

pub fn draw_win(
    canvas: &mut Canvas<Window>,
    clock: &SessionClock,
    show_prompt: bool,
) -> Result<(), String> {
    darken(canvas, 215)?;
    let (w, h) = canvas.logical_size();
    let cx = (w / 2) as i32;
    let cy = (h / 2) as i32;

    draw_text_centered(canvas, "YOU MADE IT", cx, cy - 90, WIN_COLOR, 5)?;
    draw_text_centered(
        canvas,
        &format!("{} SECONDS TO SPARE", clock.seconds_remaining),
        cx,
        cy,
        BODY_COLOR,
        2,
    )?;

    if show_prompt {
        draw_return_prompt(canvas, RETURN_PROMPT_BOTTOM_MARGIN)?;
    }
    Ok(())
}
