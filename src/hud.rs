//! In-game HUD: countdown, speed and distance readouts.

use log::warn;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::assets::{TextureId, TextureStore};
use crate::collision::Collider;
use crate::player::Player;
use crate::session::{DISTANCE_GOAL, FINAL_COUNTDOWN_SECONDS, SessionClock};
use crate::text::draw_text;

/// Colors for the HUD readouts.
#[derive(Debug, Clone)]
pub struct HudStyle {
    pub label_color: Color,
    /// Countdown color once the final stretch starts
    pub urgent_color: Color,
}

impl Default for HudStyle {
    fn default() -> Self {
        HudStyle {
            label_color: Color::RGB(230, 230, 240),
            urgent_color: Color::RGB(255, 70, 60),
        }
    }
}

pub struct Hud {
    style: HudStyle,
    panel_missing_logged: bool,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            style: HudStyle::default(),
            panel_missing_logged: false,
        }
    }

    /// Draws the HUD for one frame. A missing panel texture skips the panel
    /// (logged once); the text readouts render regardless.
    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        textures: &TextureStore,
        clock: &SessionClock,
        player: &Player,
    ) -> Result<(), String> {
        match textures.size(TextureId::HudPanel) {
            Some(_) => {
                textures.blit(
                    canvas,
                    TextureId::HudPanel,
                    Collider::new(12.0, 12.0, 260.0, 96.0),
                    false,
                )?;
            }
            None => {
                if !self.panel_missing_logged {
                    warn!("HUD panel texture unavailable; drawing readouts without it");
                    self.panel_missing_logged = true;
                }
            }
        }

        let time_color = if clock.seconds_remaining <= FINAL_COUNTDOWN_SECONDS {
            self.style.urgent_color
        } else {
            self.style.label_color
        };
        draw_text(
            canvas,
            &format!("TIME {}", clock.seconds_remaining),
            28,
            24,
            time_color,
            3,
        )?;

        draw_text(
            canvas,
            &format!("SPEED {:.0}", player.speed),
            28,
            52,
            self.style.label_color,
            2,
        )?;

        let progress = (clock.distance / DISTANCE_GOAL * 100.0).min(100.0);
        draw_text(
            canvas,
            &format!("ROAD {progress:.0}%"),
            28,
            74,
            self.style.label_color,
            2,
        )?;

        Ok(())
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
