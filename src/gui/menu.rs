//! Keyboard-navigated overlay menu.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::text::{draw_text_centered, text_width};

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub border_color: Color,
    /// Darkness of the full-screen backdrop (0-255)
    pub overlay_alpha: u8,
    pub title_color: Color,
    pub item_color: Color,
    pub selected_item_color: Color,
    pub highlight_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 460,
            height: 320,
            background_color: Color::RGB(24, 26, 36),
            border_color: Color::RGB(110, 110, 130),
            overlay_alpha: 170,
            title_color: Color::RGB(245, 210, 90),
            item_color: Color::RGB(165, 165, 175),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(70, 90, 135),
        }
    }
}

/// A fixed list of selectable entries rendered in a centered box.
pub struct Menu {
    title: &'static str,
    items: Vec<&'static str>,
    selected_index: usize,
    style: MenuStyle,
}

impl Menu {
    pub fn new(title: &'static str, items: Vec<&'static str>) -> Self {
        Menu {
            title,
            items,
            selected_index: 0,
            style: MenuStyle::default(),
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        // Darken whatever is behind the menu
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        let (screen_width, screen_height) = canvas.logical_size();
        let menu_x = (screen_width.saturating_sub(self.style.width)) / 2;
        let menu_y = (screen_height.saturating_sub(self.style.height)) / 2;
        let center_x = (screen_width / 2) as i32;

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(Rect::new(
            menu_x as i32,
            menu_y as i32,
            self.style.width,
            self.style.height,
        ))?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(Rect::new(
            menu_x as i32,
            menu_y as i32,
            self.style.width,
            self.style.height,
        ))?;

        draw_text_centered(
            canvas,
            self.title,
            center_x,
            (menu_y + 36) as i32,
            self.style.title_color,
            4,
        )?;

        let item_height = 56;
        let item_start_y = menu_y + 120;

        for (i, item) in self.items.iter().enumerate() {
            let item_y = item_start_y + i as u32 * item_height;
            let is_selected = i == self.selected_index;

            if is_selected {
                let highlight_w = text_width(item, 3) + 40;
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(Rect::new(
                    center_x - highlight_w as i32 / 2,
                    item_y as i32 - 6,
                    highlight_w,
                    34,
                ))?;
            }

            let color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };
            draw_text_centered(canvas, item, center_x, item_y as i32, color, 3)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut menu = Menu::new("TEST", vec!["A", "B", "C"]);
        assert_eq!(menu.selected_index(), 0);

        menu.select_previous();
        assert_eq!(menu.selected_index(), 2);

        menu.select_next();
        assert_eq!(menu.selected_index(), 0);

        menu.select_next();
        assert_eq!(menu.selected_index(), 1);
    }
}
