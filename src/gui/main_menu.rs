//! Main menu wrapper with typed options.

use sdl2::render::Canvas;
use sdl2::video::Window;

use super::Menu;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MainMenuOption {
    StartGame,
    About,
    Quit,
}

/// Type-safe wrapper around the base [`Menu`] for the title screen.
pub struct MainMenu {
    menu: Menu,
}

impl MainMenu {
    pub fn new() -> Self {
        MainMenu {
            menu: Menu::new("ROAD RUSH", vec!["START GAME", "ABOUT", "QUIT"]),
        }
    }

    pub fn navigate_up(&mut self) {
        self.menu.select_previous();
    }

    pub fn navigate_down(&mut self) {
        self.menu.select_next();
    }

    pub fn selected_option(&self) -> MainMenuOption {
        match self.menu.selected_index() {
            0 => MainMenuOption::StartGame,
            1 => MainMenuOption::About,
            _ => MainMenuOption::Quit,
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.menu.render(canvas)
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}
