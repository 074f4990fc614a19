//! Screen-space GUI: overlay menu and the full-screen mode screens.
//!
//! Everything here renders at fixed screen positions with SDL2 primitives
//! and the bitmap font; no world coordinates, no textures required.

pub mod main_menu;
pub mod menu;
pub mod screens;

pub use main_menu::{MainMenu, MainMenuOption};
pub use menu::{Menu, MenuStyle};
