//! User interface: the main window and the game panel it hosts.

pub mod game_panel;
pub mod images;
pub mod main_window;
pub mod pointer;
pub mod status;
pub mod theme;
