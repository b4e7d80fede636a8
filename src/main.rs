//! Juego Clicker - a tiny desktop clicker game.
//!
//! Every click on the button bumps the counter and swaps the button image.
//! The count is saved to `clicker_state.txt` when the window is closed and
//! restored on the next start.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod ui;
mod utils;

use app::App;
use config::ConfigManager;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ConfigManager::new().load();

    // Fixed-size window, centered on screen
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )
}
