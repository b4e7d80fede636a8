//! Application state and eframe integration.
//!
//! Main application structure implementing eframe::App trait.

use crate::config::Config;
use crate::ui::main_window::MainWindow;
use eframe::egui;

/// Main application state.
pub struct App {
    main_window: MainWindow,
}

impl App {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self {
            main_window: MainWindow::new(&cc.egui_ctx, &config),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.main_window.render(ctx);
    }
}
