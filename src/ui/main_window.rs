//! Main application window.
//!
//! Hosts the game panel and handles the window lifecycle: the exit
//! confirmation and the "welcome back" message after un-minimizing.

use crate::config::Config;
use crate::ui::game_panel::GamePanel;
use crate::ui::status::TransientMessage;
use crate::ui::theme;
use egui::{Align2, RichText, ViewportCommand};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitState {
    Open,
    Confirming,
    Confirmed,
}

/// Detects the minimized -> restored transition.
#[derive(Debug, Default)]
struct MinimizeTracker {
    minimized: bool,
    unknown_reported: bool,
}

impl MinimizeTracker {
    /// Feed the current minimized flag; true when the window was just restored.
    fn observe(&mut self, minimized: Option<bool>) -> bool {
        let Some(minimized) = minimized else {
            if !self.unknown_reported {
                log::debug!(
                    "Window backend does not report the minimized state; no welcome back message"
                );
                self.unknown_reported = true;
            }
            return false;
        };
        let restored = self.minimized && !minimized;
        self.minimized = minimized;
        restored
    }
}

/// Main window state.
pub struct MainWindow {
    panel: GamePanel,

    // Status region
    status: TransientMessage,
    welcome_message: String,
    minimize: MinimizeTracker,

    // Exit confirmation
    exit_state: ExitState,
    exit_prompt: String,

    theme_applied: bool,
}

impl MainWindow {
    pub fn new(ctx: &egui::Context, config: &Config) -> Self {
        Self {
            panel: GamePanel::new(ctx, config),
            status: TransientMessage::new(Duration::from_millis(config.welcome_duration_ms)),
            welcome_message: config.welcome_message.clone(),
            minimize: MinimizeTracker::default(),
            exit_state: ExitState::Open,
            exit_prompt: config.exit_prompt.clone(),
            theme_applied: false,
        }
    }

    pub fn status_text(&self) -> &str {
        self.status.text()
    }

    /// The window was asked to close. Returns true if it may close now;
    /// otherwise the confirmation prompt is shown.
    pub fn on_close_requested(&mut self) -> bool {
        if self.exit_state == ExitState::Confirmed {
            return true;
        }
        self.exit_state = ExitState::Confirming;
        false
    }

    /// Answer to the exit prompt. Saves and returns true if the window
    /// should close.
    pub fn answer_exit_prompt(&mut self, confirmed: bool) -> bool {
        if self.exit_state != ExitState::Confirming {
            return false;
        }

        if !confirmed {
            self.exit_state = ExitState::Open;
            return false;
        }

        self.panel.save_game_state();
        log::info!("Game state saved. Closing the window...");
        self.exit_state = ExitState::Confirmed;
        true
    }

    /// Track the minimized flag and greet the player on restore.
    pub fn observe_minimized(&mut self, minimized: Option<bool>, now: Instant) {
        if self.minimize.observe(minimized) {
            self.status.show(self.welcome_message.clone(), now);
        }
    }

    /// Clear the status message once its time is up.
    pub fn tick(&mut self, now: Instant) {
        self.status.expire(now);
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_dark_theme(ctx);
            self.theme_applied = true;
        }

        let now = Instant::now();
        let (close_requested, minimized) =
            ctx.input(|i| (i.viewport().close_requested(), i.viewport().minimized));

        if close_requested && !self.on_close_requested() {
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
        }

        self.observe_minimized(minimized, now);
        self.tick(now);
        if let Some(remaining) = self.status.remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        let confirming = self.exit_state == ExitState::Confirming;

        egui::TopBottomPanel::top("counter").show(ctx, |ui| {
            self.panel.render_counter(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!confirming, |ui| {
                self.panel.render(ui);
            });
        });

        if confirming {
            self.render_exit_prompt(ctx);
        }
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(self.status_text()).color(theme::success_color()));
        });
    }

    fn render_exit_prompt(&mut self, ctx: &egui::Context) {
        let mut open = true;
        let mut answer = None;

        egui::Window::new("Confirm exit")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(format!("⚠ {}", self.exit_prompt)).color(theme::warning_color()),
                );
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("No").clicked() {
                        answer = Some(false);
                    }
                });
            });

        // Closing the prompt counts as "no"
        if !open {
            answer = Some(false);
        }

        if let Some(confirmed) = answer {
            self.resolve_exit_prompt(ctx, confirmed);
        }
    }

    /// Apply the player's answer and close the viewport if they confirmed.
    fn resolve_exit_prompt(&mut self, ctx: &egui::Context, confirmed: bool) {
        if self.answer_exit_prompt(confirmed) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pointer::PointerListener;
    use egui::{
        Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Rect, ViewportEvent,
        ViewportId,
    };
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config {
            state_file: dir.path().join("clicker_state.txt"),
            image_paths: [dir.path().join("a.png"), dir.path().join("b.png")],
            ..Config::default()
        }
    }

    fn window_in(dir: &TempDir) -> (MainWindow, Config) {
        let config = config_in(dir);
        (MainWindow::new(&egui::Context::default(), &config), config)
    }

    fn input(time: f64, events: Vec<Event>, close: bool) -> RawInput {
        let mut input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(300.0, 200.0))),
            time: Some(time),
            events,
            ..Default::default()
        };
        if close {
            input
                .viewports
                .entry(ViewportId::ROOT)
                .or_default()
                .events
                .push(ViewportEvent::Close);
        }
        input
    }

    fn sent(output: &FullOutput, wanted: fn(&ViewportCommand) -> bool) -> bool {
        output
            .viewport_output
            .get(&ViewportId::ROOT)
            .is_some_and(|viewport| viewport.commands.iter().any(wanted))
    }

    fn cancel_close(cmd: &ViewportCommand) -> bool {
        matches!(cmd, ViewportCommand::CancelClose)
    }

    fn close(cmd: &ViewportCommand) -> bool {
        matches!(cmd, ViewportCommand::Close)
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_declining_exit_keeps_window_open() {
        let dir = tempfile::tempdir().unwrap();
        let (mut window, config) = window_in(&dir);
        window.panel.on_click();

        assert!(!window.on_close_requested());
        assert!(!window.answer_exit_prompt(false));
        assert!(!config.state_file.exists());

        // Asking again shows the prompt again
        assert!(!window.on_close_requested());
        assert_eq!(window.exit_state, ExitState::Confirming);
    }

    #[test]
    fn test_confirming_exit_saves_once_and_closes() {
        let dir = tempfile::tempdir().unwrap();
        let (mut window, config) = window_in(&dir);
        for _ in 0..3 {
            window.panel.on_click();
        }

        assert!(!window.on_close_requested());
        assert!(window.answer_exit_prompt(true));
        assert_eq!(std::fs::read_to_string(&config.state_file).unwrap(), "3");

        // A second answer does not save again
        std::fs::write(&config.state_file, "marker").unwrap();
        assert!(!window.answer_exit_prompt(true));
        assert_eq!(std::fs::read_to_string(&config.state_file).unwrap(), "marker");

        // The close that follows goes through
        assert!(window.on_close_requested());
    }

    #[test]
    fn test_answer_without_prompt_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let (mut window, config) = window_in(&dir);

        assert!(!window.answer_exit_prompt(true));
        assert!(!config.state_file.exists());
        assert_eq!(window.exit_state, ExitState::Open);
    }

    #[test]
    fn test_welcome_back_after_restore() {
        let dir = tempfile::tempdir().unwrap();
        let (mut window, _config) = window_in(&dir);
        let start = Instant::now();

        window.observe_minimized(Some(false), start);
        assert_eq!(window.status_text(), "");

        window.observe_minimized(Some(true), start);
        window.observe_minimized(None, start);
        assert_eq!(window.status_text(), "");

        window.observe_minimized(Some(false), start);
        assert_eq!(window.status_text(), "You're back!");

        window.tick(start + Duration::from_millis(2999));
        assert_eq!(window.status_text(), "You're back!");

        window.tick(start + Duration::from_millis(3000));
        assert_eq!(window.status_text(), "");
    }

    #[test]
    fn test_second_restore_restarts_timer() {
        let dir = tempfile::tempdir().unwrap();
        let (mut window, _config) = window_in(&dir);
        let start = Instant::now();

        window.observe_minimized(Some(true), start);
        window.observe_minimized(Some(false), start);

        let later = start + Duration::from_secs(2);
        window.observe_minimized(Some(true), later);
        window.observe_minimized(Some(false), later);

        window.tick(start + Duration::from_millis(4500));
        assert_eq!(window.status_text(), "You're back!");

        window.tick(later + Duration::from_millis(3000));
        assert_eq!(window.status_text(), "");
    }

    #[test]
    fn test_close_request_is_cancelled_until_confirmed() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let ctx = egui::Context::default();
        let mut window = MainWindow::new(&ctx, &config);
        window.panel.on_click();
        window.panel.on_click();

        let output = ctx.run(input(0.0, vec![], true), |ctx| window.render(ctx));
        assert!(sent(&output, cancel_close));
        assert!(!sent(&output, close));
        assert_eq!(window.exit_state, ExitState::Confirming);

        let output = ctx.run(input(0.1, vec![], false), |ctx| {
            window.render(ctx);
            window.resolve_exit_prompt(ctx, true);
        });
        assert!(sent(&output, close));
        assert_eq!(std::fs::read_to_string(&config.state_file).unwrap(), "2");

        // The close that follows is let through
        let output = ctx.run(input(0.2, vec![], true), |ctx| window.render(ctx));
        assert!(!sent(&output, cancel_close));
    }

    #[test]
    fn test_declined_close_keeps_viewport_open() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let ctx = egui::Context::default();
        let mut window = MainWindow::new(&ctx, &config);

        let output = ctx.run(input(0.0, vec![], true), |ctx| window.render(ctx));
        assert!(sent(&output, cancel_close));

        let output = ctx.run(input(0.1, vec![], false), |ctx| {
            window.render(ctx);
            window.resolve_exit_prompt(ctx, false);
        });
        assert!(!sent(&output, close));
        assert!(!config.state_file.exists());
        assert_eq!(window.exit_state, ExitState::Open);

        let output = ctx.run(input(0.2, vec![], true), |ctx| window.render(ctx));
        assert!(sent(&output, cancel_close));
    }

    #[test]
    fn test_pointer_on_button_drives_the_game() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut window = MainWindow::new(&ctx, &config_in(&dir));

        let _ = ctx.run(input(0.0, vec![], false), |ctx| window.render(ctx));
        let target = window.panel.image_rect().unwrap().center();

        let _ = ctx.run(input(0.1, vec![Event::PointerMoved(target)], false), |ctx| {
            window.render(ctx)
        });
        assert_eq!(window.panel.hint(), "Click here!");

        let _ = ctx.run(input(0.2, vec![button(target, true)], false), |ctx| {
            window.render(ctx)
        });
        let _ = ctx.run(input(0.3, vec![button(target, false)], false), |ctx| {
            window.render(ctx)
        });
        assert_eq!(window.panel.click_count(), 1);
        assert_eq!(window.panel.image_index(), 1);

        let _ = ctx.run(input(0.4, vec![Event::PointerGone], false), |ctx| {
            window.render(ctx)
        });
        assert_eq!(window.panel.hint(), "");
        assert_eq!(window.panel.click_count(), 1);
    }

    #[test]
    fn test_unknown_minimized_state_is_reported_once() {
        let mut tracker = MinimizeTracker::default();
        assert!(!tracker.observe(None));
        assert!(tracker.unknown_reported);
        assert!(!tracker.observe(None));
        assert!(!tracker.observe(Some(false)));
    }
}
