//! The game itself: counter, hover hint and the image button.

use crate::config::Config;
use crate::core::game_state::{GameState, ImageCycle};
use crate::core::persistence::{LoadOutcome, StateStore};
use crate::ui::images;
use crate::ui::pointer::{PointerDispatcher, PointerListener, PointerSnapshot};
use crate::ui::theme;
use egui::{Rect, RichText, TextureHandle, TextureOptions, Ui, Vec2};

/// Game state plus the widgets that show it.
pub struct GamePanel {
    ctx: egui::Context,

    state: GameState,
    store: StateStore,
    images: ImageCycle,

    // Hint label
    hint_text: String,
    hint: String,

    // Button
    button_size: f32,
    image_rect: Option<Rect>,
    texture: Option<TextureHandle>,
    shown_index: Option<usize>,
    pointer: PointerDispatcher,
}

impl GamePanel {
    /// Build the panel. The saved count is restored before anything is drawn.
    pub fn new(ctx: &egui::Context, config: &Config) -> Self {
        let store = StateStore::new(&config.state_file);
        let state = load_state(&store);

        let mut panel = Self {
            ctx: ctx.clone(),
            state,
            store,
            images: ImageCycle::new(config.image_paths.clone()),
            hint_text: config.hint_text.clone(),
            hint: String::new(),
            button_size: config.button_size,
            image_rect: None,
            texture: None,
            shown_index: None,
            pointer: PointerDispatcher::default(),
        };
        panel.refresh_image();
        panel
    }

    pub fn click_count(&self) -> u64 {
        self.state.click_count
    }

    pub fn image_index(&self) -> usize {
        self.images.index()
    }

    /// Index of the image actually on the button, if any loaded yet.
    #[cfg(test)]
    pub fn shown_image_index(&self) -> Option<usize> {
        self.shown_index
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Where the button image was drawn in the last frame.
    #[cfg(test)]
    pub fn image_rect(&self) -> Option<Rect> {
        self.image_rect
    }

    /// Write the click count to the state file. Failures are only logged.
    pub fn save_game_state(&self) {
        match self.store.save(&self.state) {
            Ok(()) => log::info!(
                "Game state saved to {}: {}",
                self.store.path().display(),
                self.click_count()
            ),
            Err(e) => log::error!("{e}"),
        }
    }

    pub fn render_counter(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(self.state.counter_text())
                    .size(24.0)
                    .strong()
                    .color(theme::accent_color()),
            );
        });
    }

    pub fn render(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(self.hint())
                    .size(18.0)
                    .color(theme::hint_color()),
            );

            let size = Vec2::splat(self.button_size);
            let (response, image_rect) = match &self.texture {
                Some(texture) => {
                    let response = ui.add(egui::ImageButton::new(
                        egui::load::SizedTexture::new(texture.id(), size),
                    ));
                    // The frame adds padding around the image
                    let image_rect = response.rect.shrink2(ui.spacing().button_padding);
                    (response, image_rect)
                }
                None => {
                    let response = ui.add_sized(size, egui::Button::new(""));
                    let image_rect = response.rect;
                    (response, image_rect)
                }
            };
            self.image_rect = Some(image_rect);

            let mut pointer = std::mem::take(&mut self.pointer);
            pointer.dispatch(PointerSnapshot::from(&response), self);
            self.pointer = pointer;
        });
    }

    /// Put the current image on the button, scaled to the button.
    ///
    /// On failure the previous image stays.
    fn refresh_image(&mut self) {
        let index = self.image_index();
        let path = self.images.current();
        let size = images::target_size(self.image_rect.map(|rect| rect.size()), self.button_size);

        match images::load_scaled(path, size) {
            Ok(image) => {
                match &mut self.texture {
                    Some(texture) => texture.set(image, TextureOptions::LINEAR),
                    None => {
                        self.texture =
                            Some(self.ctx.load_texture("click_button", image, TextureOptions::LINEAR))
                    }
                }
                self.shown_index = Some(index);
            }
            Err(e) => log::error!("Error loading button image: {e}\n{e:?}"),
        }
    }
}

impl PointerListener for GamePanel {
    fn on_enter(&mut self) {
        self.hint = self.hint_text.clone();
    }

    fn on_exit(&mut self) {
        self.hint.clear();
    }

    fn on_press(&mut self) {}

    fn on_release(&mut self) {}

    fn on_click(&mut self) {
        self.state.click();
        self.images.advance();
        self.refresh_image();
    }
}

fn load_state(store: &StateStore) -> GameState {
    let mut state = GameState::default();
    match store.load(&mut state) {
        Ok(LoadOutcome::Restored(count)) => log::info!("Game state loaded: {count}"),
        Ok(LoadOutcome::Missing) => log::info!("No previous state found. Starting from 0."),
        Ok(LoadOutcome::Empty) => log::info!("State file is empty. Starting from 0."),
        Err(e) => log::error!("Error loading game state: {e}"),
    }
    state
}
