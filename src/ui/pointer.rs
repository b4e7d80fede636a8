//! Pointer events on a widget.
//!
//! egui reports hover and press state per frame; [`PointerDispatcher`] turns
//! that into enter/exit/press/release/click notifications.

/// Receiver of pointer events for one widget.
pub trait PointerListener {
    fn on_enter(&mut self);
    fn on_exit(&mut self);
    fn on_press(&mut self);
    fn on_release(&mut self);
    fn on_click(&mut self);
}

/// Pointer state of a widget in a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerSnapshot {
    pub hovered: bool,
    pub pressed: bool,
    pub clicked: bool,
}

impl From<&egui::Response> for PointerSnapshot {
    fn from(response: &egui::Response) -> Self {
        Self {
            hovered: response.hovered(),
            pressed: response.is_pointer_button_down_on(),
            clicked: response.clicked(),
        }
    }
}

/// Remembers the previous frame and emits the edges.
#[derive(Debug, Default)]
pub struct PointerDispatcher {
    last: PointerSnapshot,
}

impl PointerDispatcher {
    pub fn dispatch(&mut self, now: PointerSnapshot, listener: &mut dyn PointerListener) {
        if now.hovered != self.last.hovered {
            if now.hovered {
                listener.on_enter();
            } else {
                listener.on_exit();
            }
        }

        if now.pressed != self.last.pressed {
            if now.pressed {
                listener.on_press();
            } else {
                listener.on_release();
            }
        }

        if now.clicked {
            listener.on_click();
        }

        self.last = PointerSnapshot {
            clicked: false,
            ..now
        };
    }
}
