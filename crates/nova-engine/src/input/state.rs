use std::borrow::Borrow;
use std::collections::HashSet;

use glam::Vec2;

use super::queue::InputEvent;

/// Keys the engine names. Values are DOM `keyCode`s so the host can forward
/// `KeyboardEvent.keyCode` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Key {
    Enter = 13,
    Escape = 27,
    Space = 32,
    ArrowLeft = 37,
    ArrowUp = 38,
    ArrowRight = 39,
    ArrowDown = 40,
}

impl Key {
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Per-frame input snapshot.
///
/// Events are folded in once at the start of a frame and read synchronously
/// by game code. Key state persists across frames until a `KeyUp`; the click
/// flag stays set until game code consumes it with
/// [`reset_mouse_clicked`](Self::reset_mouse_clicked).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_down: HashSet<u32>,
    mouse_clicked: bool,
    mouse_click_position: Vec2,
    pointer_position: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of queued events into the snapshot, in arrival order.
    pub fn apply<E: Borrow<InputEvent>>(&mut self, events: impl IntoIterator<Item = E>) {
        for event in events {
            match *event.borrow() {
                InputEvent::KeyDown { key_code } => {
                    self.keys_down.insert(key_code);
                }
                InputEvent::KeyUp { key_code } => {
                    self.keys_down.remove(&key_code);
                }
                InputEvent::PointerDown { x, y } => {
                    self.pointer_position = Vec2::new(x, y);
                }
                InputEvent::PointerUp { x, y } => {
                    // A click completes on release, like the DOM `click` event.
                    self.mouse_clicked = true;
                    self.mouse_click_position = Vec2::new(x, y);
                    self.pointer_position = Vec2::new(x, y);
                }
                InputEvent::PointerMove { x, y } => {
                    self.pointer_position = Vec2::new(x, y);
                }
            }
        }
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key.code())
    }

    pub fn is_key_up(&self, key: Key) -> bool {
        !self.is_key_down(key)
    }

    pub fn mouse_clicked(&self) -> bool {
        self.mouse_clicked
    }

    /// Position of the most recent click, in stage coordinates.
    pub fn mouse_click_position(&self) -> Vec2 {
        self.mouse_click_position
    }

    pub fn pointer_position(&self) -> Vec2 {
        self.pointer_position
    }

    /// Consume the pending click.
    pub fn reset_mouse_clicked(&mut self) {
        self.mouse_clicked = false;
    }

    /// Release every key and drop any pending click.
    pub fn clear(&mut self) {
        self.keys_down.clear();
        self.mouse_clicked = false;
    }
}
