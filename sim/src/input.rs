//! Keyboard input state.
//!
//! Input events are delivered asynchronously by the host (browser key
//! events, scripted sequences in tests) through `key_down`/`key_up`, and
//! the resulting pressed-state is polled once per frame by the thrust
//! system. Only current-pressed state matters; there is no event queue.

use bevy_ecs::prelude::*;

/// One of the four thrust axes.
///
/// Eight key names are recognized: the arrow keys plus WASD (both cases),
/// each pair mapping onto the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustKey {
    Up,
    Down,
    Left,
    Right,
}

impl ThrustKey {
    /// Map a DOM-style key name onto a thrust axis.
    /// Unrecognized names return `None` and are ignored by the input state.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "w" | "W" => Some(Self::Up),
            "ArrowDown" | "s" | "S" => Some(Self::Down),
            "ArrowLeft" | "a" | "A" => Some(Self::Left),
            "ArrowRight" | "d" | "D" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Current pressed-state of the four thrust axes.
///
/// Writable only through the two entry points below; systems read it via
/// `Res<InputState>`.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Entry point for host key-press events.
    pub fn key_down(&mut self, name: &str) {
        if let Some(key) = ThrustKey::from_name(name) {
            self.set(key, true);
        }
    }

    /// Entry point for host key-release events.
    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = ThrustKey::from_name(name) {
            self.set(key, false);
        }
    }

    fn set(&mut self, key: ThrustKey, pressed: bool) {
        match key {
            ThrustKey::Up => self.up = pressed,
            ThrustKey::Down => self.down = pressed,
            ThrustKey::Left => self.left = pressed,
            ThrustKey::Right => self.right = pressed,
        }
    }

    /// True while any thrust key is held. Drives fuel burn and the
    /// thrust-flame overlay.
    pub fn any_thrust(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Release all axes (used at session init).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
