//! Pointer and keyboard events delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button; the only one that drives the canvas.
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Move { position: Point },
    Up { position: Point, button: MouseButton },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position, .. } => position,
        }
    }
}

/// Keys the canvas reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Delete,
    Escape,
    Other(String),
}

impl Key {
    /// Map a host key name (e.g. `"Delete"`, `"Escape"`, `"Esc"`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Delete" | "Del" => Key::Delete,
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Keyboard event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Pointer tracking across events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known pointer position (`None` until the first event).
    pub pointer_position: Option<Point>,
    primary_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer event.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) {
        self.pointer_position = Some(event.position());
        match *event {
            PointerEvent::Down { button, .. } if button.is_primary() => self.primary_pressed = true,
            PointerEvent::Up { button, .. } if button.is_primary() => self.primary_pressed = false,
            _ => {}
        }
    }

    pub fn is_primary_pressed(&self) -> bool {
        self.primary_pressed
    }
}
