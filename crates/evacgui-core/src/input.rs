//! Pointer and keyboard events delivered to the active module.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in screen coordinates of the main panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    Scroll {
        position: Point,
        delta: Vec2,
    },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Scroll { position, .. } => *position,
        }
    }

    /// Button that was pressed or released, if any.
    pub fn button(&self) -> Option<MouseButton> {
        match self {
            PointerEvent::Down { button, .. } | PointerEvent::Up { button, .. } => Some(*button),
            PointerEvent::Move { .. } | PointerEvent::Scroll { .. } => None,
        }
    }
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

impl KeyEvent {
    /// True if this is a press of `key` (case-insensitive).
    pub fn is_press_of(&self, key: &str) -> bool {
        matches!(self, KeyEvent::Pressed(k) if k.eq_ignore_ascii_case(key))
    }
}
