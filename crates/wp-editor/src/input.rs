//! Input abstraction layer.
//!
//! Normalizes mouse and touch events into a unified `InputEvent` enum
//! consumed by the interaction controller. Positions are screen pixels
//! relative to the editor container's top-left corner.

/// Which button started a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, touch, or pen contact.
    Primary,
    /// Right mouse button.
    Secondary,
    Other,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            2 => Self::Secondary,
            _ => Self::Other,
        }
    }
}

/// A normalized input event from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown {
        x: f64,
        y: f64,
        button: PointerButton,
    },

    /// Pointer moved.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },

    /// Double click / double tap.
    DoubleClick { x: f64, y: f64 },

    /// Secondary click (context menu request).
    ContextMenu { x: f64, y: f64 },

    /// Keyboard shortcut.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    /// A press with the DOM button code the host received.
    pub fn pointer_down(x: f64, y: f64, button: i16) -> Self {
        Self::PointerDown {
            x,
            y,
            button: PointerButton::from_dom(button),
        }
    }

    pub fn key(key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Self::Key {
            key: key.to_string(),
            ctrl,
            shift,
            alt,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_button_codes() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(1), PointerButton::Other);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(-1), PointerButton::Other);
    }

    #[test]
    fn right_press_keeps_its_button() {
        assert_eq!(
            InputEvent::pointer_down(5.0, 6.0, 2),
            InputEvent::PointerDown {
                x: 5.0,
                y: 6.0,
                button: PointerButton::Secondary
            }
        );
    }
}
