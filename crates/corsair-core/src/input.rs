//! Raw key events from the input source and their control mapping.
//!
//! Events are queued as they arrive and drained at the next frame
//! boundary, so handlers and decay agree on the idle-flag semantics.

use serde::{Deserialize, Serialize};

/// A raw key event, identified by its label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyDown { key: String },
    KeyUp { key: String },
}

/// A control channel a key maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Throttle forward.
    Ahead,
    /// Throttle reverse.
    Astern,
    /// Turn right (negative heading rate).
    Starboard,
    /// Turn left (positive heading rate).
    Port,
}

/// The motion axis a control drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAxis {
    Linear,
    Angular,
}

impl Control {
    pub fn axis(&self) -> ControlAxis {
        match self {
            Control::Ahead | Control::Astern => ControlAxis::Linear,
            Control::Starboard | Control::Port => ControlAxis::Angular,
        }
    }
}

/// Map a key label to its control. Unrecognized keys map to None and are
/// ignored upstream.
///
/// ArrowLeft steers starboard and ArrowRight steers port. The crossed
/// arrow mapping is the game's original behavior, kept literally.
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "w" | "ArrowUp" => Some(Control::Ahead),
        "s" | "ArrowDown" => Some(Control::Astern),
        "d" | "ArrowLeft" => Some(Control::Starboard),
        "a" | "ArrowRight" => Some(Control::Port),
        _ => None,
    }
}
