//! Pointer events reported by the host input layer
//!
//! The host owns hit testing and gesture recognition. It translates raw input
//! into these discrete notifications, delivered serially per component.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete pointer notification for one component instance
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer entered the component's hit region
    Enter,
    /// Pointer left the component's hit region
    Leave,
    /// Primary button went down inside the hit region
    Down,
    /// Primary button was released
    Up,
}

impl PointerEvent {
    pub const ALL: [PointerEvent; 4] = [
        PointerEvent::Enter,
        PointerEvent::Leave,
        PointerEvent::Down,
        PointerEvent::Up,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PointerEvent::Enter => "enter",
            PointerEvent::Leave => "leave",
            PointerEvent::Down => "down",
            PointerEvent::Up => "up",
        }
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
