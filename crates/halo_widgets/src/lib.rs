//! Halo Widget Library
//!
//! Themed components whose appearance is a pure function of variant, size,
//! interaction state and theme.

pub mod button;
pub mod style;
pub mod widget;

pub use button::{button, Button, ButtonBuilder, ButtonConfig};
pub use style::{
    resolve_style, transition_animation, transition_role, ButtonAttributes, ButtonSize,
    ButtonVariant, ParseStyleError, MIN_TEXT_CONTRAST,
};
pub use widget::Widget;
