//! Base widget trait

use halo_core::{InteractionState, PointerEvent};
use halo_theme::{Theme, ThemeContext};

/// Base trait for all widgets
pub trait Widget {
    /// Resolved visual values the host draws
    type Attributes;

    /// Current interaction snapshot
    fn interaction(&self) -> InteractionState;

    /// Resolve attributes against an explicit theme
    fn attributes(&self, theme: &Theme) -> Self::Attributes;

    /// Resolve attributes against the innermost theme of a context
    fn attributes_in(&self, ctx: &ThemeContext) -> Self::Attributes {
        self.attributes(&ctx.current())
    }

    /// Handle a pointer event; returns true if the widget's action ran
    fn handle_event(&mut self, event: PointerEvent) -> bool;
}
