//! Button widget with state-machine-driven interactions
//!
//! The Button widget provides:
//! - Visual states: idle, hovered, pressed, disabled
//! - An explicit interaction tracker fed by discrete pointer events
//! - Theme-resolved appearance through [`resolve_style`]
//! - A click callback that runs once per completed press

use halo_core::{
    Activation, InteractionPhase, InteractionState, InteractionTracker, PointerEvent,
};
use halo_theme::Theme;

use crate::style::{resolve_style, ButtonAttributes, ButtonSize, ButtonVariant};
use crate::widget::Widget;

/// Button configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonConfig {
    /// Button label text
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    /// Whether the button is disabled
    pub disabled: bool,
}

impl ButtonConfig {
    /// Create a new button config with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Button widget
pub struct Button {
    config: ButtonConfig,
    tracker: InteractionTracker,
    /// Set on activation, cleared when read
    clicked: bool,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl Button {
    /// Create a new button
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_config(ButtonConfig::new(label))
    }

    /// Create a button with custom config
    pub fn with_config(config: ButtonConfig) -> Self {
        let tracker = InteractionTracker::with_enabled(!config.disabled);
        Self {
            config,
            tracker,
            clicked: false,
            on_click: None,
        }
    }

    /// Set the click callback
    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn phase(&self) -> InteractionPhase {
        self.tracker.phase()
    }

    pub fn tracker(&self) -> &InteractionTracker {
        &self.tracker
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.tracker.set_hovered(hovered);
    }

    /// Report the pointer-down-inside flag; returns true if the click ran
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        let activation = self.tracker.set_pressed(pressed);
        self.activate(activation)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.disabled = !enabled;
        self.tracker.set_enabled(enabled);
    }

    /// Check if the button was clicked and clear the flag
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    fn activate(&mut self, activation: Option<Activation>) -> bool {
        let Some(Activation) = activation else {
            return false;
        };
        tracing::debug!(label = %self.config.label, "button activated");
        self.clicked = true;
        if let Some(callback) = self.on_click.as_mut() {
            callback();
        }
        true
    }
}

impl Widget for Button {
    type Attributes = ButtonAttributes;

    fn interaction(&self) -> InteractionState {
        self.tracker.state()
    }

    fn attributes(&self, theme: &Theme) -> ButtonAttributes {
        resolve_style(
            self.config.variant,
            self.config.size,
            self.interaction(),
            theme,
        )
    }

    fn handle_event(&mut self, event: PointerEvent) -> bool {
        let activation = self.tracker.send(event);
        self.activate(activation)
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("config", &self.config)
            .field("phase", &self.tracker.phase())
            .field("clicked", &self.clicked)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Create a button with a label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        config: ButtonConfig::new(label),
        on_click: None,
    }
}

/// Builder for creating buttons
pub struct ButtonBuilder {
    config: ButtonConfig,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl ButtonBuilder {
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn primary(self) -> Self {
        self.variant(ButtonVariant::Primary)
    }

    pub fn secondary(self) -> Self {
        self.variant(ButtonVariant::Secondary)
    }

    pub fn text(self) -> Self {
        self.variant(ButtonVariant::Text)
    }

    pub fn destructive(self) -> Self {
        self.variant(ButtonVariant::Destructive)
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.config.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set the click callback
    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Build the button widget
    pub fn build(self) -> Button {
        let mut button = Button::with_config(self.config);
        button.on_click = self.on_click;
        button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_button() -> (Button, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let button = button("Save")
            .on_click(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .build();
        (button, count)
    }

    #[test]
    fn test_button_creation() {
        let button = Button::new("Click me");
        assert_eq!(button.label(), "Click me");
        assert_eq!(button.phase(), InteractionPhase::Idle);
        assert_eq!(button.config().variant, ButtonVariant::Primary);
        assert_eq!(button.config().size, ButtonSize::Medium);
    }

    #[test]
    fn test_button_state_transitions() {
        let (mut button, count) = counting_button();

        assert!(!button.handle_event(PointerEvent::Enter));
        assert_eq!(button.phase(), InteractionPhase::Hovered);

        assert!(!button.handle_event(PointerEvent::Down));
        assert_eq!(button.phase(), InteractionPhase::Pressed);

        assert!(button.handle_event(PointerEvent::Up));
        assert_eq!(button.phase(), InteractionPhase::Hovered);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(button.take_clicked());
        assert!(!button.take_clicked());
    }

    #[test]
    fn test_flag_setters_drive_clicks() {
        let (mut button, count) = counting_button();
        button.set_hovered(true);
        assert!(!button.set_pressed(true));
        assert!(button.set_pressed(false));
        assert!(!button.set_pressed(false));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_button() {
        let (mut button, count) = counting_button();
        button.set_enabled(false);
        assert!(button.config().disabled);
        assert_eq!(button.phase(), InteractionPhase::Disabled);

        for event in PointerEvent::ALL {
            assert!(!button.handle_event(event));
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);

        let config = ButtonConfig::new("Disabled").disabled(true);
        let button = Button::with_config(config);
        assert_eq!(button.phase(), InteractionPhase::Disabled);
        assert!(!button.interaction().enabled);
    }

    #[test]
    fn test_attributes_follow_state() {
        let theme = Theme::light();
        let mut button = button("Delete").destructive().size(ButtonSize::Large).build();

        let idle = button.attributes(&theme);
        assert_eq!(idle.fill_color, theme.colors().error);
        assert_eq!(idle.min_height, 40.0);

        button.handle_event(PointerEvent::Enter);
        let hovered = button.attributes(&theme);
        assert_eq!(hovered.fill_color, theme.colors().error.opacity(0.8));
    }

    #[test]
    fn test_attributes_in_context() {
        let mut ctx = halo_theme::ThemeContext::new();
        let button = button("Open").secondary().build();
        let dark_text = ctx.scope(Theme::dark(), |ctx| button.attributes_in(ctx).text_color);
        assert_eq!(dark_text, Theme::dark().colors().primary);
        assert_eq!(
            button.attributes_in(&ctx).text_color,
            Theme::light().colors().primary
        );
    }
}
