//! Color tokens for theming

use halo_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryVariant,

    // Status colors
    Success,
    Warning,
    Error,
    Info,

    // Surfaces
    Background,
    Surface,
    OnBackground,
    OnSurface,

    // Controls
    Separator,
    ControlBackground,
    SelectedContentBackground,
    SecondaryBackground,
    TertiaryBackground,

    // Text
    PrimaryText,
    SecondaryText,
    TertiaryText,
    QuaternaryText,
}

impl ColorToken {
    pub const ALL: [ColorToken; 19] = [
        ColorToken::Primary,
        ColorToken::PrimaryVariant,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Error,
        ColorToken::Info,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::OnBackground,
        ColorToken::OnSurface,
        ColorToken::Separator,
        ColorToken::ControlBackground,
        ColorToken::SelectedContentBackground,
        ColorToken::SecondaryBackground,
        ColorToken::TertiaryBackground,
        ColorToken::PrimaryText,
        ColorToken::SecondaryText,
        ColorToken::TertiaryText,
        ColorToken::QuaternaryText,
    ];

    /// Snake-case name used in theme files
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryVariant => "primary_variant",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Error => "error",
            ColorToken::Info => "info",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::OnBackground => "on_background",
            ColorToken::OnSurface => "on_surface",
            ColorToken::Separator => "separator",
            ColorToken::ControlBackground => "control_background",
            ColorToken::SelectedContentBackground => "selected_content_background",
            ColorToken::SecondaryBackground => "secondary_background",
            ColorToken::TertiaryBackground => "tertiary_background",
            ColorToken::PrimaryText => "primary_text",
            ColorToken::SecondaryText => "secondary_text",
            ColorToken::TertiaryText => "tertiary_text",
            ColorToken::QuaternaryText => "quaternary_text",
        }
    }

    pub fn from_name(name: &str) -> Option<ColorToken> {
        ColorToken::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    // Brand colors
    pub primary: Color,
    pub primary_variant: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub on_background: Color,
    pub on_surface: Color,

    // Controls
    pub separator: Color,
    pub control_background: Color,
    pub selected_content_background: Color,
    pub secondary_background: Color,
    pub tertiary_background: Color,

    // Text
    pub primary_text: Color,
    pub secondary_text: Color,
    pub tertiary_text: Color,
    pub quaternary_text: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryVariant => self.primary_variant,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::Info => self.info,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::OnBackground => self.on_background,
            ColorToken::OnSurface => self.on_surface,
            ColorToken::Separator => self.separator,
            ColorToken::ControlBackground => self.control_background,
            ColorToken::SelectedContentBackground => self.selected_content_background,
            ColorToken::SecondaryBackground => self.secondary_background,
            ColorToken::TertiaryBackground => self.tertiary_background,
            ColorToken::PrimaryText => self.primary_text,
            ColorToken::SecondaryText => self.secondary_text,
            ColorToken::TertiaryText => self.tertiary_text,
            ColorToken::QuaternaryText => self.quaternary_text,
        }
    }

    fn slot_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryVariant => &mut self.primary_variant,
            ColorToken::Success => &mut self.success,
            ColorToken::Warning => &mut self.warning,
            ColorToken::Error => &mut self.error,
            ColorToken::Info => &mut self.info,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::OnBackground => &mut self.on_background,
            ColorToken::OnSurface => &mut self.on_surface,
            ColorToken::Separator => &mut self.separator,
            ColorToken::ControlBackground => &mut self.control_background,
            ColorToken::SelectedContentBackground => &mut self.selected_content_background,
            ColorToken::SecondaryBackground => &mut self.secondary_background,
            ColorToken::TertiaryBackground => &mut self.tertiary_background,
            ColorToken::PrimaryText => &mut self.primary_text,
            ColorToken::SecondaryText => &mut self.secondary_text,
            ColorToken::TertiaryText => &mut self.tertiary_text,
            ColorToken::QuaternaryText => &mut self.quaternary_text,
        }
    }

    /// Copy of this set with one slot replaced
    pub fn with(mut self, token: ColorToken, color: Color) -> Self {
        *self.slot_mut(token) = color;
        self
    }

    /// Linear interpolation between two color token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        ColorToken::ALL
            .into_iter()
            .fold(from.clone(), |set, token| {
                set.with(token, Color::lerp(&from.get(token), &to.get(token), t))
            })
    }

    /// Light palette
    pub fn light() -> Self {
        let primary = Color::rgb(0.0, 0.48, 1.0);
        Self {
            primary,
            primary_variant: Color::rgb(0.0, 0.4, 0.85),
            success: Color::rgb(0.2, 0.78, 0.35),
            warning: Color::rgb(1.0, 0.58, 0.0),
            error: Color::rgb(1.0, 0.23, 0.19),
            info: Color::rgb(0.35, 0.68, 0.95),
            background: Color::gray(0.98),
            surface: Color::WHITE,
            on_background: Color::BLACK,
            on_surface: Color::BLACK,
            separator: Color::gray(0.9),
            control_background: Color::gray(0.95),
            selected_content_background: primary.with_alpha(0.1),
            secondary_background: Color::gray(0.96),
            tertiary_background: Color::gray(0.94),
            primary_text: Color::BLACK,
            secondary_text: Color::gray(0.4),
            tertiary_text: Color::gray(0.6),
            quaternary_text: Color::gray(0.75),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        let primary = Color::rgb(0.1, 0.55, 1.0);
        Self {
            primary,
            primary_variant: Color::rgb(0.25, 0.65, 1.0),
            success: Color::rgb(0.3, 0.85, 0.4),
            warning: Color::rgb(1.0, 0.65, 0.1),
            error: Color::rgb(1.0, 0.35, 0.3),
            info: Color::rgb(0.45, 0.75, 1.0),
            background: Color::gray(0.1),
            surface: Color::gray(0.15),
            on_background: Color::WHITE,
            on_surface: Color::WHITE,
            separator: Color::gray(0.3),
            control_background: Color::gray(0.2),
            selected_content_background: primary.with_alpha(0.2),
            secondary_background: Color::gray(0.18),
            tertiary_background: Color::gray(0.22),
            primary_text: Color::WHITE,
            secondary_text: Color::gray(0.7),
            tertiary_text: Color::gray(0.5),
            quaternary_text: Color::gray(0.3),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}
