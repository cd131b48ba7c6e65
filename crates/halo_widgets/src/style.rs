//! Button style resolution
//!
//! [`resolve_style`] maps a variant, a size, an interaction snapshot and a
//! theme to the concrete attributes a host draws. It is pure and total, cheap
//! enough to call on every state change or frame.
//!
//! Precedence: disabled overrides everything, then pressed, then hovered.

use std::fmt;
use std::str::FromStr;

use halo_animation::AnimationConfig;
use halo_core::{Color, InteractionState};
use halo_theme::{
    AnimationRole, ColorTokens, FontDescriptor, RadiusTokens, Shadow, SpacingTokens, Theme,
    TypographyTokens,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum text/fill contrast ratio expected of every enabled state
pub const MIN_TEXT_CONTRAST: f32 = 2.0;

/// Scale applied while pressed
pub const PRESSED_SCALE: f32 = 0.96;

/// Scale applied while hovered
pub const HOVERED_SCALE: f32 = 1.02;

/// Error parsing a variant or size name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStyleError {
    #[error("unknown button variant `{0}`")]
    UnknownVariant(String),
    #[error("unknown button size `{0}`")]
    UnknownSize(String),
}

/// Visual rule-set of a button
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Text,
    Destructive,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Text,
        ButtonVariant::Destructive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Text => "text",
            ButtonVariant::Destructive => "destructive",
        }
    }

    /// Whether the variant casts a shadow
    pub fn is_elevated(self) -> bool {
        matches!(self, ButtonVariant::Primary | ButtonVariant::Destructive)
    }

    fn shades(self, colors: &ColorTokens) -> Shades {
        match self {
            ButtonVariant::Primary => Shades {
                base: colors.primary,
                hover: colors.primary_variant,
                pressed: colors.primary.opacity(0.8),
            },
            ButtonVariant::Secondary => Shades {
                base: Color::TRANSPARENT,
                hover: colors.control_background,
                pressed: colors.control_background.opacity(0.8),
            },
            ButtonVariant::Text => Shades {
                base: Color::TRANSPARENT,
                hover: Color::TRANSPARENT,
                pressed: Color::TRANSPARENT,
            },
            ButtonVariant::Destructive => Shades {
                base: colors.error,
                hover: colors.error.opacity(0.8),
                pressed: colors.error.opacity(0.6),
            },
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonVariant {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStyleError::UnknownVariant(wanted.to_string()))
    }
}

/// Size table a button reads its metrics from
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    pub fn name(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }

    pub fn font(self, typography: &TypographyTokens) -> FontDescriptor {
        match self {
            ButtonSize::Small => typography.caption1,
            ButtonSize::Medium => typography.body,
            ButtonSize::Large => typography.headline,
        }
    }

    pub fn corner_radius(self, radii: &RadiusTokens) -> f32 {
        match self {
            ButtonSize::Small => radii.sm,
            ButtonSize::Medium => radii.md,
            ButtonSize::Large => radii.lg,
        }
    }

    pub fn horizontal_padding(self, spacing: &SpacingTokens) -> f32 {
        match self {
            ButtonSize::Small => spacing.md,
            ButtonSize::Medium => spacing.lg,
            ButtonSize::Large => spacing.xl,
        }
    }

    pub fn vertical_padding(self, spacing: &SpacingTokens) -> f32 {
        match self {
            ButtonSize::Small => spacing.xs,
            ButtonSize::Medium => spacing.sm,
            ButtonSize::Large => spacing.md,
        }
    }

    pub fn min_width(self) -> f32 {
        match self {
            ButtonSize::Small => 60.0,
            ButtonSize::Medium => 80.0,
            ButtonSize::Large => 100.0,
        }
    }

    pub fn min_height(self) -> f32 {
        match self {
            ButtonSize::Small => 24.0,
            ButtonSize::Medium => 32.0,
            ButtonSize::Large => 40.0,
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonSize {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStyleError::UnknownSize(wanted.to_string()))
    }
}

/// Fill colors of one variant
struct Shades {
    base: Color,
    hover: Color,
    pressed: Color,
}

/// Fully resolved visual values for one button in one state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ButtonAttributes {
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub text_color: Color,
    pub font: FontDescriptor,
    pub corner_radius: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub scale: f32,
    pub shadow: Shadow,
}

impl ButtonAttributes {
    /// Interpolate between two resolved states.
    ///
    /// `t` is clamped to `0..=1`. The font switches at the midpoint.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            fill_color: Color::lerp(&from.fill_color, &to.fill_color, t),
            border_color: Color::lerp(&from.border_color, &to.border_color, t),
            border_width: mix(from.border_width, to.border_width),
            text_color: Color::lerp(&from.text_color, &to.text_color, t),
            font: if t < 0.5 { from.font } else { to.font },
            corner_radius: mix(from.corner_radius, to.corner_radius),
            horizontal_padding: mix(from.horizontal_padding, to.horizontal_padding),
            vertical_padding: mix(from.vertical_padding, to.vertical_padding),
            min_width: mix(from.min_width, to.min_width),
            min_height: mix(from.min_height, to.min_height),
            scale: mix(from.scale, to.scale),
            shadow: Shadow::lerp(&from.shadow, &to.shadow, t),
        }
    }

    /// Contrast of the label against the fill as drawn over `backdrop`
    pub fn text_contrast(&self, backdrop: Color) -> f32 {
        let surface = self.fill_color.composite_over(backdrop);
        let text = self.text_color.composite_over(surface);
        text.contrast_ratio(&surface)
    }

    pub fn meets_min_contrast(&self, backdrop: Color) -> bool {
        self.text_contrast(backdrop) >= MIN_TEXT_CONTRAST
    }
}

/// Resolve the attributes of a button.
pub fn resolve_style(
    variant: ButtonVariant,
    size: ButtonSize,
    state: InteractionState,
    theme: &Theme,
) -> ButtonAttributes {
    let colors = theme.colors();
    let shades = variant.shades(colors);

    let fill_color = if !state.enabled {
        shades.base.opacity(0.3)
    } else if state.pressed {
        shades.pressed
    } else if state.hovered {
        shades.hover
    } else {
        shades.base
    };

    let text_color = if !state.enabled {
        colors.quaternary_text
    } else {
        match variant {
            ButtonVariant::Primary => Color::WHITE,
            ButtonVariant::Secondary if fill_color.is_transparent() => colors.primary,
            ButtonVariant::Secondary => colors.on_surface,
            ButtonVariant::Text => colors.primary,
            ButtonVariant::Destructive if fill_color.is_transparent() => colors.error,
            ButtonVariant::Destructive => Color::WHITE,
        }
    };

    let border_width = if variant == ButtonVariant::Secondary {
        1.0
    } else {
        0.0
    };
    let border_color = if !state.enabled {
        colors.separator.opacity(0.5)
    } else if border_width == 0.0 {
        Color::TRANSPARENT
    } else if state.pressed {
        colors.primary.opacity(0.8)
    } else if state.hovered {
        colors.primary.opacity(0.6)
    } else {
        colors.separator
    };

    let scale = if !state.enabled {
        1.0
    } else if state.pressed {
        PRESSED_SCALE
    } else if state.hovered {
        HOVERED_SCALE
    } else {
        1.0
    };

    let elevation = theme.elevation();
    let shadow = if !state.enabled || !variant.is_elevated() {
        Shadow::none()
    } else if state.pressed {
        *elevation.pressed()
    } else if state.hovered {
        *elevation.hover()
    } else {
        *elevation.button()
    };

    ButtonAttributes {
        fill_color,
        border_color,
        border_width,
        text_color,
        font: size.font(theme.typography()),
        corner_radius: size.corner_radius(theme.radii()),
        horizontal_padding: size.horizontal_padding(theme.spacing()),
        vertical_padding: size.vertical_padding(theme.spacing()),
        min_width: size.min_width(),
        min_height: size.min_height(),
        scale,
        shadow,
    }
}

/// Animation role for moving between two interaction states
pub fn transition_role(from: InteractionState, to: InteractionState) -> AnimationRole {
    if from.enabled != to.enabled {
        AnimationRole::ButtonInteraction
    } else if from.pressed != to.pressed {
        AnimationRole::Press
    } else {
        AnimationRole::Hover
    }
}

/// Animation config the host should use for a state change
pub fn transition_animation(
    from: InteractionState,
    to: InteractionState,
    theme: &Theme,
) -> AnimationConfig {
    theme.animation().for_role(transition_role(from, to))
}
