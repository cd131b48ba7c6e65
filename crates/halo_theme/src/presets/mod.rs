//! Built-in theme presets and named token-set variants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::{ColorScheme, Theme};
use crate::tokens::*;

/// Implements `id`, `display_name`, `all`, `Display` and `FromStr` for a
/// preset enum. Parsing is case-insensitive on the id.
macro_rules! named_presets {
    ($ty:ident, $kind:literal, { $($variant:ident => ($id:literal, $display:literal)),+ $(,)? }) => {
        impl $ty {
            /// Stable id for config/serialization.
            pub fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)+
                }
            }

            /// User-facing display name.
            pub fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)+
                }
            }

            /// Full preset list.
            pub fn all() -> &'static [$ty] {
                const PRESETS: &[$ty] = &[$($ty::$variant,)+];
                PRESETS
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.display_name())
            }
        }

        impl FromStr for $ty {
            type Err = ThemeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::all()
                    .iter()
                    .copied()
                    .find(|preset| preset.id().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ThemeError::UnknownPreset {
                        kind: $kind,
                        name: wanted.to_string(),
                    })
            }
        }
    };
}

/// Built-in theme catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Light,
    Dark,
}

named_presets!(ThemePreset, "theme", {
    Light => ("light", "Light"),
    Dark => ("dark", "Dark"),
});

impl ThemePreset {
    pub fn scheme(self) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
        }
    }

    /// The frozen, shared theme for this preset
    pub fn theme(self) -> Arc<Theme> {
        match self {
            Self::Light => Theme::light(),
            Self::Dark => Theme::dark(),
        }
    }
}

/// Spacing and type scale pairing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    Compact,
    #[default]
    Standard,
    Comfortable,
}

named_presets!(Density, "density", {
    Compact => ("compact", "Compact"),
    Standard => ("standard", "Standard"),
    Comfortable => ("comfortable", "Comfortable"),
});

impl Density {
    pub fn spacing(self) -> SpacingTokens {
        match self {
            Self::Compact => SpacingTokens::compact(),
            Self::Standard => SpacingTokens::standard(),
            Self::Comfortable => SpacingTokens::comfortable(),
        }
    }

    pub fn typography(self) -> TypographyTokens {
        match self {
            Self::Compact => TypographyTokens::compact(),
            Self::Standard => TypographyTokens::standard(),
            Self::Comfortable => TypographyTokens::comfortable(),
        }
    }
}

/// Corner radius style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusStyle {
    Sharp,
    #[default]
    Standard,
    Rounded,
}

named_presets!(RadiusStyle, "radius", {
    Sharp => ("sharp", "Sharp"),
    Standard => ("standard", "Standard"),
    Rounded => ("rounded", "Rounded"),
});

impl RadiusStyle {
    pub fn tokens(self) -> RadiusTokens {
        match self {
            Self::Sharp => RadiusTokens::sharp(),
            Self::Standard => RadiusTokens::standard(),
            Self::Rounded => RadiusTokens::rounded(),
        }
    }
}

/// Animation timing profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreset {
    Responsive,
    #[default]
    Standard,
    Relaxed,
}

named_presets!(MotionPreset, "motion", {
    Responsive => ("responsive", "Responsive"),
    Standard => ("standard", "Standard"),
    Relaxed => ("relaxed", "Relaxed"),
});

impl MotionPreset {
    pub fn tokens(self) -> AnimationTokens {
        match self {
            Self::Responsive => AnimationTokens::responsive(),
            Self::Standard => AnimationTokens::standard(),
            Self::Relaxed => AnimationTokens::relaxed(),
        }
    }
}

/// Shadow strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevationPreset {
    #[default]
    Standard,
    Light,
    Dark,
}

named_presets!(ElevationPreset, "elevation", {
    Standard => ("standard", "Standard"),
    Light => ("light", "Light"),
    Dark => ("dark", "Dark"),
});

impl ElevationPreset {
    pub fn tokens(self) -> ElevationTokens {
        match self {
            Self::Standard => ElevationTokens::standard(),
            Self::Light => ElevationTokens::light(),
            Self::Dark => ElevationTokens::dark(),
        }
    }
}

/// Assemble a preset theme. Only the palette differs between presets.
pub(crate) fn preset_theme(preset: ThemePreset) -> Theme {
    let colors = match preset {
        ThemePreset::Light => ColorTokens::light(),
        ThemePreset::Dark => ColorTokens::dark(),
    };
    Theme::from_parts(
        preset.display_name().to_string(),
        preset.scheme(),
        Some(preset),
        colors,
        TypographyTokens::standard(),
        SpacingTokens::standard(),
        RadiusTokens::standard(),
        ElevationTokens::standard(),
        AnimationTokens::standard(),
    )
}
