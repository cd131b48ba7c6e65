//! Theme files
//!
//! A theme file picks a base preset, a variant for each token family and
//! optional per-slot color overrides:
//!
//! ```toml
//! name = "Ocean"
//! base = "dark"
//! density = "compact"
//! radius = "rounded"
//! motion = "responsive"
//! elevation = "dark"
//!
//! [colors]
//! primary = "#0A84FF"
//! selected_content_background = "#0A84FF33"
//! ```
//!
//! Every key is optional.

use std::path::Path;

use halo_core::Color;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::presets::{Density, ElevationPreset, MotionPreset, RadiusStyle, ThemePreset};
use crate::theme::{Theme, ThemeBuilder};
use crate::tokens::ColorToken;

/// Parsed theme file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: Option<String>,
    pub base: ThemePreset,
    pub density: Density,
    pub radius: RadiusStyle,
    pub motion: MotionPreset,
    pub elevation: ElevationPreset,
    /// Hex strings keyed by color slot
    pub colors: FxHashMap<ColorToken, String>,
}

impl ThemeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading theme file");
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Parsed color overrides in slot order
    pub fn color_overrides(&self) -> Result<Vec<(ColorToken, Color)>, ThemeError> {
        ColorToken::ALL
            .into_iter()
            .filter_map(|token| self.colors.get(&token).map(|hex| (token, hex)))
            .map(|(token, hex)| {
                Color::parse_hex(hex)
                    .map(|color| (token, color))
                    .map_err(|source| ThemeError::InvalidColor {
                        slot: token.name().to_string(),
                        source,
                    })
            })
            .collect()
    }

    pub fn build(&self) -> Result<Theme, ThemeError> {
        let mut builder = ThemeBuilder::from_preset(self.base)
            .typography(self.density.typography())
            .spacing(self.density.spacing())
            .radii(self.radius.tokens())
            .animation(self.motion.tokens())
            .elevation(self.elevation.tokens());

        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        for (token, color) in self.color_overrides()? {
            builder = builder.color(token, color);
        }
        builder.build()
    }
}
