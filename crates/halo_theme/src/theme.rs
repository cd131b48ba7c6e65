//! Theme aggregate

use std::sync::{Arc, OnceLock};

use halo_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::presets::{preset_theme, ThemePreset};
use crate::tokens::*;

static LIGHT: OnceLock<Arc<Theme>> = OnceLock::new();
static DARK: OnceLock<Arc<Theme>> = OnceLock::new();

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// One complete, immutable set of design tokens.
///
/// Every token set is always present. Themes are shared as `Arc<Theme>` and
/// never mutated; build a new theme to change anything.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    name: String,
    scheme: ColorScheme,
    borrowed_from: Option<ThemePreset>,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    elevation: ElevationTokens,
    animation: AnimationTokens,
}

impl Theme {
    /// Assemble a theme from every token set, validating each one
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        scheme: ColorScheme,
        colors: ColorTokens,
        typography: TypographyTokens,
        spacing: SpacingTokens,
        radii: RadiusTokens,
        elevation: ElevationTokens,
        animation: AnimationTokens,
    ) -> Result<Self, ThemeError> {
        let theme = Self::from_parts(
            name.into(),
            scheme,
            None,
            colors,
            typography,
            spacing,
            radii,
            elevation,
            animation,
        );
        theme.validate()?;
        tracing::debug!(name = %theme.name, scheme = ?theme.scheme, "theme built");
        Ok(theme)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        scheme: ColorScheme,
        borrowed_from: Option<ThemePreset>,
        colors: ColorTokens,
        typography: TypographyTokens,
        spacing: SpacingTokens,
        radii: RadiusTokens,
        elevation: ElevationTokens,
        animation: AnimationTokens,
    ) -> Self {
        Self {
            name,
            scheme,
            borrowed_from,
            colors,
            typography,
            spacing,
            radii,
            elevation,
            animation,
        }
    }

    /// Re-check every token set's invariants
    pub fn validate(&self) -> Result<(), ThemeError> {
        self.typography.validate()?;
        self.spacing.validate()?;
        self.radii.validate()?;
        self.elevation.validate()?;
        self.animation.validate()
    }

    /// Default light theme, built once and shared
    pub fn light() -> Arc<Theme> {
        Arc::clone(LIGHT.get_or_init(|| Arc::new(preset_theme(ThemePreset::Light))))
    }

    /// Default dark theme, built once and shared
    pub fn dark() -> Arc<Theme> {
        Arc::clone(DARK.get_or_init(|| Arc::new(preset_theme(ThemePreset::Dark))))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Preset whose token sets seeded this theme, if any
    pub fn borrowed_from(&self) -> Option<ThemePreset> {
        self.borrowed_from
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    pub fn elevation(&self) -> &ElevationTokens {
        &self.elevation
    }

    pub fn animation(&self) -> &AnimationTokens {
        &self.animation
    }
}

/// Identity resolution: a theme resolves to itself, shared
pub fn resolve(theme: &Arc<Theme>) -> Arc<Theme> {
    Arc::clone(theme)
}

/// A light/dark pair
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    pub name: String,
    pub light: Arc<Theme>,
    pub dark: Arc<Theme>,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: Arc<Theme>, dark: Arc<Theme>) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    /// The built-in light and dark presets
    pub fn standard() -> Self {
        Self::new("Halo", Theme::light(), Theme::dark())
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Arc<Theme> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        Self::standard()
    }
}

/// Partial theme construction.
///
/// Every token set starts as an explicit copy of a preset's; the preset is
/// recorded on the built theme.
#[derive(Clone, Debug)]
pub struct ThemeBuilder {
    base: ThemePreset,
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    elevation: ElevationTokens,
    animation: AnimationTokens,
}

impl ThemeBuilder {
    pub fn from_preset(preset: ThemePreset) -> Self {
        let base = preset.theme();
        Self {
            base: preset,
            name: base.name.clone(),
            scheme: base.scheme,
            colors: base.colors.clone(),
            typography: base.typography.clone(),
            spacing: base.spacing.clone(),
            radii: base.radii.clone(),
            elevation: base.elevation.clone(),
            animation: base.animation.clone(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn colors(mut self, colors: ColorTokens) -> Self {
        self.colors = colors;
        self
    }

    /// Replace a single color slot
    pub fn color(mut self, token: ColorToken, color: Color) -> Self {
        self.colors = self.colors.with(token, color);
        self
    }

    pub fn typography(mut self, typography: TypographyTokens) -> Self {
        self.typography = typography;
        self
    }

    pub fn spacing(mut self, spacing: SpacingTokens) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn radii(mut self, radii: RadiusTokens) -> Self {
        self.radii = radii;
        self
    }

    pub fn elevation(mut self, elevation: ElevationTokens) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn animation(mut self, animation: AnimationTokens) -> Self {
        self.animation = animation;
        self
    }

    pub fn build(self) -> Result<Theme, ThemeError> {
        let theme = Theme::from_parts(
            self.name,
            self.scheme,
            Some(self.base),
            self.colors,
            self.typography,
            self.spacing,
            self.radii,
            self.elevation,
            self.animation,
        );
        theme.validate()?;
        tracing::debug!(name = %theme.name, base = %self.base, "theme built from preset");
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_shared() {
        assert!(Arc::ptr_eq(&Theme::light(), &Theme::light()));
        assert!(Arc::ptr_eq(&ThemePreset::Dark.theme(), &Theme::dark()));

        let theme = Theme::dark();
        assert!(Arc::ptr_eq(&resolve(&theme), &theme));
    }

    #[test]
    fn test_builder_records_preset() {
        let theme = ThemeBuilder::from_preset(ThemePreset::Dark)
            .name("Midnight")
            .color(ColorToken::Primary, Color::from_hex(0x8839EF))
            .radii(RadiusTokens::rounded())
            .build()
            .unwrap();

        assert_eq!(theme.name(), "Midnight");
        assert_eq!(theme.borrowed_from(), Some(ThemePreset::Dark));
        assert_eq!(theme.color_scheme(), ColorScheme::Dark);
        assert_eq!(theme.color(ColorToken::Primary), Color::from_hex(0x8839EF));
        assert_eq!(theme.colors().background, Theme::dark().colors().background);
        assert_eq!(theme.radii().semantic.button, 12.0);
    }

    #[test]
    fn test_builder_validates() {
        let mut spacing = SpacingTokens::standard();
        spacing.lg = 2.0;
        let result = ThemeBuilder::from_preset(ThemePreset::Light)
            .spacing(spacing)
            .build();
        assert!(matches!(result, Err(ThemeError::NonMonotonic { set: "spacing", .. })));
    }

    #[test]
    fn test_new_has_no_borrowed_preset() {
        let theme = Theme::new(
            "Custom",
            ColorScheme::Light,
            ColorTokens::light(),
            TypographyTokens::compact(),
            SpacingTokens::compact(),
            RadiusTokens::sharp(),
            ElevationTokens::light(),
            AnimationTokens::responsive(),
        )
        .unwrap();
        assert_eq!(theme.borrowed_from(), None);
        assert_eq!(theme.spacing().xs, 2.0);
    }

    #[test]
    fn test_bundle_for_scheme() {
        let bundle = ThemeBundle::standard();
        assert_eq!(
            bundle.for_scheme(ColorScheme::Dark).color_scheme(),
            ColorScheme::Dark
        );
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
    }
}
