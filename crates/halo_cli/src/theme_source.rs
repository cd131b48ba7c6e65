//! Resolving the `--theme` argument

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use halo_theme::{Theme, ThemeConfig, ThemePreset};
use tracing::debug;

/// A built-in preset id, or a path to a TOML theme file
pub fn load_theme(source: &str) -> Result<Arc<Theme>> {
    if let Ok(preset) = source.parse::<ThemePreset>() {
        debug!(%preset, "using built-in theme");
        return Ok(preset.theme());
    }

    let path = Path::new(source);
    if !path.exists() {
        let presets: Vec<_> = ThemePreset::all().iter().map(|p| p.id()).collect();
        bail!(
            "unknown theme '{}': expected one of {:?} or a theme file",
            source,
            presets
        );
    }

    let config = ThemeConfig::load(path)
        .with_context(|| format!("failed to read theme file {}", path.display()))?;
    let theme = config
        .build()
        .with_context(|| format!("invalid theme file {}", path.display()))?;
    debug!(name = theme.name(), path = %path.display(), "loaded theme file");
    Ok(Arc::new(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_theme::ColorScheme;

    #[test]
    fn test_presets_by_id() {
        assert!(Arc::ptr_eq(&load_theme("dark").unwrap(), &Theme::dark()));
        assert!(Arc::ptr_eq(&load_theme("Light").unwrap(), &Theme::light()));
    }

    #[test]
    fn test_unknown_theme() {
        let err = load_theme("sepia").unwrap_err();
        assert!(err.to_string().starts_with("unknown theme 'sepia'"));
    }

    #[test]
    fn test_theme_file() {
        let path = std::env::temp_dir().join(format!("halo-cli-theme-{}.toml", std::process::id()));
        std::fs::write(&path, "name = \"Dusk\"\nbase = \"dark\"\ndensity = \"compact\"\n").unwrap();

        let theme = load_theme(path.to_str().unwrap()).unwrap();
        assert_eq!(theme.name(), "Dusk");
        assert_eq!(theme.color_scheme(), ColorScheme::Dark);

        std::fs::write(&path, "[colors]\nprimary = \"blue\"\n").unwrap();
        let err = load_theme(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("invalid theme file"));

        std::fs::remove_file(&path).unwrap();
    }
}
