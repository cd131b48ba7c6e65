//! Halo Theme System
//!
//! Design tokens composed into immutable themes.
//!
//! # Overview
//!
//! - **Design tokens**: colors, typography, spacing, radii, elevation, animation
//! - **Presets**: frozen light and dark themes, plus named variants of each
//!   token family (density, radius style, motion, elevation)
//! - **Context**: explicit scoped stack for ambient theme lookup
//! - **Theme files**: TOML descriptions built on top of a preset
//!
//! # Quick Start
//!
//! ```rust
//! use halo_theme::{ColorToken, ThemeContext, Theme};
//!
//! let mut ctx = ThemeContext::new();
//! let primary = ctx.scope(Theme::dark(), |ctx| ctx.current().color(ColorToken::Primary));
//! assert_eq!(primary, Theme::dark().colors().primary);
//! ```
//!
//! # Partial themes
//!
//! A theme always carries every token set. To change only some of them, start
//! from a preset and replace what differs:
//!
//! ```rust
//! use halo_theme::{RadiusTokens, ThemeBuilder, ThemePreset};
//!
//! let theme = ThemeBuilder::from_preset(ThemePreset::Light)
//!     .name("Soft")
//!     .radii(RadiusTokens::rounded())
//!     .build()
//!     .unwrap();
//! assert_eq!(theme.borrowed_from(), Some(ThemePreset::Light));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod presets;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use config::ThemeConfig;
pub use context::ThemeContext;
pub use error::ThemeError;
pub use presets::{Density, ElevationPreset, MotionPreset, RadiusStyle, ThemePreset};
pub use theme::{resolve, ColorScheme, Theme, ThemeBuilder, ThemeBundle};
pub use tokens::*;
