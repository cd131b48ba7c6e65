//! Theme construction errors

use std::path::PathBuf;

use halo_animation::AnimationError;
use halo_core::ParseColorError;
use thiserror::Error;

/// A token set or theme description violated an invariant
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("`{token}` must be finite and non-negative, got {value}")]
    Negative { token: &'static str, value: f32 },

    #[error("{set} scale is out of order at `{token}`")]
    NonMonotonic { set: &'static str, token: &'static str },

    #[error("font size for `{role}` must be positive, got {size}")]
    NonPositiveFontSize { role: &'static str, size: f32 },

    #[error("invalid color for `{slot}`")]
    InvalidColor {
        slot: String,
        #[source]
        source: ParseColorError,
    },

    #[error("unknown {kind} preset `{name}`")]
    UnknownPreset { kind: &'static str, name: String },

    #[error("animation `{token}` is invalid")]
    Animation {
        token: &'static str,
        #[source]
        source: AnimationError,
    },

    #[error("failed to parse theme file")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read theme file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check that a value is finite and non-negative
pub(crate) fn non_negative(token: &'static str, value: f32) -> Result<(), ThemeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ThemeError::Negative { token, value })
    }
}

/// Check a named scale for non-negative values, increasing strictly when
/// `strict` is set and never decreasing otherwise
pub(crate) fn monotonic(
    set: &'static str,
    scale: &[(&'static str, f32)],
    strict: bool,
) -> Result<(), ThemeError> {
    for &(token, value) in scale {
        non_negative(token, value)?;
    }
    for pair in scale.windows(2) {
        let (prev, (token, next)) = (pair[0].1, pair[1]);
        let ordered = if strict { next > prev } else { next >= prev };
        if !ordered {
            return Err(ThemeError::NonMonotonic { set, token });
        }
    }
    Ok(())
}
