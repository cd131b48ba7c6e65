//! Timing arguments for the `sequence` and `stagger` commands
//!
//! A timing is either an animation token name (`fast`, `spring`, ...) or
//! `DURATION[:CURVE]`, optionally followed by `+DELAY`:
//!
//! ```text
//! fast
//! fast+0.05
//! 0.2
//! 0.2:ease_out+0.1
//! ```

use anyhow::{bail, Context, Result};
use halo_animation::{AnimationConfig, Curve};
use halo_theme::{AnimationToken, AnimationTokens};

/// Curve by name; `spring` and `bounce` borrow the theme's spring curves
pub fn parse_curve(name: &str, tokens: &AnimationTokens) -> Result<Curve> {
    let curve = match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "linear" => Curve::Linear,
        "ease_in" => Curve::EaseIn,
        "ease_out" => Curve::EaseOut,
        "ease_in_out" => Curve::EaseInOut,
        "spring" => tokens.spring.curve,
        "bounce" => tokens.bounce.curve,
        other => bail!("unknown curve '{}'", other),
    };
    Ok(curve)
}

pub fn parse_timing(input: &str, tokens: &AnimationTokens) -> Result<AnimationConfig> {
    let (body, delay) = match input.split_once('+') {
        Some((body, delay)) => {
            let delay: f32 = delay
                .trim()
                .parse()
                .with_context(|| format!("invalid delay in '{}'", input))?;
            (body.trim(), Some(delay))
        }
        None => (input.trim(), None),
    };

    let base = match AnimationToken::from_name(body) {
        Some(token) => tokens.get(token),
        None => {
            let (duration, curve) = match body.split_once(':') {
                Some((duration, curve)) => (duration, parse_curve(curve, tokens)?),
                None => (body, Curve::EaseInOut),
            };
            let duration: f32 = duration
                .trim()
                .parse()
                .with_context(|| format!("invalid duration in '{}'", input))?;
            AnimationConfig::new(duration, curve)
        }
    };

    AnimationConfig::try_new(base.duration, base.curve, delay.unwrap_or(base.delay))
        .with_context(|| format!("invalid timing '{}'", input))
}
