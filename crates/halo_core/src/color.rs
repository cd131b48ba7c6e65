//! Color types and utilities
//!
//! Components are sRGB-encoded `f32` values in `0.0..=1.0`. Alpha is straight
//! (not premultiplied).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error produced when parsing a `#RRGGBB` / `#RRGGBBAA` string
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("invalid hex digits in color `{0}`")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a grayscale color
    pub const fn gray(white: f32) -> Self {
        Self::rgb(white, white, white)
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create an opaque color from `0xRRGGBB`; bits above 24 are ignored
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Create from `0xRRGGBBAA`
    pub fn from_hex_rgba(hex: u32) -> Self {
        Self::from_rgba8(
            (hex >> 24) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn parse_hex(input: &str) -> Result<Self, ParseColorError> {
        let digits = input.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseColorError::InvalidDigit(input.to_string()))?;
        if digits.len() == 8 {
            Ok(Self::from_hex_rgba(value))
        } else {
            Ok(Self::from_hex(value))
        }
    }

    /// Set alpha and return new color
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Multiply the alpha channel by `factor`.
    ///
    /// Unlike [`Color::with_alpha`], a fully transparent color stays
    /// transparent.
    pub fn opacity(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= f32::EPSILON
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Source-over composite of `self` on top of `backdrop`
    pub fn composite_over(self, backdrop: Color) -> Color {
        let a = self.a + backdrop.a * (1.0 - self.a);
        if a <= f32::EPSILON {
            return Color::TRANSPARENT;
        }
        let blend = |src: f32, dst: f32| (src * self.a + dst * backdrop.a * (1.0 - self.a)) / a;
        Color::new(
            blend(self.r, backdrop.r),
            blend(self.g, backdrop.g),
            blend(self.b, backdrop.b),
            a,
        )
    }

    /// WCAG relative luminance of the color channels (alpha ignored)
    pub fn relative_luminance(&self) -> f32 {
        0.2126 * srgb_to_linear(self.r) + 0.7152 * srgb_to_linear(self.g)
            + 0.0722 * srgb_to_linear(self.b)
    }

    /// WCAG contrast ratio between two opaque colors, in `1.0..=21.0`
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        ]
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_rgb_and_rgba() {
        let c = Color::parse_hex("#007AFF").unwrap();
        assert_eq!(c.to_rgba8(), [0x00, 0x7A, 0xFF, 0xFF]);

        let c = Color::parse_hex("ff3b3080").unwrap();
        assert_eq!(c.to_rgba8(), [0xFF, 0x3B, 0x30, 0x80]);
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert_eq!(
            Color::parse_hex("#12345"),
            Err(ParseColorError::InvalidLength(5))
        );
        assert!(matches!(
            Color::parse_hex("#zzzzzz"),
            Err(ParseColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn opacity_multiplies_alpha() {
        let half = Color::WHITE.opacity(0.5);
        assert!((half.a - 0.5).abs() < 1e-6);
        assert!((half.opacity(0.5).a - 0.25).abs() < 1e-6);
        assert!(Color::TRANSPARENT.opacity(0.3).is_transparent());
    }

    #[test]
    fn composite_over_opaque_backdrop_is_opaque() {
        let out = Color::BLACK.opacity(0.5).composite_over(Color::WHITE);
        assert!((out.a - 1.0).abs() < 1e-6);
        assert!((out.r - 0.5).abs() < 1e-6);
        assert_eq!(
            Color::TRANSPARENT.composite_over(Color::WHITE),
            Color::WHITE
        );
    }

    #[test]
    fn contrast_black_on_white_is_21() {
        let ratio = Color::BLACK.contrast_ratio(&Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.05, "got {ratio}");
        assert!((Color::WHITE.contrast_ratio(&Color::WHITE) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::from_hex(0x1A8CFF).to_hex(), "#1a8cff");
        assert_eq!(Color::BLACK.with_alpha(0.0).to_hex(), "#00000000");
    }

    #[test]
    fn hex_rgba_with_zero_leading_bytes() {
        assert_eq!(Color::from_hex_rgba(0x000000FF), Color::BLACK);
        assert_eq!(Color::from_hex_rgba(0x0000FF80).to_hex(), "#0000ff80");
        assert_eq!(Color::from_hex(0x0000FF), Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(Color::from_hex(0xAB0000FF), Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(Color::parse_hex("#000000FF").unwrap(), Color::BLACK);
    }
}
