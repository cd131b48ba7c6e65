//! Corner selection

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

bitflags! {
    /// Which corners of a rectangle are rounded
    ///
    /// `LEADING`/`TRAILING` are the left/right edges in a left-to-right
    /// layout. Any subset is valid.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Corners: u8 {
        const NONE = 0;
        const TOP_LEADING = 1 << 0;
        const TOP_TRAILING = 1 << 1;
        const BOTTOM_LEADING = 1 << 2;
        const BOTTOM_TRAILING = 1 << 3;

        const TOP = Self::TOP_LEADING.bits() | Self::TOP_TRAILING.bits();
        const BOTTOM = Self::BOTTOM_LEADING.bits() | Self::BOTTOM_TRAILING.bits();
        const LEADING = Self::TOP_LEADING.bits() | Self::BOTTOM_LEADING.bits();
        const TRAILING = Self::TOP_TRAILING.bits() | Self::BOTTOM_TRAILING.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// Error parsing a corner list such as `"top-leading,bottom"`
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CornersParseError {
    #[error("unknown corner name `{0}`")]
    UnknownName(String),
}

impl Corners {
    /// Parse a single corner or group name
    pub fn from_name(name: &str) -> Option<Corners> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        let corners = match normalized.as_str() {
            "none" => Corners::NONE,
            "all" => Corners::ALL,
            "top" => Corners::TOP,
            "bottom" => Corners::BOTTOM,
            "leading" | "left" => Corners::LEADING,
            "trailing" | "right" => Corners::TRAILING,
            "top-leading" | "top-left" | "tl" => Corners::TOP_LEADING,
            "top-trailing" | "top-right" | "tr" => Corners::TOP_TRAILING,
            "bottom-leading" | "bottom-left" | "bl" => Corners::BOTTOM_LEADING,
            "bottom-trailing" | "bottom-right" | "br" => Corners::BOTTOM_TRAILING,
            _ => return None,
        };
        Some(corners)
    }

    /// Parse a comma or `|` separated list, unioning every entry.
    /// An empty list selects no corners.
    pub fn parse_list(input: &str) -> Result<Corners, CornersParseError> {
        input
            .split([',', '|'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .try_fold(Corners::NONE, |acc, part| {
                Corners::from_name(part)
                    .map(|c| acc | c)
                    .ok_or_else(|| CornersParseError::UnknownName(part.to_string()))
            })
    }
}

impl Default for Corners {
    fn default() -> Self {
        Corners::ALL
    }
}

impl FromStr for Corners {
    type Err = CornersParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Corners::parse_list(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_groups() {
        assert_eq!(Corners::TOP | Corners::BOTTOM, Corners::ALL);
        assert_eq!(Corners::LEADING | Corners::TRAILING, Corners::ALL);
        assert_eq!(Corners::TOP & Corners::LEADING, Corners::TOP_LEADING);
        assert!(Corners::NONE.is_empty());
        assert_eq!(Corners::ALL.bits(), 0b1111);
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(Corners::parse_list("all"), Ok(Corners::ALL));
        assert_eq!(Corners::parse_list(""), Ok(Corners::NONE));
        assert_eq!(
            "top-left, br".parse::<Corners>(),
            Ok(Corners::TOP_LEADING | Corners::BOTTOM_TRAILING)
        );
        assert_eq!(
            Corners::parse_list("TOP_TRAILING|bottom"),
            Ok(Corners::TOP_TRAILING | Corners::BOTTOM)
        );
        assert_eq!(
            Corners::parse_list("top,middle"),
            Err(CornersParseError::UnknownName("middle".into()))
        );
    }
}
