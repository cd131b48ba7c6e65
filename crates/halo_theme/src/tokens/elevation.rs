//! Elevation (shadow) tokens

use halo_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::{non_negative, ThemeError};

/// A drop shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    pub blur_radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
}

impl Shadow {
    /// Black shadow cast straight down
    pub const fn drop(blur_radius: f32, offset_y: f32, opacity: f32) -> Self {
        Self {
            color: Color::BLACK,
            blur_radius,
            offset_x: 0.0,
            offset_y,
            opacity,
        }
    }

    pub const fn none() -> Self {
        Self::drop(0.0, 0.0, 0.0)
    }

    pub fn is_none(&self) -> bool {
        self.opacity <= 0.0 || self.color.is_transparent()
    }

    /// Color with the shadow opacity applied
    pub fn resolved_color(&self) -> Color {
        self.color.opacity(self.opacity)
    }

    /// Linear interpolation between two shadows
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            color: Color::lerp(&from.color, &to.color, t),
            blur_radius: mix(from.blur_radius, to.blur_radius),
            offset_x: mix(from.offset_x, to.offset_x),
            offset_y: mix(from.offset_y, to.offset_y),
            opacity: mix(from.opacity, to.opacity),
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Elevation level keys, from flat to highest
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevationLevel {
    Level0,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
}

impl ElevationLevel {
    pub const ALL: [ElevationLevel; 7] = [
        ElevationLevel::Level0,
        ElevationLevel::Level1,
        ElevationLevel::Level2,
        ElevationLevel::Level3,
        ElevationLevel::Level4,
        ElevationLevel::Level5,
        ElevationLevel::Level6,
    ];

    /// Level for a numeric index; anything above 6 is the highest level
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ElevationLevel::Level0 => "level0",
            ElevationLevel::Level1 => "level1",
            ElevationLevel::Level2 => "level2",
            ElevationLevel::Level3 => "level3",
            ElevationLevel::Level4 => "level4",
            ElevationLevel::Level5 => "level5",
            ElevationLevel::Level6 => "level6",
        }
    }
}

/// Seven shadow levels with semantic component aliases
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElevationTokens {
    levels: [Shadow; 7],
}

impl ElevationTokens {
    /// Level 0 must be invisible; opacity and blur never decrease upward
    pub fn new(levels: [Shadow; 7]) -> Result<Self, ThemeError> {
        let tokens = Self { levels };
        tokens.validate()?;
        Ok(tokens)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        for (level, shadow) in ElevationLevel::ALL.iter().zip(&self.levels) {
            non_negative(level.name(), shadow.opacity)?;
            non_negative(level.name(), shadow.blur_radius)?;
        }
        if self.levels[0].opacity != 0.0 {
            return Err(ThemeError::NonMonotonic {
                set: "elevation",
                token: ElevationLevel::Level0.name(),
            });
        }
        for (index, pair) in self.levels[1..].windows(2).enumerate() {
            if pair[1].opacity < pair[0].opacity || pair[1].blur_radius < pair[0].blur_radius {
                return Err(ThemeError::NonMonotonic {
                    set: "elevation",
                    token: ElevationLevel::from_index(index + 2).name(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, level: ElevationLevel) -> &Shadow {
        &self.levels[level.index()]
    }

    pub fn levels(&self) -> &[Shadow; 7] {
        &self.levels
    }

    pub fn shadow_for_level(&self, index: usize) -> &Shadow {
        self.get(ElevationLevel::from_index(index))
    }

    // Semantic aliases

    pub fn button(&self) -> &Shadow {
        self.get(ElevationLevel::Level1)
    }

    pub fn card(&self) -> &Shadow {
        self.get(ElevationLevel::Level2)
    }

    pub fn panel(&self) -> &Shadow {
        self.get(ElevationLevel::Level3)
    }

    pub fn modal(&self) -> &Shadow {
        self.get(ElevationLevel::Level4)
    }

    pub fn dropdown(&self) -> &Shadow {
        self.get(ElevationLevel::Level5)
    }

    pub fn tooltip(&self) -> &Shadow {
        self.get(ElevationLevel::Level6)
    }

    pub fn hover(&self) -> &Shadow {
        self.get(ElevationLevel::Level3)
    }

    pub fn pressed(&self) -> &Shadow {
        self.get(ElevationLevel::Level0)
    }

    /// Standard blur/offset ramp with the given opacities
    fn ramp(opacities: [f32; 7]) -> Self {
        const STEPS: [f32; 7] = [0.0, 1.0, 2.0, 4.0, 8.0, 12.0, 16.0];
        let mut levels = [Shadow::none(); 7];
        for (i, shadow) in levels.iter_mut().enumerate() {
            *shadow = Shadow::drop(STEPS[i], STEPS[i], opacities[i]);
        }
        Self { levels }
    }

    pub fn standard() -> Self {
        Self::ramp([0.0, 0.05, 0.08, 0.12, 0.15, 0.18, 0.2])
    }

    /// Softer shadows for light surfaces
    pub fn light() -> Self {
        Self::ramp([0.0, 0.04, 0.06, 0.08, 0.1, 0.12, 0.15])
    }

    /// Denser shadows that stay visible on dark surfaces
    pub fn dark() -> Self {
        Self::ramp([0.0, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4])
    }
}

impl Default for ElevationTokens {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_lookup_saturates() {
        let elevation = ElevationTokens::standard();
        assert_eq!(elevation.shadow_for_level(6), elevation.shadow_for_level(42));
        assert_eq!(elevation.shadow_for_level(2).blur_radius, 2.0);
        assert!(elevation.pressed().is_none());
        assert_eq!(elevation.hover(), elevation.panel());
    }

    #[test]
    fn test_resolved_color() {
        let shadow = Shadow::drop(4.0, 4.0, 0.12);
        let color = shadow.resolved_color();
        assert_eq!(color.a, 0.12);
        assert_eq!(color.r, 0.0);
    }

    #[test]
    fn test_new_rejects_visible_level0() {
        let mut levels = *ElevationTokens::standard().levels();
        levels[0].opacity = 0.1;
        assert!(matches!(
            ElevationTokens::new(levels),
            Err(ThemeError::NonMonotonic { token: "level0", .. })
        ));

        let mut levels = *ElevationTokens::standard().levels();
        levels[4].blur_radius = 1.0;
        assert!(matches!(
            ElevationTokens::new(levels),
            Err(ThemeError::NonMonotonic { token: "level4", .. })
        ));
    }
}
