//! Corner radius tokens

use halo_core::Size;
use serde::{Deserialize, Serialize};

use crate::error::{monotonic, non_negative, ThemeError};

/// Radius scale keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusToken {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 8] = [
        RadiusToken::None,
        RadiusToken::Xs,
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Xl,
        RadiusToken::Xxl,
        RadiusToken::Full,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RadiusToken::None => "none",
            RadiusToken::Xs => "xs",
            RadiusToken::Sm => "sm",
            RadiusToken::Md => "md",
            RadiusToken::Lg => "lg",
            RadiusToken::Xl => "xl",
            RadiusToken::Xxl => "xxl",
            RadiusToken::Full => "full",
        }
    }
}

/// Per-component radii
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SemanticRadii {
    pub button: f32,
    pub input: f32,
    pub card: f32,
    pub modal: f32,
    pub tooltip: f32,
    pub badge: f32,
    pub avatar: f32,
}

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub none: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    /// Large enough to turn any control into a pill
    pub full: f32,
    pub semantic: SemanticRadii,
}

impl RadiusTokens {
    /// Build from a scale in [`RadiusToken::ALL`] order
    pub fn new(scale: [f32; 8], semantic: SemanticRadii) -> Result<Self, ThemeError> {
        let [none, xs, sm, md, lg, xl, xxl, full] = scale;
        let tokens = Self {
            none,
            xs,
            sm,
            md,
            lg,
            xl,
            xxl,
            full,
            semantic,
        };
        tokens.validate()?;
        Ok(tokens)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        let scale = RadiusToken::ALL.map(|token| (token.name(), self.get(token)));
        monotonic("radius", &scale, false)?;

        let s = &self.semantic;
        for (token, value) in [
            ("button", s.button),
            ("input", s.input),
            ("card", s.card),
            ("modal", s.modal),
            ("tooltip", s.tooltip),
            ("badge", s.badge),
            ("avatar", s.avatar),
        ] {
            non_negative(token, value)?;
        }
        Ok(())
    }

    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Xs => self.xs,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Xxl => self.xxl,
            RadiusToken::Full => self.full,
        }
    }

    /// Radius proportional to the element's shorter side
    pub fn adaptive(&self, size: Size) -> f32 {
        let side = size.min_side();
        if side < 24.0 {
            self.xs
        } else if side < 48.0 {
            self.sm
        } else if side < 72.0 {
            self.md
        } else if side < 96.0 {
            self.lg
        } else if side < 120.0 {
            self.xl
        } else {
            self.xxl
        }
    }

    pub fn scaled(&self, multiplier: f32) -> f32 {
        self.sm * multiplier
    }

    pub fn standard() -> Self {
        Self {
            none: 0.0,
            xs: 2.0,
            sm: 4.0,
            md: 8.0,
            lg: 12.0,
            xl: 16.0,
            xxl: 20.0,
            full: 9999.0,
            semantic: SemanticRadii {
                button: 6.0,
                input: 6.0,
                card: 8.0,
                modal: 12.0,
                tooltip: 4.0,
                badge: 12.0,
                avatar: 8.0,
            },
        }
    }

    pub fn sharp() -> Self {
        Self {
            none: 0.0,
            xs: 1.0,
            sm: 2.0,
            md: 4.0,
            lg: 6.0,
            xl: 8.0,
            xxl: 10.0,
            full: 9999.0,
            semantic: SemanticRadii {
                button: 3.0,
                input: 3.0,
                card: 4.0,
                modal: 6.0,
                tooltip: 2.0,
                badge: 6.0,
                avatar: 4.0,
            },
        }
    }

    pub fn rounded() -> Self {
        Self {
            none: 0.0,
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 20.0,
            xxl: 24.0,
            full: 9999.0,
            semantic: SemanticRadii {
                button: 12.0,
                input: 10.0,
                card: 16.0,
                modal: 20.0,
                tooltip: 8.0,
                badge: 16.0,
                avatar: 12.0,
            },
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self::standard()
    }
}
