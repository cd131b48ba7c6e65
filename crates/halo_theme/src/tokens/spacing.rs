//! Spacing tokens

use halo_core::EdgeInsets;
use serde::{Deserialize, Serialize};

use crate::error::{monotonic, non_negative, ThemeError};

/// Spacing scale keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 7] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
        SpacingToken::Xxl,
        SpacingToken::Xxxl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpacingToken::Xs => "xs",
            SpacingToken::Sm => "sm",
            SpacingToken::Md => "md",
            SpacingToken::Lg => "lg",
            SpacingToken::Xl => "xl",
            SpacingToken::Xxl => "xxl",
            SpacingToken::Xxxl => "xxxl",
        }
    }
}

/// Padding presets for common components
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentInsets {
    pub component: EdgeInsets,
    pub card: EdgeInsets,
    pub button: EdgeInsets,
    pub input: EdgeInsets,
    pub modal: EdgeInsets,
}

/// Vertical rhythm between layout blocks
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutRhythm {
    pub section: f32,
    pub group: f32,
    pub item: f32,
    pub line: f32,
}

/// Spacing scale plus component insets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
    pub insets: ComponentInsets,
    pub rhythm: LayoutRhythm,
}

impl SpacingTokens {
    /// Build from a scale in [`SpacingToken::ALL`] order
    pub fn new(
        scale: [f32; 7],
        insets: ComponentInsets,
        rhythm: LayoutRhythm,
    ) -> Result<Self, ThemeError> {
        let [xs, sm, md, lg, xl, xxl, xxxl] = scale;
        let tokens = Self {
            xs,
            sm,
            md,
            lg,
            xl,
            xxl,
            xxxl,
            insets,
            rhythm,
        };
        tokens.validate()?;
        Ok(tokens)
    }

    /// The scale must be non-negative and strictly increasing; insets and
    /// rhythm must be non-negative
    pub fn validate(&self) -> Result<(), ThemeError> {
        let scale = SpacingToken::ALL.map(|token| (token.name(), self.get(token)));
        monotonic("spacing", &scale, true)?;

        let insets = [
            ("component", self.insets.component),
            ("card", self.insets.card),
            ("button", self.insets.button),
            ("input", self.insets.input),
            ("modal", self.insets.modal),
        ];
        for (name, inset) in insets {
            if !inset.is_valid() {
                let value = [inset.top, inset.leading, inset.bottom, inset.trailing]
                    .into_iter()
                    .fold(f32::INFINITY, f32::min);
                return Err(ThemeError::Negative { token: name, value });
            }
        }

        non_negative("section", self.rhythm.section)?;
        non_negative("group", self.rhythm.group)?;
        non_negative("item", self.rhythm.item)?;
        non_negative("line", self.rhythm.line)
    }

    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
        }
    }

    /// Multiple of the base unit
    pub fn scaled(&self, multiplier: f32) -> f32 {
        self.xs * multiplier
    }

    /// Gap between stacked items, widening as the stack grows
    pub fn vertical_spacing(&self, item_count: usize) -> f32 {
        match item_count {
            0..=2 => self.sm,
            3..=5 => self.md,
            6..=10 => self.lg,
            _ => self.xl,
        }
    }

    /// Gap between items laid out in a row
    pub fn horizontal_spacing(&self, item_count: usize) -> f32 {
        match item_count {
            0..=3 => self.sm,
            4..=6 => self.md,
            _ => self.lg,
        }
    }

    /// 4pt grid
    pub fn standard() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 20.0,
            xxl: 24.0,
            xxxl: 32.0,
            insets: ComponentInsets {
                component: EdgeInsets::symmetric(12.0, 16.0),
                card: EdgeInsets::all(16.0),
                button: EdgeInsets::symmetric(8.0, 16.0),
                input: EdgeInsets::symmetric(10.0, 12.0),
                modal: EdgeInsets::all(24.0),
            },
            rhythm: LayoutRhythm {
                section: 32.0,
                group: 16.0,
                item: 8.0,
                line: 4.0,
            },
        }
    }

    pub fn compact() -> Self {
        Self {
            xs: 2.0,
            sm: 4.0,
            md: 8.0,
            lg: 12.0,
            xl: 16.0,
            xxl: 20.0,
            xxxl: 24.0,
            insets: ComponentInsets {
                component: EdgeInsets::symmetric(8.0, 12.0),
                card: EdgeInsets::all(12.0),
                button: EdgeInsets::symmetric(6.0, 12.0),
                input: EdgeInsets::symmetric(8.0, 10.0),
                modal: EdgeInsets::all(20.0),
            },
            rhythm: LayoutRhythm {
                section: 24.0,
                group: 12.0,
                item: 6.0,
                line: 2.0,
            },
        }
    }

    pub fn comfortable() -> Self {
        Self {
            xs: 6.0,
            sm: 12.0,
            md: 16.0,
            lg: 20.0,
            xl: 24.0,
            xxl: 32.0,
            xxxl: 40.0,
            insets: ComponentInsets {
                component: EdgeInsets::symmetric(16.0, 20.0),
                card: EdgeInsets::all(20.0),
                button: EdgeInsets::symmetric(12.0, 20.0),
                input: EdgeInsets::symmetric(12.0, 16.0),
                modal: EdgeInsets::all(32.0),
            },
            rhythm: LayoutRhythm {
                section: 40.0,
                group: 20.0,
                item: 12.0,
                line: 6.0,
            },
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::standard()
    }
}
