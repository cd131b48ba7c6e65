//! Typography tokens

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Font weight
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// CSS-style numeric weight
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Everything a host needs to pick a system font
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub size: f32,
    pub weight: FontWeight,
    #[serde(default)]
    pub monospace: bool,
    #[serde(default)]
    pub italic: bool,
}

impl FontDescriptor {
    pub const fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            monospace: false,
            italic: false,
        }
    }

    pub const fn mono(size: f32) -> Self {
        Self {
            monospace: true,
            ..Self::new(size)
        }
    }

    pub const fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    pub const fn bold(self) -> Self {
        self.with_weight(FontWeight::Bold)
    }

    pub const fn semibold(self) -> Self {
        self.with_weight(FontWeight::Semibold)
    }

    pub const fn light(self) -> Self {
        self.with_weight(FontWeight::Light)
    }

    pub const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }
}

/// Typography role keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypographyToken {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption1,
    Caption2,
    Code,
    CodeSmall,
}

impl TypographyToken {
    pub const ALL: [TypographyToken; 13] = [
        TypographyToken::LargeTitle,
        TypographyToken::Title1,
        TypographyToken::Title2,
        TypographyToken::Title3,
        TypographyToken::Headline,
        TypographyToken::Body,
        TypographyToken::Callout,
        TypographyToken::Subheadline,
        TypographyToken::Footnote,
        TypographyToken::Caption1,
        TypographyToken::Caption2,
        TypographyToken::Code,
        TypographyToken::CodeSmall,
    ];

    /// Text roles from largest to smallest; sizes never grow along this list
    pub const HIERARCHY: [TypographyToken; 11] = [
        TypographyToken::LargeTitle,
        TypographyToken::Title1,
        TypographyToken::Title2,
        TypographyToken::Title3,
        TypographyToken::Headline,
        TypographyToken::Body,
        TypographyToken::Callout,
        TypographyToken::Subheadline,
        TypographyToken::Footnote,
        TypographyToken::Caption1,
        TypographyToken::Caption2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TypographyToken::LargeTitle => "large_title",
            TypographyToken::Title1 => "title1",
            TypographyToken::Title2 => "title2",
            TypographyToken::Title3 => "title3",
            TypographyToken::Headline => "headline",
            TypographyToken::Body => "body",
            TypographyToken::Callout => "callout",
            TypographyToken::Subheadline => "subheadline",
            TypographyToken::Footnote => "footnote",
            TypographyToken::Caption1 => "caption1",
            TypographyToken::Caption2 => "caption2",
            TypographyToken::Code => "code",
            TypographyToken::CodeSmall => "code_small",
        }
    }
}

/// Font descriptor for every typography role
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    pub large_title: FontDescriptor,
    pub title1: FontDescriptor,
    pub title2: FontDescriptor,
    pub title3: FontDescriptor,
    pub headline: FontDescriptor,
    pub body: FontDescriptor,
    pub callout: FontDescriptor,
    pub subheadline: FontDescriptor,
    pub footnote: FontDescriptor,
    pub caption1: FontDescriptor,
    pub caption2: FontDescriptor,
    pub code: FontDescriptor,
    pub code_small: FontDescriptor,
}

impl TypographyTokens {
    /// Build from descriptors in [`TypographyToken::ALL`] order
    pub fn new(fonts: [FontDescriptor; 13]) -> Result<Self, ThemeError> {
        let [large_title, title1, title2, title3, headline, body, callout, subheadline, footnote, caption1, caption2, code, code_small] =
            fonts;
        let tokens = Self {
            large_title,
            title1,
            title2,
            title3,
            headline,
            body,
            callout,
            subheadline,
            footnote,
            caption1,
            caption2,
            code,
            code_small,
        };
        tokens.validate()?;
        Ok(tokens)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        for token in TypographyToken::ALL {
            let size = self.get(token).size;
            if !(size.is_finite() && size > 0.0) {
                return Err(ThemeError::NonPositiveFontSize {
                    role: token.name(),
                    size,
                });
            }
        }
        for pair in TypographyToken::HIERARCHY.windows(2) {
            if self.get(pair[1]).size > self.get(pair[0]).size {
                return Err(ThemeError::NonMonotonic {
                    set: "typography",
                    token: pair[1].name(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, token: TypographyToken) -> FontDescriptor {
        match token {
            TypographyToken::LargeTitle => self.large_title,
            TypographyToken::Title1 => self.title1,
            TypographyToken::Title2 => self.title2,
            TypographyToken::Title3 => self.title3,
            TypographyToken::Headline => self.headline,
            TypographyToken::Body => self.body,
            TypographyToken::Callout => self.callout,
            TypographyToken::Subheadline => self.subheadline,
            TypographyToken::Footnote => self.footnote,
            TypographyToken::Caption1 => self.caption1,
            TypographyToken::Caption2 => self.caption2,
            TypographyToken::Code => self.code,
            TypographyToken::CodeSmall => self.code_small,
        }
    }

    // Semantic aliases

    pub fn button_label(&self) -> FontDescriptor {
        self.body
    }

    pub fn form_label(&self) -> FontDescriptor {
        self.caption1
    }

    pub fn error_message(&self) -> FontDescriptor {
        self.caption2
    }

    pub fn help_text(&self) -> FontDescriptor {
        self.footnote
    }

    pub fn tab_title(&self) -> FontDescriptor {
        self.subheadline
    }

    pub fn navigation_title(&self) -> FontDescriptor {
        self.headline
    }

    pub fn toolbar_button(&self) -> FontDescriptor {
        self.callout
    }

    pub fn status_text(&self) -> FontDescriptor {
        self.caption1
    }

    fn from_sizes(sizes: [f32; 13]) -> Self {
        let [
            large_title,
            title1,
            title2,
            title3,
            headline,
            body,
            callout,
            subheadline,
            footnote,
            caption1,
            caption2,
            code,
            code_small,
        ] = sizes;
        Self {
            large_title: FontDescriptor::new(large_title),
            title1: FontDescriptor::new(title1),
            title2: FontDescriptor::new(title2),
            title3: FontDescriptor::new(title3),
            headline: FontDescriptor::new(headline).semibold(),
            body: FontDescriptor::new(body),
            callout: FontDescriptor::new(callout),
            subheadline: FontDescriptor::new(subheadline),
            footnote: FontDescriptor::new(footnote),
            caption1: FontDescriptor::new(caption1),
            caption2: FontDescriptor::new(caption2),
            code: FontDescriptor::mono(code),
            code_small: FontDescriptor::mono(code_small),
        }
    }

    /// Standard desktop type ramp
    pub fn standard() -> Self {
        Self::from_sizes([
            34.0, 28.0, 22.0, 20.0, 17.0, 17.0, 16.0, 15.0, 13.0, 12.0, 11.0, 14.0, 12.0,
        ])
    }

    pub fn compact() -> Self {
        Self::from_sizes([
            30.0, 24.0, 20.0, 18.0, 15.0, 15.0, 14.0, 13.0, 11.0, 10.0, 9.0, 12.0, 10.0,
        ])
    }

    pub fn comfortable() -> Self {
        Self::from_sizes([
            38.0, 32.0, 26.0, 22.0, 19.0, 19.0, 18.0, 17.0, 15.0, 14.0, 13.0, 16.0, 14.0,
        ])
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for preset in [
            TypographyTokens::standard(),
            TypographyTokens::compact(),
            TypographyTokens::comfortable(),
        ] {
            preset.validate().unwrap();
        }
    }

    #[test]
    fn test_aliases_and_modifiers() {
        let typography = TypographyTokens::standard();
        assert_eq!(typography.button_label(), typography.body);
        assert_eq!(typography.navigation_title().weight, FontWeight::Semibold);
        assert!(typography.code.monospace);

        let emphasized = typography.body.bold().italic();
        assert_eq!(emphasized.weight, FontWeight::Bold);
        assert!(emphasized.italic);
        assert_eq!(emphasized.size, 17.0);
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        let mut fonts = TypographyToken::ALL.map(|t| TypographyTokens::standard().get(t));
        fonts[5] = FontDescriptor::new(0.0);
        assert!(matches!(
            TypographyTokens::new(fonts),
            Err(ThemeError::NonPositiveFontSize { role: "body", .. })
        ));

        let mut fonts = TypographyToken::ALL.map(|t| TypographyTokens::standard().get(t));
        fonts[10] = FontDescriptor::new(40.0);
        assert!(matches!(
            TypographyTokens::new(fonts),
            Err(ThemeError::NonMonotonic { token: "caption2", .. })
        ));
    }
}
