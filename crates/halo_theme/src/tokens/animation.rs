//! Animation tokens
//!
//! Nine base configs plus a fixed alias table from interaction roles to
//! those configs. Roles never carry values of their own.

use halo_animation::{AnimationConfig, Curve};
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Base animation config keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationToken {
    Immediate,
    Fast,
    Standard,
    Slow,
    Gentle,
    Spring,
    Bounce,
    Smooth,
    Sharp,
}

impl AnimationToken {
    pub const ALL: [AnimationToken; 9] = [
        AnimationToken::Immediate,
        AnimationToken::Fast,
        AnimationToken::Standard,
        AnimationToken::Slow,
        AnimationToken::Gentle,
        AnimationToken::Spring,
        AnimationToken::Bounce,
        AnimationToken::Smooth,
        AnimationToken::Sharp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnimationToken::Immediate => "immediate",
            AnimationToken::Fast => "fast",
            AnimationToken::Standard => "standard",
            AnimationToken::Slow => "slow",
            AnimationToken::Gentle => "gentle",
            AnimationToken::Spring => "spring",
            AnimationToken::Bounce => "bounce",
            AnimationToken::Smooth => "smooth",
            AnimationToken::Sharp => "sharp",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Interaction roles that alias a base config
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationRole {
    ButtonInteraction,
    Hover,
    Press,
    PageTransition,
    ModalPresentation,
    Tooltip,
    ListItem,
    Loading,
    Success,
    Error,
    Navigation,
    TabSwitch,
    Collapse,
    Drag,
}

impl AnimationRole {
    pub const ALL: [AnimationRole; 14] = [
        AnimationRole::ButtonInteraction,
        AnimationRole::Hover,
        AnimationRole::Press,
        AnimationRole::PageTransition,
        AnimationRole::ModalPresentation,
        AnimationRole::Tooltip,
        AnimationRole::ListItem,
        AnimationRole::Loading,
        AnimationRole::Success,
        AnimationRole::Error,
        AnimationRole::Navigation,
        AnimationRole::TabSwitch,
        AnimationRole::Collapse,
        AnimationRole::Drag,
    ];

    /// The base config this role resolves to
    pub fn token(self) -> AnimationToken {
        match self {
            AnimationRole::ButtonInteraction => AnimationToken::Fast,
            AnimationRole::Hover => AnimationToken::Fast,
            AnimationRole::Press => AnimationToken::Immediate,
            AnimationRole::PageTransition => AnimationToken::Standard,
            AnimationRole::ModalPresentation => AnimationToken::Smooth,
            AnimationRole::Tooltip => AnimationToken::Fast,
            AnimationRole::ListItem => AnimationToken::Standard,
            AnimationRole::Loading => AnimationToken::Gentle,
            AnimationRole::Success => AnimationToken::Bounce,
            AnimationRole::Error => AnimationToken::Sharp,
            AnimationRole::Navigation => AnimationToken::Standard,
            AnimationRole::TabSwitch => AnimationToken::Smooth,
            AnimationRole::Collapse => AnimationToken::Smooth,
            AnimationRole::Drag => AnimationToken::Spring,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationRole::ButtonInteraction => "button_interaction",
            AnimationRole::Hover => "hover",
            AnimationRole::Press => "press",
            AnimationRole::PageTransition => "page_transition",
            AnimationRole::ModalPresentation => "modal_presentation",
            AnimationRole::Tooltip => "tooltip",
            AnimationRole::ListItem => "list_item",
            AnimationRole::Loading => "loading",
            AnimationRole::Success => "success",
            AnimationRole::Error => "error",
            AnimationRole::Navigation => "navigation",
            AnimationRole::TabSwitch => "tab_switch",
            AnimationRole::Collapse => "collapse",
            AnimationRole::Drag => "drag",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// The nine base animation configs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationTokens {
    pub immediate: AnimationConfig,
    pub fast: AnimationConfig,
    pub standard: AnimationConfig,
    pub slow: AnimationConfig,
    pub gentle: AnimationConfig,
    pub spring: AnimationConfig,
    pub bounce: AnimationConfig,
    pub smooth: AnimationConfig,
    pub sharp: AnimationConfig,
}

impl AnimationTokens {
    /// Build from configs in [`AnimationToken::ALL`] order
    pub fn new(configs: [AnimationConfig; 9]) -> Result<Self, ThemeError> {
        let [immediate, fast, standard, slow, gentle, spring, bounce, smooth, sharp] = configs;
        let tokens = Self {
            immediate,
            fast,
            standard,
            slow,
            gentle,
            spring,
            bounce,
            smooth,
            sharp,
        };
        tokens.validate()?;
        Ok(tokens)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        for token in AnimationToken::ALL {
            self.get(token)
                .validate()
                .map_err(|source| ThemeError::Animation {
                    token: token.name(),
                    source,
                })?;
        }
        Ok(())
    }

    pub fn get(&self, token: AnimationToken) -> AnimationConfig {
        match token {
            AnimationToken::Immediate => self.immediate,
            AnimationToken::Fast => self.fast,
            AnimationToken::Standard => self.standard,
            AnimationToken::Slow => self.slow,
            AnimationToken::Gentle => self.gentle,
            AnimationToken::Spring => self.spring,
            AnimationToken::Bounce => self.bounce,
            AnimationToken::Smooth => self.smooth,
            AnimationToken::Sharp => self.sharp,
        }
    }

    pub fn for_role(&self, role: AnimationRole) -> AnimationConfig {
        self.get(role.token())
    }

    /// Durations in [`AnimationToken::ALL`] order with the standard curves
    fn with_timing(durations: [f32; 9], spring: (f32, f32), bounce: (f32, f32)) -> Self {
        let [immediate, fast, standard, slow, gentle, spring_duration, bounce_duration, smooth, sharp] =
            durations;
        Self {
            immediate: AnimationConfig::new(immediate, Curve::Linear),
            fast: AnimationConfig::new(fast, Curve::EaseInOut),
            standard: AnimationConfig::new(standard, Curve::EaseInOut),
            slow: AnimationConfig::new(slow, Curve::EaseInOut),
            gentle: AnimationConfig::new(gentle, Curve::EaseOut),
            spring: AnimationConfig::new(spring_duration, Curve::spring(spring.0, spring.1)),
            bounce: AnimationConfig::new(bounce_duration, Curve::spring(bounce.0, bounce.1)),
            smooth: AnimationConfig::new(smooth, Curve::EaseInOut),
            sharp: AnimationConfig::new(sharp, Curve::EaseIn),
        }
    }

    pub fn standard() -> Self {
        Self::with_timing(
            [0.05, 0.15, 0.25, 0.35, 0.5, 0.6, 0.8, 0.4, 0.2],
            (0.6, 0.8),
            (0.3, 0.6),
        )
    }

    /// Snappier timing for pointer-heavy interfaces
    pub fn responsive() -> Self {
        Self::with_timing(
            [0.03, 0.1, 0.18, 0.25, 0.35, 0.4, 0.6, 0.3, 0.15],
            (0.4, 0.8),
            (0.25, 0.6),
        )
    }

    pub fn relaxed() -> Self {
        Self::with_timing(
            [0.1, 0.25, 0.4, 0.6, 0.8, 1.0, 1.2, 0.7, 0.3],
            (0.8, 0.8),
            (0.4, 0.6),
        )
    }
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_alias_base_configs() {
        let animation = AnimationTokens::standard();
        assert_eq!(animation.for_role(AnimationRole::Hover), animation.fast);
        assert_eq!(animation.for_role(AnimationRole::Press), animation.immediate);
        assert_eq!(animation.for_role(AnimationRole::Success), animation.bounce);
        assert_eq!(animation.for_role(AnimationRole::Drag), animation.spring);
        assert_eq!(animation.for_role(AnimationRole::TabSwitch), animation.smooth);

        for role in AnimationRole::ALL {
            assert_eq!(AnimationRole::from_name(role.name()), Some(role));
        }
    }

    #[test]
    fn test_presets_validate() {
        for preset in [
            AnimationTokens::standard(),
            AnimationTokens::responsive(),
            AnimationTokens::relaxed(),
        ] {
            preset.validate().unwrap();
        }
        assert_eq!(
            AnimationTokens::responsive().spring.curve,
            Curve::spring(0.4, 0.8)
        );
    }

    #[test]
    fn test_new_rejects_negative_duration() {
        let mut configs = AnimationToken::ALL.map(|t| AnimationTokens::standard().get(t));
        configs[3].duration = -0.1;
        assert!(matches!(
            AnimationTokens::new(configs),
            Err(ThemeError::Animation { token: "slow", .. })
        ));
    }
}
