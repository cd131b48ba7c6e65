use halo_core::InteractionState;
use halo_theme::{Theme, ThemePreset};
use halo_widgets::{resolve_style, ButtonSize, ButtonVariant};

const ENABLED_STATES: [InteractionState; 3] = [
    InteractionState::IDLE,
    InteractionState::HOVERED,
    InteractionState::PRESSED,
];

#[test]
fn test_disabled_overrides_pointer_flags() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let quiet = resolve_style(variant, size, InteractionState::DISABLED, &theme);
                let busy = resolve_style(
                    variant,
                    size,
                    InteractionState::new(false, true, true),
                    &theme,
                );
                assert_eq!(quiet, busy, "{preset} {variant} {size}");
                assert_eq!(busy.text_color, theme.colors().quaternary_text);
                assert_eq!(busy.scale, 1.0);
            }
        }
    }
}

#[test]
fn test_pressed_beats_hovered_beats_idle() {
    let theme = Theme::light();
    for variant in [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Destructive,
    ] {
        for size in ButtonSize::ALL {
            let [idle, hovered, pressed] =
                ENABLED_STATES.map(|state| resolve_style(variant, size, state, &theme));
            assert_ne!(pressed.fill_color, hovered.fill_color, "{variant} {size}");
            assert_ne!(hovered.fill_color, idle.fill_color, "{variant} {size}");
            assert_ne!(pressed.fill_color, idle.fill_color, "{variant} {size}");
        }
    }

    for size in ButtonSize::ALL {
        let [idle, hovered, pressed] = ENABLED_STATES
            .map(|state| resolve_style(ButtonVariant::Text, size, state, &theme));
        for attrs in [idle, hovered, pressed] {
            assert!(attrs.fill_color.is_transparent());
        }
        assert!(pressed.scale < idle.scale && idle.scale < hovered.scale);
    }
}

#[test]
fn test_pressed_flag_wins_without_hover() {
    let theme = Theme::dark();
    let pressed_only = resolve_style(
        ButtonVariant::Primary,
        ButtonSize::Medium,
        InteractionState::new(true, false, true),
        &theme,
    );
    let pressed = resolve_style(
        ButtonVariant::Primary,
        ButtonSize::Medium,
        InteractionState::PRESSED,
        &theme,
    );
    assert_eq!(pressed_only, pressed);
}

#[test]
fn test_sizes_grow() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let [small, medium, large] = ButtonSize::ALL.map(|size| {
            resolve_style(ButtonVariant::Primary, size, InteractionState::IDLE, &theme)
        });
        for (a, b) in [(small, medium), (medium, large)] {
            assert!(a.font.size <= b.font.size);
            assert!(a.corner_radius < b.corner_radius);
            assert!(a.horizontal_padding < b.horizontal_padding);
            assert!(a.vertical_padding < b.vertical_padding);
            assert!(a.min_width < b.min_width);
            assert!(a.min_height < b.min_height);
        }
    }
}

#[test]
fn test_enabled_states_keep_text_legible() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let backdrop = theme.colors().background;
        for variant in ButtonVariant::ALL {
            for state in ENABLED_STATES {
                let attrs = resolve_style(variant, ButtonSize::Medium, state, &theme);
                assert!(
                    attrs.meets_min_contrast(backdrop),
                    "{preset} {variant} {:?}: contrast {}",
                    state.phase(),
                    attrs.text_contrast(backdrop)
                );
            }
        }
    }
}

#[test]
fn test_resolution_is_pure() {
    let theme = Theme::light();
    for variant in ButtonVariant::ALL {
        let first = resolve_style(variant, ButtonSize::Small, InteractionState::HOVERED, &theme);
        let second = resolve_style(variant, ButtonSize::Small, InteractionState::HOVERED, &theme);
        assert_eq!(first, second);
    }
}
