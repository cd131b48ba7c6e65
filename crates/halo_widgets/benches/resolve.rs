use criterion::{black_box, criterion_group, criterion_main, Criterion};
use halo_core::InteractionState;
use halo_theme::Theme;
use halo_widgets::{resolve_style, ButtonAttributes, ButtonSize, ButtonVariant};

fn bench_resolve(c: &mut Criterion) {
    let theme = Theme::light();

    c.bench_function("resolve_style primary hovered", |b| {
        b.iter(|| {
            resolve_style(
                black_box(ButtonVariant::Primary),
                black_box(ButtonSize::Medium),
                black_box(InteractionState::HOVERED),
                &theme,
            )
        })
    });

    c.bench_function("resolve_style full matrix", |b| {
        b.iter(|| {
            for variant in ButtonVariant::ALL {
                for size in ButtonSize::ALL {
                    for state in [
                        InteractionState::IDLE,
                        InteractionState::HOVERED,
                        InteractionState::PRESSED,
                        InteractionState::DISABLED,
                    ] {
                        black_box(resolve_style(variant, size, state, &theme));
                    }
                }
            }
        })
    });

    let idle = resolve_style(
        ButtonVariant::Primary,
        ButtonSize::Medium,
        InteractionState::IDLE,
        &theme,
    );
    let pressed = resolve_style(
        ButtonVariant::Primary,
        ButtonSize::Medium,
        InteractionState::PRESSED,
        &theme,
    );
    c.bench_function("attributes lerp", |b| {
        b.iter(|| ButtonAttributes::lerp(&idle, &pressed, black_box(0.5)))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
