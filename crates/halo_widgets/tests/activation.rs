use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use halo_core::{InteractionPhase, PointerEvent};
use halo_widgets::{button, Button, Widget};

fn counted() -> (Button, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let button = button("Send")
        .on_click(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .build();
    (button, count)
}

#[test]
fn test_release_outside_does_not_activate() {
    let (mut button, count) = counted();
    for event in [
        PointerEvent::Enter,
        PointerEvent::Down,
        PointerEvent::Leave,
        PointerEvent::Up,
    ] {
        assert!(!button.handle_event(event));
    }
    assert_eq!(button.phase(), InteractionPhase::Idle);
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(!button.take_clicked());
}

#[test]
fn test_release_inside_activates_once() {
    let (mut button, count) = counted();
    let activations = [
        PointerEvent::Enter,
        PointerEvent::Down,
        PointerEvent::Up,
        PointerEvent::Up,
    ]
    .into_iter()
    .filter(|&event| button.handle_event(event))
    .count();

    assert_eq!(activations, 1);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(button.phase(), InteractionPhase::Hovered);
}

#[test]
fn test_repeated_clicks_each_activate() {
    let (mut button, count) = counted();
    button.handle_event(PointerEvent::Enter);
    for _ in 0..3 {
        button.handle_event(PointerEvent::Down);
        button.handle_event(PointerEvent::Up);
    }
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_disabling_mid_press_cancels() {
    let (mut button, count) = counted();
    button.handle_event(PointerEvent::Enter);
    button.handle_event(PointerEvent::Down);
    button.set_enabled(false);
    assert!(!button.handle_event(PointerEvent::Up));

    button.set_enabled(true);
    assert_eq!(button.phase(), InteractionPhase::Idle);
    assert!(!button.handle_event(PointerEvent::Up));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}
