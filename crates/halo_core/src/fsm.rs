//! Interaction state machine
//!
//! Tracks the hover/press condition of a single component instance from
//! discrete pointer notifications plus an externally owned enabled flag.
//!
//! Transition table:
//!
//! | from    | event | to      | activation |
//! |---------|-------|---------|------------|
//! | Idle    | Enter | Hovered |            |
//! | Idle    | Down  | Pressed |            |
//! | Hovered | Leave | Idle    |            |
//! | Hovered | Down  | Pressed |            |
//! | Pressed | Up    | Hovered | yes        |
//! | Pressed | Leave | Idle    |            |
//!
//! `Down` is only ever reported inside the hit region, so a press from `Idle`
//! implies the pointer is inside. A `Leave` while pressed cancels the press:
//! the later `Up` arrives in `Idle` and does nothing. `Disabled` accepts no
//! pointer events at all.

use crate::events::PointerEvent;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of transitions retained for debugging
pub const HISTORY_LIMIT: usize = 64;

/// Discrete interaction phase of a component
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionPhase {
    #[default]
    Idle,
    Hovered,
    Pressed,
    Disabled,
}

/// Snapshot read by style resolvers
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub enabled: bool,
    pub hovered: bool,
    pub pressed: bool,
}

impl InteractionState {
    pub const IDLE: InteractionState = InteractionState::new(true, false, false);
    pub const HOVERED: InteractionState = InteractionState::new(true, true, false);
    pub const PRESSED: InteractionState = InteractionState::new(true, true, true);
    pub const DISABLED: InteractionState = InteractionState::new(false, false, false);

    pub const fn new(enabled: bool, hovered: bool, pressed: bool) -> Self {
        Self {
            enabled,
            hovered,
            pressed,
        }
    }

    /// Collapse the flags into a phase; disabled wins, then pressed, then hovered
    pub fn phase(&self) -> InteractionPhase {
        if !self.enabled {
            InteractionPhase::Disabled
        } else if self.pressed {
            InteractionPhase::Pressed
        } else if self.hovered {
            InteractionPhase::Hovered
        } else {
            InteractionPhase::Idle
        }
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::IDLE
    }
}

impl From<InteractionPhase> for InteractionState {
    fn from(phase: InteractionPhase) -> Self {
        match phase {
            InteractionPhase::Idle => Self::IDLE,
            InteractionPhase::Hovered => Self::HOVERED,
            InteractionPhase::Pressed => Self::PRESSED,
            InteractionPhase::Disabled => Self::DISABLED,
        }
    }
}

/// Returned when a release completes an active press.
///
/// The owning component invokes its action once per `Activation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "an activation means the component's action should run"]
pub struct Activation;

/// Input fed to the tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerInput {
    Pointer(PointerEvent),
    Enable,
    Disable,
}

/// One recorded state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRecord {
    pub from: InteractionPhase,
    pub input: TrackerInput,
    pub to: InteractionPhase,
}

/// Look up the pointer transition for a phase, if any
fn pointer_transition(phase: InteractionPhase, event: PointerEvent) -> Option<InteractionPhase> {
    use InteractionPhase::*;
    use PointerEvent::*;

    match (phase, event) {
        (Idle, Enter) => Some(Hovered),
        (Idle, Down) => Some(Pressed),
        (Hovered, Leave) => Some(Idle),
        (Hovered, Down) => Some(Pressed),
        (Pressed, Up) => Some(Hovered),
        (Pressed, Leave) => Some(Idle),
        _ => None,
    }
}

/// Per-instance interaction tracker
#[derive(Clone, Debug)]
pub struct InteractionTracker {
    phase: InteractionPhase,
    history: VecDeque<TransitionRecord>,
}

impl InteractionTracker {
    /// Create an enabled tracker in the idle phase
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            phase: if enabled {
                InteractionPhase::Idle
            } else {
                InteractionPhase::Disabled
            },
            history: VecDeque::new(),
        }
    }

    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    /// Current snapshot for the style resolver
    pub fn state(&self) -> InteractionState {
        self.phase.into()
    }

    pub fn is_enabled(&self) -> bool {
        self.phase != InteractionPhase::Disabled
    }

    /// Check if a pointer event would change the phase
    pub fn can_send(&self, event: PointerEvent) -> bool {
        pointer_transition(self.phase, event).is_some()
    }

    /// Feed a pointer event; returns an activation when a press completes
    pub fn send(&mut self, event: PointerEvent) -> Option<Activation> {
        let from = self.phase;
        let to = pointer_transition(from, event)?;
        self.apply(TrackerInput::Pointer(event), to);

        (from == InteractionPhase::Pressed && event == PointerEvent::Up).then_some(Activation)
    }

    /// Host-reported hover flag
    pub fn set_hovered(&mut self, hovered: bool) {
        let event = if hovered {
            PointerEvent::Enter
        } else {
            PointerEvent::Leave
        };
        // Enter/Leave never complete a press.
        let _ = self.send(event);
    }

    /// Host-reported pointer-down-inside flag
    pub fn set_pressed(&mut self, pressed: bool) -> Option<Activation> {
        self.send(if pressed {
            PointerEvent::Down
        } else {
            PointerEvent::Up
        })
    }

    /// Apply the externally owned enabled flag.
    ///
    /// Disabling clears any hover/press; re-enabling starts from idle.
    pub fn set_enabled(&mut self, enabled: bool) {
        match (enabled, self.phase) {
            (false, InteractionPhase::Disabled) => {}
            (false, _) => self.apply(TrackerInput::Disable, InteractionPhase::Disabled),
            (true, InteractionPhase::Disabled) => {
                self.apply(TrackerInput::Enable, InteractionPhase::Idle)
            }
            (true, _) => {}
        }
    }

    /// Transition history, oldest first
    pub fn history(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn apply(&mut self, input: TrackerInput, to: InteractionPhase) {
        let from = self.phase;
        self.phase = to;

        tracing::trace!(?from, ?input, ?to, "interaction transition");

        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(TransitionRecord { from, input, to });
    }
}

impl Default for InteractionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PointerEvent::*;

    #[test]
    fn test_simple_transitions() {
        let mut tracker = InteractionTracker::new();
        assert_eq!(tracker.phase(), InteractionPhase::Idle);

        assert!(tracker.send(Enter).is_none());
        assert_eq!(tracker.phase(), InteractionPhase::Hovered);

        assert!(tracker.send(Down).is_none());
        assert_eq!(tracker.phase(), InteractionPhase::Pressed);

        assert_eq!(tracker.send(Up), Some(Activation));
        assert_eq!(tracker.phase(), InteractionPhase::Hovered);

        assert!(tracker.send(Leave).is_none());
        assert_eq!(tracker.phase(), InteractionPhase::Idle);
    }

    #[test]
    fn test_leave_cancels_press() {
        let mut tracker = InteractionTracker::new();
        tracker.set_hovered(true);
        assert!(tracker.set_pressed(true).is_none());

        tracker.set_hovered(false);
        assert_eq!(tracker.phase(), InteractionPhase::Idle);

        // Release outside: nothing to activate
        assert!(tracker.set_pressed(false).is_none());
        assert_eq!(tracker.state(), InteractionState::IDLE);
    }

    #[test]
    fn test_reenter_while_held_does_not_resume_press() {
        let mut tracker = InteractionTracker::new();
        tracker.set_hovered(true);
        let _ = tracker.set_pressed(true);
        tracker.set_hovered(false);
        tracker.set_hovered(true);

        assert_eq!(tracker.phase(), InteractionPhase::Hovered);
        assert!(tracker.set_pressed(false).is_none());
    }

    #[test]
    fn test_disabled_ignores_pointer_and_clears_flags() {
        let mut tracker = InteractionTracker::new();
        tracker.set_hovered(true);
        let _ = tracker.set_pressed(true);

        tracker.set_enabled(false);
        assert_eq!(tracker.state(), InteractionState::DISABLED);

        for event in PointerEvent::ALL {
            assert!(!tracker.can_send(event));
            assert!(tracker.send(event).is_none());
        }
        assert_eq!(tracker.phase(), InteractionPhase::Disabled);

        tracker.set_enabled(true);
        assert_eq!(tracker.state(), InteractionState::IDLE);
    }

    #[test]
    fn test_press_without_hover_report() {
        let mut tracker = InteractionTracker::new();
        let _ = tracker.set_pressed(true);
        assert_eq!(tracker.phase(), InteractionPhase::Pressed);
        assert_eq!(tracker.set_pressed(false), Some(Activation));
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut tracker = InteractionTracker::new();
        assert!(!tracker.can_send(Leave));
        assert!(tracker.send(Up).is_none());
        assert_eq!(tracker.phase(), InteractionPhase::Idle);
        assert_eq!(tracker.history().count(), 0);
    }

    #[test]
    fn test_history() {
        let mut tracker = InteractionTracker::new();
        tracker.set_hovered(true);
        let _ = tracker.set_pressed(true);
        tracker.set_enabled(false);

        let history: Vec<_> = tracker.history().copied().collect();
        assert_eq!(history.len(), 3);
        assert_eq!(
            history[0],
            TransitionRecord {
                from: InteractionPhase::Idle,
                input: TrackerInput::Pointer(Enter),
                to: InteractionPhase::Hovered,
            }
        );
        assert_eq!(history[2].input, TrackerInput::Disable);

        tracker.clear_history();
        assert_eq!(tracker.history().count(), 0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut tracker = InteractionTracker::new();
        for _ in 0..HISTORY_LIMIT {
            tracker.set_hovered(true);
            tracker.set_hovered(false);
        }
        assert_eq!(tracker.history().count(), HISTORY_LIMIT);
    }

    #[test]
    fn test_state_phase_round_trip() {
        for phase in [
            InteractionPhase::Idle,
            InteractionPhase::Hovered,
            InteractionPhase::Pressed,
            InteractionPhase::Disabled,
        ] {
            assert_eq!(InteractionState::from(phase).phase(), phase);
        }
        // Disabled wins over stale flags
        assert_eq!(
            InteractionState::new(false, true, true).phase(),
            InteractionPhase::Disabled
        );
    }
}
