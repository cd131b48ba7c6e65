//! Halo Core
//!
//! Foundational value types for the Halo component toolkit:
//!
//! - **Colors**: sRGB colors with opacity, compositing and WCAG contrast
//! - **Geometry**: points, sizes, rectangles and edge insets
//! - **Events**: discrete pointer notifications from the host input layer
//! - **State Machines**: per-component hover/press/disabled tracking
//!
//! # Example
//!
//! ```rust
//! use halo_core::fsm::{InteractionTracker, InteractionState};
//!
//! let mut tracker = InteractionTracker::new();
//! tracker.set_hovered(true);
//! assert!(tracker.set_pressed(true).is_none());
//!
//! // Releasing inside completes the press exactly once
//! assert!(tracker.set_pressed(false).is_some());
//! assert_eq!(tracker.state(), InteractionState::HOVERED);
//! ```

pub mod color;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use color::{Color, ParseColorError};
pub use events::PointerEvent;
pub use fsm::{Activation, InteractionPhase, InteractionState, InteractionTracker};
pub use geometry::{EdgeInsets, Point, Rect, Size};
