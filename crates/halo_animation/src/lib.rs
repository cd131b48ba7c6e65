//! Halo Animation
//!
//! Animation descriptors handed to a host renderer, which owns the clock.
//!
//! - **Curves**: CSS-style cubic-bezier timing curves and damped springs
//! - **Configs**: duration, curve and start delay, validated at the boundary
//! - **Combinators**: back-to-back sequencing and staggered starts

pub mod config;
pub mod easing;
pub mod sequence;

pub use config::{AnimationConfig, AnimationError};
pub use easing::Curve;
pub use sequence::{sequence, staggered, total_span};
