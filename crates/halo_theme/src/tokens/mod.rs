//! Design tokens
//!
//! Tokens are the atomic values of the design system:
//! - Colors
//! - Typography (sizes, weights, monospace)
//! - Spacing (scale, component insets, layout rhythm)
//! - Corner radii
//! - Elevation shadows
//! - Animation configs and role aliases

mod animation;
mod color;
mod elevation;
mod radius;
mod spacing;
mod typography;

pub use animation::*;
pub use color::*;
pub use elevation::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;
