//! Halo Paint
//!
//! Path geometry for host renderers:
//!
//! - Path commands (move, line, circular arc, close) and a chaining builder
//! - Corner selection flags
//! - Outlines with any subset of rounded corners, plus hit testing

pub mod corners;
pub mod path;
pub mod rounded;

pub use corners::{Corners, CornersParseError};
pub use path::{Path, PathBuilder, PathCommand};
pub use rounded::{build_corner_path, clamp_radius, CornerRadii, RoundedShape};
