//! Rounded outlines with an arbitrary subset of rounded corners
//!
//! The outline is traced clockwise in screen space (y grows downward),
//! starting at the top-left inset point:
//!
//! ```text
//!   start ───────── top edge ────────╮ top-trailing arc
//!     │                              │
//!  left edge                     right edge
//!     │                              │
//!     ╰──────── bottom edge ─────────╯ bottom-trailing arc
//! ```
//!
//! Every outline has exactly four edges. A selected corner adds one arc; an
//! unselected corner is a sharp vertex.

use std::f32::consts::{FRAC_PI_2, PI};

use halo_core::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::corners::Corners;
use crate::path::{Path, PathBuilder};

/// Largest radius that fits a rectangle: half its shorter side
pub fn max_allowed(rect: &Rect) -> f32 {
    let rect = normalized(rect);
    (rect.width().min(rect.height()) / 2.0).max(0.0)
}

/// Clamp a requested radius into `[0, max_allowed(rect)]`.
///
/// Negative and NaN requests become 0; anything past the limit (including
/// infinity) becomes the limit.
pub fn clamp_radius(rect: &Rect, radius: f32) -> f32 {
    if !(radius > 0.0) {
        return 0.0;
    }
    let limit = max_allowed(rect);
    if radius > limit {
        tracing::debug!(requested = radius, clamped = limit, "corner radius clamped");
        limit
    } else {
        radius
    }
}

/// Zero out negative or NaN extents
fn normalized(rect: &Rect) -> Rect {
    Rect::new(rect.x(), rect.y(), rect.width().max(0.0), rect.height().max(0.0))
}

/// Effective radius of each corner after selection and clamping
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_leading: f32,
    pub top_trailing: f32,
    pub bottom_trailing: f32,
    pub bottom_leading: f32,
}

impl CornerRadii {
    pub const ZERO: CornerRadii = CornerRadii::uniform(0.0);

    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_leading: radius,
            top_trailing: radius,
            bottom_trailing: radius,
            bottom_leading: radius,
        }
    }

    /// Radii for `rect` with `radius` applied to the selected corners only
    pub fn resolve(rect: &Rect, radius: f32, corners: Corners) -> Self {
        let r = clamp_radius(rect, radius);
        let pick = |corner: Corners| if corners.contains(corner) { r } else { 0.0 };
        Self {
            top_leading: pick(Corners::TOP_LEADING),
            top_trailing: pick(Corners::TOP_TRAILING),
            bottom_trailing: pick(Corners::BOTTOM_TRAILING),
            bottom_leading: pick(Corners::BOTTOM_LEADING),
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top_leading == self.top_trailing
            && self.top_trailing == self.bottom_trailing
            && self.bottom_trailing == self.bottom_leading
    }

    pub fn max(&self) -> f32 {
        self.top_leading
            .max(self.top_trailing)
            .max(self.bottom_trailing)
            .max(self.bottom_leading)
    }
}

/// Build the outline of `rect` with `radius` applied to `corners`.
///
/// Total: out-of-range radii are clamped, never rejected.
pub fn build_corner_path(rect: Rect, radius: f32, corners: Corners) -> Path {
    let radii = CornerRadii::resolve(&rect, radius, corners);
    trace_outline(&normalized(&rect), &radii)
}

fn trace_outline(rect: &Rect, radii: &CornerRadii) -> Path {
    let (left, top) = (rect.x(), rect.y());
    let (right, bottom) = (rect.max_x(), rect.max_y());

    let mut builder = PathBuilder::new()
        .move_to(left + radii.top_leading, top)
        .line_to(right - radii.top_trailing, top);

    if radii.top_trailing > 0.0 {
        let r = radii.top_trailing;
        builder = builder.arc_to(Point::new(right - r, top + r), r, -FRAC_PI_2, 0.0);
    }
    builder = builder.line_to(right, bottom - radii.bottom_trailing);

    if radii.bottom_trailing > 0.0 {
        let r = radii.bottom_trailing;
        builder = builder.arc_to(Point::new(right - r, bottom - r), r, 0.0, FRAC_PI_2);
    }
    builder = builder.line_to(left + radii.bottom_leading, bottom);

    if radii.bottom_leading > 0.0 {
        let r = radii.bottom_leading;
        builder = builder.arc_to(Point::new(left + r, bottom - r), r, FRAC_PI_2, PI);
    }
    builder = builder.line_to(left, top + radii.top_leading);

    if radii.top_leading > 0.0 {
        let r = radii.top_leading;
        builder = builder.arc_to(Point::new(left + r, top + r), r, PI, PI + FRAC_PI_2);
    }

    builder.close().build()
}

/// A rectangle with resolved per-corner radii
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundedShape {
    pub rect: Rect,
    pub radii: CornerRadii,
}

impl RoundedShape {
    pub fn new(rect: Rect, radius: f32, corners: Corners) -> Self {
        Self {
            radii: CornerRadii::resolve(&rect, radius, corners),
            rect: normalized(&rect),
        }
    }

    pub fn path(&self) -> Path {
        trace_outline(&self.rect, &self.radii)
    }

    /// Hit test against the rounded outline (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        if !self.rect.contains(point) {
            return false;
        }

        let (left, top) = (self.rect.x(), self.rect.y());
        let (right, bottom) = (self.rect.max_x(), self.rect.max_y());
        let corner_centers = [
            (self.radii.top_leading, Point::new(left, top), 1.0, 1.0),
            (self.radii.top_trailing, Point::new(right, top), -1.0, 1.0),
            (self.radii.bottom_trailing, Point::new(right, bottom), -1.0, -1.0),
            (self.radii.bottom_leading, Point::new(left, bottom), 1.0, -1.0),
        ];

        corner_centers.iter().all(|&(r, corner, sx, sy)| {
            if r <= 0.0 {
                return true;
            }
            let center = Point::new(corner.x + sx * r, corner.y + sy * r);
            let in_corner_box =
                (point.x - center.x) * sx < 0.0 && (point.y - center.y) * sy < 0.0;
            !in_corner_box || center.distance(point) <= r
        })
    }
}
