//! Path building and representation

use halo_core::{Point, Rect};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Consecutive flattened points closer than this are merged
const MERGE_EPSILON: f32 = 1e-4;

/// Path command
///
/// Angles are in radians and increase clockwise in screen space (y down),
/// so `-PI/2` points up and `0` points right.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc; its start point is the current point
    ArcTo {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Close,
}

impl PathCommand {
    /// Point on a circle at `angle`
    pub fn arc_point(center: Point, radius: f32, angle: f32) -> Point {
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: SmallVec<[PathCommand; 10]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// A single subpath that starts with `MoveTo` and ends with `Close`
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.first(), Some(PathCommand::MoveTo(_)))
            && matches!(self.commands.last(), Some(PathCommand::Close))
            && self
                .commands
                .iter()
                .skip(1)
                .filter(|c| matches!(c, PathCommand::MoveTo(_) | PathCommand::Close))
                .count()
                == 1
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count()
    }

    pub fn start_point(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Approximate the outline as a polygon.
    ///
    /// Each arc contributes `segments_per_arc` chords. Coincident consecutive
    /// vertices are merged and the closing vertex is not repeated.
    pub fn flatten(&self, segments_per_arc: usize) -> Vec<Point> {
        let segments = segments_per_arc.max(1);
        let mut points: Vec<Point> = Vec::new();
        let mut push = |points: &mut Vec<Point>, p: Point| {
            if points
                .last()
                .map_or(true, |last| last.distance(p) > MERGE_EPSILON)
            {
                points.push(p);
            }
        };

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => push(&mut points, p),
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => {
                    for i in 0..=segments {
                        let t = i as f32 / segments as f32;
                        let angle = start_angle + (end_angle - start_angle) * t;
                        push(&mut points, PathCommand::arc_point(center, radius, angle));
                    }
                }
                PathCommand::Close => {}
            }
        }

        if points.len() > 1 {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                if first.distance(*last) <= MERGE_EPSILON {
                    points.pop();
                }
            }
        }
        points
    }

    /// Axis-aligned bounds of the flattened outline
    pub fn bounds(&self) -> Rect {
        let points = self.flatten(8);
        let Some(first) = points.first() else {
            return Rect::ZERO;
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::MoveTo(point));
        self.current = point;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::LineTo(point));
        self.current = point;
        self
    }

    pub fn arc_to(mut self, center: Point, radius: f32, start: f32, end: f32) -> Self {
        self.path.commands.push(PathCommand::ArcTo {
            center,
            radius,
            start_angle: start,
            end_angle: end,
        });
        self.current = PathCommand::arc_point(center, radius, end);
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn builder_tracks_arc_end() {
        let builder = PathBuilder::new()
            .move_to(10.0, 0.0)
            .arc_to(Point::new(0.0, 0.0), 10.0, 0.0, FRAC_PI_2);
        let end = builder.current();
        assert!(end.x.abs() < 1e-5);
        assert!((end.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn counts_and_closure() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .line_to(10.0, 10.0)
            .close()
            .build();
        assert!(path.is_closed());
        assert_eq!(path.line_count(), 2);
        assert_eq!(path.arc_count(), 0);

        let open = PathBuilder::new().move_to(0.0, 0.0).line_to(1.0, 0.0).build();
        assert!(!open.is_closed());
    }

    #[test]
    fn flatten_merges_duplicates() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(0.0, 0.0)
            .line_to(4.0, 0.0)
            .line_to(0.0, 0.0)
            .close()
            .build();
        assert_eq!(path.flatten(4), vec![Point::ZERO, Point::new(4.0, 0.0)]);
    }

    #[test]
    fn bounds_of_half_circle() {
        let path = PathBuilder::new()
            .move_to(-5.0, 0.0)
            .arc_to(Point::ZERO, 5.0, PI, 2.0 * PI)
            .close()
            .build();
        let bounds = path.bounds();
        assert!((bounds.width() - 10.0).abs() < 1e-4);
        assert!((bounds.y() + 5.0).abs() < 1e-4);
    }
}
