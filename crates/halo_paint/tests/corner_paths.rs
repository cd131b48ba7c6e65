//! Outline shape checks over the flattened polygon

use halo_core::{Point, Rect};
use halo_paint::{build_corner_path, Corners, Path};

fn cross(o: Point, a: Point, b: Point) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Proper crossing of two segments (shared endpoints and touching don't count)
fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    const EPS: f32 = 1e-4;
    let d1 = cross(c, d, a);
    let d2 = cross(c, d, b);
    let d3 = cross(a, b, c);
    let d4 = cross(a, b, d);
    ((d1 > EPS && d2 < -EPS) || (d1 < -EPS && d2 > EPS))
        && ((d3 > EPS && d4 < -EPS) || (d3 < -EPS && d4 > EPS))
}

fn is_simple(path: &Path) -> bool {
    let points = path.flatten(12);
    let n = points.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let (a, b) = (points[i], points[(i + 1) % n]);
        for j in (i + 2)..n {
            // Edges sharing a vertex are adjacent
            if i == 0 && j == n - 1 {
                continue;
            }
            let (c, d) = (points[j], points[(j + 1) % n]);
            if segments_cross(a, b, c, d) {
                return false;
            }
        }
    }
    true
}

fn rects() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 0.0, 120.0, 44.0),
        Rect::new(-30.0, 12.5, 40.0, 40.0),
        Rect::new(5.0, 5.0, 18.0, 200.0),
    ]
}

#[test]
fn all_and_no_corners_are_closed_and_simple() {
    for rect in rects() {
        for radius in [0.5, 6.0, 15.0, 1_000.0] {
            let all = build_corner_path(rect, radius, Corners::ALL);
            assert!(all.is_closed());
            assert_eq!(all.arc_count(), 4);
            assert_eq!(all.line_count(), 4);
            assert!(is_simple(&all), "{rect:?} r={radius}");

            let none = build_corner_path(rect, radius, Corners::NONE);
            assert!(none.is_closed());
            assert_eq!(none.arc_count(), 0);
            assert_eq!(none.line_count(), 4);
            assert!(is_simple(&none), "{rect:?} r={radius}");
        }
    }
}

#[test]
fn every_subset_has_one_arc_per_selected_corner() {
    let rect = Rect::new(0.0, 0.0, 80.0, 50.0);
    for bits in 0..=0b1111u8 {
        let corners = Corners::from_bits_truncate(bits);
        let path = build_corner_path(rect, 10.0, corners);
        assert_eq!(path.arc_count(), bits.count_ones() as usize);
        assert_eq!(path.line_count(), 4);
        assert!(is_simple(&path), "{corners:?}");
    }
}

#[test]
fn oversized_radius_matches_half_short_side() {
    for rect in rects() {
        let half = rect.width().min(rect.height()) / 2.0;
        for corners in [Corners::ALL, Corners::TOP, Corners::TRAILING] {
            assert_eq!(
                build_corner_path(rect, half * 3.0, corners),
                build_corner_path(rect, half, corners)
            );
            assert_eq!(
                build_corner_path(rect, f32::INFINITY, corners),
                build_corner_path(rect, half, corners)
            );
        }
    }
}

#[test]
fn invalid_radius_is_square() {
    let rect = Rect::new(0.0, 0.0, 60.0, 30.0);
    let square = build_corner_path(rect, 0.0, Corners::NONE);
    assert_eq!(build_corner_path(rect, -5.0, Corners::ALL), square);
    assert_eq!(build_corner_path(rect, f32::NAN, Corners::ALL), square);
    assert_eq!(build_corner_path(rect, 0.0, Corners::ALL), square);
}

#[test]
fn pill_bounds_match_rect() {
    let rect = Rect::new(10.0, 10.0, 100.0, 30.0);
    let bounds = build_corner_path(rect, 15.0, Corners::ALL).bounds();
    assert!((bounds.x() - 10.0).abs() < 1e-3);
    assert!((bounds.width() - 100.0).abs() < 1e-3);
    assert!((bounds.height() - 30.0).abs() < 1e-3);
}
