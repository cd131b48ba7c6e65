//! Interpolation curves
//!
//! Curves are descriptors: the host's renderer drives the clock and asks a
//! curve for progress at a given elapsed time.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Curve used to interpolate an animated value
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Damped spring; `response` is the undamped period in seconds and
    /// `damping_fraction` is 1.0 for critical damping
    Spring { response: f32, damping_fraction: f32 },
}

impl Curve {
    pub const fn spring(response: f32, damping_fraction: f32) -> Self {
        Curve::Spring {
            response,
            damping_fraction,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::EaseIn => "ease_in",
            Curve::EaseOut => "ease_out",
            Curve::EaseInOut => "ease_in_out",
            Curve::Spring { .. } => "spring",
        }
    }

    pub fn is_spring(&self) -> bool {
        matches!(self, Curve::Spring { .. })
    }

    /// CSS cubic-bezier control points `(x1, y1, x2, y2)` for the timing curves
    pub fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Curve::Linear => Some((0.0, 0.0, 1.0, 1.0)),
            Curve::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Curve::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Curve::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Curve::Spring { .. } => None,
        }
    }

    /// Progress at `elapsed` seconds into an animation lasting `duration`.
    ///
    /// Timing curves map `elapsed / duration` through their bezier and are
    /// pinned to 0 and 1 at the ends. Springs run on their own clock and
    /// ignore `duration`; they may overshoot 1 while settling.
    pub fn sample(&self, elapsed: f32, duration: f32) -> f32 {
        if elapsed <= 0.0 {
            return 0.0;
        }
        match *self {
            Curve::Linear => progress(elapsed, duration),
            Curve::Spring {
                response,
                damping_fraction,
            } => spring_position(elapsed, response, damping_fraction),
            _ => {
                let t = progress(elapsed, duration);
                match self.control_points() {
                    Some((x1, y1, x2, y2)) => cubic_bezier_ease(t, x1, y1, x2, y2),
                    None => t,
                }
            }
        }
    }
}

fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration > 0.0 {
        (elapsed / duration).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Closed-form step response of a unit-mass damped oscillator
fn spring_position(elapsed: f32, response: f32, damping_fraction: f32) -> f32 {
    if !(response > 0.0) {
        return 1.0;
    }
    let t = elapsed as f64;
    let omega = TAU / response as f64;
    let zeta = (damping_fraction as f64).max(0.0);

    let displacement = if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        (-zeta * omega * t).exp()
            * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
    } else {
        // Critically damped (over-damping is treated as critical)
        (-omega * t).exp() * (1.0 + omega * t)
    };
    (1.0 - displacement) as f32
}

/// Cubic bezier easing matching the CSS timing-function definition.
///
/// Newton-Raphson on the x polynomial with a bisection fallback, in f64.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..30 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_curve_endpoints() {
        for curve in [Curve::Linear, Curve::EaseIn, Curve::EaseOut, Curve::EaseInOut] {
            assert_eq!(curve.sample(0.0, 0.25), 0.0);
            assert_eq!(curve.sample(0.25, 0.25), 1.0);
            assert_eq!(curve.sample(1.0, 0.25), 1.0);
        }
    }

    #[test]
    fn test_ease_shapes() {
        assert!(Curve::EaseIn.sample(0.25, 1.0) < 0.25);
        assert!(Curve::EaseOut.sample(0.25, 1.0) > 0.25);
        assert!((Curve::EaseInOut.sample(0.5, 1.0) - 0.5).abs() < 1e-4);
        assert!((Curve::Linear.sample(0.3, 1.0) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        assert_eq!(Curve::EaseOut.sample(0.01, 0.0), 1.0);
    }

    #[test]
    fn test_spring_settles() {
        let bouncy = Curve::spring(0.3, 0.6);
        let peak = (1..100)
            .map(|i| bouncy.sample(i as f32 * 0.005, 0.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0, "underdamped spring overshoots");
        assert!((bouncy.sample(3.0, 0.0) - 1.0).abs() < 1e-3);

        let critical = Curve::spring(0.5, 1.0);
        let mut last = 0.0;
        for i in 1..200 {
            let value = critical.sample(i as f32 * 0.01, 0.0);
            assert!(value >= last - 1e-6 && value <= 1.0 + 1e-6);
            last = value;
        }
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Curve::spring(0.6, 0.8)).unwrap();
        assert_eq!(json, r#"{"kind":"spring","response":0.6,"damping_fraction":0.8}"#);
        let back: Curve = serde_json::from_str(r#"{"kind":"ease_in_out"}"#).unwrap();
        assert_eq!(back, Curve::EaseInOut);
    }
}
