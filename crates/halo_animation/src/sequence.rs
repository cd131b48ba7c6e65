//! Combinators over animation configs
//!
//! Both combinators are pure and preserve input order. Durations and curves
//! pass through untouched; only the delay is rewritten.

use crate::config::AnimationConfig;

/// Chain configs back to back.
///
/// Each output starts when everything before it has finished: its delay is
/// the running sum of `duration + delay` over the preceding inputs. Negative
/// or NaN contributions from unvalidated configs count as 0, so every output
/// delay is non-negative.
pub fn sequence(configs: &[AnimationConfig]) -> Vec<AnimationConfig> {
    let mut start = 0.0_f32;
    configs
        .iter()
        .map(|config| {
            let scheduled = AnimationConfig {
                delay: start,
                ..*config
            };
            start += non_negative(config.duration) + non_negative(config.delay);
            scheduled
        })
        .collect()
}

/// `count` copies of `config` started `interval` seconds apart.
///
/// A negative or NaN interval is treated as 0 and an infinite one as
/// `f32::MAX`, so delays stay finite and non-negative.
pub fn staggered(config: AnimationConfig, count: usize, interval: f32) -> Vec<AnimationConfig> {
    let interval = if interval.is_finite() && interval >= 0.0 {
        interval
    } else {
        let clamped = if interval == f32::INFINITY { f32::MAX } else { 0.0 };
        tracing::debug!(interval, clamped, "stagger interval clamped");
        clamped
    };
    (0..count)
        .map(|index| AnimationConfig {
            delay: index as f32 * interval,
            ..config
        })
        .collect()
}

fn non_negative(value: f32) -> f32 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Time at which the last config in a schedule finishes
pub fn total_span(configs: &[AnimationConfig]) -> f32 {
    configs
        .iter()
        .map(AnimationConfig::total_duration)
        .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Curve;

    #[test]
    fn test_sequence_counts_prior_delays() {
        let configs = [
            AnimationConfig::new(0.1, Curve::Linear).delayed(0.05),
            AnimationConfig::new(0.2, Curve::EaseIn),
            AnimationConfig::new(0.3, Curve::EaseOut),
        ];
        let out = sequence(&configs);
        assert_eq!(out[0].delay, 0.0);
        assert!((out[1].delay - 0.15).abs() < 1e-6);
        assert!((out[2].delay - 0.35).abs() < 1e-6);
        assert_eq!(out[2].curve, Curve::EaseOut);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(sequence(&[]).is_empty());
        assert!(staggered(AnimationConfig::default(), 0, 0.1).is_empty());
        assert_eq!(total_span(&[]), 0.0);
    }

    #[test]
    fn test_negative_interval() {
        let out = staggered(AnimationConfig::default(), 3, -0.2);
        assert!(out.iter().all(|c| c.delay == 0.0));
    }

    #[test]
    fn test_infinite_interval() {
        let out = staggered(AnimationConfig::new(0.2, Curve::Linear), 3, f32::INFINITY);
        assert_eq!(out[0].delay, 0.0);
        assert!(out.iter().all(|c| !c.delay.is_nan() && c.delay >= 0.0));
        assert_eq!(out[1].delay, f32::MAX);

        let out = staggered(AnimationConfig::default(), 2, f32::NAN);
        assert!(out.iter().all(|c| c.delay == 0.0));
    }

    #[test]
    fn test_sequence_ignores_negative_delays() {
        let configs = [
            AnimationConfig {
                delay: -0.5,
                ..AnimationConfig::new(0.1, Curve::Linear)
            },
            AnimationConfig::new(0.2, Curve::EaseIn),
            AnimationConfig::new(0.3, Curve::EaseOut),
        ];
        let out = sequence(&configs);
        assert_eq!(out[0].delay, 0.0);
        assert!((out[1].delay - 0.1).abs() < 1e-6);
        assert!((out[2].delay - 0.3).abs() < 1e-6);
        assert!(out.iter().all(|c| c.delay >= 0.0));
    }
}
