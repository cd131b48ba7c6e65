//! Animation descriptors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::easing::Curve;

/// Rejected animation parameters
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AnimationError {
    #[error("duration must be finite and non-negative, got {0}")]
    InvalidDuration(f32),
    #[error("delay must be finite and non-negative, got {0}")]
    InvalidDelay(f32),
    #[error("spring response must be finite and positive, got {0}")]
    InvalidSpringResponse(f32),
    #[error("spring damping fraction must be finite and non-negative, got {0}")]
    InvalidDampingFraction(f32),
}

/// How a value should be interpolated: a duration and delay in seconds plus
/// a curve. Purely descriptive; the host owns the timers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration: f32,
    pub curve: Curve,
    #[serde(default)]
    pub delay: f32,
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

impl AnimationConfig {
    /// Config with no delay. Used for trusted constants; see [`Self::try_new`]
    /// for untrusted input.
    pub const fn new(duration: f32, curve: Curve) -> Self {
        Self {
            duration,
            curve,
            delay: 0.0,
        }
    }

    pub fn try_new(duration: f32, curve: Curve, delay: f32) -> Result<Self, AnimationError> {
        let config = Self {
            duration,
            curve,
            delay,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnimationError> {
        if !non_negative(self.duration) {
            return Err(AnimationError::InvalidDuration(self.duration));
        }
        if !non_negative(self.delay) {
            return Err(AnimationError::InvalidDelay(self.delay));
        }
        if let Curve::Spring {
            response,
            damping_fraction,
        } = self.curve
        {
            if !(response.is_finite() && response > 0.0) {
                return Err(AnimationError::InvalidSpringResponse(response));
            }
            if !non_negative(damping_fraction) {
                return Err(AnimationError::InvalidDampingFraction(damping_fraction));
            }
        }
        Ok(())
    }

    /// Same config starting `by` seconds later; the delay never drops below 0
    pub fn delayed(self, by: f32) -> Self {
        Self {
            delay: (self.delay + by).max(0.0),
            ..self
        }
    }

    pub fn with_duration(self, duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            ..self
        }
    }

    pub fn with_curve(self, curve: Curve) -> Self {
        Self { curve, ..self }
    }

    /// Delay plus duration
    pub fn total_duration(&self) -> f32 {
        self.delay + self.duration
    }

    /// Curve progress `elapsed` seconds after the animation was started,
    /// honouring the delay
    pub fn value_at(&self, elapsed: f32) -> f32 {
        self.curve.sample(elapsed - self.delay, self.duration)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new(0.25, Curve::EaseInOut)
    }
}
