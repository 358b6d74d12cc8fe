//! Per-frame blending of a displayed value toward its target.
//!
//! Two laws are supported: a fixed linear factor per frame (cheap, but its visual speed
//! depends on the display frame rate) and exponential decay scaled by elapsed time
//! (`1 - exp(-rate * dt)`), which converges at the same wall-clock speed on any device.

use crate::foundation::core::Vec2;
use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::foundation::math::clamp01;

/// Distance below which a value snaps onto its target so the loop can settle.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Upper bound for one frame's elapsed time, in seconds.
///
/// A tab that was backgrounded resumes with a huge timestamp gap; without the clamp the
/// first frame after resuming would jump most of the way to the target.
pub const MAX_FRAME_DELTA_SECS: f64 = 0.1;

/// Clamp a frame delta to `[0, MAX_FRAME_DELTA_SECS]`; non-finite input counts as zero.
#[inline]
pub fn clamp_delta(dt_secs: f64) -> f64 {
    if !dt_secs.is_finite() || dt_secs <= 0.0 {
        0.0
    } else {
        dt_secs.min(MAX_FRAME_DELTA_SECS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Smoothing {
    /// Jump straight to the target.
    Immediate,
    /// `current += (target - current) * factor`, independent of elapsed time.
    Linear { factor: f64 },
    /// Frame-rate independent: `factor = 1 - exp(-rate * dt)`.
    Exponential { rate: f64 },
}

impl Smoothing {
    /// Blend factor for one step of `dt_secs` (clamped with [`clamp_delta`]).
    pub fn factor(self, dt_secs: f64) -> f64 {
        match self {
            Self::Immediate => 1.0,
            Self::Linear { factor } => clamp01(factor),
            Self::Exponential { rate } => {
                if !rate.is_finite() || rate <= 0.0 {
                    return 0.0;
                }
                1.0 - (-rate * clamp_delta(dt_secs)).exp()
            }
        }
    }

    pub fn validate(&self) -> ScrollFxResult<()> {
        match *self {
            Self::Immediate => Ok(()),
            Self::Linear { factor } => {
                if factor.is_finite() && factor > 0.0 && factor <= 1.0 {
                    Ok(())
                } else {
                    Err(ScrollFxError::validation(
                        "linear smoothing factor must be in (0, 1]",
                    ))
                }
            }
            Self::Exponential { rate } => {
                if rate.is_finite() && rate > 0.0 {
                    Ok(())
                } else {
                    Err(ScrollFxError::validation(
                        "exponential smoothing rate must be finite and > 0",
                    ))
                }
            }
        }
    }
}

pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f64) -> Self;
    fn distance(a: Self, b: Self) -> f64;
}

impl Lerp for f64 {
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        a + (b - a) * t
    }

    fn distance(a: Self, b: Self) -> f64 {
        (b - a).abs()
    }
}

impl Lerp for Vec2 {
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    fn distance(a: Self, b: Self) -> f64 {
        (b - a).hypot()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Settled,
    Moving,
}

impl Motion {
    pub fn is_moving(self) -> bool {
        self == Self::Moving
    }

    /// `Moving` if either side is moving.
    pub fn or(self, other: Motion) -> Motion {
        if self.is_moving() || other.is_moving() {
            Self::Moving
        } else {
            Self::Settled
        }
    }
}

/// A displayed value chasing an optional target.
///
/// An absent target means "no input yet": stepping leaves the value where it is instead of
/// pulling it toward a default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed<T> {
    current: T,
    target: Option<T>,
    epsilon: f64,
}

impl<T: Lerp> Smoothed<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            target: None,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn target(&self) -> Option<T> {
        self.target
    }

    pub fn set_target(&mut self, target: T) {
        self.target = Some(target);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Force `current` onto the target (warmup).
    pub fn snap(&mut self) {
        if let Some(t) = self.target {
            self.current = t;
        }
    }

    pub fn is_settled(&self) -> bool {
        match self.target {
            Some(t) => T::distance(self.current, t) <= self.epsilon,
            None => true,
        }
    }

    pub fn step(&mut self, smoothing: Smoothing, dt_secs: f64) -> Motion {
        let Some(target) = self.target else {
            return Motion::Settled;
        };
        if T::distance(self.current, target) <= self.epsilon {
            self.current = target;
            return Motion::Settled;
        }

        self.current = T::lerp(self.current, target, smoothing.factor(dt_secs));

        if T::distance(self.current, target) <= self.epsilon {
            self.current = target;
            Motion::Settled
        } else {
            Motion::Moving
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/smoothing.rs"]
mod tests;
