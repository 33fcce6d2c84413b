#![forbid(unsafe_code)]

//! Engine configuration: thresholds, spring timing, and fling policy.
//!
//! [`StackConfig::default`] reproduces the behavior of the classic swipeable
//! card stack: 30-unit axis lock, sweep intent at 40% of the container,
//! 200 ms springs, and a fling that is resolved immediately from its
//! projected landing point.
//!
//! Two policies exist for each of the places where card-stack widgets
//! historically diverged:
//!
//! - [`SweepThreshold`]: hover/sweep intent as a proportion of the
//!   container, or as a fixed inset from its edge.
//! - [`FlingPolicy`]: resolve a fling from its projected end, or let it
//!   coast and settle afterwards.

use std::time::Duration;

use thiserror::Error;

use crate::geometry::{Axis, Size};
use crate::motion::Easing;

/// Distance at which a drag expresses intent to sweep the front item away.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepThreshold {
    /// Fraction of the container dimension on the travel axis, in (0, 1].
    Proportion(f64),
    /// Fixed distance short of the container edge.
    EdgeInset(f64),
}

impl SweepThreshold {
    /// Threshold distance for a container `extent` long.
    #[must_use]
    pub fn distance(self, extent: f64) -> f64 {
        match self {
            Self::Proportion(p) => extent * p,
            Self::EdgeInset(inset) => (extent - inset).max(0.0),
        }
    }
}

impl Default for SweepThreshold {
    fn default() -> Self {
        Self::Proportion(0.4)
    }
}

/// What happens to a fling once it is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlingPolicy {
    /// Compute where the fling would land and immediately replace it with a
    /// spring-forward (landing past the sweep threshold) or a spring-back.
    #[default]
    Project,
    /// Let the fling decelerate to rest, then settle from wherever it
    /// stopped.
    Coast,
}

/// Configuration rejected by [`StackConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative distance (got {value})")]
    InvalidDistance { field: &'static str, value: f64 },

    #[error("sweep proportion must be in (0, 1] (got {0})")]
    InvalidProportion(f64),

    #[error("spring duration must be at least 1ms")]
    ZeroSpringDuration,

    #[error("fling deceleration must be finite and positive (got {0})")]
    InvalidDeceleration(f64),
}

/// Tunables for a [`StackEngine`](crate::engine::StackEngine).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StackConfig {
    /// Recycle swept items to the back of the stack instead of discarding
    /// them (default: false).
    pub infinite: bool,
    /// Axis-lock hysteresis distance (default: 30.0).
    pub scroll_threshold: f64,
    /// Hover and release-to-sweep distance (default: 40% of the container).
    pub sweep_threshold: SweepThreshold,
    /// How far short of the full container dimension a sweep-away completes
    /// (default: 0.0, i.e. the item must fully leave).
    pub sweep_away_inset: f64,
    /// Spring duration in milliseconds (default: 200).
    pub spring_duration_ms: u64,
    /// Spring curve (default: viscous fluid).
    pub spring_easing: Easing,
    /// Fling resolution policy (default: project).
    pub fling_policy: FlingPolicy,
    /// Fling friction in units per second squared (default: 2000.0).
    pub fling_deceleration: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            infinite: false,
            scroll_threshold: 30.0,
            sweep_threshold: SweepThreshold::default(),
            sweep_away_inset: 0.0,
            spring_duration_ms: 200,
            spring_easing: Easing::default(),
            fling_policy: FlingPolicy::default(),
            fling_deceleration: 2000.0,
        }
    }
}

impl StackConfig {
    /// Set infinite (recycling) mode (builder pattern).
    #[must_use]
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Set the axis-lock distance (builder pattern).
    #[must_use]
    pub fn with_scroll_threshold(mut self, threshold: f64) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    /// Set the sweep threshold policy (builder pattern).
    #[must_use]
    pub fn with_sweep_threshold(mut self, threshold: SweepThreshold) -> Self {
        self.sweep_threshold = threshold;
        self
    }

    /// Set the sweep-away inset (builder pattern).
    #[must_use]
    pub fn with_sweep_away_inset(mut self, inset: f64) -> Self {
        self.sweep_away_inset = inset;
        self
    }

    /// Set the spring duration (builder pattern).
    #[must_use]
    pub fn with_spring_duration(mut self, duration: Duration) -> Self {
        self.spring_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the spring curve (builder pattern).
    #[must_use]
    pub fn with_spring_easing(mut self, easing: Easing) -> Self {
        self.spring_easing = easing;
        self
    }

    /// Set the fling policy (builder pattern).
    #[must_use]
    pub fn with_fling_policy(mut self, policy: FlingPolicy) -> Self {
        self.fling_policy = policy;
        self
    }

    /// Set the fling deceleration (builder pattern).
    #[must_use]
    pub fn with_fling_deceleration(mut self, deceleration: f64) -> Self {
        self.fling_deceleration = deceleration;
        self
    }

    /// Spring duration as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn spring_duration(&self) -> Duration {
        Duration::from_millis(self.spring_duration_ms)
    }

    /// Hover / release-to-sweep distance along `axis` for `size`.
    #[inline]
    #[must_use]
    pub fn sweep_distance(&self, size: Size, axis: Axis) -> f64 {
        self.sweep_threshold.distance(size.along(axis))
    }

    /// Distance at which the item counts as gone along `axis` for `size`.
    #[inline]
    #[must_use]
    pub fn sweep_away_distance(&self, size: Size, axis: Axis) -> f64 {
        (size.along(axis) - self.sweep_away_inset).max(0.0)
    }

    /// Check every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_distance("scroll_threshold", self.scroll_threshold)?;
        check_distance("sweep_away_inset", self.sweep_away_inset)?;
        match self.sweep_threshold {
            SweepThreshold::Proportion(p) if !(p.is_finite() && p > 0.0 && p <= 1.0) => {
                return Err(ConfigError::InvalidProportion(p));
            }
            SweepThreshold::EdgeInset(inset) => check_distance("sweep_threshold", inset)?,
            SweepThreshold::Proportion(_) => {}
        }
        if self.spring_duration_ms == 0 {
            return Err(ConfigError::ZeroSpringDuration);
        }
        if !(self.fling_deceleration.is_finite() && self.fling_deceleration > 0.0) {
            return Err(ConfigError::InvalidDeceleration(self.fling_deceleration));
        }
        Ok(())
    }

    /// Clamp every field into its valid range, replacing unusable values
    /// with defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let distance = |value: f64, fallback: f64| {
            if value.is_finite() {
                value.max(0.0)
            } else {
                fallback
            }
        };

        let sweep_threshold = match self.sweep_threshold {
            SweepThreshold::Proportion(p) if p.is_finite() && p > 0.0 => {
                SweepThreshold::Proportion(p.min(1.0))
            }
            SweepThreshold::Proportion(_) => defaults.sweep_threshold,
            SweepThreshold::EdgeInset(inset) => SweepThreshold::EdgeInset(distance(inset, 0.0)),
        };

        let fling_deceleration =
            if self.fling_deceleration.is_finite() && self.fling_deceleration > 0.0 {
                self.fling_deceleration
            } else {
                defaults.fling_deceleration
            };

        Self {
            infinite: self.infinite,
            scroll_threshold: distance(self.scroll_threshold, defaults.scroll_threshold),
            sweep_threshold,
            sweep_away_inset: distance(self.sweep_away_inset, 0.0),
            spring_duration_ms: self.spring_duration_ms.max(1),
            spring_easing: self.spring_easing,
            fling_policy: self.fling_policy,
            fling_deceleration,
        }
    }
}

fn check_distance(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDistance { field, value })
    }
}
