#![forbid(unsafe_code)]

//! Fixed-duration spring between two offsets.
//!
//! A [`Spring`] eases the front item from where it was released to a target
//! (rest for a spring-back, off-screen for a spring-forward) over a fixed
//! duration. Unlike a damped oscillator it always lands on its target at
//! exactly `duration`, so threshold checks driven by the target are
//! deterministic.

use std::time::Duration;

use web_time::Instant;

use super::Trajectory;
use super::easing::Easing;
use crate::geometry::Offset;

/// Time-bounded eased interpolation from `start` to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    start: Offset,
    target: Offset,
    duration: Duration,
    easing: Easing,
    started: Instant,
}

impl Spring {
    /// Create a spring from `start` to `target` lasting `duration`.
    ///
    /// A zero duration is clamped to 1ns; such a spring finishes on the
    /// first sample after `now`.
    #[must_use]
    pub fn new(start: Offset, target: Offset, duration: Duration, now: Instant) -> Self {
        Self {
            start,
            target,
            duration: duration.max(Duration::from_nanos(1)),
            easing: Easing::default(),
            started: now,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Position the spring started from.
    #[inline]
    #[must_use]
    pub fn start(&self) -> Offset {
        self.start
    }

    /// Position the spring settles at.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Offset {
        self.target
    }

    /// Configured duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress through the duration, in [0.0, 1.0].
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

impl Trajectory for Spring {
    fn position(&self, now: Instant) -> Offset {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target;
        }
        let eased = self.easing.apply(t);
        let delta = self.target - self.start;
        Offset::new(
            self.start.x + delta.x * eased,
            self.start.y + delta.y * eased,
        )
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    fn destination(&self) -> Offset {
        self.target
    }
}
