#![forbid(unsafe_code)]

//! Ballistic fling under constant deceleration.
//!
//! Each axis is simulated independently in closed form:
//!
//!   x(t) = x0 + s·(|v0|·t − ½·a·t²),  0 ≤ t ≤ T
//!
//! where `s` is the sign of the launch velocity and `a` the deceleration.
//! An axis stops when its velocity reaches zero (`T = |v0| / a`) or when it
//! reaches its bound, whichever comes first. Because positions are computed
//! from elapsed time rather than integrated, irregular frame timing never
//! accumulates drift.
//!
//! # Invariants
//!
//! 1. A position sampled at any time lies between the start and
//!    [`Fling::final_position`] on each axis.
//! 2. Once finished, `position()` returns exactly `final_position()`.
//! 3. An axis that starts outside its bounds, or has zero velocity, does not
//!    move.

use std::time::Duration;

use web_time::Instant;

use super::Trajectory;
use crate::geometry::Offset;

/// One axis of a fling.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FlingAxis {
    start: f64,
    /// Launch speed (absolute value of the velocity).
    speed: f64,
    /// +1.0 or -1.0.
    sign: f64,
    deceleration: f64,
    /// Seconds until this axis stops.
    duration: f64,
    end: f64,
}

impl FlingAxis {
    fn new(start: f64, velocity: f64, min: f64, max: f64, deceleration: f64) -> Self {
        let stationary = Self {
            start,
            speed: 0.0,
            sign: 1.0,
            deceleration,
            duration: 0.0,
            end: start,
        };

        if !velocity.is_finite() || velocity == 0.0 || start < min || start > max {
            return stationary;
        }

        let speed = velocity.abs();
        let sign = velocity.signum();
        let travel = speed * speed / (2.0 * deceleration);
        let natural_end = start + sign * travel;
        let bound = if sign > 0.0 { max } else { min };

        let (duration, end) = if (sign > 0.0 && natural_end <= bound)
            || (sign < 0.0 && natural_end >= bound)
        {
            (speed / deceleration, natural_end)
        } else {
            // Solve speed·t − ½·a·t² = distance for the first crossing.
            let distance = (bound - start).abs();
            let discriminant = (speed * speed - 2.0 * deceleration * distance).max(0.0);
            ((speed - discriminant.sqrt()) / deceleration, bound)
        };

        Self {
            start,
            speed,
            sign,
            deceleration,
            duration,
            end,
        }
    }

    fn position(&self, elapsed: f64) -> f64 {
        if elapsed >= self.duration {
            return self.end;
        }
        let t = elapsed.max(0.0);
        self.start + self.sign * (self.speed * t - 0.5 * self.deceleration * t * t)
    }
}

/// A two-axis fling trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Fling {
    x: FlingAxis,
    y: FlingAxis,
    started: Instant,
}

impl Fling {
    /// Launch a fling at `start` with `velocity` (units per second), bounded
    /// to `[min.x, max.x] × [min.y, max.y]`.
    ///
    /// `deceleration` is in units per second squared; non-positive values
    /// are treated as a tiny positive friction so the fling still ends.
    #[must_use]
    pub fn new(
        start: Offset,
        velocity: Offset,
        min: Offset,
        max: Offset,
        deceleration: f64,
        now: Instant,
    ) -> Self {
        let deceleration = if deceleration.is_finite() && deceleration > 0.0 {
            deceleration
        } else {
            f64::EPSILON
        };
        Self {
            x: FlingAxis::new(start.x, velocity.x, min.x, max.x, deceleration),
            y: FlingAxis::new(start.y, velocity.y, min.y, max.y, deceleration),
            started: now,
        }
    }

    /// Where the fling comes to rest.
    #[inline]
    #[must_use]
    pub fn final_position(&self) -> Offset {
        Offset::new(self.x.end, self.y.end)
    }

    /// Total time until both axes have stopped, saturating at
    /// [`Duration::MAX`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.x.duration.max(self.y.duration)).unwrap_or(Duration::MAX)
    }

    fn elapsed_secs(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started).as_secs_f64()
    }
}

impl Trajectory for Fling {
    fn position(&self, now: Instant) -> Offset {
        let elapsed = self.elapsed_secs(now);
        Offset::new(self.x.position(elapsed), self.y.position(elapsed))
    }

    fn is_finished(&self, now: Instant) -> bool {
        let elapsed = self.elapsed_secs(now);
        elapsed >= self.x.duration && elapsed >= self.y.duration
    }

    fn destination(&self) -> Offset {
        self.final_position()
    }
}
