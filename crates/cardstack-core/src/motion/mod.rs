#![forbid(unsafe_code)]

//! Motion simulation for the front item.
//!
//! Two trajectory kinds drive the item while the pointer is up:
//!
//! - [`Fling`]: ballistic deceleration from a release velocity.
//! - [`Spring`]: eased interpolation to rest or off-screen.
//!
//! Both are pure functions of wall-clock time: they are sampled with the
//! timestamp the driver passes to the engine's `step`, never ticked with a
//! delta, so sampling the same instant twice yields the same position.

pub mod easing;
pub mod fling;
pub mod spring;

use web_time::Instant;

pub use easing::{Easing, EasingFn, ease_out, ease_out_cubic, linear, viscous_fluid};
pub use fling::Fling;
pub use spring::Spring;

use crate::geometry::Offset;

/// A time-parameterized path for the front item.
pub trait Trajectory {
    /// Position at `now`.
    fn position(&self, now: Instant) -> Offset;

    /// Whether the trajectory has reached its destination at `now`.
    fn is_finished(&self, now: Instant) -> bool;

    /// Where the trajectory comes to rest.
    fn destination(&self) -> Offset;
}

/// The single active simulation owned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// Free deceleration after a fling.
    Fling(Fling),
    /// Return to rest.
    SpringBack(Spring),
    /// Travel off-screen to complete a sweep.
    SpringForward(Spring),
}

impl Motion {
    /// The underlying trajectory.
    #[must_use]
    pub fn trajectory(&self) -> &dyn Trajectory {
        match self {
            Self::Fling(fling) => fling,
            Self::SpringBack(spring) | Self::SpringForward(spring) => spring,
        }
    }

    /// Whether this is a fling.
    #[inline]
    #[must_use]
    pub fn is_fling(&self) -> bool {
        matches!(self, Self::Fling(_))
    }
}

impl Trajectory for Motion {
    fn position(&self, now: Instant) -> Offset {
        self.trajectory().position(now)
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.trajectory().is_finished(now)
    }

    fn destination(&self) -> Offset {
        self.trajectory().destination()
    }
}
