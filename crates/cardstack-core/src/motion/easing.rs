#![forbid(unsafe_code)]

//! Easing curves for spring interpolation.
//!
//! Every curve maps normalized time `t` in [0.0, 1.0] to normalized progress
//! with `f(0) == 0` and `f(1) == 1`. Inputs outside the range are clamped.

/// Signature shared by the easing functions in this module.
pub type EasingFn = fn(f64) -> f64;

/// Sharpness of the viscous-fluid curve.
const VISCOUS_FLUID_SCALE: f64 = 8.0;

/// Identity curve.
#[inline]
#[must_use]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out.
#[inline]
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic ease-out: fast start, gentle landing.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Viscous-fluid curve: exponential approach followed by an exponential
/// settle, normalized so the curve ends exactly at 1.0.
///
/// This is the default curve platform scrollers use for programmatic
/// scrolls, which makes springs feel like the native drag release.
#[must_use]
pub fn viscous_fluid(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    viscous_fluid_raw(t) / viscous_fluid_raw(1.0)
}

fn viscous_fluid_raw(t: f64) -> f64 {
    let x = t * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        let start = (-1.0_f64).exp();
        let tail = 1.0 - (1.0 - x).exp();
        start + tail * (1.0 - start)
    }
}

/// Named easing curve, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    EaseOut,
    EaseOutCubic,
    #[default]
    ViscousFluid,
}

impl Easing {
    /// The function implementing this curve.
    #[must_use]
    pub fn function(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::EaseOut => ease_out,
            Self::EaseOutCubic => ease_out_cubic,
            Self::ViscousFluid => viscous_fluid,
        }
    }

    /// Evaluate the curve at `t`.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        (self.function())(t)
    }
}
