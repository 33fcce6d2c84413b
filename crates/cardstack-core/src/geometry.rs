#![forbid(unsafe_code)]

//! Geometric primitives: offsets, container sizes, axes, and directions.
//!
//! Offsets use the *scroll distance* convention: a drag accumulates
//! `previous - current` pointer positions, so a positive `x` means the front
//! item has been pushed toward the left edge and a positive `y` toward the
//! top edge. [`Offset::rendered`] converts to the on-screen displacement.

use std::ops::{Add, Neg, Sub};

/// A 2D displacement of the front item from its resting position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    /// The resting position.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new offset.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Component along `axis`.
    #[inline]
    #[must_use]
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Keep only the component along `axis`, zeroing the other.
    #[inline]
    #[must_use]
    pub fn project(self, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::new(self.x, 0.0),
            Axis::Vertical => Self::new(0.0, self.y),
        }
    }

    /// Axis with the larger magnitude. Ties resolve to horizontal.
    #[inline]
    #[must_use]
    pub fn dominant_axis(self) -> Axis {
        if self.x.abs() >= self.y.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Clamp each component to `[-extent, extent]` of `size` on its axis.
    /// A non-positive extent leaves its component untouched.
    #[inline]
    #[must_use]
    pub fn clamp_within(self, size: Size) -> Self {
        let bound = |v: f64, extent: f64| {
            if extent > 0.0 {
                v.clamp(-extent, extent)
            } else {
                v
            }
        };
        Self::new(bound(self.x, size.width), bound(self.y, size.height))
    }

    /// Whether both components are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// On-screen displacement for this offset (the negation of the
    /// accumulated scroll distance).
    #[inline]
    #[must_use]
    pub fn rendered(self) -> Self {
        -self
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self {
        // Avoid producing -0.0 so rendered rest positions compare cleanly.
        Self::new(0.0 - self.x, 0.0 - self.y)
    }
}

impl From<(f64, f64)> for Offset {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Width and height of the hosting container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    #[inline]
    #[must_use]
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// One of the two motion axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Axis-lock state of a drag.
///
/// At most one axis is locked at a time. While locked, the displacement on
/// the other axis is held at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AxisLock {
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl AxisLock {
    /// The locked axis, if any.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::None => None,
            Self::Horizontal => Some(Axis::Horizontal),
            Self::Vertical => Some(Axis::Vertical),
        }
    }

    /// Whether any axis is locked.
    #[inline]
    #[must_use]
    pub const fn is_locked(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Apply the lock to an offset: the axis orthogonal to the lock is
    /// zeroed, an unlocked offset passes through.
    #[inline]
    #[must_use]
    pub fn constrain(self, offset: Offset) -> Offset {
        match self.axis() {
            Some(axis) => offset.project(axis),
            None => offset,
        }
    }
}

impl From<Axis> for AxisLock {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::Horizontal,
            Axis::Vertical => Self::Vertical,
        }
    }
}

/// Direction in which the front item travels when hovering or sweeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// Direction of travel for `offset` along `axis`.
    ///
    /// A positive scroll distance pushes the item toward the left or top
    /// edge; zero and negative values map to right or bottom.
    #[must_use]
    pub fn of(axis: Axis, offset: Offset) -> Self {
        match axis {
            Axis::Horizontal if offset.x > 0.0 => Self::Left,
            Axis::Horizontal => Self::Right,
            Axis::Vertical if offset.y > 0.0 => Self::Top,
            Axis::Vertical => Self::Bottom,
        }
    }

    /// The axis this direction lies on.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// Offset that fully clears a container of `size` in this direction.
    #[must_use]
    pub fn clearing_offset(self, size: Size) -> Offset {
        match self {
            Self::Left => Offset::new(size.width, 0.0),
            Self::Right => Offset::new(-size.width, 0.0),
            Self::Top => Offset::new(0.0, size.height),
            Self::Bottom => Offset::new(0.0, -size.height),
        }
    }
}
