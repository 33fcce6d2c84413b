#![forbid(unsafe_code)]

//! Classified gestures consumed by the engine.
//!
//! Pointer decoding and velocity estimation belong to the host's gesture
//! detector; by the time a gesture reaches the engine it is one of four
//! values.

/// A pre-classified pointer gesture.
///
/// `Scroll` deltas are scroll distances (previous pointer position minus the
/// current one), and `Fling` velocities point in the direction the pointer
/// moved, in units per second. This matches what platform gesture detectors
/// report.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)
)]
pub enum GestureEvent {
    /// Pointer touched the stack.
    Down,
    /// Pointer moved while down.
    Scroll { dx: f64, dy: f64 },
    /// Pointer was released while moving fast.
    Fling { vx: f64, vy: f64 },
    /// Pointer lifted.
    Up,
}

impl GestureEvent {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Scroll { .. } => "scroll",
            Self::Fling { .. } => "fling",
            Self::Up => "up",
        }
    }
}
