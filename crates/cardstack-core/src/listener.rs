#![forbid(unsafe_code)]

//! Hover / sweep / cancel notifications.
//!
//! The engine reports transitions through [`StackListener`]. Every method
//! has a no-op default, so a listener implements only what it cares about
//! and [`NoopListener`] serves when nobody listens.
//!
//! # Invariants
//!
//! 1. Each callback fires at most once per transition (edge triggered).
//! 2. A hover is closed by exactly one sweep or one `on_cancel`, unless
//!    [`StackEngine::reset`](crate::engine::StackEngine::reset) drops it
//!    silently first.
//! 3. Callbacks run synchronously inside the engine call that caused them;
//!    the engine is borrowed for the duration, so a listener cannot re-enter
//!    it.

use crate::geometry::Direction;

/// Receiver for stack transitions.
pub trait StackListener {
    /// Front item crossed the sweep threshold toward the top edge.
    fn on_hover_top(&mut self) {}
    /// Front item crossed the sweep threshold toward the bottom edge.
    fn on_hover_bottom(&mut self) {}
    /// Front item crossed the sweep threshold toward the left edge.
    fn on_hover_left(&mut self) {}
    /// Front item crossed the sweep threshold toward the right edge.
    fn on_hover_right(&mut self) {}

    /// Front item was swept away through the top edge.
    fn on_sweep_top(&mut self) {}
    /// Front item was swept away through the bottom edge.
    fn on_sweep_bottom(&mut self) {}
    /// Front item was swept away through the left edge.
    fn on_sweep_left(&mut self) {}
    /// Front item was swept away through the right edge.
    fn on_sweep_right(&mut self) {}

    /// Front item dropped back below the sweep threshold without a sweep.
    fn on_cancel(&mut self) {}

    /// Dispatch a hover in `direction` to the matching method.
    fn on_hover(&mut self, direction: Direction) {
        match direction {
            Direction::Top => self.on_hover_top(),
            Direction::Bottom => self.on_hover_bottom(),
            Direction::Left => self.on_hover_left(),
            Direction::Right => self.on_hover_right(),
        }
    }

    /// Dispatch a sweep in `direction` to the matching method.
    fn on_sweep(&mut self, direction: Direction) {
        match direction {
            Direction::Top => self.on_sweep_top(),
            Direction::Bottom => self.on_sweep_bottom(),
            Direction::Left => self.on_sweep_left(),
            Direction::Right => self.on_sweep_right(),
        }
    }
}

/// Listener that ignores everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopListener;

impl StackListener for NoopListener {}

/// A transition reported by the engine, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StackEvent {
    Hover(Direction),
    Sweep(Direction),
    Cancel,
}

/// Recording listener: every transition is appended in order.
impl StackListener for Vec<StackEvent> {
    fn on_hover_top(&mut self) {
        self.push(StackEvent::Hover(Direction::Top));
    }
    fn on_hover_bottom(&mut self) {
        self.push(StackEvent::Hover(Direction::Bottom));
    }
    fn on_hover_left(&mut self) {
        self.push(StackEvent::Hover(Direction::Left));
    }
    fn on_hover_right(&mut self) {
        self.push(StackEvent::Hover(Direction::Right));
    }
    fn on_sweep_top(&mut self) {
        self.push(StackEvent::Sweep(Direction::Top));
    }
    fn on_sweep_bottom(&mut self) {
        self.push(StackEvent::Sweep(Direction::Bottom));
    }
    fn on_sweep_left(&mut self) {
        self.push(StackEvent::Sweep(Direction::Left));
    }
    fn on_sweep_right(&mut self) {
        self.push(StackEvent::Sweep(Direction::Right));
    }
    fn on_cancel(&mut self) {
        self.push(StackEvent::Cancel);
    }
}

impl<L: StackListener + ?Sized> StackListener for &mut L {
    fn on_hover_top(&mut self) {
        (**self).on_hover_top();
    }
    fn on_hover_bottom(&mut self) {
        (**self).on_hover_bottom();
    }
    fn on_hover_left(&mut self) {
        (**self).on_hover_left();
    }
    fn on_hover_right(&mut self) {
        (**self).on_hover_right();
    }
    fn on_sweep_top(&mut self) {
        (**self).on_sweep_top();
    }
    fn on_sweep_bottom(&mut self) {
        (**self).on_sweep_bottom();
    }
    fn on_sweep_left(&mut self) {
        (**self).on_sweep_left();
    }
    fn on_sweep_right(&mut self) {
        (**self).on_sweep_right();
    }
    fn on_cancel(&mut self) {
        (**self).on_cancel();
    }
    fn on_hover(&mut self, direction: Direction) {
        (**self).on_hover(direction);
    }
    fn on_sweep(&mut self, direction: Direction) {
        (**self).on_sweep(direction);
    }
}
