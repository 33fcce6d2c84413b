#![forbid(unsafe_code)]

//! The stack motion engine.
//!
//! [`StackEngine`] turns classified gestures into front-item motion and
//! stack transitions. It owns the interaction state (offset, axis lock,
//! touch and hover flags, active simulation), its [`StackHost`], and its
//! [`StackListener`].
//!
//! # State Machine
//!
//! ```text
//! Idle ─down─▶ Dragging ─up─▶ SpringingBack ───────────────▶ Idle
//!                  │     └──▶ SpringingForward ─▶ SweptAway ─▶ Idle
//!                  └─fling─▶ Flinging ─▶ SpringingBack | SpringingForward
//! ```
//!
//! `SweptAway` is transient: it completes inside the layout pass that
//! detects it.
//!
//! # Layout pass
//!
//! Every gesture handler and every [`step`](StackEngine::step) ends with the
//! same pass:
//!
//! 1. Sample the active simulation (if any), respecting the axis lock.
//! 2. Update the axis lock with hysteresis: lock an axis once its offset
//!    exceeds `scroll_threshold`; unlock only when both axes are back within
//!    it.
//! 3. Reposition the front item.
//! 4. If the pointer is up and the item has left the container, sweep it
//!    away. Otherwise fire edge-triggered hover/cancel callbacks.
//!
//! # Invariants
//!
//! 1. While an axis is locked, the offset on the other axis is 0.
//! 2. At most one simulation is active; starting one replaces the previous.
//! 3. The offset is (0, 0) immediately after a sweep-away.
//! 4. Hover, sweep, and cancel callbacks are edge triggered.
//! 5. With an empty stack every entry point is a no-op on the stack. A
//!    hover still open when the stack empties is closed with a cancel.
//!
//! # Failure Modes
//!
//! - Non-finite deltas or velocities are ignored.
//! - A container with a non-positive dimension is treated as not yet laid
//!   out: the item is still repositioned but no thresholds are evaluated.
//! - Misordered gestures (`up` without `down`, repeated `down`) are accepted
//!   and never panic.

use web_time::Instant;

use crate::config::{FlingPolicy, StackConfig};
use crate::geometry::{Axis, AxisLock, Direction, Offset, Size};
use crate::gesture::GestureEvent;
use crate::host::StackHost;
use crate::listener::{NoopListener, StackListener};
use crate::motion::{Fling, Motion, Spring, Trajectory};

/// Where the engine is in its interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// At rest, nothing touching and nothing moving.
    Idle,
    /// Pointer is down and no simulation runs.
    Dragging,
    /// A fling is decelerating.
    Flinging,
    /// Returning to rest.
    SpringingBack,
    /// Leaving the container to complete a sweep.
    SpringingForward,
}

/// Gesture-driven motion engine for the front item of a stack.
pub struct StackEngine<H, L = NoopListener> {
    host: H,
    listener: L,
    config: StackConfig,
    offset: Offset,
    axis_lock: AxisLock,
    touching: bool,
    hovering: bool,
    motion: Option<Motion>,
}

impl<H, L> std::fmt::Debug for StackEngine<H, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackEngine")
            .field("offset", &self.offset)
            .field("axis_lock", &self.axis_lock)
            .field("touching", &self.touching)
            .field("hovering", &self.hovering)
            .field("motion", &self.motion)
            .finish_non_exhaustive()
    }
}

impl<H: StackHost> StackEngine<H> {
    /// Create an engine without a listener.
    ///
    /// The configuration is [sanitized](StackConfig::sanitized).
    #[must_use]
    pub fn new(host: H, config: StackConfig) -> Self {
        Self::with_listener(host, config, NoopListener)
    }
}

impl<H: StackHost, L: StackListener> StackEngine<H, L> {
    /// Create an engine reporting transitions to `listener`.
    ///
    /// The configuration is [sanitized](StackConfig::sanitized).
    #[must_use]
    pub fn with_listener(host: H, config: StackConfig, listener: L) -> Self {
        Self {
            host,
            listener,
            config: config.sanitized(),
            offset: Offset::ZERO,
            axis_lock: AxisLock::None,
            touching: false,
            hovering: false,
            motion: None,
        }
    }

    // -----------------------------------------------------------------------
    // Gesture ingestion
    // -----------------------------------------------------------------------

    /// Feed a classified gesture.
    pub fn handle(&mut self, event: GestureEvent, now: Instant) {
        match event {
            GestureEvent::Down => self.on_down(now),
            GestureEvent::Scroll { dx, dy } => self.on_scroll(dx, dy, now),
            GestureEvent::Fling { vx, vy } => self.on_fling(vx, vy, now),
            GestureEvent::Up => self.on_up(now),
        }
    }

    /// Pointer touched the stack: stop any motion where it is.
    pub fn on_down(&mut self, now: Instant) {
        self.touching = true;
        self.motion = None;
        self.layout(now);
    }

    /// Pointer moved by a scroll distance of (`dx`, `dy`).
    ///
    /// While an axis is locked the other axis is held at zero instead of
    /// accumulating. The accumulated offset is clamped to one container
    /// extent on each axis, the same bounds a fling travels within.
    pub fn on_scroll(&mut self, dx: f64, dy: f64, now: Instant) {
        if self.host.is_empty() || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        let next = Offset::new(
            match self.axis_lock {
                AxisLock::Vertical => 0.0,
                _ => self.offset.x + dx,
            },
            match self.axis_lock {
                AxisLock::Horizontal => 0.0,
                _ => self.offset.y + dy,
            },
        )
        .clamp_within(self.host.size());
        if !next.is_finite() {
            return;
        }
        self.offset = next;
        self.layout(now);
    }

    /// Pointer was released with velocity (`vx`, `vy`) in units per second.
    ///
    /// The simulated velocity is the negation of the pointer velocity so the
    /// item keeps travelling the way it was dragged. The locked axis' partner
    /// contributes no velocity.
    pub fn on_fling(&mut self, vx: f64, vy: f64, now: Instant) {
        if self.host.is_empty() || !vx.is_finite() || !vy.is_finite() {
            return;
        }

        let velocity = Offset::new(
            if self.axis_lock == AxisLock::Vertical { 0.0 } else { -vx },
            if self.axis_lock == AxisLock::Horizontal { 0.0 } else { -vy },
        );
        let size = self.host.size();
        let fling = Fling::new(
            self.offset,
            velocity,
            Offset::new(-size.width, -size.height),
            Offset::new(size.width, size.height),
            self.config.fling_deceleration,
            now,
        );

        match self.config.fling_policy {
            FlingPolicy::Project => {
                let landing = fling.final_position();
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    landing_x = landing.x,
                    landing_y = landing.y,
                    "fling projected"
                );
                self.settle_toward(landing, size, now);
            }
            FlingPolicy::Coast => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    vx = velocity.x,
                    vy = velocity.y,
                    duration_ms = fling.duration().as_millis() as u64,
                    "fling started"
                );
                self.motion = Some(Motion::Fling(fling));
            }
        }

        self.layout(now);
    }

    /// Pointer lifted. Unless a fling is already moving the item, spring it
    /// forward (past the sweep threshold) or back to rest.
    pub fn on_up(&mut self, now: Instant) {
        self.touching = false;
        if self.motion.is_none() && !self.host.is_empty() {
            let size = self.host.size();
            self.settle_toward(self.offset, size, now);
        }
        self.layout(now);
    }

    // -----------------------------------------------------------------------
    // Ticking
    // -----------------------------------------------------------------------

    /// Advance any active simulation to `now` and run a layout pass.
    ///
    /// The driver calls this once per frame while
    /// [`is_animating`](Self::is_animating) is true. Calling it with nothing
    /// moving leaves the state unchanged.
    pub fn step(&mut self, now: Instant) {
        self.layout(now);
    }

    /// Stop all motion and return to rest without notifying the listener.
    ///
    /// An open hover is dropped silently; no cancel follows it.
    pub fn reset(&mut self) {
        self.motion = None;
        self.offset = Offset::ZERO;
        self.axis_lock = AxisLock::None;
        self.touching = false;
        self.hovering = false;
        if !self.host.is_empty() {
            self.host.reposition_front_item(Offset::ZERO);
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Current front-item offset (scroll-distance convention).
    #[inline]
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Current axis lock.
    #[inline]
    #[must_use]
    pub fn axis_lock(&self) -> AxisLock {
        self.axis_lock
    }

    /// Whether the pointer is down.
    #[inline]
    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Whether the front item sits past the sweep threshold.
    #[inline]
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether a simulation is running and the driver should keep ticking.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// The active simulation, if any.
    #[inline]
    #[must_use]
    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.motion, self.touching) {
            (Some(Motion::Fling(_)), _) => Phase::Flinging,
            (Some(Motion::SpringBack(_)), _) => Phase::SpringingBack,
            (Some(Motion::SpringForward(_)), _) => Phase::SpringingForward,
            (None, true) => Phase::Dragging,
            (None, false) => Phase::Idle,
        }
    }

    /// Active configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Replace the configuration. Running simulations keep their parameters.
    pub fn set_config(&mut self, config: StackConfig) {
        self.config = config.sanitized();
    }

    /// The host container.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to resize it or add items.
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The listener.
    #[inline]
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the listener.
    #[inline]
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Swap in a new listener, returning the previous one.
    pub fn set_listener(&mut self, listener: L) -> L {
        std::mem::replace(&mut self.listener, listener)
    }

    /// Tear the engine down into its host and listener.
    #[must_use]
    pub fn into_parts(self) -> (H, L) {
        (self.host, self.listener)
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

impl<H: StackHost, L: StackListener> StackEngine<H, L> {
    fn layout(&mut self, now: Instant) {
        if self.host.is_empty() {
            self.motion = None;
            self.offset = Offset::ZERO;
            self.axis_lock = AxisLock::None;
            if self.hovering {
                // The hovered item was taken out from under the engine.
                self.hovering = false;
                self.listener.on_cancel();
            }
            return;
        }

        let size = self.host.size();

        if let Some((position, finished, was_fling)) = self
            .motion
            .as_ref()
            .map(|m| (m.position(now), m.is_finished(now), m.is_fling()))
        {
            self.offset = self.axis_lock.constrain(position);
            if finished {
                self.motion = None;
                if was_fling && !self.touching {
                    self.settle_toward(self.offset, size, now);
                }
            }
        }

        self.update_axis_lock();
        self.host.reposition_front_item(self.rendered_displacement());

        if !is_measured(size) {
            return;
        }

        if !self.touching && self.is_swept_away(size) {
            self.sweep_away();
        } else {
            self.update_hover(size);
        }
    }

    fn update_axis_lock(&mut self) {
        let threshold = self.config.scroll_threshold;
        let (ax, ay) = (self.offset.x.abs(), self.offset.y.abs());
        let next = match self.axis_lock {
            AxisLock::None if ax > threshold => AxisLock::Horizontal,
            AxisLock::None if ay > threshold => AxisLock::Vertical,
            AxisLock::None => AxisLock::None,
            _ if ax <= threshold && ay <= threshold => AxisLock::None,
            locked => locked,
        };
        if next != self.axis_lock {
            #[cfg(feature = "tracing")]
            tracing::debug!(from = ?self.axis_lock, to = ?next, "axis lock changed");
            self.axis_lock = next;
            self.offset = next.constrain(self.offset);
        }
    }

    fn rendered_displacement(&self) -> Offset {
        match self.axis_lock.axis() {
            Some(axis) => self.offset.project(axis).rendered(),
            None => Offset::ZERO,
        }
    }

    /// Axis the item travels along: the locked one, else the dominant one.
    fn travel_axis(&self, offset: Offset) -> Axis {
        self.axis_lock.axis().unwrap_or_else(|| offset.dominant_axis())
    }

    fn travel_direction(&self, offset: Offset) -> Direction {
        Direction::of(self.travel_axis(offset), offset)
    }

    fn is_over_sweep_threshold(&self, offset: Offset, size: Size) -> bool {
        if !is_measured(size) {
            return false;
        }
        let past = |axis: Axis| {
            let distance = offset.along(axis).abs();
            distance > 0.0 && distance >= self.config.sweep_distance(size, axis)
        };
        past(Axis::Horizontal) || past(Axis::Vertical)
    }

    fn is_swept_away(&self, size: Size) -> bool {
        let gone = |axis: Axis| {
            let distance = self.offset.along(axis).abs();
            distance > 0.0 && distance >= self.config.sweep_away_distance(size, axis)
        };
        gone(Axis::Horizontal) || gone(Axis::Vertical)
    }

    /// Start a spring-forward if `reference` is past the sweep threshold,
    /// otherwise a spring-back. Nothing starts when already at rest.
    fn settle_toward(&mut self, reference: Offset, size: Size, now: Instant) {
        if self.is_over_sweep_threshold(reference, size) {
            let direction = self.travel_direction(reference);
            let target = direction.clearing_offset(size);
            #[cfg(feature = "tracing")]
            tracing::debug!(?direction, "spring forward");
            self.motion = Some(Motion::SpringForward(self.spring_to(target, now)));
        } else if self.offset.is_zero() {
            self.motion = None;
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(x = self.offset.x, y = self.offset.y, "spring back");
            self.motion = Some(Motion::SpringBack(self.spring_to(Offset::ZERO, now)));
        }
    }

    fn spring_to(&self, target: Offset, now: Instant) -> Spring {
        Spring::new(self.offset, target, self.config.spring_duration(), now)
            .easing(self.config.spring_easing)
    }

    fn update_hover(&mut self, size: Size) {
        let over = self.is_over_sweep_threshold(self.offset, size);
        if over && !self.hovering {
            self.hovering = true;
            let direction = self.travel_direction(self.offset);
            #[cfg(feature = "tracing")]
            tracing::debug!(?direction, "hover");
            self.listener.on_hover(direction);
        } else if !over && self.hovering {
            self.hovering = false;
            #[cfg(feature = "tracing")]
            tracing::debug!("hover cancelled");
            self.listener.on_cancel();
        }
    }

    fn sweep_away(&mut self) {
        let direction = self.travel_direction(self.offset);
        self.hovering = false;
        #[cfg(feature = "tracing")]
        tracing::info!(
            ?direction,
            recycled = self.config.infinite,
            remaining = self.host.item_count().saturating_sub(1),
            "front item swept away"
        );
        self.listener.on_sweep(direction);

        if let Some(item) = self.host.remove_front_item()
            && self.config.infinite
        {
            self.host.append_item_to_back(item);
        }

        self.motion = None;
        self.offset = Offset::ZERO;
        self.axis_lock = AxisLock::None;
        if !self.host.is_empty() {
            self.host.reposition_front_item(Offset::ZERO);
        }
    }
}

fn is_measured(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::host::VecStack;
    use crate::listener::StackEvent;

    const MS_16: Duration = Duration::from_millis(16);
    const MS_200: Duration = Duration::from_millis(200);

    type Engine = StackEngine<VecStack<u32>, Vec<StackEvent>>;

    fn engine(config: StackConfig) -> Engine {
        let host = VecStack::new(Size::new(1000.0, 1000.0), vec![1, 2, 3]);
        StackEngine::with_listener(host, config, Vec::new())
    }

    fn run_until_idle(engine: &mut Engine, mut now: Instant) -> Instant {
        for _ in 0..1000 {
            if !engine.is_animating() {
                break;
            }
            now += MS_16;
            engine.step(now);
        }
        now
    }

    #[test]
    fn starts_idle() {
        let e = engine(StackConfig::default());
        assert_eq!(e.phase(), Phase::Idle);
        assert_eq!(e.offset(), Offset::ZERO);
        assert_eq!(e.axis_lock(), AxisLock::None);
        assert!(!e.is_animating());
    }

    #[test]
    fn down_enters_dragging_and_cancels_motion() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(100.0, 0.0, t);
        e.on_up(t);
        assert_eq!(e.phase(), Phase::SpringingBack);

        e.on_down(t + MS_16);
        assert_eq!(e.phase(), Phase::Dragging);
        assert!(!e.is_animating());
    }

    #[test]
    fn scroll_locks_first_axis_past_threshold() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(10.0, 20.0, t);
        assert_eq!(e.axis_lock(), AxisLock::None);
        assert_eq!(e.host().front_displacement(), Offset::ZERO);

        e.on_scroll(25.0, 5.0, t);
        assert_eq!(e.axis_lock(), AxisLock::Horizontal);
        assert_eq!(e.offset(), Offset::new(35.0, 0.0));

        // Vertical motion is discarded while horizontally locked.
        e.on_scroll(5.0, 80.0, t);
        assert_eq!(e.offset(), Offset::new(40.0, 0.0));
        assert_eq!(e.host().front_displacement(), Offset::new(-40.0, 0.0));
    }

    #[test]
    fn lock_releases_only_when_both_axes_return() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(0.0, 50.0, t);
        assert_eq!(e.axis_lock(), AxisLock::Vertical);
        e.on_scroll(0.0, -15.0, t);
        assert_eq!(e.axis_lock(), AxisLock::Vertical);
        e.on_scroll(0.0, -20.0, t);
        assert_eq!(e.axis_lock(), AxisLock::None);
        assert_eq!(e.offset(), Offset::new(0.0, 15.0));
    }

    #[test]
    fn short_drag_springs_back_within_duration() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(50.0, 0.0, t);
        e.on_scroll(50.0, 0.0, t);
        assert_eq!(e.offset(), Offset::new(100.0, 0.0));
        e.on_up(t);
        assert_eq!(e.phase(), Phase::SpringingBack);

        e.step(t + MS_200);
        assert_eq!(e.offset(), Offset::ZERO);
        assert_eq!(e.phase(), Phase::Idle);
        assert!(e.listener().is_empty());
        assert_eq!(e.host().items(), &[1, 2, 3]);
    }

    #[test]
    fn hover_fires_once_and_cancel_on_return() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(450.0, 0.0, t);
        e.on_scroll(50.0, 0.0, t);
        e.on_scroll(-20.0, 0.0, t);
        assert_eq!(e.listener(), &vec![StackEvent::Hover(Direction::Left)]);
        assert!(e.is_hovering());

        e.on_scroll(-200.0, 0.0, t);
        assert!(!e.is_hovering());
        assert_eq!(
            e.listener(),
            &vec![StackEvent::Hover(Direction::Left), StackEvent::Cancel]
        );
    }

    #[test]
    fn release_past_threshold_sweeps_and_discards() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(-500.0, 0.0, t);
        e.on_up(t);
        assert_eq!(e.phase(), Phase::SpringingForward);
        let _ = run_until_idle(&mut e, t);

        assert_eq!(
            e.listener(),
            &vec![
                StackEvent::Hover(Direction::Right),
                StackEvent::Sweep(Direction::Right)
            ]
        );
        assert_eq!(e.host().items(), &[1, 2]);
        assert_eq!(e.offset(), Offset::ZERO);
        assert_eq!(e.axis_lock(), AxisLock::None);
        assert!(!e.is_hovering());
    }

    #[test]
    fn infinite_mode_recycles_to_back() {
        let mut e = engine(StackConfig::default().with_infinite(true));
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(0.0, 1000.0, t);
        e.on_up(t);

        assert_eq!(
            e.listener(),
            &vec![
                StackEvent::Hover(Direction::Top),
                StackEvent::Sweep(Direction::Top)
            ]
        );
        assert_eq!(e.host().items(), &[3, 1, 2]);
        assert_eq!(e.offset(), Offset::ZERO);
    }

    #[test]
    fn no_sweep_while_touching() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(1500.0, 0.0, t);
        e.step(t + MS_16);
        assert_eq!(e.host().items().len(), 3);
        assert!(e.is_hovering());
    }

    #[test]
    fn projected_fling_past_threshold_springs_forward() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(40.0, 0.0, t);
        // Pointer moving left: negative velocity pushes the item left.
        e.on_fling(-2000.0, 0.0, t);
        assert_eq!(e.phase(), Phase::SpringingForward);
        e.on_up(t);
        let _ = run_until_idle(&mut e, t);
        assert_eq!(
            e.listener().last(),
            Some(&StackEvent::Sweep(Direction::Left))
        );
        assert_eq!(e.host().items(), &[1, 2]);
    }

    #[test]
    fn projected_weak_fling_springs_back() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(40.0, 0.0, t);
        e.on_fling(-300.0, 0.0, t);
        assert_eq!(e.phase(), Phase::SpringingBack);
        e.on_up(t);
        let _ = run_until_idle(&mut e, t);
        assert_eq!(e.offset(), Offset::ZERO);
        assert_eq!(e.host().items(), &[1, 2, 3]);
    }

    #[test]
    fn coasting_fling_settles_after_it_stops() {
        let config = StackConfig::default().with_fling_policy(FlingPolicy::Coast);
        let mut e = engine(config);
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(0.0, -40.0, t);
        e.on_fling(0.0, 1500.0, t);
        assert_eq!(e.phase(), Phase::Flinging);
        e.on_up(t);
        assert_eq!(e.phase(), Phase::Flinging);

        let _ = run_until_idle(&mut e, t);
        assert_eq!(
            e.listener(),
            &vec![
                StackEvent::Hover(Direction::Bottom),
                StackEvent::Sweep(Direction::Bottom)
            ]
        );
    }

    #[test]
    fn locked_axis_zeroes_orthogonal_fling_velocity() {
        let config = StackConfig::default().with_fling_policy(FlingPolicy::Coast);
        let mut e = engine(config);
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(40.0, 0.0, t);
        e.on_fling(0.0, -3000.0, t);
        let Some(Motion::Fling(fling)) = e.motion() else {
            panic!("expected fling, got {:?}", e.motion());
        };
        assert_eq!(fling.final_position(), Offset::new(40.0, 0.0));
    }

    #[test]
    fn step_without_motion_is_idempotent() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.step(t);
        let before = format!("{e:?}");
        e.step(t + MS_16);
        e.step(t + MS_200);
        assert_eq!(format!("{e:?}"), before);
        assert!(e.listener().is_empty());
    }

    #[test]
    fn up_without_down_is_harmless() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_up(t);
        e.on_up(t);
        assert_eq!(e.phase(), Phase::Idle);
    }

    #[test]
    fn empty_stack_ignores_everything() {
        let host: VecStack<u32> = VecStack::new(Size::new(100.0, 100.0), Vec::new());
        let mut e = StackEngine::with_listener(host, StackConfig::default(), Vec::new());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(500.0, 0.0, t);
        e.on_fling(-9000.0, 0.0, t);
        e.on_up(t);
        e.step(t + MS_200);
        assert_eq!(e.offset(), Offset::ZERO);
        assert!(!e.is_animating());
        assert!(e.listener().is_empty());
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(f64::NAN, 3.0, t);
        e.on_fling(f64::INFINITY, 0.0, t);
        assert_eq!(e.offset(), Offset::ZERO);
        assert_eq!(e.phase(), Phase::Dragging);
    }

    #[test]
    fn unmeasured_container_never_sweeps() {
        let host = VecStack::new(Size::new(0.0, 0.0), vec![1]);
        let mut e = StackEngine::with_listener(host, StackConfig::default(), Vec::new());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(50.0, 0.0, t);
        e.on_up(t);
        let _ = run_until_idle(&mut e, t);
        assert!(e.listener().is_empty());
        assert_eq!(e.host().items(), &[1]);
    }

    #[test]
    fn reset_clears_state_silently() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(600.0, 0.0, t);
        assert!(e.is_hovering());
        e.reset();
        assert_eq!(e.phase(), Phase::Idle);
        assert_eq!(e.offset(), Offset::ZERO);
        assert!(!e.is_hovering());
        assert_eq!(e.listener(), &vec![StackEvent::Hover(Direction::Left)]);
    }

    #[test]
    fn emptied_stack_closes_open_hover() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(600.0, 0.0, t);
        assert!(e.is_hovering());

        while e.host_mut().remove_front_item().is_some() {}
        e.step(t + MS_16);
        assert!(!e.is_hovering());
        assert_eq!(
            e.listener(),
            &vec![StackEvent::Hover(Direction::Left), StackEvent::Cancel]
        );

        e.step(t + MS_200);
        assert_eq!(e.listener().len(), 2);
    }

    #[test]
    fn set_listener_returns_previous() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(500.0, 0.0, t);
        let old = e.set_listener(Vec::new());
        assert_eq!(old, vec![StackEvent::Hover(Direction::Left)]);
        e.on_scroll(-500.0, 0.0, t);
        assert_eq!(e.listener(), &vec![StackEvent::Cancel]);
    }

    #[test]
    fn huge_drag_is_clamped_and_sweeps_on_release() {
        let mut e = engine(StackConfig::default());
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(1e308, 0.0, t);
        e.on_scroll(1e308, 0.0, t);
        assert_eq!(e.offset(), Offset::new(1000.0, 0.0));
        assert_eq!(e.host().front_displacement(), Offset::new(-1000.0, 0.0));

        e.on_up(t);
        assert_eq!(
            e.listener(),
            &vec![
                StackEvent::Hover(Direction::Left),
                StackEvent::Sweep(Direction::Left)
            ]
        );
        assert_eq!(e.host().items(), &[1, 2]);
        assert_eq!(e.offset(), Offset::ZERO);

        e.on_down(t + MS_16);
        assert_eq!(e.listener().len(), 2);
    }

    #[test]
    fn sweep_away_inset_completes_early() {
        let config = StackConfig::default().with_sweep_away_inset(200.0);
        let mut e = engine(config);
        let t = Instant::now();
        e.on_down(t);
        e.on_scroll(-810.0, 0.0, t);
        e.on_up(t);
        assert_eq!(e.listener().last(), Some(&StackEvent::Sweep(Direction::Right)));
        assert_eq!(e.host().items().len(), 2);
    }
}
