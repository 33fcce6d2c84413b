#![forbid(unsafe_code)]

//! Core: gesture-driven motion for a stack of swipeable items.
//!
//! # Role in cardstack
//! `cardstack-core` decides what happens to the front item of a stack while
//! a pointer drags, flings, or releases it: whether it springs back to rest
//! or is swept away through one of the four container edges (and, in
//! infinite mode, recycled to the back of the stack).
//!
//! # Primary responsibilities
//! - **StackEngine**: axis lock, threshold detection, and the
//!   hover/sweep/cancel state machine.
//! - **Motion**: time-parameterized fling and spring trajectories.
//! - **StackHost / StackListener**: the container and callback contracts.
//! - **StackConfig**: thresholds, spring timing, and fling policy.
//!
//! # How it fits in the system
//! A host feeds classified gestures ([`GestureEvent`]) and, while
//! [`StackEngine::is_animating`] is true, calls [`StackEngine::step`] once
//! per frame. The engine never schedules work of its own; `cardstack-harness`
//! is a deterministic driver built on exactly this contract.
//!
//! ```
//! use cardstack_core::{Size, StackConfig, StackEngine, StackEvent, VecStack};
//! use web_time::Instant;
//!
//! let host = VecStack::new(Size::new(1000.0, 1000.0), vec!["a", "b", "c"]);
//! let mut engine = StackEngine::with_listener(host, StackConfig::default(), Vec::new());
//!
//! let now = Instant::now();
//! engine.on_down(now);
//! engine.on_scroll(1000.0, 0.0, now);
//! engine.on_up(now);
//!
//! assert_eq!(engine.host().items(), &["a", "b"]);
//! assert_eq!(engine.listener().last(), Some(&StackEvent::Sweep(cardstack_core::Direction::Left)));
//! ```

pub mod config;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod listener;
pub mod logging;
pub mod motion;

pub use config::{ConfigError, FlingPolicy, StackConfig, SweepThreshold};
pub use engine::{Phase, StackEngine};
pub use geometry::{Axis, AxisLock, Direction, Offset, Size};
pub use gesture::GestureEvent;
pub use host::{StackHost, VecStack};
pub use listener::{NoopListener, StackEvent, StackListener};
pub use motion::{Easing, Fling, Motion, Spring, Trajectory};
