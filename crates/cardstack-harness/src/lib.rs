#![forbid(unsafe_code)]

//! Deterministic replay driver for `cardstack-core`.
//!
//! Loads a JSON gesture script, drives a [`cardstack_core::StackEngine`]
//! over a [`cardstack_core::VecStack`] with a simulated frame clock, and
//! reports the callbacks it observed and the final stack order.

pub mod cli;
pub mod error;
pub mod logging;
pub mod replay;
pub mod script;

pub use cli::{Cli, Commands, ReplayArgs, run, run_from_env};
pub use error::{HarnessError, Result};
pub use replay::{MAX_FRAME, ReplayOptions, ReplayReport, TimedEvent, replay};
pub use script::{GestureScript, MAX_AT_MS, ScriptStep};
