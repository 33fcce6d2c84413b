//! JSON gesture scripts.
//!
//! ```json
//! {
//!   "name": "swipe-left",
//!   "steps": [
//!     { "at_ms": 0,  "gesture": { "kind": "down" } },
//!     { "at_ms": 16, "gesture": { "kind": "scroll", "dx": 600.0, "dy": 0.0 } },
//!     { "at_ms": 32, "gesture": { "kind": "up" } }
//!   ]
//! }
//! ```
//!
//! Timestamps are milliseconds from the start of the replay, must not
//! decrease, and may not exceed [`MAX_AT_MS`].

use std::path::Path;

use cardstack_core::GestureEvent;
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

/// Latest accepted step timestamp (24 hours).
pub const MAX_AT_MS: u64 = 24 * 60 * 60 * 1000;

/// One timed gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStep {
    pub at_ms: u64,
    pub gesture: GestureEvent,
}

/// An ordered list of timed gestures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GestureScript {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<ScriptStep>,
}

impl GestureScript {
    pub fn from_json(text: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| HarnessError::io(path, err))?;
        Self::from_json(&text)
    }

    /// Reject out-of-order timestamps and non-finite gesture values.
    pub fn validate(&self) -> Result<()> {
        let mut previous = 0u64;
        for (index, step) in self.steps.iter().enumerate() {
            if step.at_ms < previous {
                return Err(HarnessError::InvalidScript {
                    index,
                    message: format!(
                        "at_ms {} is earlier than the previous step ({previous})",
                        step.at_ms
                    ),
                });
            }
            if step.at_ms > MAX_AT_MS {
                return Err(HarnessError::InvalidScript {
                    index,
                    message: format!("at_ms {} exceeds the {MAX_AT_MS}ms limit", step.at_ms),
                });
            }
            previous = step.at_ms;

            let finite = match step.gesture {
                GestureEvent::Scroll { dx, dy } => dx.is_finite() && dy.is_finite(),
                GestureEvent::Fling { vx, vy } => vx.is_finite() && vy.is_finite(),
                GestureEvent::Down | GestureEvent::Up => true,
            };
            if !finite {
                return Err(HarnessError::InvalidScript {
                    index,
                    message: format!("{} has a non-finite component", step.gesture.name()),
                });
            }
        }
        Ok(())
    }

    /// Timestamp of the last step, or 0 for an empty script.
    #[must_use]
    pub fn end_ms(&self) -> u64 {
        self.steps.last().map_or(0, |step| step.at_ms)
    }
}
