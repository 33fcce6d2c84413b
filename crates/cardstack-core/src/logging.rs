#![forbid(unsafe_code)]

//! Logging hooks.
//!
//! With the `tracing` feature the engine emits structured events at axis
//! lock changes, simulation starts, hover transitions, and sweeps. This
//! module re-exports the `tracing` macros and, with `tracing-json`, installs
//! a JSON subscriber filtered by directives such as `cardstack_core=debug`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Error returned when a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install a global JSON subscriber for `directives`.
///
/// Unparseable directives fall back to `warn`.
#[cfg(feature = "tracing-json")]
pub fn try_init_json(directives: &str) -> Result<(), InitError> {
    let filter = tracing_subscriber::EnvFilter::try_new(directives)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .try_init()
}
