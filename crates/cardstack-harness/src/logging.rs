//! Subscriber setup for the harness binary.
//!
//! Filter directives come from `CARDSTACK_LOG` (default `warn`). Logs go to
//! stderr so the JSON report on stdout stays machine readable.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CARDSTACK_LOG";
const DEFAULT_DIRECTIVES: &str = "warn";

fn directives() -> String {
    std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_DIRECTIVES.to_string())
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(json: bool) {
    let directives = directives();
    if json {
        let _ = cardstack_core::logging::try_init_json(&directives);
        return;
    }
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
