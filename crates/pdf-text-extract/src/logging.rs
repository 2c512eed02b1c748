//! Process-wide log setup.

use tracing_subscriber::EnvFilter;

/// Only warnings and errors reach stderr; the parser's debug chatter is dropped.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber.
///
/// `main` calls this once. Unit tests call it repeatedly within one process,
/// where the global subscriber is already set; those calls are no-ops.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_DIRECTIVE))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
