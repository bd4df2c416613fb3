//! Tracing subscriber setup for the command-line binary.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// Logs go to stderr so command output on stdout stays clean. The filter
/// comes from `RUST_LOG`; a failed install is reported and otherwise ignored.
pub fn init(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
