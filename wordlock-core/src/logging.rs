//! Structured logging using **tracing**.
//!
//! Logs go to stderr as JSON so stdout carries nothing but the report.
//! Events are emitted with the `tracing` macros and structured fields at the
//! call site; this module only installs the subscriber.

/// Initializes the global tracing subscriber.
///
/// Call once at startup. Defaults to `warn` when `RUST_LOG` is unset, so a
/// normal run only logs skipped oversized lines and failures.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=wordlock_core=debug`)
pub fn init_structured_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // try_init: a second call (e.g. from tests) must not panic
    let _ = tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
