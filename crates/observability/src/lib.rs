//! Process-wide logging setup for binaries and tests embedding the engine.

/// Tracing subscriber configuration.
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig};

/// Installs the default subscriber: JSON lines, filter from `RUST_LOG`
/// (default `info`).
///
/// Safe to call more than once; only the first call installs anything.
pub fn init() {
    tracing::init(TracingConfig::default());
}
