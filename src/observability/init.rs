//! Tracing initialization and subscriber setup.
//!
//! The engine itself only emits `tracing` spans and events; installing a
//! subscriber is the host's decision. This module offers the conventional
//! setup for binaries and tests that do not bring their own: an env-filtered
//! formatting subscriber writing to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes a formatting tracing subscriber.
///
/// The filter directive comes from, in order of precedence:
/// 1. the `RUST_LOG` environment variable, if set
/// 2. the `level` argument, if provided (e.g. `"debug"`, `"backpager=trace"`)
/// 3. the default, `"info"`
///
/// Idempotent: only the first successful initialization in a process takes
/// effect, so calling this from a library consumer that already installed
/// its own subscriber is harmless.
///
/// # Example
///
/// ```
/// backpager::observability::init_tracing(Some("debug"));
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
