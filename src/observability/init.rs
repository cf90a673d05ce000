//! Tracing initialization and subscriber setup.
//!
//! This module configures the `tracing` subscriber that receives the spans and
//! events emitted by the store, the engine and the catalog.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "info";

/// Resolves the filter directive to use.
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable if set and non-empty
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
fn resolve_filter(config: &Config) -> EnvFilter {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return from_env;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("invalid trace level {level:?} ({e}), falling back to {DEFAULT_LEVEL}");
        EnvFilter::new(DEFAULT_LEVEL)
    })
}

/// Initializes the global tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by the resolved level
/// 2. Formats them compactly to stderr, keeping stdout free for list output
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber; later calls (or a
/// subscriber installed by an embedding application) are left in place.
///
/// # Example
///
/// ```rust
/// use doclist::observability::init_tracing;
/// use doclist::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = resolve_filter(config);

    let fmt_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
