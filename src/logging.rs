//! Logging setup for the CLI
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! host's decision. The `keybind-recorder` binary calls `init` once at startup.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - recording start/stop/commit events
//! - `RUST_LOG=keybind_recorder::core::keybind=trace` - every recorded key

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize a stderr tracing subscriber
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug`
/// when `verbose` is true.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
