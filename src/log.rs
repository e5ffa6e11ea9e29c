// src/log.rs
//
// Logging front-end. The short macros below are what the rest of the crate
// calls; they forward to `tracing`, so any subscriber picks them up.
// `init` installs the default one: stderr (RUST_LOG, default info) plus a
// debug-level file log under `.store/`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_DIR, LOG_FILE};

/// Install the global subscriber. Keep the returned guard alive until exit,
/// otherwise buffered file lines are lost.
/// Calling this twice is harmless; the second call only returns a fresh guard.
pub fn init(stderr: bool) -> Option<WorkerGuard> {
    let (file_layer, guard) = match std::fs::create_dir_all(LOG_DIR) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(Path::new(LOG_DIR), LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    let stderr_layer = stderr.then(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter)
    });

    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    guard
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
