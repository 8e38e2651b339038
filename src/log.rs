// src/log.rs
//
// Diagnostics go through `tracing`. The short macros keep call sites terse:
//   logf! -> info, logd! -> debug, loge! -> error
//
// RUST_LOG controls verbosity (default: info), e.g.
//   RUST_LOG=nyc_procurement=debug procurement

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

#[doc(hidden)]
pub use tracing as __tracing;

/// Install the global subscriber.
///
/// With `file = Some(path)` events are appended to that file (parent
/// directories are created); otherwise they go to stderr.
/// Calling this twice is harmless: the second install is ignored.
pub fn init(file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| Error::file(parent, e))?;
                }
            }
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::file(path, e))?;

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(log_file)).with_ansi(false))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).compact())
                .try_init();
        }
    }
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
