//! Convenience macros for application messaging and logging.
//!
//! The macros route output depending on whether debug mode is active:
//! in normal mode diagnostics go straight to stderr so stdout stays free
//! for the CSV payload, in debug mode they go through the `tracing`
//! subscriber instead.

use std::sync::OnceLock;

/// Cached result of the debug mode detection.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks whether debug mode is enabled, caching the answer.
///
/// Debug mode is on when either `SPESEN_DEBUG` or `RUST_LOG` is set in the
/// environment. The check runs once per process; later calls are a memory
/// read.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Application-specific flag or the standard Rust logging variable
        std::env::var("SPESEN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints an error message with ❌ prefix.
///
/// Writes to stderr in normal mode and to `tracing::error!` in debug mode.
/// stderr keeps error text out of the CSV stream on stdout.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix.
///
/// Suppressed entirely unless debug mode is active.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
