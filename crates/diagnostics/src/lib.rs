//! Logging setup shared by the portfolio crates.
//!
//! Usage:
//! - Set PORTFOLIO_LOG=off - no logs
//! - Set PORTFOLIO_LOG=info (default) - compile progress and stats
//! - Set PORTFOLIO_LOG=debug - per-section and per-file detail

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "PORTFOLIO_LOG";

static INIT: Once = Once::new();

/// Parse a log level name. `None` means logging is switched off.
///
/// Unknown names are reported as `Err` carrying the name so the caller can
/// warn about it.
pub fn parse_level(name: &str) -> Result<Option<emit::Level>, String> {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => Ok(None),
        "debug" => Ok(Some(emit::Level::Debug)),
        "" | "info" => Ok(Some(emit::Level::Info)),
        "warn" | "warning" => Ok(Some(emit::Level::Warn)),
        "error" => Ok(Some(emit::Level::Error)),
        other => Err(other.to_string()),
    }
}

/// Initialize diagnostics based on the PORTFOLIO_LOG environment variable.
///
/// Safe to call multiple times; only the first call has an effect.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let requested = std::env::var(LOG_ENV).unwrap_or_else(|_| "info".to_string());

        let (level, unknown) = match parse_level(&requested) {
            Ok(None) => return,
            Ok(Some(level)) => (level, None),
            Err(name) => (emit::Level::Info, Some(name)),
        };

        let rt = emit::setup()
            .emit_to(emit_term::stdout())
            .emit_when(emit::level::min_filter(level))
            .init();

        if let Some(name) = unknown {
            emit::warn!("unknown {env} value {name}, using info", env: LOG_ENV, name: name.as_str());
        }

        // The runtime lives for the rest of the process.
        std::mem::forget(rt);
    });
}

/// Progress a user wants to see in normal runs.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Detail useful when a page renders unexpectedly.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Recoverable problems: dropped files, skipped records.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Failures that stop an artifact from being written.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_multiple_times() {
        init_diagnostics();
        init_diagnostics();
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("off"), Ok(None));
        assert_eq!(parse_level("DEBUG"), Ok(Some(emit::Level::Debug)));
        assert_eq!(parse_level(""), Ok(Some(emit::Level::Info)));
        assert_eq!(parse_level("warning"), Ok(Some(emit::Level::Warn)));
        assert_eq!(parse_level("loud"), Err("loud".to_string()));
    }

    #[test]
    fn test_macros_compile() {
        info!("Test message");
        debug!("Debug message with {value}", value: 42);
        warn!("Warning message");
        error!("Error message");
    }
}
