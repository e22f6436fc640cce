//! Operator-visible reporting of non-fatal I/O failures
//!
//! Failures on the write path never reach the caller of a logging operation.
//! They are emitted as `tracing` events instead, which land wherever the
//! embedding application routes its diagnostics.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::LogError;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "immutable_log=warn";

/// Report a swallowed failure to the diagnostic sink
pub fn report(err: &LogError) {
    let reason = err.io_kind().map_or("invalid configuration", |kind| kind.as_str());
    match err {
        LogError::FileRotation { from, to, source } => {
            tracing::warn!(
                from = %from.display(),
                to = %to.display(),
                reason,
                error = %source,
                "Log rotation failed, appending to current file"
            );
        }
        LogError::FileWrite { path, source } => {
            tracing::error!(
                path = %path.display(),
                reason,
                error = %source,
                "Log entry kept in memory only"
            );
        }
        other => {
            tracing::error!(reason, error = %other, "Log store failure");
        }
    }
}

/// Install a stderr subscriber for diagnostics
///
/// Fails if a global subscriber is already set.
pub fn init_diagnostics() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install diagnostics subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_report_does_not_panic_without_subscriber() {
        report(&LogError::FileWrite {
            path: PathBuf::from("/nonexistent/app.log"),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        report(&LogError::FileRotation {
            from: PathBuf::from("app.log"),
            to: PathBuf::from("app.log.2026-01-21_14-30-45"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        });
        report(&LogError::InvalidConfig("bad".to_string()));
    }

    #[test]
    fn test_init_diagnostics_only_once() {
        let _ = init_diagnostics();
        assert!(init_diagnostics().is_err());
    }
}
