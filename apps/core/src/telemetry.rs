//! Tracing subscriber setup.
//!
//! Logs always go to stderr so they never interleave with the chat on stdout.
//! Respects `RUST_LOG`, defaulting to `warn` for the interactive terminal.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;
use crate::error::AppError;

/// Installs the global subscriber in the requested format.
///
/// # Errors
///
/// Returns `AppError::Internal` if a global subscriber is already set.
pub fn init_tracing(format: LogFormat) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Bunyan => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").to_string(),
                std::io::stderr,
            ))
            .try_init(),
    };

    result.map_err(|e| AppError::Internal(format!("Failed to install tracing subscriber: {}", e)))
}
