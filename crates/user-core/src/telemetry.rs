//! Logging initialisation.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to
//! every target.

use crate::AppResult;
#[cfg(feature = "telemetry")]
use crate::ErrorKind;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Installs the global tracing subscriber.
///
/// Fails with a configuration error when `level` is not a valid filter
/// directive or a subscriber is already installed.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(level: &str, format: LogFormat) -> AppResult<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            ErrorKind::ConfigLoad
                .error(format!("invalid log level {level}"))
                .with_context(e)
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };

    result.map_err(|e| ErrorKind::ConfigLoad.error("Failed to install subscriber").with_context(e))?;

    tracing::info!(level, ?format, "Logging initialized");
    Ok(())
}

/// No-op when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_level: &str, _format: LogFormat) -> AppResult<()> {
    Ok(())
}
