//! Process-wide logging setup.
//!
//! [`LogConfig`] is built once in `main` from the config file and command line
//! overrides, then passed by reference to [`init`]. Events go to stderr so
//! command output on stdout stays machine-readable. Timestamps are RFC3339 in
//! UTC and every event carries its source file and line.

use crate::config::{Config, LogFormat};
use crate::error::{GcError, Result};
use tracing_subscriber::EnvFilter;

/// Resolved logging settings for the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: String,
}

impl LogConfig {
    /// Combine config file values with optional command line overrides.
    pub fn resolve(
        config: &Config,
        format_override: Option<&str>,
        level_override: Option<&str>,
    ) -> Result<Self> {
        let format = match format_override {
            Some(raw) => LogFormat::from_str(raw).ok_or_else(|| {
                GcError::UserError(format!(
                    "unknown log format '{}' (expected json or compact)",
                    raw
                ))
            })?,
            None => config.log_format,
        };

        let level = level_override
            .map(str::to_string)
            .unwrap_or_else(|| config.log_level.clone());

        Ok(Self { format, level })
    }

    /// Filter for this config. `RUST_LOG` wins when it is set and valid.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }

        EnvFilter::try_new(&self.level).map_err(|e| {
            GcError::UserError(format!("invalid log level '{}': {}", self.level, e))
        })
    }
}

/// Install the global tracing subscriber.
///
/// Must be called at most once per process.
pub fn init(config: &LogConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| GcError::UserError(format!("failed to initialize logging: {}", e)))
}
