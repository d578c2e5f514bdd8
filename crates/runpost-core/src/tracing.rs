//! Log setup for the engine and the CLI.
//!
//! Engine code only emits `tracing` events; installing a subscriber is left to
//! the binary. Logs always go to stderr so that report and JSON output on
//! stdout stay clean.
//!
//! ```ignore
//! use runpost_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::cli())?;
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Errors that can occur while installing the subscriber.
#[derive(Debug, Error)]
pub enum TracingError {
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),

    /// The filter directive does not parse.
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    /// One short line per event, no timestamp.
    #[default]
    Compact,
    /// One JSON object per event, for batch runs.
    Json,
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Level for `runpost` crates when neither `env_filter` nor `RUST_LOG`
    /// is set.
    pub default_level: Level,
    pub output_format: TracingOutputFormat,
    /// Show file and line of each event.
    pub include_location: bool,
    /// Show the module path of each event.
    pub include_target: bool,
    /// Explicit filter directive; wins over `RUST_LOG`.
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::cli()
    }
}

impl TracingConfig {
    /// Quiet preset for regular CLI runs: warnings only.
    #[must_use]
    pub fn cli() -> Self {
        Self {
            default_level: Level::WARN,
            output_format: TracingOutputFormat::Compact,
            include_location: false,
            include_target: false,
            env_filter: None,
        }
    }

    /// Preset for `--debug`: every engine event, with its origin.
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            default_level: Level::DEBUG,
            include_location: true,
            include_target: true,
            ..Self::cli()
        }
    }

    /// Preset for processing large datasets: structured JSON lines.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            default_level: Level::INFO,
            output_format: TracingOutputFormat::Json,
            include_location: false,
            include_target: true,
            env_filter: None,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the filter: explicit directive, then `RUST_LOG`, then
    /// `runpost=<default_level>`.
    fn filter(&self) -> Result<EnvFilter, TracingError> {
        if let Some(ref directive) = self.env_filter {
            return Ok(EnvFilter::try_new(directive)?);
        }
        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("runpost={}", self.default_level))))
    }
}

/// Installs the global subscriber. Call once, at startup.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.filter()?;

    let layer = match config.output_format {
        TracingOutputFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .without_time()
            .boxed(),
        TracingOutputFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod presets {
        use super::*;

        #[test]
        fn default_is_quiet_cli() {
            let config = TracingConfig::default();
            assert_eq!(config, TracingConfig::cli());
            assert_eq!(config.default_level, Level::WARN);
            assert_eq!(config.output_format, TracingOutputFormat::Compact);
            assert!(!config.include_target);
        }

        #[test]
        fn debug_shows_origin() {
            let config = TracingConfig::cli_debug();
            assert_eq!(config.default_level, Level::DEBUG);
            assert!(config.include_location);
            assert!(config.include_target);
        }

        #[test]
        fn batch_is_json() {
            let config = TracingConfig::batch();
            assert_eq!(config.default_level, Level::INFO);
            assert_eq!(config.output_format, TracingOutputFormat::Json);
        }
    }

    mod filter {
        use super::*;

        #[test]
        fn builder_methods() {
            let config = TracingConfig::cli()
                .with_level(Level::TRACE)
                .with_format(TracingOutputFormat::Json)
                .with_env_filter("runpost_core=trace");

            assert_eq!(config.default_level, Level::TRACE);
            assert_eq!(config.output_format, TracingOutputFormat::Json);
            assert_eq!(config.env_filter.as_deref(), Some("runpost_core=trace"));
        }

        #[test]
        fn explicit_directive_parses() {
            let config = TracingConfig::cli().with_env_filter("runpost=info");
            assert!(config.filter().is_ok());
        }

        #[test]
        fn invalid_directive_is_rejected() {
            let config = TracingConfig::cli().with_env_filter("runpost=notalevel");
            assert!(matches!(init_tracing(config), Err(TracingError::EnvFilter(_))));
        }
    }
}
