//! Logging

use clap::Args;
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Registry,
    filter::ParseError,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub(crate) log_format: LogFormat,
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    /// The log level is not a valid filter directive.
    #[error("invalid log level {level:?}: {source}")]
    InvalidLevel {
        /// Level as given
        level: String,

        /// Parser error
        source: ParseError,
    },

    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber, writing to standard error.
pub(crate) fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    match config.log_format {
        LogFormat::Compact => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        ),
        LogFormat::Json => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true)
                .with_writer(std::io::stderr),
        ),
    }
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(format!(
        "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn",
        config.log_level
    ))
    .map_err(|source| LoggingError::InvalidLevel {
        level: config.log_level.clone(),
        source,
    })
}

fn init_with_layer<L>(config: &LoggingConfig, fmt_layer: L) -> Result<(), LoggingError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    let filter = build_env_filter(config)?;

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn config(log_level: &str) -> LoggingConfig {
        LoggingConfig {
            log_level: log_level.to_string(),
            log_format: LogFormat::Compact,
        }
    }

    #[test]
    fn levels_are_combined_with_dependency_defaults() -> TestResult {
        let filter = build_env_filter(&config("debug"))?.to_string();

        assert!(filter.contains("debug"), "got {filter}");
        assert!(filter.contains("reqwest=warn"), "got {filter}");

        Ok(())
    }

    #[test]
    fn directives_are_accepted() -> TestResult {
        let filter = build_env_filter(&config("shelf=trace"))?.to_string();

        assert!(filter.contains("shelf=trace"), "got {filter}");

        Ok(())
    }

    #[test]
    fn invalid_levels_are_reported() {
        let result = build_env_filter(&config("shelf=loud"));

        assert!(
            matches!(
                result,
                Err(LoggingError::InvalidLevel { ref level, .. }) if level == "shelf=loud"
            ),
            "expected an invalid level error, got {result:?}"
        );
    }
}
