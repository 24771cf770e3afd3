use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `bac_compass=debug`.
pub const LOG_ENV: &str = "BAC_COMPASS_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{value}'")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to install log subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Pick the filter directive: `BAC_COMPASS_LOG` wins, then `--verbose`, else warnings only.
pub fn filter_directive(env_value: Option<String>, verbose: bool) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value,
        _ if verbose => "debug".to_string(),
        _ => "warn".to_string(),
    }
}

/// Install the stderr subscriber. Call once, from the binary.
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), verbose);
    let env_filter = EnvFilter::try_new(&directive).map_err(|source| LoggingError::EnvFilter {
        value: directive.clone(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(LoggingError::Subscriber)
}
