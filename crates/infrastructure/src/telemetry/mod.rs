//! Logging initialisation
//!
//! Installs a global `tracing` subscriber with an env-driven filter and a
//! text or JSON formatter.

use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "customer_server=debug,presentation_http=debug,\
                                      application=debug,infrastructure=debug,tower_http=info";

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a configured format name; anything but `json` is text
    #[must_use]
    pub fn parse(format: &str) -> Self {
        if format.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Fails if a global subscriber has already been set.
pub fn init_logging(format: &str) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::parse(format) {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_format() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
    }

    #[test]
    fn default_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER);
        assert!(filter.is_ok());
    }

    #[test]
    fn second_init_fails() {
        let _ = init_logging("text");
        assert!(init_logging("json").is_err());
    }
}
