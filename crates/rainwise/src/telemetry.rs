use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("log filter '{directive}' is not a valid EnvFilter directive")]
    Filter {
        directive: String,
        #[source]
        source: ParseError,
    },
    #[error("tracing subscriber already installed: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global subscriber. `RUST_LOG` wins over `APP_LOG_LEVEL` when set.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = assessment_filter(
        &config.log_level,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    )?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Picks the override directive when one is given, otherwise the configured level.
fn assessment_filter(
    log_level: &str,
    override_directive: Option<String>,
) -> Result<EnvFilter, TelemetryError> {
    let directive = override_directive
        .filter(|raw| !raw.trim().is_empty())
        .unwrap_or_else(|| log_level.to_string());

    EnvFilter::try_new(&directive).map_err(|source| TelemetryError::Filter { directive, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_used_without_override() {
        let filter = assessment_filter("rainwise=debug,warn", None).expect("directive parses");
        assert!(filter.to_string().contains("rainwise=debug"));
    }

    #[test]
    fn override_directive_wins_unless_blank() {
        let filter = assessment_filter("info", Some("rainwise=trace".to_string()))
            .expect("override parses");
        assert!(filter.to_string().contains("rainwise=trace"));

        let filter = assessment_filter("warn", Some("  ".to_string())).expect("level parses");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn malformed_directives_name_the_offending_value() {
        let err = assessment_filter("rainwise=loud", None).expect_err("bad level rejected");
        assert!(matches!(
            &err,
            TelemetryError::Filter { directive, .. } if directive == "rainwise=loud"
        ));
        assert!(err.to_string().contains("rainwise=loud"));
    }
}
