use crate::assessment::{ComplexityPreference, ScoringPolicy};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Scoring dials and request defaults for the assessment engine.
#[derive(Debug, Clone, Default)]
pub struct AssessmentConfig {
    pub policy: ScoringPolicy,
    pub default_complexity: ComplexityPreference,
}

impl AssessmentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let mut policy = ScoringPolicy::default();

        if let Some(penalty) = parse_env::<i32>("APP_MISSING_ATTRIBUTE_PENALTY")? {
            policy.missing_attribute_penalty = penalty;
        }
        if let Some(expansion) = parse_env::<f64>("APP_TOLERANCE_EXPANSION")? {
            if !expansion.is_finite() || expansion < 0.0 {
                return Err(ConfigError::InvalidNumber {
                    key: "APP_TOLERANCE_EXPANSION",
                });
            }
            policy.tolerance_expansion = expansion;
        }

        let default_complexity = match env::var("APP_DEFAULT_COMPLEXITY") {
            Ok(raw) => raw
                .parse::<ComplexityPreference>()
                .map_err(|_| ConfigError::InvalidComplexity(raw))?,
            Err(_) => ComplexityPreference::default(),
        };

        Ok(Self {
            policy,
            default_complexity,
        })
    }
}

fn parse_env<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(None),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
    InvalidComplexity(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a valid non-negative number")
            }
            ConfigError::InvalidComplexity(value) => write!(
                f,
                "APP_DEFAULT_COMPLEXITY must be simple, balanced or advanced (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidComplexity(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_DEFAULT_COMPLEXITY");
        env::remove_var("APP_MISSING_ATTRIBUTE_PENALTY");
        env::remove_var("APP_TOLERANCE_EXPANSION");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.assessment.default_complexity,
            ComplexityPreference::Balanced
        );
        assert_eq!(config.assessment.policy, ScoringPolicy::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn scoring_overrides_are_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_MISSING_ATTRIBUTE_PENALTY", "0");
        env::set_var("APP_TOLERANCE_EXPANSION", "0.1");
        env::set_var("APP_DEFAULT_COMPLEXITY", "Advanced");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.assessment.policy.missing_attribute_penalty, 0);
        assert!((config.assessment.policy.tolerance_expansion - 0.1).abs() < f64::EPSILON);
        assert_eq!(
            config.assessment.default_complexity,
            ComplexityPreference::Advanced
        );
        reset_env();
    }

    #[test]
    fn rejects_malformed_scoring_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_TOLERANCE_EXPANSION", "-0.5");
        let err = AppConfig::load().expect_err("negative expansion rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                key: "APP_TOLERANCE_EXPANSION"
            }
        ));

        reset_env();
        env::set_var("APP_DEFAULT_COMPLEXITY", "extreme");
        let err = AppConfig::load().expect_err("unknown complexity rejected");
        assert!(matches!(err, ConfigError::InvalidComplexity(value) if value == "extreme"));
        reset_env();
    }
}
