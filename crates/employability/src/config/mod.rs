use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::scoring::{ScoreCategory, ScoringWeights, DEFAULT_WEIGHTS};

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

/// Top-level configuration for the scoring service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringWeights,
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
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            scoring: load_weights()?,
        })
    }
}

/// Environment variable overriding the weight of each category.
pub const fn weight_variable(category: ScoreCategory) -> &'static str {
    match category {
        ScoreCategory::Foundational => "SCORE_WEIGHT_FOUNDATIONAL",
        ScoreCategory::Century21 => "SCORE_WEIGHT_CENTURY21",
        ScoreCategory::Digital => "SCORE_WEIGHT_DIGITAL",
        ScoreCategory::Behavior => "SCORE_WEIGHT_BEHAVIOR",
        ScoreCategory::Career => "SCORE_WEIGHT_CAREER",
    }
}

fn load_weights() -> Result<ScoringWeights, ConfigError> {
    let mut weights = DEFAULT_WEIGHTS;

    for category in ScoreCategory::PRIORITY {
        let variable = weight_variable(category);
        let Ok(raw) = env::var(variable) else {
            continue;
        };

        let weight = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or(ConfigError::InvalidWeight { variable, raw })?;
        weights.set_weight(category, weight);
    }

    if !weights.is_normalized() {
        return Err(ConfigError::UnnormalizedWeights { sum: weights.sum() });
    }

    Ok(weights)
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

/// Tracing output controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidWeight { variable: &'static str, raw: String },
    UnnormalizedWeights { sum: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidWeight { variable, raw } => {
                write!(f, "{variable} must be a non-negative number, got '{raw}'")
            }
            ConfigError::UnnormalizedWeights { sum } => {
                write!(f, "scoring weights must sum to 1.0 (got {sum:.3})")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidWeight { .. }
            | ConfigError::UnnormalizedWeights { .. } => None,
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
        for category in ScoreCategory::PRIORITY {
            env::remove_var(weight_variable(category));
        }
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
        assert!(config.telemetry.ansi);
        assert_eq!(config.scoring, DEFAULT_WEIGHTS);
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
    fn weight_overrides_must_stay_normalized() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCORE_WEIGHT_DIGITAL", "0.35");
        env::set_var("SCORE_WEIGHT_CAREER", "0.10");
        let config = AppConfig::load().expect("rebalanced weights load");
        assert_eq!(config.scoring.digital, 0.35);
        assert_eq!(config.scoring.career, 0.10);

        env::set_var("SCORE_WEIGHT_CAREER", "0.50");
        let err = AppConfig::load().expect_err("weights no longer sum to one");
        assert!(matches!(err, ConfigError::UnnormalizedWeights { .. }));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_weights() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCORE_WEIGHT_BEHAVIOR", "heavy");
        let err = AppConfig::load().expect_err("weight must be numeric");
        match err {
            ConfigError::InvalidWeight { variable, raw } => {
                assert_eq!(variable, "SCORE_WEIGHT_BEHAVIOR");
                assert_eq!(raw, "heavy");
            }
            other => panic!("expected invalid weight, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn production_disables_ansi_output() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert!(!config.telemetry.ansi);
        reset_env();
    }
}
