//! Server configuration, read from the command line with environment fallbacks.

use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Default cap on the `/track` request body.
pub const DEFAULT_JSON_LIMIT: usize = 256 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "flight-tracker")]
#[command(about = "Finds the overall source and destination of a set of flight tickets")]
pub struct ServerConfig {
    #[arg(long, env = "FLIGHT_TRACKER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "FLIGHT_TRACKER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Worker threads, one per physical core when unset
    #[arg(long, env = "FLIGHT_TRACKER_WORKERS")]
    pub workers: Option<usize>,

    /// Seconds in-flight requests get to finish once a shutdown signal arrives
    #[arg(long, env = "FLIGHT_TRACKER_SHUTDOWN_TIMEOUT", default_value_t = 20)]
    pub shutdown_timeout: u64,

    /// Largest accepted request body in bytes
    #[arg(long, env = "FLIGHT_TRACKER_JSON_LIMIT", default_value_t = DEFAULT_JSON_LIMIT)]
    pub json_limit: usize,

    #[arg(long, value_enum, env = "FLIGHT_TRACKER_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "host",
                reason: "host cannot be empty".to_string(),
            });
        }

        if self.workers == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "workers",
                reason: "need at least one worker".to_string(),
            });
        }

        if self.json_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "json_limit",
                reason: "body limit must be positive".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["flight-tracker"]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.shutdown_timeout, 20);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::try_parse_from([
            "flight-tracker",
            "--port",
            "9090",
            "--workers",
            "2",
            "--log-format",
            "json",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config =
            ServerConfig::try_parse_from(["flight-tracker", "--workers", "0"]).unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let config = ServerConfig::try_parse_from(["flight-tracker", "--host", " "]).unwrap();

        assert!(config.validate().is_err());
    }
}
