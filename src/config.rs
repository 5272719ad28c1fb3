//! Configuration management for the campaign worker.
//!
//! This module handles loading and validating configuration from environment
//! variables, with `.env` support via dotenvy.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the campaign worker binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// SMTP relay hostname
    pub smtp_host: String,

    /// SMTP relay port (default: 587)
    pub smtp_port: u16,

    /// Username for SMTP authentication, paired with `smtp_password`
    pub smtp_username: Option<String>,

    /// Password for SMTP authentication, paired with `smtp_username`
    pub smtp_password: Option<String>,

    /// Sender address for outgoing campaign mail
    pub smtp_from: String,

    /// Seconds between dispatch passes (default: 10)
    pub worker_poll_seconds: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SMTP_HOST`: SMTP relay hostname
    /// - `SMTP_FROM`: Sender email address
    ///
    /// Optional environment variables:
    /// - `SMTP_PORT`: Relay port (default: 587)
    /// - `SMTP_USERNAME` / `SMTP_PASSWORD`: Auth credentials, both or neither
    /// - `WORKER_POLL_SECONDS`: Seconds between dispatch passes (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, but don't fail if it isn't
        let _ = dotenvy::dotenv();

        let smtp_host =
            env::var("SMTP_HOST").map_err(|_| ConfigError::MissingVar("SMTP_HOST".to_string()))?;
        if smtp_host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SMTP_HOST".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let smtp_from =
            env::var("SMTP_FROM").map_err(|_| ConfigError::MissingVar("SMTP_FROM".to_string()))?;
        if EmailAddress::new(&smtp_from).is_err() {
            return Err(ConfigError::InvalidValue {
                var: "SMTP_FROM".to_string(),
                reason: "Must be a valid email address".to_string(),
            });
        }

        let smtp_username = env::var("SMTP_USERNAME").ok();
        let smtp_password = env::var("SMTP_PASSWORD").ok();
        if smtp_username.is_some() != smtp_password.is_some() {
            return Err(ConfigError::InvalidValue {
                var: "SMTP_USERNAME".to_string(),
                reason: "SMTP_USERNAME and SMTP_PASSWORD must be set together".to_string(),
            });
        }

        let smtp_port = Self::parse_env_u16("SMTP_PORT", 587)?;
        let worker_poll_seconds = Self::parse_env_u64("WORKER_POLL_SECONDS", 10)?;
        if worker_poll_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                var: "WORKER_POLL_SECONDS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            smtp_from,
            worker_poll_seconds,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            smtp_from: String::new(),
            worker_poll_seconds: 10,
            log_level: "info".to_string(),
        }
    }
}
