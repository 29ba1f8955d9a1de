use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use thiserror::Error;

/// City whose weather drives the status.
pub const CITY_NAME: &str = "Saint Petersburg";

/// ISO 3166 country code qualifying the city lookup.
pub const COUNTRY_CODE: &str = "RU";

/// File holding the opaque Telegram session artifact.
pub const SESSION_FILE: &str = "stratus.session";

/// Default full update interval, in seconds.
pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 600;

/// Flat delay before retrying after a failed fetch, in seconds.
pub const RECOVERY_DELAY_SECS: u64 = 60;

const ENV_API_ID: &str = "TELEGRAM_API_ID";
const ENV_API_HASH: &str = "TELEGRAM_API_HASH";
const ENV_WEATHER_KEY: &str = "OPENWEATHERMAP_API_KEY";
const ENV_UPDATE_INTERVAL: &str = "UPDATE_INTERVAL_SECONDS";

/// Errors raised while reading required configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// A single validation finding
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram application id (from my.telegram.org).
    pub telegram_api_id: i32,

    /// Telegram application hash.
    pub telegram_api_hash: String,

    /// OpenWeatherMap API key.
    pub weather_api_key: String,

    /// City queried on every cycle.
    pub city: String,

    /// Country code qualifying the city.
    pub country: String,

    /// Path of the Telegram session file.
    pub session_file: PathBuf,

    /// Delay between successful update cycles.
    pub update_interval: Duration,

    /// Delay before retrying after a failed fetch.
    pub recovery_delay: Duration,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// The three secrets are required; the update interval is optional and
    /// defaults to [`DEFAULT_UPDATE_INTERVAL_SECS`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_api_id = parse_api_id(&require(ENV_API_ID)?)?;
        let telegram_api_hash = require(ENV_API_HASH)?;
        let weather_api_key = require(ENV_WEATHER_KEY)?;

        let update_interval = match env::var(ENV_UPDATE_INTERVAL) {
            Ok(raw) => Duration::from_secs(parse_interval(&raw)?),
            Err(_) => Duration::from_secs(DEFAULT_UPDATE_INTERVAL_SECS),
        };

        Ok(Self {
            telegram_api_id,
            telegram_api_hash,
            weather_api_key,
            city: CITY_NAME.to_string(),
            country: COUNTRY_CODE.to_string(),
            session_file: PathBuf::from(SESSION_FILE),
            update_interval,
            recovery_delay: Duration::from_secs(RECOVERY_DELAY_SECS),
        })
    }

    /// Load configuration from the environment and validate it.
    ///
    /// Warnings are logged; validation errors abort startup.
    pub fn load_validated() -> Result<Self> {
        let config = Self::from_env()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.update_interval.is_zero() {
            result.add_error(ENV_UPDATE_INTERVAL, "Update interval must be greater than 0");
        } else if self.update_interval > Duration::from_secs(24 * 60 * 60) {
            result.add_warning(ENV_UPDATE_INTERVAL, "Update interval is more than 24 hours");
        }

        if !self.update_interval.is_zero() && self.recovery_delay >= self.update_interval {
            result.add_warning(
                "recovery_delay",
                "Recovery delay is not shorter than the update interval",
            );
        }

        if self.city.is_empty() {
            result.add_error("city", "City name must not be empty");
        }

        result
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn parse_api_id(raw: &str) -> Result<i32, ConfigError> {
    raw.trim().parse().map_err(|e| ConfigError::InvalidVar {
        name: ENV_API_ID,
        reason: format!("must be a valid integer ({e})"),
    })
}

fn parse_interval(raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|e| ConfigError::InvalidVar {
        name: ENV_UPDATE_INTERVAL,
        reason: format!("must be a number of seconds ({e})"),
    })
}
