//! Configuration module for FleetPulse
//!
//! Provides layered configuration loading from files, environment variables,
//! and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`FLEETPULSE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use fleetpulse::config::FleetPulseConfig;
//!
//! // Load defaults
//! let config = FleetPulseConfig::default();
//! assert_eq!(config.live.interval_ms, 30_000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [live]
//! interval_ms = 5000
//! "#;
//! let config: FleetPulseConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.live.interval_ms, 5000);
//! ```

pub mod api;
pub mod error;
pub mod live;
pub mod logging;
pub mod notifications;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use live::LiveUpdateConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use notifications::NotificationConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the FleetPulse dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FleetPulseConfig {
    /// Fleet API endpoint settings
    pub api: ApiConfig,
    /// Live-update polling settings
    pub live: LiveUpdateConfig,
    /// Toast notification settings
    pub notifications: NotificationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl FleetPulseConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports FLEETPULSE_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("FLEETPULSE_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(interval) = std::env::var("FLEETPULSE_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.live.interval_ms = ms;
            }
        }
        if let Ok(level) = std::env::var("FLEETPULSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FLEETPULSE_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }
        self
    }

    /// Validate cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.live.interval_ms == 0 {
            return Err(ConfigError::Validation {
                field: "live.interval_ms".to_string(),
                message: "refresh interval must be greater than zero".to_string(),
            });
        }
        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "api.timeout_seconds".to_string(),
                message: "request timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_none_returns_defaults() {
        let config = FleetPulseConfig::load(None).unwrap();
        assert_eq!(config.live.interval_ms, 30_000);
        assert_eq!(config.notifications.timeout_ms, 5_000);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let result = FleetPulseConfig::load(Some(Path::new("/nonexistent/fleetpulse.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [api]
            base_url = "http://fleet.internal:5000"
            timeout_seconds = 3

            [live]
            interval_ms = 10000
            counter_animation_ms = 0

            [notifications]
            timeout_ms = 2500
            native = false

            [logging]
            level = "debug"
            format = "json"
        "#;
        let config: FleetPulseConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://fleet.internal:5000");
        assert_eq!(config.live.interval_ms, 10_000);
        assert!(!config.notifications.native);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = FleetPulseConfig::default();
        config.live.interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(FleetPulseConfig::default().validate().is_ok());
    }
}
