//! Configuration management for `RainCheck`
//!
//! Configuration is assembled once at startup from an optional TOML file,
//! `RAINCHECK_*` environment overrides and the conventional `PORT` variable,
//! then validated and handed to the web layer as an immutable value.

use crate::RainCheckError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming an alternative configuration file
pub const CONFIG_PATH_ENV: &str = "RAINCHECK_CONFIG";

/// Root configuration structure for `RainCheck`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RainCheckConfig {
    /// Listening socket settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Open-Meteo endpoints and timeouts
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listening socket settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served for static assets
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

/// Open-Meteo API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Geocoding search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Forecast endpoint
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Timeout for each outbound request in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_weather_timeout() -> u64 {
    12
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl RainCheckConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        Self::load_from(path, std::env::var("PORT").ok())
    }

    /// Load configuration from an optional file plus an optional port override
    pub fn load_from(config_path: Option<PathBuf>, port: Option<String>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("raincheck.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // RAINCHECK_WEATHER__TIMEOUT_SECONDS=5 -> weather.timeout_seconds
        builder = builder.add_source(
            Environment::with_prefix("RAINCHECK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let port = port.filter(|p| !p.trim().is_empty());
        builder = builder
            .set_override_option("server.port", port)
            .with_context(|| "Failed to apply PORT override")?;

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: RainCheckConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(RainCheckError::config("Server port cannot be 0").into());
        }

        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(RainCheckError::config(
                "Weather API timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(RainCheckError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(RainCheckError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("geocoding", &self.weather.geocoding_url),
            ("forecast", &self.weather.forecast_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(RainCheckError::config(format!(
                    "Weather {name} URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RainCheckConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.weather.timeout_seconds, 12);
        assert_eq!(
            config.weather.geocoding_url,
            "https://geocoding-api.open-meteo.com/v1/search"
        );
        assert_eq!(config.weather.forecast_url, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_defaults_to_3000() {
        let config =
            RainCheckConfig::load_from(Some(PathBuf::from("does-not-exist.toml")), None).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_port_override() {
        let config = RainCheckConfig::load_from(
            Some(PathBuf::from("does-not-exist.toml")),
            Some("8080".to_string()),
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_blank_port_falls_back_to_default() {
        let config = RainCheckConfig::load_from(
            Some(PathBuf::from("does-not-exist.toml")),
            Some("  ".to_string()),
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = RainCheckConfig::load_from(
            Some(PathBuf::from("does-not-exist.toml")),
            Some("not-a-port".to_string()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = RainCheckConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = RainCheckConfig::default();
        config.weather.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("between 1 and 300"));
    }

    #[test]
    fn test_config_validation_rejects_non_http_url() {
        let mut config = RainCheckConfig::default();
        config.weather.forecast_url = "ftp://example.com/forecast".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("forecast URL"));
    }
}
