//! Calendar service configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main calendar service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Field length limits for stored events
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CalendarConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.limits.max_title_chars == 0 {
            return Err(Error::Config(
                "limits.max_title_chars must be greater than 0".to_string(),
            ));
        }
        if self.limits.max_text_chars == 0 {
            return Err(Error::Config(
                "limits.max_text_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed origins for CORS (empty = any)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }
}

/// Maximum field lengths, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum title length (inclusive)
    pub max_title_chars: usize,

    /// Maximum text length (inclusive)
    pub max_text_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_title_chars: 30,
            max_text_chars: 200,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for the `calendar` target when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON-formatted log lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CalendarConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.limits.max_title_chars, 30);
        assert_eq!(config.limits.max_text_chars, 200);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CalendarConfig::from_toml_str(
            r#"
            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.limits, LimitsConfig::default());
    }

    #[test]
    fn test_empty_toml() {
        let config = CalendarConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = CalendarConfig::from_toml_str(
            r#"
            [limits]
            max_title_chars = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = CalendarConfig::from_toml_str("server = 3").unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calendar.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            host = "0.0.0.0"
            cors_origins = ["http://localhost:3000"]

            [limits]
            max_title_chars = 40

            [logging]
            json = true
            "#,
        )
        .unwrap();

        let config = CalendarConfig::load(&path).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.limits.max_title_chars, 40);
        assert_eq!(config.limits.max_text_chars, 200);
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = CalendarConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_round_trip_toml() {
        let config = CalendarConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = CalendarConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.limits, config.limits);
    }
}
