use crate::{ConfigError, Environment};
use serde::Deserialize;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level override
    ///
    /// Env: SRA_LOG_LEVEL
    /// Valid values: trace, debug, info, warn, error
    /// Default: unset (derived from the environment mode)
    #[serde(default)]
    pub level: Option<String>,

    /// Directory that production log files are written to
    ///
    /// Env: SRA_LOG_DIRECTORY
    /// Default: logs
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Include captured response bodies in access-log records
    ///
    /// Env: SRA_LOG_RESPONSE_BODIES
    /// Default: false
    /// Honored outside production only; production records never carry payloads.
    #[serde(default = "default_response_bodies")]
    pub response_bodies: bool,
}

fn default_directory() -> String {
    "logs".to_string()
}

fn default_response_bodies() -> bool {
    false
}

impl LogConfig {
    /// Level the subscriber runs at when no explicit override is set:
    /// `info` in production, `debug` everywhere else.
    pub fn effective_level(&self, environment: Environment) -> &str {
        match &self.level {
            Some(level) => level,
            None if environment.is_production() => "info",
            None => "debug",
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.level {
            if !VALID_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    level,
                    VALID_LEVELS.join(", ")
                )));
            }
        }

        if self.directory.is_empty() {
            return Err(ConfigError::ValidateError(
                "Log directory cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: None,
            directory: default_directory(),
            response_bodies: default_response_bodies(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, None);
        assert_eq!(config.directory, "logs");
        assert_eq!(config.response_bodies, false);
    }

    #[test]
    fn test_effective_level_derives_from_environment() {
        let config = LogConfig::default();
        assert_eq!(config.effective_level(Environment::Production), "info");
        assert_eq!(config.effective_level(Environment::Development), "debug");
    }

    #[test]
    fn test_effective_level_explicit_override_wins() {
        let config = LogConfig {
            level: Some("warn".to_string()),
            ..Default::default()
        };
        assert_eq!(config.effective_level(Environment::Production), "warn");
        assert_eq!(config.effective_level(Environment::Development), "warn");
    }

    #[test]
    fn test_validate_valid_levels() {
        for level in VALID_LEVELS {
            let config = LogConfig {
                level: Some(level.to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Level {} should be valid", level);
        }
    }

    #[test]
    fn test_validate_unset_level() {
        assert!(LogConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_level() {
        let config = LogConfig {
            level: Some("verbose".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_directory() {
        let config = LogConfig {
            directory: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
