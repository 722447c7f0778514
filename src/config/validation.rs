//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check required command/path fields are non-empty
//! - Validate value ranges (intervals > 0, known log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: LauncherConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::LauncherConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    UnknownLogLevel(String),
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &LauncherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let non_empty = [
        ("server.host", config.server.host.is_empty()),
        ("app.command", config.app.command.is_empty()),
        (
            "app.source_unit",
            config.app.source_unit.as_os_str().is_empty(),
        ),
        (
            "environment.runtime_binary",
            config.environment.runtime_binary.is_empty(),
        ),
        (
            "environment.sync_command",
            config.environment.sync_command.is_empty(),
        ),
        ("readiness.probe_host", config.readiness.probe_host.is_empty()),
    ];
    for (field, empty) in non_empty {
        if empty {
            errors.push(ValidationError::EmptyField { field });
        }
    }

    if config.readiness.interval_ms == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "readiness.interval_ms",
        });
    }
    if config.readiness.max_wait_secs == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "readiness.max_wait_secs",
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LauncherConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&LauncherConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors_not_just_the_first() {
        let mut config = LauncherConfig::default();
        config.app.command.clear();
        config.readiness.interval_ms = 0;
        config.observability.log_level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyField {
            field: "app.command"
        }));
        assert!(errors.contains(&ValidationError::ZeroValue {
            field: "readiness.interval_ms"
        }));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = LauncherConfig::default();
        config.observability.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
