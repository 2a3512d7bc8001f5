//!
//! Configuration management for the AgentCore adapter helpers.
//!
//! Configuration only affects diagnostics: how verbose the formatter is and
//! whether payload bodies may appear in logs. It can be loaded from environment
//! variables (with optional `.env` file) or from a TOML snippet.
//!
//! Authors:
//!   Jaro <yarenty@gmail.com>
//!
//! Copyright (c) 2026 SkyCorp

/* --- uses ------------------------------------------------------------------------------------ */

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, Result};

/* --- types ----------------------------------------------------------------------------------- */

///
/// Adapter configuration structure.
///
/// All fields have defaults, so an empty TOML document or an empty
/// environment yields a usable configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /** application logging level */
    pub log_level: LogLevel,
    /** whether payload bodies may be written to debug logs */
    pub log_payloads: bool,
}

///
/// Logging level enumeration.
///
/// Defines available log levels compatible with tracing crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[serde(alias = "TRACE")]
    Trace,
    #[serde(alias = "DEBUG")]
    Debug,
    #[default]
    #[serde(alias = "INFO")]
    Info,
    #[serde(alias = "WARN")]
    Warn,
    #[serde(alias = "ERROR")]
    Error,
}

///
/// Configuration validation issue.
///
/// Represents a single validation problem found during configuration check.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Configuration field name
    pub field: String,
    /// Severity of the issue
    pub severity: ValidationSeverity,
    /// Description of the issue
    pub message: String,
    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

///
/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    /// Error - configuration is invalid and will cause failures
    Error,
    /// Warning - configuration may work but has potential issues
    Warning,
    /// Info - informational note about configuration
    Info,
}

/* --- constants ------------------------------------------------------------------------------ */

/** Environment variable holding the log level */
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/** Environment variable enabling payload logging */
const LOG_PAYLOADS_VAR: &str = "LOG_PAYLOADS";

/* --- start of code -------------------------------------------------------------------------- */

impl LogLevel {
    ///
    /// Check if trace-level logging is enabled.
    ///
    /// Returns true for Trace and Debug levels, which enable detailed logging
    /// of formatter decisions.
    pub fn is_trace_enabled(self) -> bool {
        matches!(self, LogLevel::Trace | LogLevel::Debug)
    }

    /// Matching tracing level.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl From<&str> for LogLevel {
    ///
    /// Convert string representation to LogLevel enum.
    ///
    /// Case-insensitive conversion with Info as the default fallback.
    ///
    /// # Arguments
    ///  * `s` - string representation of log level
    ///
    /// # Returns
    ///  * Corresponding LogLevel enum value
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

impl Config {
    ///
    /// Load configuration from environment variables.
    ///
    /// Attempts to load .env file if present, then reads `LOG_LEVEL` and
    /// `LOG_PAYLOADS`, falling back to defaults for anything unset.
    ///
    /// # Returns
    ///  * Configuration object with all settings loaded
    ///  * `AdapterError::Config` if `LOG_PAYLOADS` is not a boolean
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        Ok(Config { log_level: Self::get_log_level(), log_payloads: Self::get_log_payloads()? })
    }

    ///
    /// Parse configuration from a TOML document.
    ///
    /// # Arguments
    ///  * `source` - TOML text, e.g. `log_level = "debug"`
    ///
    /// # Returns
    ///  * Parsed configuration, missing fields defaulted
    ///  * `AdapterError::Config` if the document is not valid TOML for this shape
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source)
            .map_err(|e| AdapterError::Config(format!("Invalid TOML configuration: {}", e)))
    }

    ///
    /// Validate configuration and return issues found.
    ///
    /// # Returns
    ///  * Vector of validation issues (empty if all valid)
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.log_payloads && !self.log_level.is_trace_enabled() {
            issues.push(ValidationIssue {
                field: LOG_PAYLOADS_VAR.to_string(),
                severity: ValidationSeverity::Info,
                message: format!(
                    "Payload logging is enabled but log level {:?} never emits it",
                    self.log_level
                ),
                suggestion: Some("Set LOG_LEVEL=debug or LOG_LEVEL=trace".to_string()),
            });
        }

        issues
    }

    fn get_log_level() -> LogLevel {
        let log_level_str = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string());
        LogLevel::from(log_level_str.as_str())
    }

    fn get_log_payloads() -> Result<bool> {
        match env::var(LOG_PAYLOADS_VAR) {
            Err(_) => Ok(false),
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                other => Err(AdapterError::Config(format!(
                    "Invalid {} value: {}\n\
                     \n\
                     {} must be a boolean (true/false, 1/0, yes/no).",
                    LOG_PAYLOADS_VAR, other, LOG_PAYLOADS_VAR
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str_is_case_insensitive() {
        assert_eq!(LogLevel::from("TRACE"), LogLevel::Trace);
        assert_eq!(LogLevel::from("Debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from("warning"), LogLevel::Warn);
        assert_eq!(LogLevel::from("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_is_trace_enabled() {
        assert!(LogLevel::Trace.is_trace_enabled());
        assert!(LogLevel::Debug.is_trace_enabled());
        assert!(!LogLevel::Info.is_trace_enabled());
        assert!(!LogLevel::Error.is_trace_enabled());
    }

    #[test]
    fn test_validate_payload_logging_without_debug_level() {
        let config = Config { log_level: LogLevel::Warn, log_payloads: true };
        let issues = config.validate();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "LOG_PAYLOADS");
        assert_eq!(issues[0].severity, ValidationSeverity::Info);
    }

    #[test]
    fn test_validate_default_is_clean() {
        assert!(Config::default().validate().is_empty());
    }
}
