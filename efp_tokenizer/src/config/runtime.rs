// RUNTIME PREFERENCES (User Experience)

use crate::logging::{codes, Code};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::sync::OnceLock;

/// Environment overrides are read on first use and reused afterwards
static ENV_LEXICAL: OnceLock<LexicalPreferences> = OnceLock::new();
static ENV_LOGGING: OnceLock<LoggingPreferences> = OnceLock::new();

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Errors raised while loading runtime configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        match self {
            ConfigError::Io { .. } => codes::config::CONFIG_FILE_UNREADABLE,
            ConfigError::Parse(_) => codes::config::CONFIG_PARSE_FAILURE,
            ConfigError::Invalid { .. } => codes::config::CONFIG_INVALID,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether to collect per-type token counts and scope depth
    pub collect_detailed_metrics: bool,

    /// Whether to track operator usage patterns
    pub track_operator_patterns: bool,

    /// Whether to emit a debug event for every token the scanner produces
    pub log_token_events: bool,
}

impl LexicalPreferences {
    fn from_env() -> Self {
        Self {
            collect_detailed_metrics: env_flag(env_vars::LEXICAL_DETAILED_METRICS, true),
            track_operator_patterns: env_flag(env_vars::LEXICAL_TRACK_OPERATORS, false),
            log_token_events: env_flag(env_vars::LEXICAL_LOG_TOKEN_EVENTS, false),
        }
    }
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        ENV_LEXICAL.get_or_init(Self::from_env).clone()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level an event needs to be emitted
    pub min_log_level: LogLevel,
}

impl LoggingPreferences {
    fn from_env() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_flag(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        ENV_LOGGING.get_or_init(Self::from_env).clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a configuration document; missing sections fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject preference combinations that cannot take effect
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lexical.track_operator_patterns && !self.lexical.collect_detailed_metrics {
            return Err(ConfigError::Invalid {
                message: "track_operator_patterns requires collect_detailed_metrics".to_string(),
            });
        }
        if self.logging.use_structured_logging && !self.logging.enable_console_logging {
            return Err(ConfigError::Invalid {
                message: "use_structured_logging requires enable_console_logging".to_string(),
            });
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "EFP_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_TRACK_OPERATORS: &str = "EFP_LEXICAL_TRACK_OPERATORS";
    pub const LEXICAL_LOG_TOKEN_EVENTS: &str = "EFP_LEXICAL_LOG_TOKEN_EVENTS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "EFP_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "EFP_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "EFP_LOGGING_MIN_LEVEL";
}
