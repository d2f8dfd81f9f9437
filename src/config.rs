//! Hook configuration.
//!
//! Loads settings from environment variables once at startup and hands a
//! single struct to the handler; nothing here mutates process-wide state.

use std::env;
use tracing::Level;

/// Zone date and time slots are interpreted in when the user does not name
/// one. Matches the bot's primary audience.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid log level provided for RUST_LOG: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone)]
pub struct HookConfig {
    pub timezone: String,
    pub log_level: Level,
}

impl HookConfig {
    /// Loads configuration from environment variables.
    ///
    // *   `SODABOT_TIMEZONE`: (Optional) Zone for interpreting date/time slots. Defaults to "America/New_York".
    // *   `RUST_LOG`: (Optional) The logging level. Defaults to "INFO". Can be "TRACE", "DEBUG", "INFO", "WARN", or "ERROR".
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file. This is useful for local development and is ignored if not present.
        dotenvy::dotenv().ok();

        let timezone =
            env::var("SODABOT_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());

        let log_level_str = env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(log_level_str))?;

        Ok(Self {
            timezone,
            log_level,
        })
    }
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            log_level: Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = HookConfig::default();
        assert_eq!(config.timezone, "America/New_York");
        assert_eq!(config.log_level, Level::INFO);
    }
}
