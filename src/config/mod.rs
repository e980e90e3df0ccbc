//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values use the `VISA_ADVISOR` prefix with
//! `__` separating nested keys.
//!
//! # Example
//!
//! ```no_run
//! use visa_advisor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod knowledge;
mod server;

pub use error::{ConfigError, ValidationError};
pub use knowledge::KnowledgeConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Knowledge file locations
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `VISA_ADVISOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `VISA_ADVISOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VISA_ADVISOR__KNOWLEDGE__RULES_FILE=...` -> `knowledge.rules_file = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VISA_ADVISOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.knowledge.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("VISA_ADVISOR__SERVER__PORT");
        env::remove_var("VISA_ADVISOR__SERVER__ENVIRONMENT");
        env::remove_var("VISA_ADVISOR__KNOWLEDGE__RULES_FILE");
    }

    #[test]
    fn load_uses_defaults_without_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_port_is_read_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VISA_ADVISOR__SERVER__PORT", "3000");
        let config = AppConfig::load().unwrap();
        clear_env();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn production_environment_is_detected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VISA_ADVISOR__SERVER__ENVIRONMENT", "production");
        let config = AppConfig::load().unwrap();
        clear_env();
        assert!(config.is_production());
    }

    #[test]
    fn knowledge_file_paths_are_read_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VISA_ADVISOR__KNOWLEDGE__RULES_FILE", "/data/rules.json");
        let config = AppConfig::load().unwrap();
        clear_env();
        assert_eq!(
            config.knowledge.rules_file.to_str().unwrap(),
            "/data/rules.json"
        );
    }
}
