//! Application configuration
//!
//! Loads configuration from environment variables with the `LEARNTRACK` prefix.
//! Nested sections use double underscores:
//!
//! ```text
//! LEARNTRACK__SERVER__PORT=8080
//! LEARNTRACK__DATABASE__URL=postgresql://localhost/learntrack
//! LEARNTRACK__AUTH__ISSUER_URL=https://auth.example.com
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Complete application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file first if one exists, then overlays process
    /// environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEARNTRACK")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global, so config tests that touch
    // them must not run concurrently.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        std::env::set_var(
            "LEARNTRACK__DATABASE__URL",
            "postgresql://test@localhost/test",
        );
        std::env::set_var("LEARNTRACK__AUTH__ISSUER_URL", "https://auth.example.com");
        std::env::set_var("LEARNTRACK__AUTH__AUDIENCE", "learntrack-api");
    }

    fn clear_env() {
        std::env::remove_var("LEARNTRACK__DATABASE__URL");
        std::env::remove_var("LEARNTRACK__AUTH__ISSUER_URL");
        std::env::remove_var("LEARNTRACK__AUTH__AUDIENCE");
        std::env::remove_var("LEARNTRACK__SERVER__PORT");
        std::env::remove_var("LEARNTRACK__SERVER__ENVIRONMENT");
    }

    #[test]
    fn load_with_minimal_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();

        let config = AppConfig::load().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.auth.audience, "learntrack-api");
        assert!(!config.is_production());

        clear_env();
    }

    #[test]
    fn load_fails_without_database_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        std::env::set_var("LEARNTRACK__AUTH__ISSUER_URL", "https://auth.example.com");
        std::env::set_var("LEARNTRACK__AUTH__AUDIENCE", "learntrack-api");

        assert!(AppConfig::load().is_err());

        clear_env();
    }

    #[test]
    fn env_overrides_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        std::env::set_var("LEARNTRACK__SERVER__PORT", "9999");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.server.port, 9999);

        clear_env();
    }

    #[test]
    fn production_environment_enforces_https_issuer() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        std::env::set_var("LEARNTRACK__SERVER__ENVIRONMENT", "production");
        std::env::set_var("LEARNTRACK__AUTH__ISSUER_URL", "http://auth.example.com");

        assert!(AppConfig::load().is_err());

        clear_env();
    }
}
