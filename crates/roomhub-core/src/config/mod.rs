//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, PLACEHOLDER_JWT_SECRET};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::store::{StoreBackend, StoreConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Booking store backend selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `{dir}/default.toml` with an environment-specific overlay
    /// `{dir}/{env}.toml` and environment variables prefixed with `ROOMHUB__`.
    /// Missing files are skipped, so a bare environment still yields defaults.
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ROOMHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

impl AppConfig {
    /// Reject settings that cannot serve real traffic in `production`.
    pub fn validate_for(&self, env: &str) -> Result<(), AppError> {
        if env != "production" {
            return Ok(());
        }
        if self.auth.jwt_secret == PLACEHOLDER_JWT_SECRET {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set in production",
            ));
        }
        if self.store.backend == StoreBackend::Memory {
            return Err(AppError::configuration(
                "store.backend = \"memory\" has no enrollments or sessions and is for tests and development only",
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            store: StoreConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_files_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist", "test").expect("defaults should load");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.store.backend, StoreBackend::Postgres);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_production_rejects_placeholder_secret() {
        let config = AppConfig::default();
        let err = config.validate_for("production").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
        assert!(config.validate_for("development").is_ok());
    }

    #[test]
    fn test_production_rejects_memory_store() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "s3cret".to_string();
        assert!(config.validate_for("production").is_ok());

        config.store.backend = StoreBackend::Memory;
        let err = config.validate_for("production").unwrap_err();
        assert!(err.message.contains("memory"));
        assert!(config.validate_for("test").is_ok());
    }
}
