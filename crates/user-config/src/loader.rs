//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tracing::{debug, info};
use user_core::{AppError, AppResult, ErrorKind};

/// Prefix for environment overrides, e.g. `USER_SERVICE__MONGO__HOST`.
pub const ENV_PREFIX: &str = "USER_SERVICE";

/// Loads the application configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from `config_dir`.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `{config_dir}/default.toml`
    /// 2. `{config_dir}/{environment}.toml`
    /// 3. `{config_dir}/local.toml` (not committed)
    /// 4. Environment variables with the `USER_SERVICE` prefix
    ///
    /// The environment name comes from `USER_SERVICE_ENVIRONMENT` and
    /// defaults to `development`. The result is validated before it is
    /// returned.
    pub fn load(config_dir: impl AsRef<Path>) -> AppResult<AppConfig> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let config_dir = config_dir.as_ref();
        let environment = std::env::var(format!("{ENV_PREFIX}_ENVIRONMENT"))
            .unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize::<AppConfig>)
            .map_err(config_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            let details = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            ErrorKind::ConfigLoad
                .error("Invalid configuration")
                .with_context(details)
        })?;

        Ok(app_config)
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> AppResult<AppConfig> {
        Self::load("./config")
    }
}

fn config_error(err: ConfigError) -> AppError {
    ErrorKind::ConfigLoad
        .error("Failed to parse configuration")
        .with_context(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults_from_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(config.mongo.collection, "users");
    }

    #[test]
    fn test_load_default_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[mongo]\nhost = \"mongo.internal\"\ndatabase = \"accounts\"\n\n[redis]\ndb = 3\n",
        )
        .unwrap();

        let config = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(config.mongo.host, "mongo.internal");
        assert_eq!(config.mongo.database, "accounts");
        assert_eq!(config.mongo.port, 27017);
        assert_eq!(config.redis.db, 3);
    }

    #[test]
    fn test_local_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\ngrpc_port = 6000\n").unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\ngrpc_port = 7000\n").unwrap();

        let config = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(config.server.grpc_port, 7000);
    }

    #[test]
    fn test_invalid_config_is_config_load_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[observability]\nlog_level = \"chatty\"\n",
        )
        .unwrap();

        let err = ConfigLoader::load(dir.path()).unwrap_err();
        assert!(err.is(ErrorKind::ConfigLoad));
        assert!(err.message().contains("chatty"));
    }

    #[test]
    fn test_malformed_toml_is_config_load_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server\ngrpc_port = ").unwrap();

        let err = ConfigLoader::load(dir.path()).unwrap_err();
        assert!(err.is(ErrorKind::ConfigLoad));
    }
}
