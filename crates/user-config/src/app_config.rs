//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use user_core::telemetry::LogFormat;
use user_core::{AppResult, ErrorKind};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// gRPC server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// MongoDB configuration.
    #[serde(default)]
    pub mongo: MongoConfig,

    /// Redis configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    pub name: String,
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "service-user".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// gRPC server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub grpc_port: u16,
    /// Per-request deadline in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            grpc_port: 50051,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Returns the gRPC server address.
    #[must_use]
    pub fn grpc_addr(&self) -> String {
        format!("{}:{}", self.host, self.grpc_port)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// MongoDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
    /// Leave empty to connect without credentials.
    pub username: String,
    pub password: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout_secs: u64,
    /// Server-side limit applied to every read.
    pub query_timeout_secs: u64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            username: String::new(),
            password: String::new(),
            database: "service_user".to_string(),
            collection: "users".to_string(),
            connect_timeout_secs: 10,
            query_timeout_secs: 5,
        }
    }
}

impl MongoConfig {
    /// Returns the connection URI, with credentials only when a username is set.
    ///
    /// Credentials are percent-encoded.
    pub fn uri(&self) -> AppResult<String> {
        let mut uri = base_url("mongodb", &self.host, self.port)?;
        if !self.username.is_empty() {
            uri.set_username(&self.username)
                .and_then(|()| uri.set_password(Some(&self.password)))
                .map_err(|()| ErrorKind::ConfigLoad.error("mongo credentials rejected"))?;
        }
        Ok(uri.to_string())
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

/// Redis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: String,
    /// Logical database index.
    pub db: u32,
    pub pool_size: usize,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            password: String::new(),
            db: 0,
            pool_size: 16,
        }
    }
}

impl RedisConfig {
    /// Returns the connection URL with the password percent-encoded.
    pub fn url(&self) -> AppResult<String> {
        let mut url = base_url("redis", &self.host, self.port)?;
        url.set_path(&format!("/{}", self.db));
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|()| ErrorKind::ConfigLoad.error("redis password rejected"))?;
        }
        Ok(url.to_string())
    }
}

fn base_url(scheme: &str, host: &str, port: u16) -> AppResult<Url> {
    Url::parse(&format!("{scheme}://{host}:{port}")).map_err(|e| {
        ErrorKind::ConfigLoad
            .error(format!("invalid {scheme} address"))
            .with_context(e)
    })
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// `pretty` or `json`.
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    #[must_use]
    pub fn format(&self) -> LogFormat {
        if self.log_format.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}
