//! # User Service Server
//!
//! Loads configuration, connects to MongoDB and Redis, wires the registry,
//! and serves the gRPC API until Ctrl+C or SIGTERM.

use std::sync::Arc;
use tracing::{error, info};
use user_config::{AppConfig, ConfigLoader};
use user_core::telemetry::{init_telemetry, LogFormat};
use user_core::AppResult;
use user_repository::{MongoConnection, MongoUserRepository};
use user_security::PasswordHasher;
use user_server::registry::Registry;
use user_server::startup::{print_banner, print_startup_info, shutdown_signal};
use user_service::{RedisConnection, RedisUserCache};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(config) => config,
        Err(e) => {
            let _ = init_telemetry("info", LogFormat::Pretty);
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_telemetry(&config.observability.log_level, config.observability.format()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    print_banner();
    info!("Starting user service...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> AppResult<()> {
    print_startup_info(&config);

    let mongo = MongoConnection::connect(&config.mongo).await?;
    let redis = RedisConnection::connect(&config.redis).await?;

    let registry = Registry::new(
        Arc::new(MongoUserRepository::from_connection(&mongo)),
        Arc::new(RedisUserCache::new(&redis)),
        Arc::new(PasswordHasher::new()),
    );

    let server = registry.grpc_server(&config.server)?;
    let result = server.serve_with_shutdown(shutdown_signal()).await;

    mongo.close().await;
    info!("Server shutdown complete");
    result
}
