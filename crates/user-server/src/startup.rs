//! Server startup utilities.

use tokio::signal;
use tracing::{error, info};
use user_config::AppConfig;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
                                                        _
  ___  ___ _ ____   _(_) ___ ___   _   _ ___  ___ _ __
 / __|/ _ \ '__\ \ / / |/ __/ _ \ | | | / __|/ _ \ '__|
 \__ \  __/ |   \ V /| | (_|  __/ | |_| \__ \  __/ |
 |___/\___|_|    \_/ |_|\___\___|  \__,_|___/\___|_|
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("gRPC API:    http://{}", config.server.grpc_addr());
    info!("MongoDB:     {}:{}/{}", config.mongo.host, config.mongo.port, config.mongo.database);
    info!("Redis:       {}:{}/{}", config.redis.host, config.redis.port, config.redis.db);
    info!("{}", separator);
}

/// Address a local client should dial for the configured server.
///
/// A wildcard bind host is replaced with loopback.
#[must_use]
pub fn client_endpoint(config: &AppConfig) -> String {
    let host = match config.server.host.as_str() {
        "0.0.0.0" | "" => "127.0.0.1",
        "::" => "[::1]",
        host => host,
    };
    format!("http://{}:{}", host, config.server.grpc_port)
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
