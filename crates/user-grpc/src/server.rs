//! gRPC server setup.

use crate::proto::user_service_server::UserServiceServer;
use crate::services::UserGrpcService;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;
use user_config::ServerConfig;
use user_core::{AppResult, ErrorKind};
use user_service::UserInteractor;

/// gRPC server exposing the user service.
pub struct GrpcServer {
    addr: SocketAddr,
    request_timeout: Duration,
    interactor: Arc<dyn UserInteractor>,
}

impl GrpcServer {
    /// Creates a new gRPC server from the server config.
    pub fn new(config: &ServerConfig, interactor: Arc<dyn UserInteractor>) -> AppResult<Self> {
        let addr = config.grpc_addr().parse().map_err(|e| {
            ErrorKind::ConfigLoad
                .error("Invalid gRPC address")
                .with_context(format!("{}: {e}", config.grpc_addr()))
        })?;

        Ok(Self {
            addr,
            request_timeout: config.request_timeout(),
            interactor,
        })
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Binds the configured address and serves until `signal` resolves.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> AppResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        let listener = TcpListener::bind(self.addr).await.map_err(|e| {
            ErrorKind::Controller
                .error("Failed to bind gRPC listener")
                .with_context(format!("{}: {e}", self.addr))
        })?;

        self.serve_with_listener(listener, signal).await
    }

    /// Serves on an already bound listener until `signal` resolves.
    ///
    /// Requests running longer than the configured timeout are cancelled and
    /// reported to the caller as an ordinary failure.
    pub async fn serve_with_listener<F>(self, listener: TcpListener, signal: F) -> AppResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        let local_addr = listener.local_addr().unwrap_or(self.addr);
        info!("Starting gRPC server on {}", local_addr);

        Server::builder()
            .timeout(self.request_timeout)
            .add_service(UserServiceServer::new(UserGrpcService::new(self.interactor)))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal)
            .await
            .map_err(|e| ErrorKind::Controller.error("gRPC server error").with_context(e))?;

        info!("gRPC server stopped");
        Ok(())
    }
}
