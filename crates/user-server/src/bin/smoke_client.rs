//! Smoke client: creates a user on a running server, then deletes it.

use anyhow::{Context, Result};
use tracing::info;
use user_config::ConfigLoader;
use user_core::telemetry::init_telemetry;
use user_grpc::RemoteUserClient;
use user_server::startup::client_endpoint;
use user_service::{CreateUserRequest, DropUserByIdRequest, UserInteractor};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigLoader::from_default_location().context("Failed to load configuration")?;
    init_telemetry(&config.observability.log_level, config.observability.format())?;

    let endpoint = client_endpoint(&config);
    info!("Connecting to {}", endpoint);
    let client = RemoteUserClient::connect(endpoint).await?;

    let user_id = client
        .create_user(CreateUserRequest {
            email: "test@example.com".to_string(),
            user_name: "testuser".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "password".to_string(),
            role: "user".to_string(),
        })
        .await
        .context("CreateUser failed")?;
    info!("Created user {}", user_id);

    client
        .drop_user_by_id(DropUserByIdRequest { id: user_id.clone() })
        .await
        .context("DropUserById failed")?;
    info!("Deleted user {}", user_id);

    Ok(())
}
